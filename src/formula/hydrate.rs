/// Separator between hydrate parts in canonical formulas
pub const SEPARATOR: char = '·';

/// Characters accepted in raw input as a hydrate separator
pub const SEPARATOR_GLYPHS: [char; 3] = ['·', '.', '*'];

pub fn is_separator_glyph(c: char) -> bool {
    SEPARATOR_GLYPHS.contains(&c)
}

/// Split a canonical formula into its hydrate parts, dropping empty ones
pub fn split_hydrates(canonical: &str) -> Vec<&str> {
    canonical
        .split(SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect()
}
