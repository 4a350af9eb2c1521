//! Color definitions for advisories and breakdown panels

use ratatui::style::Color;

use crate::formula::AdvisoryKind;

/// Get the display color for an advisory
pub fn get_advisory_color(kind: AdvisoryKind) -> Color {
    match kind {
        AdvisoryKind::Autocorrected => Color::Cyan,
        AdvisoryKind::Ambiguous => Color::Yellow,
        AdvisoryKind::Warning => Color::LightRed,
    }
}

/// Alternating colors for hydrate parts so they can be told apart
pub fn get_part_color(index: usize) -> Color {
    const PART_COLORS: [Color; 4] = [Color::Green, Color::Magenta, Color::Blue, Color::LightCyan];
    PART_COLORS[index % PART_COLORS.len()]
}

pub const ERROR_COLOR: Color = Color::Red;
