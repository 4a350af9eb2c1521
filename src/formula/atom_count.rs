//! Element composition of a (sub-)formula

/// Mapping from element symbol to atom count.
///
/// Keeps symbols in first-seen order for display; equality ignores order.
/// Arithmetic is checked and returns `None` on overflow.
#[derive(Debug, Clone, Default)]
pub struct AtomCount {
    entries: Vec<(String, u64)>,
}

impl AtomCount {
    pub fn new() -> AtomCount {
        AtomCount { entries: Vec::new() }
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == symbol)
            .map(|(_, count)| *count)
    }

    /// Adds `count` atoms of `symbol`, accumulating onto any existing count
    pub fn add(&mut self, symbol: &str, count: u64) -> Option<()> {
        match self.entries.iter_mut().find(|(existing, _)| existing == symbol) {
            Some((_, existing)) => *existing = existing.checked_add(count)?,
            None => self.entries.push((symbol.to_string(), count)),
        }
        Some(())
    }

    /// Adds every count of `other` multiplied by `factor`
    pub fn merge_scaled(&mut self, other: &AtomCount, factor: u64) -> Option<()> {
        for (symbol, count) in other.iter() {
            self.add(symbol, count.checked_mul(factor)?)?;
        }
        Some(())
    }

    pub fn scaled(&self, factor: u64) -> Option<AtomCount> {
        let mut scaled = AtomCount::new();
        scaled.merge_scaled(self, factor)?;
        Some(scaled)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(symbol, count)| (symbol.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for AtomCount {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(symbol, count)| other.get(symbol) == Some(count))
    }
}

impl Eq for AtomCount {}

impl<'a> FromIterator<(&'a str, u64)> for AtomCount {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut counts = AtomCount::new();
        for (symbol, count) in iter {
            match counts.entries.iter_mut().find(|(existing, _)| existing == symbol) {
                Some((_, existing)) => *existing = existing.saturating_add(count),
                None => counts.entries.push((symbol.to_string(), count)),
            }
        }
        counts
    }
}
