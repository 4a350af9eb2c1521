//! Policies for choosing between a one-letter and a two-letter symbol
//!
//! The normalizer only detects that two characters can be read both as one
//! two-letter symbol ("No") and as a one-letter symbol followed by another
//! symbol ("N" then "O..."). Which reading wins is decided here.

use clap::ValueEnum;

use super::advisory::{Advisory, AdvisoryKind};
use crate::elements::Element;

/// One-letter elements lighter than this are treated as common
pub const COMMON_WEIGHT_LIMIT: f64 = 40.0;

/// Heaviest naturally abundant element (uranium). Two-letter symbols past it
/// are rare enough that a split reading is the likelier intent.
pub const LAST_NATURAL_ELEMENT: u8 = 92;

/// Two raw characters that spell a valid two-letter symbol while the first
/// one is also a valid symbol on its own.
#[derive(Debug, Clone, Copy)]
pub struct Ambiguity<'a> {
    /// The two characters as typed
    pub raw: &'a str,
    pub single: &'static Element,
    pub pair: &'static Element,
    /// Element the second character spells on its own, if any
    pub follower: Option<&'static Element>,
}

impl Ambiguity<'_> {
    fn casing(&self) -> (bool, bool) {
        let mut chars = self.raw.chars();
        let first = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        let second = chars.next().is_some_and(|c| c.is_ascii_uppercase());
        (first, second)
    }

    fn split_text(&self) -> String {
        match self.follower {
            Some(follower) => format!("{}{}", self.single.symbol, follower.symbol),
            None => self.single.symbol.to_string(),
        }
    }

    fn split_names(&self) -> String {
        match self.follower {
            Some(follower) => format!("{} + {}", self.single.name, follower.name),
            None => self.single.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Single,
    Pair,
}

impl Reading {
    /// Characters consumed by this reading
    pub fn len(self) -> usize {
        match self {
            Reading::Single => 1,
            Reading::Pair => 2,
        }
    }

    pub fn element(self, ambiguity: &Ambiguity<'_>) -> &'static Element {
        match self {
            Reading::Single => ambiguity.single,
            Reading::Pair => ambiguity.pair,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reading: Reading,
    pub advisory: Option<Advisory>,
}

impl Resolution {
    fn silent(reading: Reading) -> Resolution {
        Resolution { reading, advisory: None }
    }

    fn reported(reading: Reading, ambiguity: &Ambiguity<'_>) -> Resolution {
        let (chosen, other) = match reading {
            Reading::Single => (ambiguity.single, ambiguity.pair),
            Reading::Pair => (ambiguity.pair, ambiguity.single),
        };
        let note = format!(
            "`{}` is ambiguous: read as {} ({}), not {} ({})",
            ambiguity.raw, chosen.symbol, chosen.name, other.symbol, other.name
        );
        Resolution {
            reading,
            advisory: Some(Advisory::new(AdvisoryKind::Ambiguous, ambiguity.raw, chosen.symbol, note)),
        }
    }
}

pub trait DisambiguationPolicy {
    fn name(&self) -> &'static str;

    fn resolve(&self, ambiguity: &Ambiguity<'_>) -> Resolution;
}

/// Prefers the one-letter reading when both halves are common light
/// elements, so `co` becomes C + O and `cl` stays Cl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferCommon {
    pub weight_limit: f64,
}

impl PreferCommon {
    pub fn choose(&self, ambiguity: &Ambiguity<'_>) -> Reading {
        let common = |element: &Element| element.atomic_weight < self.weight_limit;
        if common(ambiguity.single) && ambiguity.follower.is_some_and(common) {
            Reading::Single
        } else {
            Reading::Pair
        }
    }
}

impl Default for PreferCommon {
    fn default() -> Self {
        PreferCommon { weight_limit: COMMON_WEIGHT_LIMIT }
    }
}

impl DisambiguationPolicy for PreferCommon {
    fn name(&self) -> &'static str {
        "prefer-common"
    }

    fn resolve(&self, ambiguity: &Ambiguity<'_>) -> Resolution {
        Resolution::reported(self.choose(ambiguity), ambiguity)
    }
}

/// Always takes the two-letter symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferLongest;

impl DisambiguationPolicy for PreferLongest {
    fn name(&self) -> &'static str {
        "prefer-longest"
    }

    fn resolve(&self, ambiguity: &Ambiguity<'_>) -> Resolution {
        Resolution::reported(Reading::Pair, ambiguity)
    }
}

/// Trusts the casing when it is unambiguous: `No` is nobelium, `NO` is
/// nitrogen followed by oxygen. Any casing with a lowercase first letter
/// falls back to [`PreferCommon`].
///
/// Exact two-letter casing is only questioned for synthetic elements that
/// also split into two common ones (`No`, `Np`, `Cn`, `Hs`), so ordinary
/// formulas such as `PbO` or `SnCl2` stay silent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CaseAware {
    pub fallback: PreferCommon,
}

impl DisambiguationPolicy for CaseAware {
    fn name(&self) -> &'static str {
        "case-aware"
    }

    fn resolve(&self, ambiguity: &Ambiguity<'_>) -> Resolution {
        match ambiguity.casing() {
            (true, true) => Resolution::silent(Reading::Single),
            (true, false) => {
                let suspicious = ambiguity.pair.atomic_number > LAST_NATURAL_ELEMENT
                    && self.fallback.choose(ambiguity) == Reading::Single;
                let advisory = suspicious.then(|| {
                    let note = format!(
                        "`{}` read as {}; write `{}` for {}",
                        ambiguity.raw,
                        ambiguity.pair.name,
                        ambiguity.split_text(),
                        ambiguity.split_names()
                    );
                    Advisory::new(AdvisoryKind::Warning, ambiguity.raw, ambiguity.pair.symbol, note)
                });
                Resolution { reading: Reading::Pair, advisory }
            }
            (false, _) => self.fallback.resolve(ambiguity),
        }
    }
}

/// Policy selector used by configuration and the interactive app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum PolicyKind {
    #[default]
    CaseAware,
    PreferCommon,
    PreferLongest,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::CaseAware, PolicyKind::PreferCommon, PolicyKind::PreferLongest];

    pub fn next(self) -> PolicyKind {
        match self {
            PolicyKind::CaseAware => PolicyKind::PreferCommon,
            PolicyKind::PreferCommon => PolicyKind::PreferLongest,
            PolicyKind::PreferLongest => PolicyKind::CaseAware,
        }
    }
}

impl DisambiguationPolicy for PolicyKind {
    fn name(&self) -> &'static str {
        match self {
            PolicyKind::CaseAware => CaseAware::default().name(),
            PolicyKind::PreferCommon => PreferCommon::default().name(),
            PolicyKind::PreferLongest => PreferLongest.name(),
        }
    }

    fn resolve(&self, ambiguity: &Ambiguity<'_>) -> Resolution {
        match self {
            PolicyKind::CaseAware => CaseAware::default().resolve(ambiguity),
            PolicyKind::PreferCommon => PreferCommon::default().resolve(ambiguity),
            PolicyKind::PreferLongest => PreferLongest.resolve(ambiguity),
        }
    }
}
