use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryKind {
    /// Letter case was repaired to match a symbol
    Autocorrected,
    /// Two readings were possible and one was picked
    Ambiguous,
    /// The reading is valid but probably not what was meant
    Warning,
}

impl AdvisoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryKind::Autocorrected => "autocorrected",
            AdvisoryKind::Ambiguous => "ambiguous",
            AdvisoryKind::Warning => "warning",
        }
    }
}

/// Informational note produced while normalizing input. Never blocks a
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub original: String,
    pub resolved: String,
    pub note: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, original: impl Into<String>, resolved: impl Into<String>, note: impl Into<String>) -> Advisory {
        Advisory {
            kind,
            original: original.into(),
            resolved: resolved.into(),
            note: note.into(),
        }
    }

    pub fn autocorrected(original: impl Into<String>, resolved: impl Into<String>) -> Advisory {
        let original = original.into();
        let resolved = resolved.into();
        let note = format!("`{original}` read as `{resolved}`");
        Advisory::new(AdvisoryKind::Autocorrected, original, resolved, note)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.note)
    }
}
