//! Error types for formula parsing and weight calculation

use thiserror::Error;

/// Why a sub-formula could not be parsed. Positions are byte offsets into
/// the sub-formula text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown element `{symbol}` at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("invalid syntax at `{remainder}` (position {position})")]
    InvalidSyntax { remainder: String, position: usize },

    #[error("unmatched `)` at position {position}")]
    UnmatchedClose { position: usize },

    #[error("unclosed `(` at position {position}")]
    UnclosedGroup { position: usize },

    #[error("atom count too large at position {position}")]
    CountOverflow { position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnknownSymbol { position, .. }
            | ParseError::InvalidSyntax { position, .. }
            | ParseError::UnmatchedClose { position }
            | ParseError::UnclosedGroup { position }
            | ParseError::CountOverflow { position } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no atomic weight recorded for `{0}`")]
    MissingWeight(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::UnknownSymbol { symbol: "Xx".to_string(), position: 0 };
        assert_eq!(err.to_string(), "unknown element `Xx` at position 0");

        let err = ParseError::InvalidSyntax { remainder: "-2".to_string(), position: 3 };
        assert_eq!(err.to_string(), "invalid syntax at `-2` (position 3)");
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_parse_error_converts_transparently() {
        let err: FormulaError = ParseError::UnmatchedClose { position: 0 }.into();
        assert_eq!(err.to_string(), "unmatched `)` at position 0");
    }
}
