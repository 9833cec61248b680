#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts.
///
/// The `Display` form of each variant is the fixed message shown to the
/// user; the variant fields exist for diagnostics via `Debug`.
pub enum ParseError {
    /// A closing bracket appeared with no matching open bracket, or the
    /// input ended with unclosed open brackets.
    UnmatchedBracket,
    /// An assignment target failed the identifier lexical check.
    InvalidIdentifier {
        /// The rejected target text.
        name: String,
    },
    /// An assignment value was neither a known identifier nor an integer
    /// literal.
    InvalidAssignment {
        /// The rejected value text.
        value: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedBracket => write!(f, "Invalid expression"),
            Self::InvalidIdentifier { .. } => write!(f, "Invalid identifier"),
            Self::InvalidAssignment { .. } => write!(f, "Invalid assignment"),
        }
    }
}

impl std::error::Error for ParseError {}
