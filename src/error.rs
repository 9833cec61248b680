/// Conversion and assignment errors.
///
/// Defines all error types that can occur before a postfix stream is
/// executed: bracket imbalance detected by the converter, and malformed
/// assignment lines.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a postfix
/// stream: unbound variables, unsupported operator symbols, division by
/// zero, and internally inconsistent streams.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error a single input line can produce, from either phase.
pub enum EvalError {
    /// The line failed before evaluation started.
    Parse(ParseError),
    /// The line failed while the postfix stream was being executed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
