#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while executing a postfix stream.
///
/// The `Display` form of each variant is the fixed message shown to the
/// user. Every kind except `UnknownVariable` surfaces as the generic
/// "Invalid expression", matching the calculator's external behavior.
pub enum RuntimeError {
    /// Tried to read a variable with no bound value.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator token carried a symbol outside `+ - * /`, e.g. a mixed
    /// run such as `+-` or a repeated run such as `**`.
    UnknownOperator {
        /// The unsupported symbol.
        symbol: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The postfix stream did not reduce to exactly one value: an operator
    /// found an empty operand stack, or values were left over at the end.
    MalformedExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { .. } => write!(f, "Unknown variable"),
            Self::UnknownOperator { .. } | Self::DivisionByZero | Self::MalformedExpression => {
                write!(f, "Invalid expression")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
