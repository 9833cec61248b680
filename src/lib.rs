//! # abacus
//!
//! abacus is an interactive integer calculator written in Rust.
//! It tokenizes, converts, and evaluates arithmetic expressions with
//! arbitrary-precision operands, named variables, and parenthesized
//! sub-expressions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use num_bigint::BigInt;

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::evaluate_postfix,
        lexer::{is_identifier, tokenize},
        postfix::to_postfix,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while converting or
/// evaluating a line of input. It standardizes error reporting: the `Display`
/// form of every error is the exact user-facing message the REPL prints,
/// while the `Debug` form carries the offending name or symbol for
/// diagnostics.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (converter, evaluator,
///   assignment).
/// - Maps every error kind to its fixed user-facing message.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression evaluation pipeline.
///
/// This module ties together lexing, infix-to-postfix conversion, postfix
/// evaluation, and the variable environment to provide a complete runtime
/// for single-line expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, converter, evaluator, and the
///   variable environment.
/// - Keeps each phase pure: strings and token sequences in, values or
///   errors out, no I/O.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single expression line against a variable environment.
///
/// The line is tokenized, converted from infix to postfix notation, and the
/// postfix stream is executed against `env`. Evaluation never mutates the
/// environment.
///
/// # Errors
/// Returns an error if the brackets are unbalanced, an identifier is
/// unbound, a divisor is zero, or the token stream does not assemble into a
/// single value.
///
/// # Examples
/// ```
/// use abacus::{evaluate, interpreter::environment::Environment};
///
/// let env = Environment::new();
/// assert_eq!(evaluate("2 + 3 * 4", &env).unwrap().to_string(), "14");
/// assert_eq!(evaluate("(2 + 3) * 4", &env).unwrap().to_string(), "20");
///
/// // Unbalanced brackets are reported, not panicked on.
/// assert!(evaluate("(1 + 2", &env).is_err());
/// ```
pub fn evaluate(line: &str, env: &Environment) -> Result<BigInt, EvalError> {
    let tokens = tokenize(line);
    let postfix = to_postfix(tokens)?;
    Ok(evaluate_postfix(postfix, env)?)
}

/// Executes a single assignment line of the form `name = value`.
///
/// The target is the text before the first `=` and must be a pure
/// alphabetic identifier. The value is either another identifier (its
/// current binding is copied) or a bare integer literal; it is not
/// evaluated as a general expression. The environment is only written once
/// the whole right-hand side has been validated, so a failed assignment
/// never leaves a partial update behind.
///
/// # Errors
/// Returns an error if the target is not a valid identifier, the value
/// names an unbound variable, or the value is neither an identifier nor an
/// integer literal.
///
/// # Examples
/// ```
/// use abacus::{assign, evaluate, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// assign("x = 5", &mut env).unwrap();
/// assert_eq!(evaluate("x + 1", &env).unwrap().to_string(), "6");
///
/// // The right-hand side is validated before anything is written.
/// assert!(assign("y = unbound", &mut env).is_err());
/// assert!(env.get("y").is_none());
/// ```
pub fn assign(line: &str, env: &mut Environment) -> Result<(), EvalError> {
    let (target, value) = match line.split_once('=') {
        Some((target, value)) => (target.trim(), value.trim()),
        None => (line.trim(), ""),
    };

    if !is_identifier(target) {
        return Err(ParseError::InvalidIdentifier { name: target.to_string() }.into());
    }

    let value = if is_identifier(value) {
        match env.get(value) {
            Some(bound) => bound.clone(),
            None => {
                return Err(RuntimeError::UnknownVariable { name: value.to_string() }.into());
            },
        }
    } else {
        value.parse::<BigInt>()
             .map_err(|_| ParseError::InvalidAssignment { value: value.to_string() })?
    };

    env.set(target, value);
    Ok(())
}
