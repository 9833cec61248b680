use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a postfix token stream against a variable environment.
///
/// The stream is walked left to right with a single operand stack. A
/// literal pushes its value; an identifier pushes its current binding; an
/// operator pops two operands when at least two are present and one
/// otherwise, applying binary or unary semantics accordingly. That arity
/// rule handles sign-prefixed sub-expressions like `-(3+x)` without a
/// separate unary grammar. At the end the stack must hold exactly one
/// value, which is the result.
///
/// # Errors
/// - `UnknownVariable` for an unbound identifier.
/// - `DivisionByZero` when `/` meets a zero divisor.
/// - `UnknownOperator` when a symbol outside `+ - * /` reaches the binary
///   path.
/// - `MalformedExpression` when the stack is empty at an operator or does
///   not end with exactly one value.
pub fn evaluate_postfix(postfix: Vec<Token>, env: &Environment) -> EvalResult<BigInt> {
    let mut operands: Vec<BigInt> = Vec::new();

    for token in postfix {
        match token {
            Token::Integer(value) => operands.push(value),
            Token::Identifier(name) => match env.get(&name) {
                Some(value) => operands.push(value.clone()),
                None => return Err(RuntimeError::UnknownVariable { name }),
            },
            Token::Operator(symbol) => match (operands.pop(), operands.pop()) {
                (Some(right), Some(left)) => operands.push(apply_binary(&symbol, left, right)?),
                (Some(operand), None) => operands.push(apply_unary(&symbol, operand)),
                (None, _) => return Err(RuntimeError::MalformedExpression),
            },
            // A postfix stream never contains brackets; the converter
            // consumed them all.
            Token::LParen | Token::RParen => return Err(RuntimeError::MalformedExpression),
        }
    }

    let result = operands.pop().ok_or(RuntimeError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(RuntimeError::MalformedExpression);
    }
    Ok(result)
}

/// Applies a binary operator to two big-integer operands.
///
/// `/` is truncating integer division (toward zero), so `7 / 2 == 3` and
/// `-7 / 2 == -3`.
fn apply_binary(symbol: &str, left: BigInt, right: BigInt) -> EvalResult<BigInt> {
    match symbol {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "*" => Ok(left * right),
        "/" => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
        _ => Err(RuntimeError::UnknownOperator { symbol: symbol.to_string() }),
    }
}

/// Applies a unary operator to a single operand. `-` negates; any other
/// symbol passes the value through unchanged.
fn apply_unary(symbol: &str, operand: BigInt) -> BigInt {
    if symbol == "-" { -operand } else { operand }
}
