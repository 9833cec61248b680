use crate::{error::ParseError, interpreter::lexer::Token};

/// Result type used by the converter.
pub type ConvertResult<T> = Result<T, ParseError>;

/// Converts a token sequence from infix to postfix order.
///
/// This is a bracket-scoped shunting-yard transform. Pending operators are
/// held in one group per bracket nesting level: `current` is the group for
/// the innermost open bracket, `enclosing` holds the suspended groups of
/// the outer levels. Literals and identifiers go straight to the output; an
/// incoming operator first pops every pending operator of equal or higher
/// precedence from the current group, which yields left-to-right order for
/// equal precedence. A closing bracket flushes the current group in reverse
/// push order and resumes the enclosing one.
///
/// The returned stream contains no bracket tokens.
///
/// # Errors
/// `UnmatchedBracket` if a closing bracket appears at nesting depth zero,
/// or if the input ends with open brackets still unclosed.
///
/// # Example
/// ```
/// use abacus::interpreter::{lexer::tokenize, postfix::to_postfix};
///
/// let postfix = to_postfix(tokenize("2+3*4")).unwrap();
/// // 2 3 4 * +
/// assert_eq!(postfix.len(), 5);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ConvertResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut current: Vec<Token> = Vec::new();
    let mut enclosing: Vec<Vec<Token>> = Vec::new();

    for token in tokens {
        match token {
            Token::Integer(_) | Token::Identifier(_) => output.push(token),
            Token::Operator(_) => {
                while let Some(pending) = current.pop() {
                    if pending.precedence() >= token.precedence() {
                        output.push(pending);
                    } else {
                        current.push(pending);
                        break;
                    }
                }
                current.push(token);
            },
            Token::LParen => {
                enclosing.push(std::mem::take(&mut current));
            },
            Token::RParen => match enclosing.pop() {
                Some(outer) => {
                    flush(&mut current, &mut output);
                    current = outer;
                },
                None => return Err(ParseError::UnmatchedBracket),
            },
        }
    }

    if !enclosing.is_empty() {
        return Err(ParseError::UnmatchedBracket);
    }
    flush(&mut current, &mut output);

    Ok(output)
}

/// Empties one operator group onto the output, last pushed first.
fn flush(group: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(pending) = group.pop() {
        output.push(pending);
    }
}
