use logos::Logos;
use num_bigint::BigInt;

/// Represents a lexical token in one line of calculator input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Unsigned integer literal tokens of any magnitude, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// Identifier tokens; variable names are pure alphabetic runs such as
    /// `x` or `count`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A maximal run of operator characters, already passed through sign
    /// normalization: runs of `+` collapse to `+`, runs of `-` collapse by
    /// parity, and anything else (`**`, `+-`, ...) is carried through
    /// unchanged to fail later as an unknown operator.
    #[regex(r"[-+*/]+", collapse_signs)]
    Operator(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the precedence rank of an operator token.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. Any other symbol ranks
    /// zero, so unsupported operator runs never pop real operators off the
    /// pending group.
    #[must_use]
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Operator(symbol) => match symbol.as_str() {
                "+" | "-" => 1,
                "*" | "/" => 2,
                _ => 0,
            },
            _ => 0,
        }
    }
}

/// Tokenizes one raw input line.
///
/// All whitespace is stripped first, so `1 0 + 2` reads as `10 + 2`. The
/// remaining text is matched greedily against the token classes above. An
/// unrecognized character silently ends tokenization and drops the rest of
/// the line; if the truncated stream no longer assembles into a valid
/// expression, the converter or evaluator reports it.
///
/// # Example
/// ```
/// use abacus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("--7");
/// assert_eq!(tokens[0], Token::Operator("+".to_string()));
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&stripped);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => break,
        }
    }

    tokens
}

/// Checks whether `text` belongs to the identifier lexical class: a
/// non-empty run of alphabetic characters.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Collapses a run of sign characters into a single effective operator.
///
/// Repeated unary negation toggles sign, so a run of `n` minus characters
/// becomes `-` when `n` is odd and `+` when it is even. Repeated `+` is
/// inert. Runs containing `*`, `/`, or a mix of signs and other operator
/// characters are returned unchanged.
fn collapse_signs(lex: &mut logos::Lexer<Token>) -> String {
    let run = lex.slice();

    if run.chars().all(|c| c == '+') {
        "+".to_string()
    } else if run.chars().all(|c| c == '-') {
        if run.len() % 2 == 0 { "+" } else { "-" }.to_string()
    } else {
        run.to_string()
    }
}
