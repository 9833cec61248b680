/// The environment module holds variable bindings.
///
/// A single mutable mapping from identifier to arbitrary-precision value,
/// consulted during evaluation and written by assignment. It lives for the
/// whole session and is passed explicitly wherever it is needed.
///
/// # Responsibilities
/// - Stores one binding per name; reassignment replaces the value.
/// - Resolves identifiers during evaluation.
pub mod environment;
/// The evaluator module executes postfix token streams.
///
/// The evaluator walks a postfix-ordered token sequence left to right with
/// a single operand stack, resolving identifiers through the environment
/// and applying unary or binary arithmetic as the stack dictates.
///
/// # Responsibilities
/// - Executes literals, identifiers, and operators against an operand
///   stack.
/// - Reports runtime errors such as unbound variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes a raw input line.
///
/// The lexer reads a whitespace-stripped line and produces a stream of
/// tokens: integer literals, identifiers, operators, and brackets. Runs of
/// consecutive sign characters are collapsed here, so the rest of the
/// pipeline only ever sees a single effective operator.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Collapses `+`/`-` runs by parity.
/// - Drops unrecognizable trailing input instead of failing.
pub mod lexer;
/// The postfix module converts token streams from infix to postfix order.
///
/// A bracket-scoped shunting-yard transform: pending operators are held in
/// one group per bracket nesting level, and bracket mismatches are the only
/// error this phase can produce.
///
/// # Responsibilities
/// - Reorders literals, identifiers, and operators into postfix notation.
/// - Enforces operator precedence and left-to-right evaluation order.
/// - Detects unmatched brackets.
pub mod postfix;
