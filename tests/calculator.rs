use abacus::{assign, evaluate, interpreter::environment::Environment};

fn eval_str(source: &str) -> Result<String, String> {
    eval_in(source, &Environment::new())
}

fn eval_in(source: &str, env: &Environment) -> Result<String, String> {
    evaluate(source, env).map(|value| value.to_string())
                         .map_err(|e| e.to_string())
}

fn assert_evaluates(source: &str, expected: &str) {
    match eval_str(source) {
        Ok(result) => assert_eq!(result, expected, "wrong result for `{source}`"),
        Err(e) => panic!("`{source}` failed: {e}"),
    }
}

fn assert_message(source: &str, message: &str) {
    match eval_str(source) {
        Ok(result) => panic!("`{source}` evaluated to {result} but was expected to fail"),
        Err(e) => assert_eq!(e, message, "wrong message for `{source}`"),
    }
}

#[test]
fn precedence_and_brackets() {
    assert_evaluates("2+3*4", "14");
    assert_evaluates("(2+3)*4", "20");
    assert_evaluates("2*(3+4)*5", "70");
    assert_evaluates("((1+2)*(3+4))", "21");
}

#[test]
fn equal_precedence_is_left_to_right() {
    assert_evaluates("8 - 3 + 2", "7");
    assert_evaluates("2 - 2 + 3", "3");
    assert_evaluates("10 / 3 * 3", "9");
    assert_evaluates("1 + 2 + 3 + 4 * 5 - 6 / 2", "23");
}

#[test]
fn sign_runs_collapse_by_parity() {
    assert_evaluates("-7", "-7");
    assert_evaluates("--7", "7");
    assert_evaluates("---7", "-7");
    assert_evaluates("----7", "7");
    assert_evaluates("+7", "7");
    assert_evaluates("+++7", "7");
    assert_evaluates("2 -- 3", "5");
    assert_evaluates("2 --- 3", "-1");
}

#[test]
fn unary_minus_before_groups() {
    assert_evaluates("-(3+5)", "-8");
    assert_evaluates("-(3+5)/2", "-4");

    // Double negative before a parenthesized group followed by division.
    let mut env = Environment::new();
    assign("x = 5", &mut env).unwrap();
    assert_eq!(eval_in("1 --(3+x)/2", &env).unwrap(), "5");
}

#[test]
fn unmatched_brackets_are_invalid() {
    assert_message("(1+2", "Invalid expression");
    assert_message("1+2)", "Invalid expression");
    assert_message("((1+2)", "Invalid expression");
    assert_message(")", "Invalid expression");
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", "3");
    assert_evaluates("-7/2", "-3");
    assert_evaluates("8/2", "4");
}

#[test]
fn division_by_zero_is_invalid() {
    assert_message("10/0", "Invalid expression");
    assert_message("10/(5-5)", "Invalid expression");
}

#[test]
fn unsupported_operator_runs_are_invalid() {
    assert_message("2 ** 3", "Invalid expression");
    assert_message("1 +- 2", "Invalid expression");
    assert_message("4 */ 2", "Invalid expression");
}

#[test]
fn arbitrary_precision_operands() {
    assert_evaluates("112234567890123456789012345678901234567890 + 1",
                     "112234567890123456789012345678901234567891");
    assert_evaluates("1000000000000000000000 * 1000000000000000000000",
                     "1000000000000000000000000000000000000000000");
    assert_evaluates("-1000000000000000000000000 / 3", "-333333333333333333333333");
}

#[test]
fn variable_flow() {
    let mut env = Environment::new();
    assign("x = 5", &mut env).unwrap();
    assert_eq!(eval_in("x + 1", &env).unwrap(), "6");
    assert_eq!(eval_in("y + 1", &env).unwrap_err(), "Unknown variable");

    // Reassignment replaces the binding.
    assign("x = 9", &mut env).unwrap();
    assert_eq!(eval_in("x", &env).unwrap(), "9");
}

#[test]
fn assignment_copies_the_current_value() {
    let mut env = Environment::new();
    assign("a = 3", &mut env).unwrap();
    assign("b = a", &mut env).unwrap();
    assign("a = 100", &mut env).unwrap();
    assert_eq!(eval_in("b", &env).unwrap(), "3");
}

#[test]
fn assignment_accepts_signed_literals() {
    let mut env = Environment::new();
    assign("n = -3", &mut env).unwrap();
    assert_eq!(eval_in("n", &env).unwrap(), "-3");
}

#[test]
fn failed_assignment_never_mutates() {
    let mut env = Environment::new();
    assert_eq!(assign("x = y", &mut env).unwrap_err().to_string(),
               "Unknown variable");
    assert!(env.get("x").is_none());
}

#[test]
fn assignment_target_must_be_alphabetic() {
    let mut env = Environment::new();
    assert_eq!(assign("1a = 5", &mut env).unwrap_err().to_string(),
               "Invalid identifier");
    assert_eq!(assign("a1 = 5", &mut env).unwrap_err().to_string(),
               "Invalid identifier");
    assert_eq!(assign(" = 5", &mut env).unwrap_err().to_string(),
               "Invalid identifier");
}

#[test]
fn assignment_value_must_be_identifier_or_literal() {
    let mut env = Environment::new();
    assert_eq!(assign("x = a1", &mut env).unwrap_err().to_string(),
               "Invalid assignment");
    assert_eq!(assign("x = 2+2", &mut env).unwrap_err().to_string(),
               "Invalid assignment");
    assert_eq!(assign("x =", &mut env).unwrap_err().to_string(),
               "Invalid assignment");
}

#[test]
fn tokenization_stops_at_unrecognized_characters() {
    // Permissive by design: the unreadable tail is dropped, and whatever
    // tokenized so far is evaluated on its own.
    assert_evaluates("8 + 7 ?", "15");
    assert_evaluates("3.5", "3");
}

#[test]
fn streams_that_do_not_reduce_to_one_value_are_invalid() {
    assert_message("", "Invalid expression");
    assert_message("(2)(3)", "Invalid expression");
}

#[test]
fn whitespace_is_stripped_before_tokenization() {
    // `1 0` reads as the single literal 10, not as two operands.
    assert_evaluates("1 0 + 2", "12");
}
