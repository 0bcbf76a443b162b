use std::fs;

use calctk::{
    SENTINEL, calculate,
    error::{EvaluationError, ParseError, RuntimeError},
    evaluate,
    format::{MAX_RESULT_LEN, format_result},
};
use walkdir::WalkDir;

#[test]
fn case_files_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let expected = if expected == "ERROR" { SENTINEL } else { expected };
            assert_eq!(calculate(expression),
                       expected,
                       "expression {expression:?} in {path:?}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .filter(|line| !line.trim_start().starts_with('#'))
           .filter_map(|line| line.split_once(" => "))
           .map(|(expression, expected)| (expression.trim(), expected.trim()))
           .collect()
}

fn assert_scientific(text: &str) {
    let (mantissa, exponent) = text.split_once('E')
                                   .unwrap_or_else(|| panic!("{text} has no exponent"));
    let (int_part, frac_part) = mantissa.split_once('.')
                                        .unwrap_or_else(|| panic!("{text} has no point"));
    assert!(int_part.len() == 1 && int_part.chars().all(|c| c.is_ascii_digit()),
            "{text}");
    assert!(frac_part.len() == 5 && frac_part.chars().all(|c| c.is_ascii_digit()),
            "{text}");
    assert!(exponent.starts_with(['+', '-']), "{text}");
    assert!(exponent[1..].len() >= 2 && exponent[1..].chars().all(|c| c.is_ascii_digit()),
            "{text}");
}

#[test]
fn one_plus_one_is_two() {
    assert_eq!(calculate("1+1"), "2");
}

#[test]
fn division_by_zero_is_sentinel() {
    assert_eq!(calculate("10/0"), SENTINEL);
}

#[test]
fn huge_power_is_short_scientific() {
    let result = calculate("2**200");
    assert!(result.len() <= MAX_RESULT_LEN, "{result}");
    assert_scientific(&result);
}

#[test]
fn undefined_name_is_sentinel() {
    assert_eq!(calculate("abc"), SENTINEL);
}

#[test]
fn malformed_syntax_is_sentinel() {
    assert_eq!(calculate("2*(3+"), SENTINEL);
    assert_eq!(calculate(""), SENTINEL);
    assert_eq!(calculate("   "), SENTINEL);
}

#[test]
fn sentinel_is_never_a_number() {
    assert!(SENTINEL.parse::<f64>().is_err());
    assert!(SENTINEL.parse::<i64>().is_err());
}

#[test]
fn results_match_numeric_value() {
    let cases: [(&str, f64); 8] = [("1+2*3", 7.0),
                                   ("(1+2)*3", 9.0),
                                   ("2**3**2", 512.0),
                                   ("-(4-10)/3", 2.0),
                                   ("1.25*4-0.5", 4.5),
                                   ("2**-3", 0.125),
                                   ("((7))", 7.0),
                                   ("3*3*3*3*3*3*3*3*3*3*3*3", 531_441.0)];

    for (expression, expected) in cases {
        let result = calculate(expression);
        let value: f64 = result.parse()
                               .unwrap_or_else(|_| panic!("{expression} gave {result}"));
        assert!((value - expected).abs() <= expected.abs() * 1e-12,
                "{expression} gave {result}, expected {expected}");
    }
}

#[test]
fn long_results_keep_five_significant_decimals() {
    for expression in ["10**20", "1/7", "3**40", "0.1*3", "2**0.5"] {
        let result = calculate(expression);
        assert!(result.len() <= MAX_RESULT_LEN, "{expression} gave {result}");
        assert_scientific(&result);
    }
}

#[test]
fn formatting_short_results_is_idempotent() {
    for expression in ["1+1", "4/2", "2**200", "1/3", "-7*6", "1e20", "0.75"] {
        let result = calculate(expression);
        assert_eq!(format_result(&result).unwrap(), result);
    }
}

#[test]
fn errors_keep_their_kind() {
    assert!(matches!(evaluate("abc"),
                     Err(EvaluationError::Runtime(RuntimeError::UnknownName { position: 0, .. }))));
    assert!(matches!(evaluate("1 + 10/0"),
                     Err(EvaluationError::Runtime(RuntimeError::DivisionByZero { position: 6 }))));
    assert!(matches!(evaluate("2*(3+"),
                     Err(EvaluationError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate("(1+2"),
                     Err(EvaluationError::Parse(ParseError::ExpectedClosingParen { position: 0 }))));
    assert!(matches!(evaluate("1 $ 2"),
                     Err(EvaluationError::Parse(ParseError::UnexpectedCharacter { position: 2, .. }))));
    assert!(matches!(evaluate("012"),
                     Err(EvaluationError::Parse(ParseError::InvalidLiteral { .. }))));
    assert!(matches!(evaluate("(-8)**(1/3)"),
                     Err(EvaluationError::Runtime(RuntimeError::ComplexResult { .. }))));
    assert!(matches!(evaluate("1e308*10"),
                     Err(EvaluationError::Runtime(RuntimeError::NonFiniteResult { .. }))));
    assert!(matches!(evaluate("2**100000"),
                     Err(EvaluationError::Runtime(RuntimeError::IntegerOverflow { position: 1 }))));
}

#[test]
fn integer_results_are_exact() {
    for (expression, expected) in [("(10**20+1)-10**20", "1"),
                                   ("2**63+1-2**63", "1"),
                                   ("99999999999999999999-99999999999999999998", "1"),
                                   ("10**400/10**399", "10.0")]
    {
        assert_eq!(calculate(expression), expected, "{expression}");
    }
}

#[test]
fn flat_chains_are_not_nesting() {
    assert_eq!(calculate(&format!("{}1", "1+".repeat(600))), "601");
    assert_eq!(calculate(&format!("{}1", "1+".repeat(100_000))), "100001");
    assert_eq!(calculate(&format!("{}0", "1-".repeat(20_000))), "-19998");
    assert_eq!(calculate(&format!("1{}", "*1".repeat(50_000))), "1");
}

#[test]
fn real_nesting_is_limited() {
    let nested = |levels: usize| format!("{}1{}", "(".repeat(levels), ")".repeat(levels));

    assert_eq!(calculate(&nested(400)), "1");
    assert_eq!(calculate(&nested(600)), SENTINEL);
    assert_eq!(calculate(&format!("{}1", "-".repeat(600))), SENTINEL);
}

#[test]
fn arbitrary_input_never_panics() {
    let deep_parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let deep_signs = format!("{}1", "-".repeat(10_000));
    let deep_powers = format!("{}2", "2**".repeat(10_000));
    let long_chain = format!("{}1", "1+".repeat(10_000));
    let inputs = [deep_parens.as_str(),
                  deep_signs.as_str(),
                  deep_powers.as_str(),
                  long_chain.as_str(),
                  "((((",
                  "))))",
                  "**2",
                  "2**",
                  "1e",
                  ".",
                  "é",
                  "1/0.0000",
                  "\n\t",
                  "9**9**9**9"];

    for input in inputs {
        let result = calculate(input);
        assert!(!result.is_empty());
    }
    assert_eq!(calculate(&deep_parens), SENTINEL);
}

#[test]
fn evaluation_has_no_shared_state() {
    let first = calculate("2**0.5*3");
    assert_eq!(calculate("abc"), SENTINEL);
    assert_eq!(calculate("2**0.5*3"), first);
}
