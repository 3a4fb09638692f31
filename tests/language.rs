use std::fs;

use formula::{
    ast::{BinaryOperator, Expr, Symbol, SymbolType, UnaryOperator},
    engine::parser::core::MAX_DEPTH,
    error::ParseError,
    parse,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn corpus_formulas_parse() {
    let mut count = 0;

    for entry in WalkDir::new("tests/formulas").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "formula")
                                               })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = parse(content.trim_end()) {
            panic!("Formula in {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No formulas found in tests/formulas");
}

fn sym(id: &str) -> Expr {
    Symbol::new(id).into()
}

fn num(value: f64) -> Expr {
    value.into()
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::binary(left, op, right, 1)
}

fn assert_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(formula) => panic!("Formula {src:?} parsed as {formula} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn typed_assignment() {
    let formula = parse("out:Type = in1:Type + in2:Type").unwrap();

    assert_eq!(formula.op, BinaryOperator::Assign);
    assert_eq!(formula.target.name(), "out");
    assert_eq!(formula.target.type_name(), Some("Type"));
    assert_eq!(formula.value,
               bin(sym("in1:Type"), BinaryOperator::Add, sym("in2:Type")));
}

#[test]
fn every_statement_operator() {
    let cases = [("=", BinaryOperator::Assign),
                 (":=", BinaryOperator::Connect),
                 ("==", BinaryOperator::Equal),
                 ("!=", BinaryOperator::NotEqual),
                 (">", BinaryOperator::Greater),
                 (">=", BinaryOperator::GreaterEqual),
                 ("<", BinaryOperator::Less),
                 ("<=", BinaryOperator::LessEqual)];

    for (text, op) in cases {
        let formula = parse(&format!("y {text} x")).unwrap();
        assert_eq!(formula.op, op, "operator {text}");
        assert!(formula.op.is_statement_op());
        assert_eq!(formula.value, sym("x"));
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let formula = parse("x = 2 + 3 * 4").unwrap();

    assert_eq!(formula.value,
               bin(num(2.0),
                   BinaryOperator::Add,
                   bin(num(3.0), BinaryOperator::Mul, num(4.0))));
}

#[test]
fn binary_operators_are_left_associative() {
    let formula = parse("x = a - b - c").unwrap();
    assert_eq!(formula.value,
               bin(bin(sym("a"), BinaryOperator::Sub, sym("b")),
                   BinaryOperator::Sub,
                   sym("c")));

    let formula = parse("x = a / b * c").unwrap();
    assert_eq!(formula.value,
               bin(bin(sym("a"), BinaryOperator::Div, sym("b")),
                   BinaryOperator::Mul,
                   sym("c")));
}

#[test]
fn parentheses_override_precedence() {
    let formula = parse("x = (2 + 3) * 4").unwrap();

    assert_eq!(formula.value,
               bin(bin(num(2.0), BinaryOperator::Add, num(3.0)),
                   BinaryOperator::Mul,
                   num(4.0)));
}

#[test]
fn unary_minus_binds_tighter_than_binary_operators() {
    let formula = parse("x = -a * b").unwrap();

    assert_eq!(formula.value,
               bin(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(sym("a")),
                                   line: 1, },
                   BinaryOperator::Mul,
                   sym("b")));
}

#[test]
fn string_literals_drop_their_quotes() {
    let formula = parse(r#"label = "hello world""#).unwrap();

    assert_eq!(formula.value, Expr::Str("hello world".to_string()));
}

#[test]
fn untyped_symbols_use_the_sentinel() {
    let formula = parse("flag = other").unwrap();

    assert_eq!(formula.target.ty(), &SymbolType::Untyped);
    assert!(!formula.target.is_typed());
}

#[test]
fn display_is_fully_parenthesized() {
    let formula = parse("out:T = a + 2 * -b").unwrap();

    assert_eq!(formula.to_string(), "(out:T = (a + (2.0 * -b)))");
}

#[test]
fn to_expr_puts_the_target_on_the_left() {
    let formula = parse("y := x").unwrap();

    assert_eq!(formula.to_expr(),
               bin(sym("y"), BinaryOperator::Connect, sym("x")));
}

#[test]
fn syntax_errors_are_returned() {
    assert!(matches!(assert_failure(""),
                     ParseError::UnexpectedEndOfInput { line: 1 }));
    assert!(matches!(assert_failure("x ="),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_failure("x = (1 + 2"),
                     ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_failure("1 = x"), ParseError::ExpectedTarget { .. }));
    assert!(matches!(assert_failure("x + y"),
                     ParseError::ExpectedStatementOperator { .. }));
    assert!(matches!(assert_failure("x = y = z"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_failure("x = * 2"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn statement_operators_are_not_expression_operators() {
    assert_failure("x = a < b");
    assert_failure("x = (a == b)");
}

#[test]
fn failed_parse_does_not_return_an_earlier_result() {
    assert!(parse("x = 1").is_ok());
    assert!(parse("x = ").is_err());
    assert!(parse("y = 2").is_ok_and(|f| f.target.name() == "y"));
}

#[test]
fn errors_carry_the_line() {
    let err = assert_failure("x =\n\n)");

    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error on line 3: Unexpected token: RParen.");
}

#[test]
fn require_assignment_rejects_other_operators() {
    assert!(parse("out = in").unwrap().require_assignment().is_ok());

    let err = parse("out := in").unwrap()
                                .require_assignment()
                                .unwrap_err();
    assert_eq!(err,
               ParseError::NotAnAssignment { op:   BinaryOperator::Connect,
                                             line: 1, });
}

#[test]
fn adjacent_strings_stay_separate() {
    let formula = parse(r#"x = "a" + "b""#).unwrap();

    assert_eq!(formula.value,
               bin(Expr::Str("a".to_string()),
                   BinaryOperator::Add,
                   Expr::Str("b".to_string())));
}

#[test]
fn deep_parentheses_are_rejected() {
    let n = 10_000;
    let src = format!("x = {}1{}", "(".repeat(n), ")".repeat(n));

    assert!(matches!(assert_failure(&src), ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn deep_unary_minus_is_rejected() {
    let src = format!("x = {}1", "-".repeat(10_000));

    assert!(matches!(assert_failure(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn long_operator_chains_are_rejected() {
    let sum = format!("x = 1{}", " + a".repeat(10_000));
    assert!(matches!(assert_failure(&sum), ParseError::NestingTooDeep { .. }));

    let product = format!("x = 1{}", " * a".repeat(10_000));
    assert!(matches!(assert_failure(&product), ParseError::NestingTooDeep { .. }));
}

#[test]
fn nesting_within_the_limit_is_walkable() {
    let parens = MAX_DEPTH - 1;
    let src = format!("x = {}1 + 2{}", "(".repeat(parens), ")".repeat(parens));
    let formula = parse(&src).unwrap();
    assert_eq!(formula.simplify().value, num(3.0));

    let terms = MAX_DEPTH - 1;
    let src = format!("x = a{}", " + a".repeat(terms - 1));
    let formula = parse(&src).unwrap();
    assert_eq!(formula.simplify().inputs().len(), terms);
    assert_eq!(formula.to_string().matches('a').count(), terms);

    let src = format!("x = a{}", " + a".repeat(terms + 1));
    assert!(matches!(assert_failure(&src), ParseError::NestingTooDeep { .. }));
}
