use formula::{
    ast::Symbol,
    engine::symbols::{collect_symbols, collect_symbols_owned},
    parse,
};
use pretty_assertions::assert_eq;

fn names(symbols: &[&Symbol]) -> Vec<String> {
    symbols.iter().map(ToString::to_string).collect()
}

#[test]
fn order_and_duplicates_are_kept() {
    let formula = parse("y = a + (b + a)").unwrap();

    assert_eq!(names(&formula.inputs()), ["a", "b", "a"]);
}

#[test]
fn literals_are_ignored() {
    let formula = parse(r#"y = 1 * a - "s" / -b"#).unwrap();

    assert_eq!(names(&formula.inputs()), ["a", "b"]);
}

#[test]
fn bare_symbol_side_yields_itself() {
    let formula = parse("out:RTC.TimedLong = in:RTC.TimedLong").unwrap();

    assert_eq!(names(&formula.outputs()), ["out:RTC.TimedLong"]);
    assert_eq!(names(&formula.inputs()), ["in:RTC.TimedLong"]);
}

#[test]
fn constant_side_has_no_symbols() {
    let formula = parse("y = 1 + 2").unwrap();

    assert!(formula.inputs().is_empty());
    assert!(formula.simplify().inputs().is_empty());
}

#[test]
fn collection_is_restartable() {
    let formula = parse("y = a * b").unwrap();

    assert_eq!(collect_symbols(&formula.value), collect_symbols(&formula.value));
}

#[test]
fn whole_statement_walk_lists_target_first() {
    let formula = parse("out = in1 + in2").unwrap();
    let owned = collect_symbols_owned(&formula.to_expr());

    assert_eq!(owned,
               vec![Symbol::from("out"), Symbol::from("in1"), Symbol::from("in2")]);
}
