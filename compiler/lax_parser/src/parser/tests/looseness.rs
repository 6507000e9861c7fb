use super::init_test_logger;
use crate::parser::test_utils::{default_operator, lex, op, parse_to_string, sep, val};
use crate::parser::parse;
use lax_lexer::Token;
use pretty_assertions::assert_eq;

fn parse_standard(input: &str) -> String {
    init_test_logger();
    parse_to_string(input).unwrap_or_else(|err| panic!("{input:?} failed: {err}"))
}

#[test]
fn test_separator_overrides_priority() {
    assert_eq!(parse_standard("a plus b times c"), "(a plus (b times c))");
    assert_eq!(parse_standard("a plus b _ times c"), "((a plus b) times c)");
}

#[test]
fn test_separator_reaches_past_nested_tight_groups() {
    assert_eq!(
        parse_standard("a plus b times c _ plus d"),
        "((a plus (b times c)) plus d)"
    );
    assert_eq!(
        parse_standard("a plus b _ times c _ _ minus d"),
        "(((a plus b) times c) minus d)"
    );
}

#[test]
fn test_equal_looseness_falls_back_to_priority() {
    // `b` and the second operator both carry one separator; priority decides
    assert_eq!(
        parse_standard("a _ plus _ b _ times c"),
        "(a plus (b times c))"
    );
    assert_eq!(
        parse_standard("a _ times _ b _ plus c"),
        "((a times b) plus c)"
    );
    // Here `b` is tighter than `times`, so `times` reaches past it
    assert_eq!(
        parse_standard("a _ plus b _ times c"),
        "((a plus b) times c)"
    );
}

#[test]
fn test_tight_operator_inside_loose_operand() {
    // `c plus d` stays together under the looser times
    assert_eq!(
        parse_standard("a plus b _ times _ c plus d"),
        "((a plus b) times (c plus d))"
    );
    // without the second separator, plus reaches past `c`
    assert_eq!(
        parse_standard("a plus b _ times c plus d"),
        "(((a plus b) times c) plus d)"
    );
}

#[test]
fn test_separator_before_value_loosens_its_group() {
    assert_eq!(parse_standard("a times _ b plus c"), "(a times (b plus c))");
    assert_eq!(
        parse_standard("a times _ b plus c _ minus d"),
        "((a times (b plus c)) minus d)"
    );
}

#[test]
fn test_leading_and_repeated_separators() {
    assert_eq!(parse_standard("_ a"), "a");
    assert_eq!(parse_standard("_ _ a plus b"), "(a plus b)");
    assert_eq!(parse_standard("a _ _ _ plus b"), "(a plus b)");
}

#[test]
fn test_default_operator_inherits_separators() {
    // Without a separator the default times (5) binds to `b c` only
    assert_eq!(parse_standard("a plus b c"), "(a plus (b times c))");
    // With one, it reaches past the tighter `a plus b`
    assert_eq!(parse_standard("a plus b _ c"), "((a plus b) times c)");
    // and the value after it keeps the separator as well
    assert_eq!(
        parse_standard("a plus b _ c plus d"),
        "((a plus b) times (c plus d))"
    );
}

#[test]
fn test_adjacent_equals_explicit_default_with_separators() {
    let default = default_operator();
    let implicit = lex("a plus b _ c plus d");
    let explicit = vec![
        val("a"),
        op("plus"),
        val("b"),
        sep(),
        Token::Operator(default.clone()),
        sep(),
        val("c"),
        op("plus"),
        val("d"),
    ];
    assert_eq!(
        parse(implicit, &default).unwrap(),
        parse(explicit, &default).unwrap()
    );
}

#[test]
fn test_separator_before_postfix() {
    assert_eq!(parse_standard("a plus b squared"), "(a plus (b squared))");
    assert_eq!(parse_standard("a plus b _ squared"), "((a plus b) squared)");
}

#[test]
fn test_separator_before_prefix() {
    // The prefix expression as a whole groups loosely
    assert_eq!(parse_standard("a times _ neg b plus c"), "(a times ((neg b) plus c))");
}
