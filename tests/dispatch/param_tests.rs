//! Parameter kind tests.
//!
//! Tests acceptance, conversion, display, and priority of each kind.

use keyline_dispatch::ParamKind;
use keyline_foundation::{ErrorKind, Value, ValueType};

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn integer_accepts_only_digits() {
    let p = ParamKind::integer("n");
    assert!(p.accepts(&["42"], 0));
    assert!(!p.accepts(&["-1"], 0));
    assert!(!p.accepts(&["4.2"], 0));
    assert!(!p.accepts(&["four"], 0));
}

#[test]
fn integer_rejects_overflow() {
    let p = ParamKind::integer("n");
    assert!(!p.accepts(&["99999999999999999999"], 0));
}

#[test]
fn float_accepts_whole_and_decimal() {
    let p = ParamKind::float("f");
    assert!(p.accepts(&["3"], 0));
    assert!(p.accepts(&["3.25"], 0));
    assert!(!p.accepts(&[".5"], 0));
    assert!(!p.accepts(&["3."], 0));
    assert_eq!(p.consume(&["3"], 0).unwrap(), (Value::Float(3.0), 1));
}

#[test]
fn string_accepts_anything_present() {
    let p = ParamKind::string("s");
    assert!(p.accepts(&["anything"], 0));
    assert!(!p.accepts(&["anything"], 1));
}

#[test]
fn switch_is_exact_and_case_sensitive() {
    let p = ParamKind::switch("add");
    assert!(p.accepts(&["add"], 0));
    assert!(!p.accepts(&["Add"], 0));
    assert_eq!(p.consume(&["add"], 0).unwrap(), (Value::from("add"), 1));
}

#[test]
fn consume_reads_at_position() {
    let tokens = ["give", "sword", "5"];
    let (value, next) = ParamKind::integer("n").consume(&tokens, 2).unwrap();
    assert_eq!(value, Value::Int(5));
    assert_eq!(next, 3);
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn array_terminates_at_end_word() {
    let p = ParamKind::array("until", ParamKind::integer("n"));
    let tokens = ["1", "2", "3", "until", "x"];
    assert!(p.accepts(&tokens, 0));

    let (value, next) = p.consume(&tokens, 0).unwrap();
    assert_eq!(value, Value::from(vec![1i64, 2, 3]));
    assert_eq!(next, 4);
}

#[test]
fn array_without_end_word_is_rejected() {
    let p = ParamKind::array("until", ParamKind::integer("n"));
    assert!(!p.accepts(&["1", "2", "3"], 0));
}

#[test]
fn array_rejects_bad_element() {
    let p = ParamKind::array("end", ParamKind::integer("n"));
    assert!(!p.accepts(&["1", "two", "end"], 0));
}

#[test]
fn empty_array() {
    let p = ParamKind::array("end", ParamKind::float("n"));
    let (value, next) = p.consume(&["end"], 0).unwrap();
    assert_eq!(value, Value::from(Vec::<i64>::new()));
    assert_eq!(next, 1);
}

#[test]
fn nested_arrays() {
    let p = ParamKind::array("done", ParamKind::array("end", ParamKind::integer("n")));
    let tokens = ["1", "2", "end", "3", "end", "done"];
    let (value, next) = p.consume(&tokens, 0).unwrap();
    assert_eq!(value.to_string(), "[[1 2] [3]]");
    assert_eq!(next, 6);
}

#[test]
fn consume_on_rejected_input_is_contract_violation() {
    let err = ParamKind::integer("n").consume(&["x"], 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContractViolation { position: 0, .. }));
    assert!(err.is_internal());
}

// =============================================================================
// Describe, Display, Priority
// =============================================================================

#[test]
fn display_forms() {
    assert_eq!(ParamKind::integer("amount").to_string(), "<amount: int>");
    assert_eq!(ParamKind::string("who").to_string(), "<who: str>");
    assert_eq!(ParamKind::switch("add").to_string(), "add");
    assert_eq!(
        ParamKind::array("end", ParamKind::float("n")).to_string(),
        "<n: float>... end"
    );
}

#[test]
fn equality_ignores_names() {
    assert_eq!(ParamKind::integer("a"), ParamKind::integer("b"));
    assert_ne!(ParamKind::integer("a"), ParamKind::float("a"));
    assert_ne!(ParamKind::switch("x"), ParamKind::switch("y"));
}

#[test]
fn priority_order() {
    let ordered = [
        ParamKind::string("s"),
        ParamKind::float("f"),
        ParamKind::integer("i"),
        ParamKind::switch("k"),
        ParamKind::array("end", ParamKind::string("s")),
    ];
    for pair in ordered.windows(2) {
        assert!(pair[0].priority() < pair[1].priority(), "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn value_types() {
    assert_eq!(ParamKind::switch("k").value_type(), ValueType::String);
    assert_eq!(
        ParamKind::array("end", ParamKind::integer("n")).value_type(),
        ValueType::list(ValueType::Int)
    );
}
