//! Overload resolution tests.
//!
//! Tests narrowing, exact-length matching, and priority tie-breaks.

use keyline_dispatch::{CommandRegistry, LineTokenizer, Matcher, ParamKind};
use keyline_foundation::{ErrorKind, Value};
use proptest::prelude::*;

fn registry(commands: Vec<(&str, Vec<ParamKind>)>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for (keyword, params) in commands {
        registry.register_command(keyword, params, |_| {});
    }
    registry
}

fn resolve_line(registry: &CommandRegistry, line: &str) -> keyline_foundation::Result<String> {
    Matcher::resolve(registry, &LineTokenizer::tokenize(line)).map(|r| r.signature())
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_keyword_is_command_not_found() {
    let reg = registry(vec![("give", vec![ParamKind::integer("n")])]);
    let err = resolve_line(&reg, "take 5").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CommandNotFound { ref keyword } if keyword == "take"));
}

#[test]
fn empty_tokens_are_rejected() {
    let reg = registry(vec![("give", vec![])]);
    let err = Matcher::resolve::<&str>(&reg, &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyInput));
}

#[test]
fn too_few_tokens() {
    let reg = registry(vec![(
        "give",
        vec![ParamKind::string("item"), ParamKind::integer("n")],
    )]);
    let err = resolve_line(&reg, "give sword").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::NoViableOverload { consumed: 2, .. }
    ));
}

#[test]
fn leftover_tokens() {
    let reg = registry(vec![("give", vec![ParamKind::integer("n")])]);
    let err = resolve_line(&reg, "give 5 6").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoViableOverload { .. }));
}

#[test]
fn unterminated_array_has_no_viable_overload() {
    let reg = registry(vec![(
        "sum",
        vec![ParamKind::array("end", ParamKind::integer("n"))],
    )]);
    let err = resolve_line(&reg, "sum 1 2 3").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoViableOverload { .. }));
}

// =============================================================================
// Successful Resolution
// =============================================================================

#[test]
fn keyword_only_command() {
    let reg = registry(vec![("look", vec![])]);
    let res = Matcher::resolve(&reg, &["look"]).unwrap();
    assert!(res.args.is_empty());
    assert!(resolve_line(&reg, "look around").is_err());
}

#[test]
fn exact_length_match_converts_arguments() {
    let reg = registry(vec![(
        "give",
        vec![ParamKind::string("item"), ParamKind::integer("n")],
    )]);
    let res = Matcher::resolve(&reg, &["give", "sword", "5"]).unwrap();
    assert_eq!(res.args, vec![Value::from("sword"), Value::Int(5)]);
}

#[test]
fn overloads_narrow_by_arity() {
    let reg = registry(vec![
        ("give", vec![ParamKind::integer("amount")]),
        (
            "give",
            vec![ParamKind::string("item"), ParamKind::integer("amount")],
        ),
    ]);
    assert_eq!(resolve_line(&reg, "give 5").unwrap(), "give <amount: int>");
    assert_eq!(
        resolve_line(&reg, "give sword 5").unwrap(),
        "give <item: str> <amount: int>"
    );
}

#[test]
fn switches_route_between_overloads() {
    let reg = registry(vec![
        (
            "scoreboard",
            vec![
                ParamKind::switch("objectives"),
                ParamKind::switch("add"),
                ParamKind::string("name"),
            ],
        ),
        (
            "scoreboard",
            vec![
                ParamKind::switch("players"),
                ParamKind::switch("add"),
                ParamKind::string("player"),
                ParamKind::integer("points"),
            ],
        ),
    ]);
    assert_eq!(
        resolve_line(&reg, "scoreboard objectives add kills").unwrap(),
        "scoreboard objectives add <name: str>"
    );
    assert_eq!(
        resolve_line(&reg, "scoreboard players add steve 3").unwrap(),
        "scoreboard players add <player: str> <points: int>"
    );
    assert!(resolve_line(&reg, "scoreboard teams add red").is_err());
}

#[test]
fn array_followed_by_parameter() {
    let reg = registry(vec![(
        "tag",
        vec![
            ParamKind::array("to", ParamKind::string("tag")),
            ParamKind::string("target"),
        ],
    )]);
    let res = Matcher::resolve(&reg, &["tag", "red", "fast", "to", "steve"]).unwrap();
    assert_eq!(res.args[0], Value::from(vec!["red", "fast"]));
    assert_eq!(res.args[1], Value::from("steve"));
}

#[test]
fn resolution_is_repeatable() {
    let reg = registry(vec![
        ("tp", vec![ParamKind::switch("home")]),
        ("tp", vec![ParamKind::string("place")]),
    ]);
    let first = resolve_line(&reg, "tp home").unwrap();
    let second = resolve_line(&reg, "tp home").unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Priority and Ambiguity
// =============================================================================

#[test]
fn switch_beats_string() {
    let reg = registry(vec![
        ("tp", vec![ParamKind::string("place")]),
        ("tp", vec![ParamKind::switch("home")]),
    ]);
    assert_eq!(resolve_line(&reg, "tp home").unwrap(), "tp home");
    assert_eq!(resolve_line(&reg, "tp spawn").unwrap(), "tp <place: str>");
}

#[test]
fn integer_beats_float_beats_string() {
    let reg = registry(vec![
        ("set", vec![ParamKind::string("s")]),
        ("set", vec![ParamKind::float("f")]),
        ("set", vec![ParamKind::integer("i")]),
    ]);
    assert_eq!(resolve_line(&reg, "set 5").unwrap(), "set <i: int>");
    assert_eq!(resolve_line(&reg, "set 5.5").unwrap(), "set <f: float>");
    assert_eq!(resolve_line(&reg, "set five").unwrap(), "set <s: str>");
}

#[test]
fn first_difference_decides() {
    let reg = registry(vec![
        ("m", vec![ParamKind::string("a"), ParamKind::integer("b")]),
        ("m", vec![ParamKind::integer("a"), ParamKind::string("b")]),
    ]);
    assert_eq!(resolve_line(&reg, "m 1 2").unwrap(), "m <a: int> <b: str>");
}

#[test]
fn identical_signatures_are_ambiguous() {
    let reg = registry(vec![
        ("say", vec![ParamKind::string("a")]),
        ("say", vec![ParamKind::string("b")]),
    ]);
    let err = resolve_line(&reg, "say hi").unwrap_err();
    match err.kind {
        ErrorKind::AmbiguousCommand { keyword, signatures } => {
            assert_eq!(keyword, "say");
            assert_eq!(signatures, vec!["say <a: str>", "say <b: str>"]);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn compare_signatures_by_first_difference() {
    use std::cmp::Ordering;
    let a = [ParamKind::switch("x"), ParamKind::string("s")];
    let b = [ParamKind::switch("x"), ParamKind::integer("i")];
    assert_eq!(Matcher::compare_signatures(&a, &b), Ordering::Less);
    assert_eq!(Matcher::compare_signatures(&b, &a), Ordering::Greater);
    assert_eq!(Matcher::compare_signatures(&a, &a), Ordering::Equal);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn any_word_resolves_to_string_overload(word in "[a-z]{1,8}") {
        let reg = registry(vec![("say", vec![ParamKind::string("text")])]);
        let res = Matcher::resolve(&reg, &["say", word.as_str()]).unwrap();
        prop_assert_eq!(res.args, vec![Value::from(word.as_str())]);
    }

    #[test]
    fn digit_tokens_prefer_integer(n in 0u32..1_000_000) {
        let reg = registry(vec![
            ("set", vec![ParamKind::string("s")]),
            ("set", vec![ParamKind::integer("i")]),
        ]);
        let token = n.to_string();
        let res = Matcher::resolve(&reg, &["set", token.as_str()]).unwrap();
        prop_assert_eq!(res.args, vec![Value::Int(i64::from(n))]);
    }

    #[test]
    fn array_collects_every_element(items in prop::collection::vec(0i64..1000, 0..20)) {
        let reg = registry(vec![("sum", vec![ParamKind::array("end", ParamKind::integer("n"))])]);
        let mut tokens = vec!["sum".to_string()];
        tokens.extend(items.iter().map(ToString::to_string));
        tokens.push("end".to_string());
        let res = Matcher::resolve(&reg, &tokens).unwrap();
        prop_assert_eq!(res.args, vec![Value::from(items)]);
    }
}
