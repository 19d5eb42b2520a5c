//! Integration tests for tokenizing, parsing, and normalization

use proptutor::{is_wff, normalize, parse, Formula, SyntaxTree};

fn formula(text: &str) -> Formula {
    text.parse().expect("formula should tokenize")
}

#[test]
fn test_parse_and_render_round_trip() {
    for text in [
        "p",
        "¬p",
        "¬¬p",
        "p∧q",
        "p∨q∨r",
        "(p∨q)∧r",
        "p→q→r",
        "(p→q)→r",
        "p↔q",
        "¬(p∧q)→¬p∨¬q",
    ] {
        let tree = parse(&formula(text)).unwrap_or_else(|| panic!("{} should parse", text));
        assert_eq!(tree.render().to_string(), text, "round trip of {}", text);
    }
}

#[test]
fn test_normalize_identifies_cosmetic_variants() {
    let plain = formula("p→q∧r");
    for variant in ["(p)→(q∧r)", "p→((q)∧r)", "((p→(q∧r)))"] {
        assert_ne!(formula(variant), plain, "{} differs on the surface", variant);
        assert_eq!(
            normalize(&formula(variant)).unwrap(),
            normalize(&plain).unwrap(),
            "{} normalizes to the same formula",
            variant
        );
    }
}

#[test]
fn test_normalize_distinguishes_structure() {
    // (p∧q)∧r and p∧(q∧r) are different trees and stay different
    assert_ne!(
        normalize(&formula("(p∧q)∧r")).unwrap(),
        normalize(&formula("p∧(q∧r)")).unwrap()
    );
}

#[test]
fn test_parse_failures_are_none() {
    for bad in ["", "∧", "p∧", "∧p", "(p", "p)", "pq", "p ∧ ∨ q", "¬", "()"] {
        let f = formula(bad);
        assert_eq!(parse(&f), None, "{:?} should not parse", bad);
        assert!(!is_wff(&f), "{:?} should not be a WFF", bad);
    }
}

#[test]
fn test_ascii_and_unicode_tokenize_identically() {
    assert_eq!(formula("~(p & q) -> (r | s) <-> t"), formula("¬(p∧q)→(r∨s)↔t"));
}

#[test]
fn test_wff_checker_agrees_with_parser() {
    for text in [
        "p", "p∧q", "p∧", "(p∨q", "¬¬¬x", "a→b→c→d", "p↔(q↔r)", "x)y(",
    ] {
        let f = formula(text);
        assert_eq!(is_wff(&f), parse(&f).is_some(), "disagreement on {:?}", text);
    }
}

#[test]
fn test_reparse_of_normalized_equals_original_parse() {
    for text in ["((p))∧(q→(r))", "¬((p∨q))", "(p↔(q→r))∨s"] {
        let original: SyntaxTree = parse(&formula(text)).unwrap();
        let normalized = normalize(&formula(text)).unwrap();
        assert_eq!(parse(&normalized), Some(original));
    }
}
