//! Integration tests for combining selectors.

use kata_common::warning::was_warned;
use kata_selector::{Combinator, SelectorError, Selectors};

#[test]
fn test_combine_next_sibling() {
    let left = Selectors::element("div").and_then(|s| s.id("main")).unwrap();
    let right = Selectors::element("table").and_then(|s| s.id("data")).unwrap();

    let combined = Selectors::combine(&left, "+", &right);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_descendant_keeps_token_between_spaces() {
    let left = Selectors::element("ul").unwrap();
    let right = Selectors::element("li").unwrap();

    let combined = Selectors::combine(&left, " ", &right);
    assert_eq!(combined.stringify(), "ul   li");
}

#[test]
fn test_combine_results_are_independent() {
    let a = Selectors::element("a").unwrap();
    let b = Selectors::element("b").unwrap();

    let first = Selectors::combine(&a, ">", &b);
    let second = Selectors::combine(&b, "~", &a);

    assert_eq!(first.stringify(), "a > b");
    assert_eq!(second.stringify(), "b ~ a");
}

#[test]
fn test_combine_nests() {
    let nav = Selectors::element("nav").unwrap();
    let list = Selectors::element("ul").and_then(|s| s.class("menu")).unwrap();
    let item = Selectors::element("li").and_then(|s| s.pseudo_class("hover")).unwrap();

    let inner = Selectors::combine(&nav, ">", &list);
    let outer = Selectors::combine(&inner, ">", &item);
    assert_eq!(outer.stringify(), "nav > ul.menu > li:hover");
    assert_eq!(outer.to_string(), outer.as_str());
}

#[test]
fn test_combine_passes_unknown_token_through() {
    let left = Selectors::class("a").unwrap();
    let right = Selectors::class("b").unwrap();

    let combined = Selectors::combine(&left, "||", &right);
    assert_eq!(combined.stringify(), ".a || .b");
    assert!(was_warned(
        "Selector",
        "non-standard combinator \"||\" passed through unchanged"
    ));
}

#[test]
fn test_combine_with_typed_combinator() {
    let left = Selectors::element("h1").unwrap();
    let right = Selectors::element("p").unwrap();

    let combined = Selectors::combine_with(&left, Combinator::SubsequentSibling, &right);
    assert_eq!(combined.stringify(), "h1 ~ p");
    assert_eq!(
        Selectors::combine_with(&left, Combinator::Child, &right).stringify(),
        "h1 > p"
    );
}

#[test]
fn test_combinator_tokens() {
    for combinator in [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ] {
        assert_eq!(combinator.as_str().parse::<Combinator>(), Ok(combinator));
        assert_eq!(combinator.to_string(), combinator.as_str());
    }
}

#[test]
fn test_unknown_combinator_rejected_by_parse() {
    assert_eq!(
        "|".parse::<Combinator>(),
        Err(SelectorError::UnknownCombinator("|".to_string()))
    );
    assert!(" > ".parse::<Combinator>().is_err());
}

#[test]
fn test_stringify_combined_is_repeatable() {
    let left = Selectors::id("a").unwrap();
    let right = Selectors::id("b").unwrap();
    let combined = Selectors::combine(&left, "+", &right);
    assert_eq!(combined.stringify(), combined.stringify());
}
