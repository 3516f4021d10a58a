//! Integration tests for the selector registry and cached selectors.

use std::collections::HashSet;
use std::sync::Arc;

use quoll_selector::{MatchesSelector, ParseError, SelectorRegistry, TokenKind};

/// Helper to build an expected attribute-name set.
fn name_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Host stub that matches exactly one selector string.
struct StubElement {
    matching: &'static str,
}

impl MatchesSelector for StubElement {
    fn matches_selector(&self, selector_text: &str) -> bool {
        selector_text == self.matching
    }
}

#[test]
fn test_get_is_idempotent() {
    let mut registry = SelectorRegistry::new();
    let first = registry.get(".foo").unwrap();
    let second = registry.get(".foo").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_trim_invariance() {
    let mut registry = SelectorRegistry::new();
    let padded = registry.get("  .foo ").unwrap();
    let plain = registry.get(".foo").unwrap();
    assert!(Arc::ptr_eq(&padded, &plain));
    assert_eq!(padded.to_string(), ".foo");
    assert_eq!(plain.to_string(), ".foo");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_dependent_attributes() {
    let mut registry = SelectorRegistry::new();

    let selector = registry.get("#id.cls[data-x=1]").unwrap();
    assert_eq!(
        *selector.dependent_attributes(),
        name_set(&["id", "class", "data-x"])
    );

    let tag_only = registry.get("div").unwrap();
    assert!(tag_only.dependent_attributes().is_empty());
}

#[test]
fn test_dependent_attributes_deduplicated() {
    let mut registry = SelectorRegistry::new();
    let selector = registry.get(".a.b:not(.c)").unwrap();
    assert_eq!(*selector.dependent_attributes(), name_set(&["class"]));
}

#[test]
fn test_negation_round_trip() {
    let mut registry = SelectorRegistry::new();
    let selector = registry.get(":not(.hidden)").unwrap();

    assert_eq!(selector.tokens().len(), 1);
    let token = &selector.tokens()[0];
    assert!(matches!(token.kind, TokenKind::Class));
    assert!(token.negated);
    assert_eq!(token.lexeme, ":not(.hidden)");
    assert_eq!(token.attribute_name(), Some("class"));
    assert_eq!(*selector.dependent_attributes(), name_set(&["class"]));
}

#[test]
fn test_token_order_reconstructs_source() {
    let mut registry = SelectorRegistry::new();
    let selector = registry.get("div#id.cls[href^='http']").unwrap();
    let reassembled: String = selector
        .tokens()
        .iter()
        .map(|token| token.lexeme.as_str())
        .collect();
    assert_eq!(reassembled, selector.source());
}

#[test]
fn test_matches_passes_trimmed_source_to_host() {
    let mut registry = SelectorRegistry::new();
    let selector = registry.get("  .foo ").unwrap();

    assert!(selector.matches(&StubElement { matching: ".foo" }));
    assert!(!selector.matches(&StubElement { matching: "div" }));
}

#[test]
fn test_failure_is_not_cached() {
    let mut registry = SelectorRegistry::new();

    let error = registry.get(":not(.hidden").unwrap_err();
    assert!(matches!(
        error.cause,
        ParseError::UnterminatedNegation { .. }
    ));
    assert!(registry.is_empty());
    assert!(!registry.contains(":not(.hidden"));

    // An unrelated valid selector still succeeds independently.
    let selector = registry.get(".visible").unwrap();
    assert_eq!(selector.to_string(), ".visible");
    assert_eq!(registry.len(), 1);

    // Retrying the malformed text re-runs tokenization identically.
    let retried = registry.get(":not(.hidden").unwrap_err();
    assert_eq!(retried, error);
}

#[test]
fn test_construction_error_names_the_source() {
    let mut registry = SelectorRegistry::new();
    let error = registry.get("  :not(.hidden ").unwrap_err();

    assert_eq!(error.source_text, ":not(.hidden");
    let message = error.to_string();
    assert!(message.contains(":not(.hidden"));
    assert!(message.contains("unterminated"));
}

#[test]
fn test_unrecognized_syntax_surfaces_through_get() {
    let mut registry = SelectorRegistry::new();
    let error = registry.get("123abc").unwrap_err();
    assert!(matches!(
        error.cause,
        ParseError::UnrecognizedSyntax { ref remainder } if remainder == "123abc"
    ));
}

#[test]
fn test_registry_inspection() {
    let mut registry = SelectorRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.contains(".foo"));

    let _ = registry.get(".foo").unwrap();
    let _ = registry.get("#bar").unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(" .foo "));
    assert!(registry.contains("#bar"));
}
