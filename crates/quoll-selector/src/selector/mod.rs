//! Parsed selector values and the host matching seam.
//!
//! A [`Selector`] is the immutable result of tokenizing one simple selector:
//! the trimmed source text, the ordered token sequence, and the set of DOM
//! attribute names the selector's evaluation would read. Selectors are
//! constructed only by the [`SelectorRegistry`](crate::SelectorRegistry),
//! which guarantees at most one construction per distinct source string.
//!
//! Evaluation itself is not implemented here: [`Selector::matches`] passes
//! the source text through to a host-provided [`MatchesSelector`] capability
//! and returns whatever the host returns.

use core::fmt;
use std::collections::HashSet;

use crate::error::ParseError;
use crate::tokenizer::{Token, tokenize};

/// Host-provided matching capability.
///
/// The engine core makes no assumptions about the host's algorithm beyond it
/// accepting the same selector text grammar; the result is an opaque boolean.
pub trait MatchesSelector {
    /// Evaluate the given selector text against this element.
    fn matches_selector(&self, selector_text: &str) -> bool;
}

/// An immutable, cached simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// The trimmed original text (the cache key).
    source: String,
    /// Tokens in left-to-right source order, never reordered.
    tokens: Vec<Token>,
    /// Distinct attribute names the selector depends on.
    dependent_attributes: HashSet<String>,
}

impl Selector {
    /// Tokenize the (already trimmed) source and assemble the selector.
    ///
    /// Construction is registry-only so the at-most-once lifecycle cannot be
    /// bypassed.
    pub(crate) fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source)?;
        let dependent_attributes = dependent_attributes(&tokens);
        Ok(Self {
            source: source.to_string(),
            tokens,
            dependent_attributes,
        })
    }

    /// The trimmed source text this selector was built from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The token sequence, in left-to-right source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The distinct DOM attribute names this selector's evaluation reads.
    ///
    /// Membership only; the set has no defined iteration order.
    #[must_use]
    pub fn dependent_attributes(&self) -> &HashSet<String> {
        &self.dependent_attributes
    }

    /// Evaluate this selector against an element via the host capability.
    ///
    /// Pure pass-through: the host predicate is invoked with this selector's
    /// own source text and its verdict is returned untouched.
    #[must_use]
    pub fn matches<E: MatchesSelector + ?Sized>(&self, element: &E) -> bool {
        element.matches_selector(&self.source)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Derive the attribute dependency set of a finished token sequence.
///
/// Single pass, total, deterministic: each token contributes its
/// [`attribute_name`](Token::attribute_name) when it has one.
#[must_use]
pub fn dependent_attributes(tokens: &[Token]) -> HashSet<String> {
    let mut attributes = HashSet::new();
    for token in tokens {
        if let Some(name) = token.attribute_name() {
            let _ = attributes.insert(name.to_string());
        }
    }
    attributes
}
