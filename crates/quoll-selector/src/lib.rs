//! Simple-selector tokenizer, attribute dependency analysis, and selector
//! cache.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Tokenizer** ([Selectors Level 3 § 6](https://www.w3.org/TR/selectors-3/#simple-selectors))
//!   - Tag, id, class, and attribute clauses with the six attribute
//!     operators
//!   - CSS identifier grammar including escape sequences and non-ASCII
//!     code points ([CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#characters))
//!   - One-level `:not(...)` negation wrapping
//!     ([§ 6.6.7](https://www.w3.org/TR/selectors-3/#negation))
//!
//! - **Attribute dependency analysis**
//!   - The set of DOM attribute names a selector's evaluation would read,
//!     derived statically from its tokens
//!
//! - **Selector registry**
//!   - Get-or-create memoization keyed on trimmed source text, at most one
//!     construction per distinct selector string
//!
//! # Not implemented
//!
//! - Combinators (descendant, child, sibling) and selector grouping
//! - Pseudo-classes other than one-level `:not()`, and pseudo-elements
//! - Matching itself: evaluation is delegated to a host capability behind
//!   the [`MatchesSelector`] trait

/// Error types for scanning and construction.
pub mod error;
/// Memoizing selector registry.
pub mod registry;
/// Parsed selector values and the host matching seam.
pub mod selector;
/// Selector tokenizer per [Selectors Level 3 § 6](https://www.w3.org/TR/selectors-3/#simple-selectors).
pub mod tokenizer;

// Re-exports for convenience
pub use error::{ConstructionError, ParseError};
pub use registry::SelectorRegistry;
pub use selector::{MatchesSelector, Selector, dependent_attributes};
pub use tokenizer::{AttributeSelector, SelectorTokenizer, Token, TokenKind, tokenize};
