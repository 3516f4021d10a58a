//! Error types for selector scanning and construction.
//!
//! No error is ever recovered internally: a tokenizer failure aborts the
//! whole scan, and a construction failure aborts the registry `get` without
//! leaving an entry behind. Errors are deterministic — the same input always
//! produces the same error.

use thiserror::Error;

/// A fatal tokenizer failure. No partial token sequence survives either
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `:not(` clause matched its inner grammar but the closing
    /// parenthesis is missing.
    #[error("unterminated :not() clause at \"{remainder}\"")]
    UnterminatedNegation {
        /// The input from the start of the `:not(` clause onward, verbatim.
        remainder: String,
    },

    /// No grammar rule matches at the current scan position.
    #[error("unrecognized selector syntax at \"{remainder}\"")]
    UnrecognizedSyntax {
        /// The unconsumed input, verbatim, so the caller can see exactly
        /// where scanning stopped.
        remainder: String,
    },
}

/// A registry `get` failed because the selector text cannot be tokenized.
///
/// Carries the offending (trimmed) source text alongside the underlying
/// tokenizer error; nothing is cached for a failing source, so a later `get`
/// with the same text re-runs tokenization identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse selector \"{source_text}\": {cause}")]
pub struct ConstructionError {
    /// The trimmed selector text that failed to tokenize.
    pub source_text: String,
    /// The tokenizer failure that caused the construction to fail.
    #[source]
    pub cause: ParseError,
}
