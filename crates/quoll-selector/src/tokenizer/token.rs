//! Selector token types.
//!
//! A tokenized simple selector is an ordered sequence of [`Token`]s, one per
//! tag/id/class/attribute clause. Concatenating the lexemes of a sequence, in
//! order, reconstructs the exact source text the sequence was scanned from.

use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
///
/// The payload of an attribute clause: the attribute name, and the comparison
/// the clause performs on its value. All captured text is kept exactly as
/// written — a quoted value keeps its quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttributeSelector {
    /// `[att]` — "Represents an element with the att attribute, whatever the
    /// value of the attribute."
    Exists(String),

    /// `[att=val]` — "Represents an element with the att attribute whose
    /// value is exactly 'val'."
    Equals(String, String),

    /// `[att~=val]` — "Represents an element with the att attribute whose
    /// value is a whitespace-separated list of words, one of which is exactly
    /// 'val'."
    Includes(String, String),

    /// `[att|=val]` — "Represents an element with the att attribute, its
    /// value either being exactly 'val' or beginning with 'val' immediately
    /// followed by '-'."
    DashMatch(String, String),

    /// [§ 6.3.2](https://www.w3.org/TR/selectors-3/#attribute-substrings)
    /// `[att^=val]` — "Represents an element with the att attribute whose
    /// value begins with the prefix 'val'."
    PrefixMatch(String, String),

    /// [§ 6.3.2](https://www.w3.org/TR/selectors-3/#attribute-substrings)
    /// `[att$=val]` — "Represents an element with the att attribute whose
    /// value ends with the suffix 'val'."
    SuffixMatch(String, String),

    /// [§ 6.3.2](https://www.w3.org/TR/selectors-3/#attribute-substrings)
    /// `[att*=val]` — "Represents an element with the att attribute whose
    /// value contains at least one instance of the substring 'val'."
    SubstringMatch(String, String),
}

impl AttributeSelector {
    /// The bracketed attribute name, exactly as written.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Exists(name)
            | Self::Equals(name, _)
            | Self::Includes(name, _)
            | Self::DashMatch(name, _)
            | Self::PrefixMatch(name, _)
            | Self::SuffixMatch(name, _)
            | Self::SubstringMatch(name, _) => name,
        }
    }

    /// The operator literal, or `None` for a presence-only clause.
    #[must_use]
    pub const fn operator(&self) -> Option<&'static str> {
        match self {
            Self::Exists(_) => None,
            Self::Equals(..) => Some("="),
            Self::Includes(..) => Some("~="),
            Self::DashMatch(..) => Some("|="),
            Self::PrefixMatch(..) => Some("^="),
            Self::SuffixMatch(..) => Some("$="),
            Self::SubstringMatch(..) => Some("*="),
        }
    }

    /// The comparison value exactly as written (quotes retained), or `None`
    /// for a presence-only clause.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Exists(_) => None,
            Self::Equals(_, value)
            | Self::Includes(_, value)
            | Self::DashMatch(_, value)
            | Self::PrefixMatch(_, value)
            | Self::SuffixMatch(_, value)
            | Self::SubstringMatch(_, value) => Some(value),
        }
    }
}

/// The closed set of simple selector clause kinds.
///
/// Every site that inspects a token's kind matches exhaustively, so adding a
/// kind is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
pub enum TokenKind {
    /// [§ 6.1 Type selector](https://www.w3.org/TR/selectors-3/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `-moz-box`
    Tag,

    /// [§ 6.5 ID selectors](https://www.w3.org/TR/selectors-3/#id-selectors)
    /// "An ID selector contains a 'number sign' (#, U+0023) immediately
    /// followed by the ID value."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.4 Class selectors](https://www.w3.org/TR/selectors-3/#class-html)
    /// "CSS offers the '.' notation as an alternative to the '~=' notation
    /// when representing the class attribute."
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
    /// An attribute clause with its captured payload.
    ///
    /// Examples: `[href]`, `[data-x=1]`, `[href^='http']`
    Attribute(AttributeSelector),
}

/// One scanned clause of a simple selector.
///
/// Invariant: `lexeme` is the exact substring consumed from the input
/// (including any `:not(...)` wrapper and its closing parenthesis), and its
/// length in characters equals the number of input characters the scan
/// position advanced by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Which grammar rule produced this token.
    pub kind: TokenKind,
    /// The exact consumed substring.
    pub lexeme: String,
    /// [§ 6.6.7 The negation pseudo-class](https://www.w3.org/TR/selectors-3/#negation)
    /// True iff the clause was written wrapped in `:not( … )`.
    pub negated: bool,
}

impl Token {
    /// The DOM attribute this clause reads when evaluated, if any.
    ///
    /// Id clauses read `id`, class clauses read `class`, attribute clauses
    /// read their bracketed name; a tag test reads no attribute at all.
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Tag => None,
            TokenKind::Id => Some("id"),
            TokenKind::Class => Some("class"),
            TokenKind::Attribute(attribute) => Some(attribute.name()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
