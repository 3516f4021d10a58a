//! Simple selector tokenizer.
//!
//! Scans a selector left-to-right into a sequence of [`Token`]s. Four
//! anchored grammar rules are tried at each position in a fixed priority
//! order — tag, id, class, attribute — each first in its `:not(...)`-wrapped
//! form and then plain. The first rule that consumes a non-empty prefix wins;
//! there is no backtracking across token boundaries, so a failure at one
//! position is never retried with a different token at an earlier one.

use crate::error::ParseError;

use super::token::{AttributeSelector, Token, TokenKind};

/// [§ 6.6.7 The negation pseudo-class](https://www.w3.org/TR/selectors-3/#negation)
///
/// The literal prefix that opens a negated clause. Recognition is
/// case-sensitive with no interior whitespace.
const NEGATION_PREFIX: [char; 5] = [':', 'n', 'o', 't', '('];

/// A grammar rule anchored at the tokenizer's current position.
///
/// On a match the rule consumes its lexeme and returns the produced kind
/// (with any captured payload); on a miss the position may be left anywhere
/// and the caller restores it.
type GrammarRule = fn(&mut SelectorTokenizer) -> Option<TokenKind>;

/// Tokenizer for a single simple selector.
///
/// Mirrors the scan-buffer shape used by CSS tokenizers: the input is held
/// as a `Vec<char>` with a cursor, and every lexeme is an exact slice of it.
pub struct SelectorTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
}

impl SelectorTokenizer {
    /// The four grammar rules in their fixed priority order.
    ///
    /// The order is preserved literally even though the rules start from
    /// disjoint first characters.
    const GRAMMAR: [GrammarRule; 4] = [
        Self::match_tag,
        Self::match_id,
        Self::match_class,
        Self::match_attribute,
    ];

    /// Create a new tokenizer over the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Consume the entire input into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnterminatedNegation`] when a `:not(` clause
    /// matches its inner grammar but is not followed by `)`, and
    /// [`ParseError::UnrecognizedSyntax`] when no grammar rule matches a
    /// non-empty remainder. Either failure aborts the whole run; no partial
    /// token sequence is kept.
    pub fn run(&mut self) -> Result<(), ParseError> {
        while self.position < self.input.len() {
            match self.consume_token() {
                Ok(token) => self.tokens.push(token),
                Err(error) => {
                    self.tokens.clear();
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Produce the next token from the current position.
    fn consume_token(&mut self) -> Result<Token, ParseError> {
        for rule in Self::GRAMMAR {
            if let Some(token) = self.attempt(rule)? {
                return Ok(token);
            }
        }
        Err(ParseError::UnrecognizedSyntax {
            remainder: self.slice(self.position, self.input.len()),
        })
    }

    /// Attempt one grammar rule, negated form first, plain form second.
    ///
    /// [§ 6.6.7](https://www.w3.org/TR/selectors-3/#negation)
    /// "The negation pseudo-class, :not(X), is a functional notation taking
    /// a simple selector (excluding the negation pseudo-class itself) as an
    /// argument."
    ///
    /// A `:not(` prefix whose inner match succeeds but lacks the closing
    /// parenthesis is fatal; a prefix whose inner match fails falls through
    /// to the plain form.
    fn attempt(&mut self, rule: GrammarRule) -> Result<Option<Token>, ParseError> {
        let start = self.position;

        if self.at_negation_prefix() {
            self.position += NEGATION_PREFIX.len();
            if let Some(kind) = rule(self) {
                if self.peek() == Some(')') {
                    let _ = self.consume();
                    return Ok(Some(Token {
                        kind,
                        lexeme: self.slice(start, self.position),
                        negated: true,
                    }));
                }
                return Err(ParseError::UnterminatedNegation {
                    remainder: self.slice(start, self.input.len()),
                });
            }
            self.position = start;
        }

        if let Some(kind) = rule(self) {
            return Ok(Some(Token {
                kind,
                lexeme: self.slice(start, self.position),
                negated: false,
            }));
        }
        self.position = start;
        Ok(None)
    }

    /// [§ 6.1 Type selector](https://www.w3.org/TR/selectors-3/#type-selectors)
    ///
    /// A tag clause is a bare identifier.
    fn match_tag(&mut self) -> Option<TokenKind> {
        self.match_identifier().then_some(TokenKind::Tag)
    }

    /// [§ 6.5 ID selectors](https://www.w3.org/TR/selectors-3/#id-selectors)
    ///
    /// "An ID selector contains a 'number sign' (#, U+0023) immediately
    /// followed by the ID value."
    fn match_id(&mut self) -> Option<TokenKind> {
        if self.peek() != Some('#') {
            return None;
        }
        let _ = self.consume();
        self.match_identifier().then_some(TokenKind::Id)
    }

    /// [§ 6.4 Class selectors](https://www.w3.org/TR/selectors-3/#class-html)
    ///
    /// A full stop (`.`) immediately followed by an identifier.
    fn match_class(&mut self) -> Option<TokenKind> {
        if self.peek() != Some('.') {
            return None;
        }
        let _ = self.consume();
        self.match_identifier().then_some(TokenKind::Class)
    }

    /// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
    ///
    /// `[` name `]`, or `[` name operator value `]` with one of the six
    /// operators. No whitespace is permitted anywhere inside the brackets.
    fn match_attribute(&mut self) -> Option<TokenKind> {
        if self.peek() != Some('[') {
            return None;
        }
        let _ = self.consume();

        let name_start = self.position;
        if !self.match_identifier() {
            return None;
        }
        let name = self.slice(name_start, self.position);

        // "=", or one of "~= |= ^= $= *="
        let operator = match self.peek() {
            Some(']') => {
                let _ = self.consume();
                return Some(TokenKind::Attribute(AttributeSelector::Exists(name)));
            }
            Some('=') => {
                let _ = self.consume();
                '='
            }
            Some(op @ ('~' | '|' | '^' | '$' | '*')) if self.peek_at(1) == Some('=') => {
                let _ = self.consume();
                let _ = self.consume();
                op
            }
            _ => return None,
        };

        let value_start = self.position;
        if !self.match_attribute_value() {
            return None;
        }
        let value = self.slice(value_start, self.position);

        if self.peek() != Some(']') {
            return None;
        }
        let _ = self.consume();

        let clause = match operator {
            '=' => AttributeSelector::Equals(name, value),
            '~' => AttributeSelector::Includes(name, value),
            '|' => AttributeSelector::DashMatch(name, value),
            '^' => AttributeSelector::PrefixMatch(name, value),
            '$' => AttributeSelector::SuffixMatch(name, value),
            '*' => AttributeSelector::SubstringMatch(name, value),
            _ => unreachable!(),
        };
        Some(TokenKind::Attribute(clause))
    }

    /// [CSS 2.1 § 4.1.3 Characters and case](https://www.w3.org/TR/CSS21/syndata.html#characters)
    ///
    /// "Identifiers... can contain only the characters [a-zA-Z0-9] and
    /// ISO 10646 characters U+00A0 and higher, plus the hyphen (-) and the
    /// underscore (_); they cannot start with a digit, two hyphens, or a
    /// hyphen followed by a digit."
    ///
    /// At most one leading hyphen, then a start character (letter,
    /// underscore, non-ASCII, or escape), then any number of continuation
    /// characters.
    fn match_identifier(&mut self) -> bool {
        let start = self.position;

        if self.peek() == Some('-') {
            let _ = self.consume();
        }

        match self.peek() {
            Some(c) if is_ident_start_char(c) => {
                let _ = self.consume();
            }
            Some('\\') => {
                if !self.match_escape() {
                    self.position = start;
                    return false;
                }
            }
            _ => {
                self.position = start;
                return false;
            }
        }

        self.consume_ident_continuation();
        true
    }

    /// Consume identifier continuation characters greedily.
    fn consume_ident_continuation(&mut self) {
        loop {
            match self.peek() {
                Some(c) if is_ident_char(c) => {
                    let _ = self.consume();
                }
                Some('\\') => {
                    if !self.match_escape() {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// An unquoted attribute value: one or more identifier continuation
    /// characters (digits are allowed in first position, unlike a full
    /// identifier), or a quoted string.
    fn match_attribute_value(&mut self) -> bool {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.match_string(quote),
            Some(c) if is_ident_char(c) => {
                let _ = self.consume();
                self.consume_ident_continuation();
                true
            }
            Some('\\') => {
                if !self.match_escape() {
                    return false;
                }
                self.consume_ident_continuation();
                true
            }
            _ => false,
        }
    }

    /// [CSS 2.1 § 4.3.7 Strings](https://www.w3.org/TR/CSS21/syndata.html#strings)
    ///
    /// "Strings can either be written with double quotes or with single
    /// quotes... A string cannot directly contain a newline."
    ///
    /// The body forbids raw newlines, backslashes, and the string's own quote
    /// character unless escaped; a backslash-escaped newline (including the
    /// `\r\n` pair) is allowed.
    fn match_string(&mut self, quote: char) -> bool {
        let start = self.position;
        let _ = self.consume(); // opening quote

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    let _ = self.consume();
                    return true;
                }
                Some('\\') => {
                    let _ = self.consume();
                    match self.peek() {
                        Some('\r') => {
                            let _ = self.consume();
                            if self.peek() == Some('\n') {
                                let _ = self.consume();
                            }
                        }
                        Some(_) => {
                            let _ = self.consume();
                        }
                        None => {
                            self.position = start;
                            return false;
                        }
                    }
                }
                Some(c) if is_newline(c) => {
                    self.position = start;
                    return false;
                }
                Some(_) => {
                    let _ = self.consume();
                }
                None => {
                    self.position = start;
                    return false;
                }
            }
        }
    }

    /// [CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#characters)
    ///
    /// A backslash followed by one to six hex digits and an optional single
    /// whitespace token (`\r\n` counts as one), or a backslash followed by
    /// any one character that is neither a newline nor a hex digit.
    fn match_escape(&mut self) -> bool {
        let start = self.position;
        if self.peek() != Some('\\') {
            return false;
        }
        let _ = self.consume();

        match self.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                let _ = self.consume();
                for _ in 0..5 {
                    match self.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            let _ = self.consume();
                        }
                        _ => break,
                    }
                }
                // one optional whitespace token terminates the escape
                if self.peek() == Some('\r') && self.peek_at(1) == Some('\n') {
                    let _ = self.consume();
                    let _ = self.consume();
                } else if self.peek().is_some_and(is_whitespace) {
                    let _ = self.consume();
                }
                true
            }
            Some(c) if !is_newline(c) => {
                let _ = self.consume();
                true
            }
            _ => {
                self.position = start;
                false
            }
        }
    }

    /// Whether the current position starts with the literal `:not(`.
    fn at_negation_prefix(&self) -> bool {
        self.input[self.position..].starts_with(&NEGATION_PREFIX)
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        if self.position < self.input.len() {
            let c = self.input[self.position];
            self.position += 1;
            Some(c)
        } else {
            None
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// The exact input substring between two positions.
    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }
}

/// Tokenize a simple selector in one call.
///
/// # Errors
///
/// Propagates the tokenizer's [`ParseError`]; see
/// [`SelectorTokenizer::run`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokenizer = SelectorTokenizer::new(input);
    tokenizer.run()?;
    Ok(tokenizer.into_tokens())
}

/// [CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#characters)
///
/// A character that can start an identifier: a letter, an underscore, or a
/// non-ASCII code point.
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#characters)
///
/// A character that can continue an identifier: a start character, a digit,
/// or a hyphen.
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

/// [CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#characters)
///
/// A newline code point (`\n`, `\r`, or form feed).
const fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0C')
}

/// A whitespace code point as consumed after a hex escape.
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}
