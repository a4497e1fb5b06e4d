//! Last-significant-token tracking for regex-literal detection.
//!
//! A `/` in normal code is ambiguous: it can open a regex literal, start a
//! comment, or be a division operator. Comments are settled by one character
//! of lookahead; regex vs. division is settled by the token that precedes
//! the slash. The tracker keeps just that one token: the most recent
//! identifier run or single punctuation character seen outside strings,
//! comments, and regexes.

use unicode_xid::UnicodeXID;

/// Keywords that may be directly followed by a regex literal.
const REGEX_KEYWORDS: &[&str] = &[
    "return",
    "throw",
    "new",
    "typeof",
    "void",
    "delete",
    "in",
    "of",
    "instanceof",
];

/// The most recent significant token, as far as slash disambiguation needs.
#[derive(Debug, Default)]
pub struct TokenContext {
    last: String,
}

impl TokenContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a character consumed in normal code. Identifier characters
    /// extend the current run; any other non-whitespace character replaces
    /// the token with itself.
    pub fn observe(&mut self, ch: char) {
        if ch.is_whitespace() {
            return;
        }
        if !is_identifier_part(ch) || !self.last.chars().last().is_some_and(is_identifier_part) {
            self.last.clear();
        }
        self.last.push(ch);
    }

    /// Record the delimiter that just closed a string, template, or regex.
    pub fn close_with(&mut self, delimiter: char) {
        self.last.clear();
        self.last.push(delimiter);
    }

    /// Whether a `/` seen now opens a regex literal rather than a division.
    ///
    /// True after the regex-prefix keywords, after punctuation that cannot
    /// end an expression, and at start of input. This is the documented
    /// token-class heuristic, not a grammar: e.g. after the closing
    /// parenthesis of a call used as a value, `/` is really division but
    /// the table cannot know that.
    pub fn allows_regex(&self) -> bool {
        if self.last.is_empty() {
            return true;
        }
        if REGEX_KEYWORDS.contains(&self.last.as_str()) {
            return true;
        }
        let mut chars = self.last.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => is_regex_punctuation(ch),
            _ => false,
        }
    }
}

/// Check if a character can be part of an identifier.
fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && UnicodeXID::is_xid_continue(ch))
}

/// Punctuation after which a `/` must be the start of a regex literal.
fn is_regex_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '=' | '('
            | '['
            | '{'
            | ':'
            | ';'
            | ','
            | '!'
            | '&'
            | '|'
            | '?'
            | '+'
            | '-'
            | '*'
            | '%'
            | '^'
            | '~'
            | '<'
            | '>'
    )
}
