//! Content sniffing for auto mode.
//!
//! Ordered heuristics over the raw text: markup markers win, then
//! CSS-shaped syntax, and JavaScript is the fallback for everything else.
//! The patterns are deliberately loose; sniffing picks the machine that is
//! most likely right, it does not validate the input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Mode;

static DOCTYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<!DOCTYPE").expect("pattern compiles"));

static SCRIPT_OR_STYLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(script|style)[^>]*>").expect("pattern compiles"));

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[a-zA-Z!][^>]*>").expect("pattern compiles"));

static CSS_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.#][\w-]+\s*\{").expect("pattern compiles"));

static CSS_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w-]+\s*:\s*[^;]+;").expect("pattern compiles"));

/// Pick the grammar for untagged text. Never returns [`Mode::Auto`].
pub fn sniff(text: &str) -> Mode {
    // A DOCTYPE or an embedded script/style element is definitely HTML.
    if DOCTYPE.is_match(text) || SCRIPT_OR_STYLE_TAG.is_match(text) {
        return Mode::Html;
    }
    // Anything tag-shaped is still most likely HTML.
    if HTML_TAG.is_match(text) {
        return Mode::Html;
    }
    // With tags ruled out, selector blocks, @media, or property
    // declarations read as a stylesheet.
    if CSS_SELECTOR.is_match(text) || text.contains("@media") || CSS_DECLARATION.is_match(text) {
        return Mode::Css;
    }
    Mode::JavaScript
}
