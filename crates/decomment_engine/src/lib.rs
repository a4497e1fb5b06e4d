//! decomment_engine: The public comment-stripping API.
//!
//! Routes text to the HTML, CSS, or JavaScript machine, either by an
//! explicit [`Mode`] or by sniffing the content when the mode is `auto`.
//! Every operation is a pure, total function: the only error in the whole
//! surface is an unrecognized mode string; arbitrary (even malformed)
//! source text never fails, it degrades by scanning to end of input in
//! whatever state the machine is in.
//!
//! ```
//! let cleaned = decomment_engine::strip("const x = 1; // note\n", "js")?;
//! assert_eq!(cleaned, "const x = 1; \n");
//! # Ok::<(), decomment_engine::InvalidModeError>(())
//! ```

mod detect;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The grammar used to strip comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// HTML: `<!-- -->` comments, plus embedded `<script>`/`<style>` bodies.
    Html,
    /// CSS: `/* */` comments.
    Css,
    /// JavaScript: `//` and `/* */` comments.
    JavaScript,
    /// Pick a grammar by sniffing the content.
    Auto,
}

/// The mode string named no known grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid mode '{0}': use \"html\", \"css\", \"javascript\", or \"auto\"")]
pub struct InvalidModeError(pub String);

impl FromStr for Mode {
    type Err = InvalidModeError;

    /// Parse a mode string, case-insensitively. `js` is accepted as an
    /// alias for `javascript`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Mode::Html),
            "css" => Ok(Mode::Css),
            "javascript" | "js" => Ok(Mode::JavaScript),
            "auto" => Ok(Mode::Auto),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Html => "html",
            Mode::Css => "css",
            Mode::JavaScript => "javascript",
            Mode::Auto => "auto",
        })
    }
}

/// Strip comments from `text` according to a mode string.
///
/// This is the uniform entry point; the per-grammar functions below skip
/// the mode parsing. Fails only on an unrecognized mode string.
pub fn strip(text: &str, mode: &str) -> Result<String, InvalidModeError> {
    Ok(strip_with(text, mode.parse()?))
}

/// Strip comments from `text` with an already-parsed [`Mode`].
pub fn strip_with(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Html => strip_html(text),
        Mode::Css => strip_css(text),
        Mode::JavaScript => strip_javascript(text),
        Mode::Auto => strip_auto(text),
    }
}

/// Strip `<!-- -->` comments from HTML, delegating embedded
/// `<script>`/`<style>` bodies to the JavaScript/CSS machines.
pub fn strip_html(text: &str) -> String {
    decomment_html::strip(text)
}

/// Strip `/* */` comments from CSS.
pub fn strip_css(text: &str) -> String {
    decomment_css::strip(text)
}

/// Strip `//` and `/* */` comments from JavaScript.
pub fn strip_javascript(text: &str) -> String {
    decomment_js::strip(text)
}

/// Sniff the grammar of `text`, then strip with the detected machine.
pub fn strip_auto(text: &str) -> String {
    let mode = detect::sniff(text);
    tracing::debug!(%mode, "auto-detected grammar");
    strip_with(text, mode)
}
