//! decomment_html: Comment-stripping state machine for HTML source.
//!
//! Removes `<!-- -->` comments and hands the bodies of `<script>` and
//! `<style>` elements to the JavaScript and CSS machines. Everything else
//! (tags, attributes, text content, casing, whitespace) is copied through
//! verbatim. A `<!--` inside a quoted attribute value is literal text, not
//! a comment; the machine tracks tag/quote context forward during the scan
//! to tell the two apart.

mod machine;

pub use machine::strip;
