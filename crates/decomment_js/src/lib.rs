//! decomment_js: Comment-stripping state machine for JavaScript source.
//!
//! Removes `//` and `/* */` comments while copying every other character
//! through untouched. Interior newlines of removed block comments are kept,
//! so line numbers in the output match the input. Strings, template literals
//! (including `${...}` expressions at any nesting depth), and regex literals
//! are immune regions; whether a `/` opens a regex or is a division operator
//! is decided by the last-significant-token heuristic.

mod context;
mod machine;

pub use machine::strip;
