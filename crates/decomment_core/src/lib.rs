//! decomment_core: Shared scanning primitives for the decomment lexers.
//!
//! Provides the [`Cursor`] type that every grammar machine drives: an
//! immutable view of the input text, the current scan position, and the
//! output buffer the surviving characters are copied into.

mod cursor;

pub use cursor::Cursor;
