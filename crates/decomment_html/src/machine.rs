//! The HTML comment-stripping machine.
//!
//! Two persistent states (normal text and `<!-- -->` comment); tags and
//! attributes are handled inline with lookahead. Embedded `<script>` and
//! `<style>` elements are located with case-folded comparisons, their
//! opening tags scanned quote-aware to the closing `>`, and their bodies
//! delegated to the JavaScript/CSS machines.

use decomment_core::Cursor;

/// The construct the scan position is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Markup and text content.
    Normal,
    /// Inside a `<!-- -->` comment (dropped, newlines kept).
    Comment,
}

/// Whether the scan position is inside a tag, and inside which quote.
///
/// Maintained forward, one character at a time, so deciding whether a
/// `<!--` is a real comment or literal text in an attribute value needs no
/// backward scan and no lookback bound.
#[derive(Debug, Default)]
struct TagContext {
    in_tag: bool,
    quote: Option<char>,
}

impl TagContext {
    fn observe(&mut self, ch: char) {
        if let Some(quote) = self.quote {
            if ch == quote {
                self.quote = None;
            }
        } else {
            match ch {
                '<' => self.in_tag = true,
                '>' => self.in_tag = false,
                '"' | '\'' if self.in_tag => self.quote = Some(ch),
                _ => {}
            }
        }
    }

    fn in_quoted_attribute(&self) -> bool {
        self.in_tag && self.quote.is_some()
    }
}

/// Strip `<!-- -->` comments from HTML source, and comments from the bodies
/// of embedded `<script>`/`<style>` elements.
///
/// Never fails: an unterminated comment is dropped up to end of input (its
/// newlines kept); a `<script>`/`<style>` with no closing tag is copied
/// through as ordinary text.
pub fn strip(source: &str) -> String {
    Machine::new(source).run()
}

struct Machine {
    cursor: Cursor,
    state: State,
    tag_context: TagContext,
}

impl Machine {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Normal,
            tag_context: TagContext::default(),
        }
    }

    fn run(mut self) -> String {
        while let Some(ch) = self.cursor.current() {
            match self.state {
                State::Normal => self.scan_normal(ch),
                State::Comment => self.scan_comment(ch),
            }
        }
        self.cursor.into_output()
    }

    fn scan_normal(&mut self, ch: char) {
        if self.cursor.starts_with_ignore_ascii_case("<script")
            && self.strip_embedded("script", decomment_js::strip)
        {
            return;
        }
        if self.cursor.starts_with_ignore_ascii_case("<style")
            && self.strip_embedded("style", decomment_css::strip)
        {
            return;
        }
        if self.cursor.starts_with("<!--") && !self.tag_context.in_quoted_attribute() {
            self.cursor.advance_by(4);
            self.state = State::Comment;
            return;
        }
        self.tag_context.observe(ch);
        self.cursor.emit();
    }

    fn scan_comment(&mut self, ch: char) {
        if self.cursor.starts_with("-->") {
            self.cursor.advance_by(3);
            self.state = State::Normal;
        } else if ch == '\n' {
            self.cursor.emit();
        } else {
            self.cursor.advance();
        }
    }

    /// Handle the embedded element whose opening tag starts at the cursor:
    /// emit the opening tag verbatim, emit the body stripped with
    /// `strip_body`, and leave the cursor at the closing tag, which then
    /// flows through the per-character path. Returns false when the element
    /// has no closing tag; the `<` is then handled as ordinary text.
    fn strip_embedded(&mut self, tag: &str, strip_body: fn(&str) -> String) -> bool {
        let open_start = self.cursor.pos();
        let Some(body_start) = self.opening_tag_end(open_start + tag.len() + 1) else {
            return false;
        };
        let closing = format!("</{tag}>");
        let Some(body_end) = self.cursor.find_ignore_ascii_case(&closing, body_start) else {
            return false;
        };
        let body = self.cursor.slice(body_start, body_end);
        tracing::debug!(tag, body_len = body.len(), "delegating embedded block");
        let cleaned = strip_body(&body);
        self.cursor.emit_range(open_start, body_start);
        self.cursor.emit_str(&cleaned);
        self.cursor.seek(body_end);
        true
    }

    /// Find the position just past the `>` that closes the opening tag.
    /// Quoted attribute values shield `>` (and backslash-preceded quotes do
    /// not toggle the quote). Returns None when the tag never closes.
    fn opening_tag_end(&self, mut pos: usize) -> Option<usize> {
        let mut quote: Option<char> = None;
        while let Some(ch) = self.cursor.get(pos) {
            let escaped = pos > 0 && self.cursor.get(pos - 1) == Some('\\');
            match quote {
                Some(open) => {
                    if ch == open && !escaped {
                        quote = None;
                    }
                }
                None => {
                    if (ch == '"' || ch == '\'') && !escaped {
                        quote = Some(ch);
                    } else if ch == '>' {
                        return Some(pos + 1);
                    }
                }
            }
            pos += 1;
        }
        None
    }
}
