//! The CSS comment-stripping machine.
//!
//! Much simpler than the JavaScript machine: no line comments, no regex
//! ambiguity, no interpolation. The one CSS-specific construct is
//! `url(...)`, whose value may be bare or quoted; comment markers inside it
//! are never recognized. Quoted values share the string states with normal
//! code, so the enclosing state is kept on a stack the same way the
//! JavaScript machine does it.

use decomment_core::Cursor;

/// The construct the scan position is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ordinary CSS.
    Normal,
    /// Inside a single-quoted string.
    SingleQuote,
    /// Inside a double-quoted string.
    DoubleQuote,
    /// Inside `url(...)`, outside any quotes.
    Url,
    /// Inside a `/* */` comment (dropped, newlines kept).
    Comment,
}

/// Strip `/* */` comments from CSS source.
///
/// Never fails: an unterminated comment is dropped up to end of input (its
/// newlines kept), an unterminated string or `url(` is copied through.
pub fn strip(source: &str) -> String {
    Machine::new(source).run()
}

struct Machine {
    cursor: Cursor,
    state: State,
    enclosing: Vec<State>,
    escaped: bool,
}

impl Machine {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Normal,
            enclosing: Vec::new(),
            escaped: false,
        }
    }

    fn run(mut self) -> String {
        while let Some(ch) = self.cursor.current() {
            if self.escaped {
                self.cursor.emit();
                self.escaped = false;
                continue;
            }
            match self.state {
                State::Normal => self.scan_normal(ch),
                State::SingleQuote => self.scan_quoted(ch, '\''),
                State::DoubleQuote => self.scan_quoted(ch, '"'),
                State::Url => self.scan_url(ch),
                State::Comment => self.scan_comment(ch),
            }
        }
        self.cursor.into_output()
    }

    fn enter(&mut self, next: State) {
        self.enclosing.push(std::mem::replace(&mut self.state, next));
    }

    fn leave(&mut self) {
        self.state = self.enclosing.pop().unwrap_or(State::Normal);
    }

    fn scan_normal(&mut self, ch: char) {
        match ch {
            '/' if self.cursor.peek(1) == Some('*') => {
                self.cursor.advance_by(2);
                self.state = State::Comment;
            }
            '"' => {
                self.cursor.emit();
                self.enter(State::DoubleQuote);
            }
            '\'' => {
                self.cursor.emit();
                self.enter(State::SingleQuote);
            }
            // The functional notation is matched lowercase, as written in
            // stylesheets; `URL(` would pass through as ordinary characters.
            'u' if self.cursor.starts_with("url(") => {
                self.cursor.emit_str("url(");
                self.cursor.advance_by(4);
                self.state = State::Url;
            }
            '\\' => {
                self.escaped = true;
                self.cursor.emit();
            }
            _ => self.cursor.emit(),
        }
    }

    fn scan_quoted(&mut self, ch: char, quote: char) {
        if ch == '\\' {
            self.escaped = true;
            self.cursor.emit();
        } else if ch == quote {
            self.cursor.emit();
            self.leave();
        } else {
            self.cursor.emit();
        }
    }

    fn scan_url(&mut self, ch: char) {
        match ch {
            '"' => {
                self.cursor.emit();
                self.enter(State::DoubleQuote);
            }
            '\'' => {
                self.cursor.emit();
                self.enter(State::SingleQuote);
            }
            ')' => {
                self.cursor.emit();
                self.state = State::Normal;
            }
            _ => self.cursor.emit(),
        }
    }

    fn scan_comment(&mut self, ch: char) {
        if ch == '*' && self.cursor.peek(1) == Some('/') {
            self.cursor.advance_by(2);
            self.state = State::Normal;
        } else if ch == '\n' {
            self.cursor.emit();
        } else {
            self.cursor.advance();
        }
    }
}
