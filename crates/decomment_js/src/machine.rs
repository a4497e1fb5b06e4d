//! The JavaScript comment-stripping machine.
//!
//! A character-by-character state machine over the source text. The current
//! state says which construct the scan position is inside; nested constructs
//! (a string inside `${...}`, a template inside a template) push the
//! enclosing state onto an explicit stack and pop it when they close, so
//! nesting works at any depth without recursion. Comments are the only
//! construct that is dropped; everything else is copied through verbatim.

use decomment_core::Cursor;

use crate::context::TokenContext;

/// The construct the scan position is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ordinary code.
    Normal,
    /// Inside a single-quoted string.
    SingleQuote,
    /// Inside a double-quoted string.
    DoubleQuote,
    /// Inside a template literal (between backticks).
    Template,
    /// Inside a `${...}` expression; `depth` counts unbalanced `{`.
    TemplateExpr { depth: u32 },
    /// Inside a `//` comment (dropped).
    LineComment,
    /// Inside a `/* */` comment (dropped, newlines kept).
    BlockComment,
    /// Inside a regex literal.
    Regex,
    /// Inside a `[...]` character class within a regex literal.
    RegexClass,
}

/// Strip `//` and `/* */` comments from JavaScript source.
///
/// Never fails: unterminated constructs consume to end of input in whatever
/// state the scan is in (an unterminated comment is dropped, an unterminated
/// string is copied).
pub fn strip(source: &str) -> String {
    Machine::new(source).run()
}

struct Machine {
    cursor: Cursor,
    state: State,
    /// Enclosing states of the constructs the current one is nested in.
    enclosing: Vec<State>,
    /// True only for the character right after an unescaped backslash.
    escaped: bool,
    context: TokenContext,
}

impl Machine {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Normal,
            enclosing: Vec::new(),
            escaped: false,
            context: TokenContext::new(),
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
                State::Template => self.scan_template(ch),
                State::TemplateExpr { depth } => self.scan_template_expr(ch, depth),
                State::LineComment => self.scan_line_comment(ch),
                State::BlockComment => self.scan_block_comment(ch),
                State::Regex => self.scan_regex(ch),
                State::RegexClass => self.scan_regex_class(ch),
            }
        }
        self.cursor.into_output()
    }

    /// Enter a nested construct, remembering the state to return to.
    fn enter(&mut self, next: State) {
        self.enclosing.push(std::mem::replace(&mut self.state, next));
    }

    /// Return to the construct the current one was nested in.
    fn leave(&mut self) {
        self.state = self.enclosing.pop().unwrap_or(State::Normal);
    }

    fn scan_normal(&mut self, ch: char) {
        match ch {
            '/' if self.cursor.peek(1) == Some('/') => {
                self.cursor.advance_by(2);
                self.enter(State::LineComment);
            }
            '/' if self.cursor.peek(1) == Some('*') => {
                self.cursor.advance_by(2);
                self.enter(State::BlockComment);
            }
            '/' if self.context.allows_regex() => {
                self.cursor.emit();
                self.enter(State::Regex);
            }
            '"' => {
                self.cursor.emit();
                self.enter(State::DoubleQuote);
            }
            '\'' => {
                self.cursor.emit();
                self.enter(State::SingleQuote);
            }
            '`' => {
                self.cursor.emit();
                self.enter(State::Template);
            }
            _ => {
                self.context.observe(ch);
                self.cursor.emit();
            }
        }
    }

    fn scan_quoted(&mut self, ch: char, quote: char) {
        if ch == '\\' {
            self.escaped = true;
            self.cursor.emit();
        } else if ch == quote {
            self.context.close_with(quote);
            self.cursor.emit();
            self.leave();
        } else {
            self.cursor.emit();
        }
    }

    fn scan_template(&mut self, ch: char) {
        match ch {
            '\\' => {
                self.escaped = true;
                self.cursor.emit();
            }
            '$' if self.cursor.peek(1) == Some('{') => {
                self.cursor.emit();
                self.cursor.emit();
                self.enter(State::TemplateExpr { depth: 1 });
            }
            '`' => {
                self.context.close_with('`');
                self.cursor.emit();
                self.leave();
            }
            _ => self.cursor.emit(),
        }
    }

    fn scan_template_expr(&mut self, ch: char, depth: u32) {
        match ch {
            '\\' => {
                self.escaped = true;
                self.cursor.emit();
            }
            '/' if self.cursor.peek(1) == Some('/') => {
                self.cursor.advance_by(2);
                self.enter(State::LineComment);
            }
            '/' if self.cursor.peek(1) == Some('*') => {
                self.cursor.advance_by(2);
                self.enter(State::BlockComment);
            }
            '{' => {
                self.state = State::TemplateExpr { depth: depth + 1 };
                self.cursor.emit();
            }
            '}' => {
                self.cursor.emit();
                if depth == 1 {
                    // Braces balanced: back to the template literal.
                    self.leave();
                } else {
                    self.state = State::TemplateExpr { depth: depth - 1 };
                }
            }
            '"' => {
                self.cursor.emit();
                self.enter(State::DoubleQuote);
            }
            '\'' => {
                self.cursor.emit();
                self.enter(State::SingleQuote);
            }
            '`' => {
                self.cursor.emit();
                self.enter(State::Template);
            }
            _ => self.cursor.emit(),
        }
    }

    fn scan_line_comment(&mut self, ch: char) {
        if ch == '\n' {
            // The newline is not part of the comment.
            self.cursor.emit();
            self.leave();
        } else {
            self.cursor.advance();
        }
    }

    fn scan_block_comment(&mut self, ch: char) {
        if ch == '*' && self.cursor.peek(1) == Some('/') {
            self.cursor.advance_by(2);
            self.leave();
        } else if ch == '\n' {
            // Keep line structure intact.
            self.cursor.emit();
        } else {
            self.cursor.advance();
        }
    }

    fn scan_regex(&mut self, ch: char) {
        match ch {
            '\\' => {
                self.escaped = true;
                self.cursor.emit();
            }
            '[' => {
                self.cursor.emit();
                self.enter(State::RegexClass);
            }
            '/' => {
                self.cursor.emit();
                while self.cursor.current().is_some_and(is_regex_flag) {
                    self.cursor.emit();
                }
                self.context.close_with('/');
                self.leave();
            }
            _ => self.cursor.emit(),
        }
    }

    fn scan_regex_class(&mut self, ch: char) {
        if ch == '\\' {
            self.escaped = true;
            self.cursor.emit();
        } else if ch == ']' {
            self.cursor.emit();
            self.leave();
        } else {
            self.cursor.emit();
        }
    }
}

/// Check if a character is a regex flag (`/re/gi` etc.).
fn is_regex_flag(ch: char) -> bool {
    matches!(ch, 'g' | 'i' | 'm' | 's' | 'u' | 'v' | 'y')
}
