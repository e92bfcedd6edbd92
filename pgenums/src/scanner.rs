//! Statement scanner: turns raw schema text into candidate statement blocks.
//!
//! The scanner walks the input one character at a time, dropping comments
//! and insignificant whitespace while the statement buffer is empty, and
//! accumulating everything else. Once the buffer's leading bytes spell
//! `CREATE TYPE` (case-insensitive) it consumes the rest of the statement
//! through its terminating `;` and yields the whole block. Any other
//! statement is discarded at its `;` boundary, and a partial statement cut
//! off by end of input is dropped silently.

use std::iter::Peekable;
use std::str::Chars;

use crate::types::Strictness;

const PREFIX: &str = "CREATE TYPE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping insignificant text or accumulating an undecided prefix.
    Idle,
    /// Inside a line comment, discarding through the next newline.
    LineComment,
    /// Inside a `/* ... */` comment, discarding through the closing `*/`.
    BlockComment { star: bool },
    /// The buffer can no longer match `CREATE TYPE`; discarding through `;`.
    Skip,
    /// Consuming a `CREATE TYPE` statement through its terminating `;`.
    Statement,
}

/// Streaming scanner over schema text.
///
/// Yields one raw block per detected `CREATE TYPE` statement, leading
/// comments and whitespace elided, in input order. Iteration is single-pass
/// and ends at end of input.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    buffer: String,
    state: State,
    strictness: Strictness,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_strictness(input, Strictness::default())
    }

    pub fn with_strictness(input: &'a str, strictness: Strictness) -> Self {
        Self {
            chars: input.chars().peekable(),
            buffer: String::new(),
            state: State::Idle,
            strictness,
        }
    }

    /// In lax mode any `-` at statement start opens a line comment; strict
    /// mode requires the full `--` marker and otherwise keeps the dash as
    /// statement text.
    fn line_comment_starts(&mut self) -> bool {
        match self.strictness {
            Strictness::Lax => true,
            Strictness::Strict => {
                if self.chars.peek() == Some(&'-') {
                    self.chars.next();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn idle(&mut self, ch: char) {
        if self.buffer.is_empty() {
            if ch.is_whitespace() {
                return;
            }
            if ch == '-' && self.line_comment_starts() {
                self.state = State::LineComment;
                return;
            }
        } else if self.buffer == "/" && ch == '*' {
            self.buffer.clear();
            self.state = State::BlockComment { star: false };
            return;
        }

        self.buffer.push(ch);

        if ch == ';' {
            // A complete statement that never became a candidate.
            self.buffer.clear();
            return;
        }

        // The prefix check is byte-for-byte against the first 11 bytes, so a
        // buffer that crosses that length on a non-boundary can never match.
        if self.buffer.len() >= PREFIX.len() {
            let matched = self
                .buffer
                .get(..PREFIX.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(PREFIX));
            if matched {
                self.state = State::Statement;
            } else {
                self.buffer.clear();
                self.state = State::Skip;
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(ch) = self.chars.next() {
            match self.state {
                State::Idle => self.idle(ch),
                State::LineComment => {
                    if ch == '\n' {
                        self.state = State::Idle;
                    }
                }
                State::BlockComment { star } => {
                    if star && ch == '/' {
                        self.state = State::Idle;
                    } else {
                        self.state = State::BlockComment { star: ch == '*' };
                    }
                }
                State::Skip => {
                    if ch == ';' {
                        self.state = State::Idle;
                    }
                }
                State::Statement => {
                    self.buffer.push(ch);
                    if ch == ';' {
                        self.state = State::Idle;
                        return Some(std::mem::take(&mut self.buffer));
                    }
                }
            }
        }

        // End of input: a partial fragment never becomes a block.
        self.buffer.clear();
        None
    }
}
