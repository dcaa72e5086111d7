use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{ScanError, ScanErrorKind};
use crate::token::{BOOLEAN_VALUE, MAX_IDENTIFIER_LEN, NO_VALUE, Span, Token, TokenKind};

/// Tokens and errors produced by one scan, both in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Scan {
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a source string into tokens, collecting errors instead of
/// stopping at them.
///
/// Always completes. Malformed input shows up as entries in
/// [`Scan::errors`]; the offending text produces no token.
#[must_use]
pub fn scan(input: &str) -> Scan {
    Cursor::new(input).run()
}

/// Reusable scanner that keeps the result of its most recent call.
///
/// Each call to [`Scanner::scan`] replaces the previous tokens, errors
/// and identifier values. Not meant to be shared between threads while
/// scanning; use one instance per caller.
#[derive(Debug, Default)]
pub struct Scanner {
    last: Scan,
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `input`, discarding whatever the previous call produced.
    pub fn scan(&mut self, input: &str) {
        self.last = scan(input);
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.last.tokens
    }

    #[must_use]
    pub fn errors(&self) -> &[ScanError] {
        &self.last.errors
    }

    /// Errors rendered as `Error at line L, column C: ...` strings.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.last.errors.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.last.has_errors()
    }

    #[must_use]
    pub fn into_scan(self) -> Scan {
        self.last
    }
}

struct Cursor {
    input: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    paren_depth: i64,
    next_value: i32,
    values: HashMap<String, i32>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            paren_depth: 0,
            next_value: 1,
            values: HashMap::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn run(mut self) -> Scan {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == '/' && self.peek_at(1) == Some('*') {
                self.skip_comment();
                continue;
            }

            if ch.is_alphanumeric() {
                self.read_word();
                continue;
            }

            match ch {
                '|' => {
                    // a run of pipes collapses into one token
                    if !self.tokens.last().is_some_and(|t| t.is("|")) {
                        self.push(TokenKind::Pipe, "|".to_string(), NO_VALUE);
                    }
                    self.advance();
                }
                ':' if self.peek_at(1) == Some('=') => {
                    self.push(TokenKind::Assign, ":=".to_string(), NO_VALUE);
                    self.advance();
                    self.advance();
                }
                ':' => {
                    self.report(ScanErrorKind::InvalidColon, self.span());
                    self.advance();
                }
                '(' => {
                    self.push(TokenKind::LParen, "(".to_string(), NO_VALUE);
                    self.paren_depth += 1;
                    self.advance();
                }
                ')' => {
                    self.push(TokenKind::RParen, ")".to_string(), NO_VALUE);
                    self.paren_depth -= 1;
                    self.advance();
                }
                _ => {
                    self.report(ScanErrorKind::UnexpectedCharacter(ch), self.span());
                    self.advance();
                }
            }
        }

        if self.paren_depth != 0 {
            debug!(depth = self.paren_depth, "scan ended with unbalanced parens");
        }
        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            identifiers = self.values.len(),
            "scan complete"
        );

        Scan {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(&ch) = self.input.get(self.pos) {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn push(&mut self, kind: TokenKind, lexeme: String, value: i32) {
        let span = self.span();
        self.push_at(kind, lexeme, span, value);
    }

    fn push_at(&mut self, kind: TokenKind, lexeme: String, span: Span, value: i32) {
        self.tokens.push(Token {
            kind,
            lexeme,
            span,
            value,
        });
    }

    fn report(&mut self, kind: ScanErrorKind, span: Span) {
        let error = ScanError { kind, span };
        trace!(%error, "scan error");
        self.errors.push(error);
    }

    /// Skip a `/* ... */` comment. An unterminated comment swallows the
    /// rest of the input and is reported at its opening position.
    fn skip_comment(&mut self) {
        let start = self.span();
        self.advance(); // skip /
        self.advance(); // skip *

        while let Some(ch) = self.peek() {
            if ch == '*' && self.peek_at(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }

        self.report(ScanErrorKind::UnclosedComment, start);
    }

    fn read_word(&mut self) {
        let start = self.span();
        let begin = self.pos;

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        // Length is checked first so an over-long word never also
        // reports as an invalid identifier.
        if self.pos - begin > MAX_IDENTIFIER_LEN {
            self.report(ScanErrorKind::IdentifierTooLong, start);
            return;
        }

        let word: String = self.input[begin..self.pos].iter().collect();
        if !is_identifier_shape(&word) {
            self.report(ScanErrorKind::InvalidIdentifier(word), start);
            return;
        }

        let upper = word.to_ascii_uppercase();
        match Token::keyword_kind(&upper) {
            Some(TokenKind::Boolean) => {
                self.push_at(TokenKind::Boolean, upper, start, BOOLEAN_VALUE);
            }
            Some(kind) => self.push_at(kind, upper, start, NO_VALUE),
            None => {
                let value = self.identifier_value(&word);
                self.push_at(TokenKind::Identifier, word, start, value);
            }
        }
    }

    /// Value for an identifier name; the first occurrence in a scan
    /// decides it.
    fn identifier_value(&mut self, name: &str) -> i32 {
        if let Some(&value) = self.values.get(name) {
            return value;
        }
        let value = self.next_value;
        self.next_value += 1;
        self.values.insert(name.to_string(), value);
        value
    }
}

/// One leading ASCII letter followed by ASCII letters only, at most
/// [`MAX_IDENTIFIER_LEN`] in total.
fn is_identifier_shape(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= MAX_IDENTIFIER_LEN
        && word.chars().all(|c| c.is_ascii_alphabetic())
}
