use std::fmt;

/// Value carried by tokens that have no payload.
pub const NO_VALUE: i32 = -1;

/// Value carried by every `Boolean` token.
pub const BOOLEAN_VALUE: i32 = 0;

/// Longest identifier accepted by the scanner, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 16;

/// Boolean literals, in canonical upper case.
pub const BOOLEANS: [&str; 2] = ["TRUE", "FALSE"];

/// Operator keywords, in canonical upper case.
pub const OPERATORS: [&str; 4] = ["OR", "XOR", "AND", "NOT"];

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Variable name, original casing preserved.
    Identifier,
    /// `TRUE` or `FALSE`.
    Boolean,
    /// `OR`, `XOR`, `AND` or `NOT`.
    Operator,
    /// Assignment `:=`.
    Assign,
    /// Statement separator `|`.
    Pipe,
    /// Opening paren `(`.
    LParen,
    /// Closing paren `)`.
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "IDENTIFIER",
            Self::Boolean => "BOOLEAN",
            Self::Operator => "OPERATOR",
            Self::Assign => "ASSIGN",
            Self::Pipe => "PIPE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        };
        // `pad` keeps width/alignment flags working for table output.
        f.pad(name)
    }
}

/// A single token with its kind, text, source location and value.
///
/// `value` is [`NO_VALUE`] for punctuation and operators,
/// [`BOOLEAN_VALUE`] for booleans, and a positive per-name
/// number for identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub value: i32,
}

impl Token {
    /// Whether this token's lexeme is exactly `lexeme`.
    #[must_use]
    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme == lexeme
    }

    /// Classify an upper-cased word as a keyword kind, if it is one.
    #[must_use]
    pub fn keyword_kind(upper: &str) -> Option<TokenKind> {
        if BOOLEANS.contains(&upper) {
            Some(TokenKind::Boolean)
        } else if OPERATORS.contains(&upper) {
            Some(TokenKind::Operator)
        } else {
            None
        }
    }
}
