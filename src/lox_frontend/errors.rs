use super::span::Span;
use super::token::Token;

use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum LexerErrorType {
    UnexpectedCharacter(char),
    UnterminatedString,
    InvalidNumber,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LexerError {
    pub span: Span,
    pub error: LexerErrorType,
}

pub type LexerResult<T> = Result<T, LexerError>;

/// What a missing token was supposed to follow.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Item {
    Expression,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ParserErrorType {
    ExpectedExpr(Token),
    ExpectedAfter(&'static str, Item),
    ExpectedEndOfInput(Token),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParserError {
    pub span: Span,
    pub error: ParserErrorType,
}

pub type ParserResult<T> = Result<T, ParserError>;

impl LexerError {
    /// Line the error is reported on. An unterminated string is reported
    /// where scanning stopped, everything else where the bad text started.
    pub fn line(&self) -> usize {
        match self.error {
            LexerErrorType::UnterminatedString => self.span.end_pos.line_no,
            _ => self.span.start_pos.line_no,
        }
    }
}

impl ParserError {
    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::Expression => write!(f, "expression"),
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            LexerErrorType::UnexpectedCharacter(ch) => write!(f, "Unexpected character '{}'", ch),
            LexerErrorType::UnterminatedString => write!(f, "Unterminated string"),
            LexerErrorType::InvalidNumber => write!(f, "Invalid number"),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            ParserErrorType::ExpectedExpr(_) => write!(f, "expected an expression"),
            ParserErrorType::ExpectedAfter(expected, item) => {
                write!(f, "expected '{}' after {}", expected, item)
            }
            ParserErrorType::ExpectedEndOfInput(_) => {
                write!(f, "expected end of input after expression")
            }
        }
    }
}

impl std::error::Error for LexerError {}
impl std::error::Error for ParserError {}
