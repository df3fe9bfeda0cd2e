use super::span::Span;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Dot,
    Comma,
    Semicolon,

    // One or two character tokens.
    Bang,
    BangEq,
    Equals,
    DoubleEq,
    LeftAngle,
    LeftAngleEq,
    RightAngle,
    RightAngleEq,

    // Literals.
    Identifier(String),
    String(String),
    Number(f64),

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    Function,
    Let,

    EndOfFile,
}

/// Reserved words. Built once, never mutated.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Token>> = LazyLock::new(|| {
    HashMap::from([
        ("and", Token::And),
        ("class", Token::Class),
        ("else", Token::Else),
        ("false", Token::False),
        ("fun", Token::Fun),
        ("for", Token::For),
        ("if", Token::If),
        ("nil", Token::Nil),
        ("or", Token::Or),
        ("print", Token::Print),
        ("return", Token::Return),
        ("super", Token::Super),
        ("this", Token::This),
        ("true", Token::True),
        ("var", Token::Var),
        ("while", Token::While),
        ("function", Token::Function),
        ("let", Token::Let),
    ])
});

impl Token {
    /// Upper-case tag used when dumping the token stream.
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::LeftParen => "LEFT_PAREN",
            Token::RightParen => "RIGHT_PAREN",
            Token::LeftBrace => "LEFT_BRACE",
            Token::RightBrace => "RIGHT_BRACE",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Asterisk => "STAR",
            Token::Slash => "SLASH",
            Token::Dot => "DOT",
            Token::Comma => "COMMA",
            Token::Semicolon => "SEMICOLON",
            Token::Bang => "BANG",
            Token::BangEq => "BANG_EQUAL",
            Token::Equals => "EQUAL",
            Token::DoubleEq => "EQUAL_EQUAL",
            Token::LeftAngle => "LESS",
            Token::LeftAngleEq => "LESS_EQUAL",
            Token::RightAngle => "GREATER",
            Token::RightAngleEq => "GREATER_EQUAL",
            Token::Identifier(_) => "IDENTIFIER",
            Token::String(_) => "STRING",
            Token::Number(_) => "NUMBER",
            Token::And => "AND",
            Token::Class => "CLASS",
            Token::Else => "ELSE",
            Token::False => "FALSE",
            Token::Fun => "FUN",
            Token::For => "FOR",
            Token::If => "IF",
            Token::Nil => "NIL",
            Token::Or => "OR",
            Token::Print => "PRINT",
            Token::Return => "RETURN",
            Token::Super => "SUPER",
            Token::This => "THIS",
            Token::True => "TRUE",
            Token::Var => "VAR",
            Token::While => "WHILE",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::EndOfFile => "EOF",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    pub token: Token,
    /// Exact source text consumed for this token.
    pub lexeme: String,
    pub span: Span,
}

impl SpannedToken {
    pub fn new(token: Token, lexeme: impl Into<String>, span: Span) -> Self {
        SpannedToken {
            token,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ", self.token.type_name(), self.lexeme)?;
        match &self.token {
            Token::Number(n) => write!(f, "{:?}", n),
            Token::String(s) => write!(f, "{}", s),
            _ => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(KEYWORDS.get("nil"), Some(&Token::Nil));
        assert_eq!(KEYWORDS.get("function"), Some(&Token::Function));
        assert_eq!(KEYWORDS.get("Nil"), None);
        assert_eq!(KEYWORDS.len(), 18);
    }

    #[test]
    fn test_token_dump_format() {
        let token = SpannedToken::new(Token::Number(3.0), "3", Span::default());
        assert_eq!(token.to_string(), "NUMBER 3 3.0");

        let token = SpannedToken::new(Token::Plus, "+", Span::default());
        assert_eq!(token.to_string(), "PLUS + null");
    }
}
