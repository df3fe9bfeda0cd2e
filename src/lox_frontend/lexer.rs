use super::cursor::Cursor;
use super::errors::{LexerError, LexerErrorType, LexerResult};
use super::span::{CodePosition, Span};
use super::token::{SpannedToken, Token, KEYWORDS};

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

/// Scans the whole source. The token list always ends with exactly one
/// `EndOfFile`; lexical errors are collected and scanning carries on past them.
pub fn scan(source: &str) -> (Vec<SpannedToken>, Vec<LexerError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];
    let mut errors = vec![];

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let at_end = token.token == Token::EndOfFile;
                tokens.push(token);
                if at_end {
                    break;
                }
            }
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token, or the error for the text it had to skip.
    pub fn next_token(&mut self) -> LexerResult<SpannedToken> {
        loop {
            // Get rid of whitespace.
            self.cursor.take_while(is_whitespace_char);

            let start_pos = self.cursor.get_position();
            let token = self.lex_token(start_pos);
            let end_pos = self.cursor.get_position();
            let span = Span::new(start_pos, end_pos);

            match token {
                Some(Ok(token)) => {
                    let lexeme = self.cursor.slice_from(start_pos);
                    return Ok(SpannedToken::new(token, lexeme, span));
                }
                Some(Err(error)) => return Err(LexerError { span, error }),
                None => continue,
            }
        }
    }

    /// Lexes one token. `None` means the consumed text produces no token.
    fn lex_token(&mut self, start_pos: CodePosition) -> Option<Result<Token, LexerErrorType>> {
        let ch = match self.cursor.take() {
            Some(ch) => ch,
            None => return Some(Ok(Token::EndOfFile)),
        };

        let token = match ch {
            // Single-character tokens.
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '.' => Token::Dot,
            ',' => Token::Comma,
            ';' => Token::Semicolon,

            // Slash can either be comment or division.
            '/' => {
                if self.cursor.take_if('/') {
                    self.consume_line();
                    return None;
                }
                Token::Slash
            }

            // Potentially two character tokens.
            '=' => self.look_for_eq_sign(Token::Equals, Token::DoubleEq),
            '<' => self.look_for_eq_sign(Token::LeftAngle, Token::LeftAngleEq),
            '>' => self.look_for_eq_sign(Token::RightAngle, Token::RightAngleEq),
            '!' => self.look_for_eq_sign(Token::Bang, Token::BangEq),

            '"' => return Some(self.lex_string()),

            _ if is_digit_char(ch) => return Some(self.lex_number(start_pos)),

            _ if is_identifier_start(ch) => self.lex_identifier_or_kw(start_pos),

            _ => return Some(Err(LexerErrorType::UnexpectedCharacter(ch))),
        };

        Some(Ok(token))
    }

    fn consume_line(&mut self) {
        // The newline itself is left for the whitespace skipper.
        self.cursor.take_until(|ch| ch == '\n');
    }

    /// Checks if next char is '='. If so, consume it and return t2.
    /// Otherwise, return t1.
    fn look_for_eq_sign(&mut self, t1: Token, t2: Token) -> Token {
        if self.cursor.take_if('=') {
            t2
        } else {
            t1
        }
    }

    /// Scans up to the closing '"'. The opening quote is already consumed.
    fn lex_string(&mut self) -> Result<Token, LexerErrorType> {
        let start_pos = self.cursor.get_position();
        self.cursor.take_until(|ch| ch == '"');

        if self.cursor.peek().is_none() {
            return Err(LexerErrorType::UnterminatedString);
        }

        let content = self.cursor.slice_from(start_pos).to_owned();
        self.cursor.take();
        Ok(Token::String(content))
    }

    /// Scans a number starting at `start_pos`. Literals beyond the range of
    /// f64 decode to `inf`.
    fn lex_number(&mut self, start_pos: CodePosition) -> Result<Token, LexerErrorType> {
        self.cursor.take_while(is_digit_char);

        // A dot only belongs to the number when a digit follows it.
        if self.cursor.peek() == Some('.') && self.cursor.peek_next().is_some_and(is_digit_char) {
            self.cursor.take();
            self.cursor.take_while(is_digit_char);
        }

        self.cursor
            .slice_from(start_pos)
            .parse()
            .map(Token::Number)
            .map_err(|_| LexerErrorType::InvalidNumber)
    }

    /// Scan up to end of lexeme and return it as identifier. Checks for keywords.
    fn lex_identifier_or_kw(&mut self, start_pos: CodePosition) -> Token {
        self.cursor.take_while(is_identifier_char);

        let word = self.cursor.slice_from(start_pos);
        match KEYWORDS.get(word) {
            Some(keyword) => keyword.clone(),
            None => Token::Identifier(word.to_owned()),
        }
    }
}

fn is_whitespace_char(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn is_digit_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
