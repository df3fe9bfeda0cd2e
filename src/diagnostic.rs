use crate::lox_frontend::errors::{LexerError, ParserError};
use crate::treewalk_interpreter::RuntimeError;

use std::fmt;

/// Which part of the pipeline gave up.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stage {
    Lexical,
    Syntax,
    Runtime,
}

/// User-facing error report: `[Line 3] Error in parser: expected an expression`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub stage: Stage,
    pub line: usize,
}

impl Stage {
    fn location(&self) -> &'static str {
        match self {
            Stage::Lexical => "",
            Stage::Syntax => " in parser",
            Stage::Runtime => " in interpreter",
        }
    }
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, stage: Stage, line: usize) -> Self {
        Diagnostic {
            message: message.into(),
            stage,
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Line {}] Error{}: {}",
            self.line,
            self.stage.location(),
            self.message
        )
    }
}

impl std::error::Error for Diagnostic {}

impl From<&LexerError> for Diagnostic {
    fn from(error: &LexerError) -> Self {
        Diagnostic::new(error.to_string(), Stage::Lexical, error.line())
    }
}

impl From<&ParserError> for Diagnostic {
    fn from(error: &ParserError) -> Self {
        Diagnostic::new(error.to_string(), Stage::Syntax, error.line())
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(error: &RuntimeError) -> Self {
        Diagnostic::new(error.to_string(), Stage::Runtime, error.line())
    }
}
