use super::object::Object;
use crate::lox_frontend::grammar::{InfixOperator, PrefixOperator};
use crate::lox_frontend::span::Span;

use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum RuntimeErrorType {
    IllegalInfixOperation(InfixOperator, Object, Object),
    IllegalPrefixOperation(PrefixOperator, Object),
}

/// An evaluation failure, located at the operator that raised it.
#[derive(Debug, PartialEq, Clone)]
pub struct RuntimeError {
    pub span: Span,
    pub error: RuntimeErrorType,
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl RuntimeError {
    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl fmt::Display for RuntimeErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeErrorType::IllegalInfixOperation(op, lhs, rhs) => write!(
                f,
                "invalid operands {}, {} for operator {}",
                lhs.repr(),
                rhs.repr(),
                op.symbol()
            ),
            RuntimeErrorType::IllegalPrefixOperation(op, _) => {
                write!(f, "invalid operand for operator {}", op.symbol())
            }
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for RuntimeError {}
