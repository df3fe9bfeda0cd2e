use super::errors::RuntimeErrorType;
use crate::lox_frontend::grammar::{InfixOperator, Literal, PrefixOperator};

use std::fmt;

/// A value produced while evaluating an expression.
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Number(f64),
    Boolean(bool),
    String(String),
    Nil,
}

type OpResult = Result<Object, RuntimeErrorType>;

impl Object {
    /// `nil` and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Nil | Object::Boolean(false))
    }

    /// Source-like form used in error messages: strings keep their quotes.
    pub fn repr(&self) -> String {
        match self {
            Object::String(s) => format!("\"{}\"", s),
            other => other.to_string(),
        }
    }

    /// Division is IEEE-754: `1 / 0` is `inf`, `0 / 0` is `NaN`.
    pub fn apply_infix_op(op: InfixOperator, lhs: Object, rhs: Object) -> OpResult {
        match op {
            InfixOperator::Add => match (lhs, rhs) {
                (Object::Number(a), Object::Number(b)) => Ok(Object::Number(a + b)),
                (Object::String(a), Object::String(b)) => Ok(Object::String(a + &b)),
                (a, b) => Err(RuntimeErrorType::IllegalInfixOperation(op, a, b)),
            },
            InfixOperator::Subtract => numerical_binop(op, lhs, rhs, |a, b| Object::Number(a - b)),
            InfixOperator::Multiply => numerical_binop(op, lhs, rhs, |a, b| Object::Number(a * b)),
            InfixOperator::Divide => numerical_binop(op, lhs, rhs, |a, b| Object::Number(a / b)),
            InfixOperator::EqualTo => Ok(Object::Boolean(lhs == rhs)),
            InfixOperator::NotEqualTo => Ok(Object::Boolean(lhs != rhs)),
            InfixOperator::GreaterEq => {
                numerical_binop(op, lhs, rhs, |a, b| Object::Boolean(a >= b))
            }
            InfixOperator::GreaterThan => {
                numerical_binop(op, lhs, rhs, |a, b| Object::Boolean(a > b))
            }
            InfixOperator::LessEq => numerical_binop(op, lhs, rhs, |a, b| Object::Boolean(a <= b)),
            InfixOperator::LessThan => numerical_binop(op, lhs, rhs, |a, b| Object::Boolean(a < b)),
        }
    }

    pub fn apply_prefix_op(op: PrefixOperator, value: Object) -> OpResult {
        match op {
            PrefixOperator::Negate => match value {
                Object::Number(n) => Ok(Object::Number(-n)),
                _ => Err(RuntimeErrorType::IllegalPrefixOperation(op, value)),
            },
            PrefixOperator::LogicalNot => Ok(Object::Boolean(!value.is_truthy())),
        }
    }
}

fn numerical_binop<F>(op: InfixOperator, lhs: Object, rhs: Object, func: F) -> OpResult
where
    F: Fn(f64, f64) -> Object,
{
    match (lhs, rhs) {
        (Object::Number(a), Object::Number(b)) => Ok(func(a, b)),
        (a, b) => Err(RuntimeErrorType::IllegalInfixOperation(op, a, b)),
    }
}

impl From<&Literal> for Object {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Object::Number(*n),
            Literal::Boolean(b) => Object::Boolean(*b),
            Literal::Str(s) => Object::String(s.clone()),
            Literal::Nil => Object::Nil,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Number(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::String(s) => write!(f, "{}", s),
            Object::Nil => write!(f, "nil"),
        }
    }
}
