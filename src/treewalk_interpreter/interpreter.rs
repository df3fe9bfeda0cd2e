use super::errors::{RuntimeError, RuntimeResult};
use super::object::Object;
use crate::lox_frontend::grammar::{
    Expr, ExprVisitor, InfixOperator, Literal, Operator, PrefixOperator,
};
use crate::lox_frontend::span::Span;

/// Tree-walking evaluator. Recursion depth follows the depth of the tree
/// and is not bounded, so pathologically nested input can overflow the stack.
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Interpreter
    }

    pub fn eval_expression(&mut self, expr: &Expr) -> RuntimeResult<Object> {
        expr.accept(self)
    }
}

impl ExprVisitor for Interpreter {
    type Output = RuntimeResult<Object>;

    fn visit_literal(&mut self, literal: &Literal, _span: Span) -> Self::Output {
        Ok(Object::from(literal))
    }

    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output {
        self.eval_expression(inner)
    }

    fn visit_unary(&mut self, op: Operator<PrefixOperator>, operand: &Expr) -> Self::Output {
        let value = self.eval_expression(operand)?;

        #[cfg(feature = "trace-execution")]
        eprintln!("[trace] line {}: {}{}", op.line(), op.op.symbol(), value.repr());

        Object::apply_prefix_op(op.op, value).map_err(|error| RuntimeError {
            span: op.span,
            error,
        })
    }

    fn visit_binary(
        &mut self,
        op: Operator<InfixOperator>,
        lhs: &Expr,
        rhs: &Expr,
    ) -> Self::Output {
        // Both sides are always evaluated, left first.
        let lhs = self.eval_expression(lhs)?;
        let rhs = self.eval_expression(rhs)?;

        #[cfg(feature = "trace-execution")]
        eprintln!(
            "[trace] line {}: {} {} {}",
            op.line(),
            lhs.repr(),
            op.op.symbol(),
            rhs.repr()
        );

        Object::apply_infix_op(op.op, lhs, rhs).map_err(|error| RuntimeError {
            span: op.span,
            error,
        })
    }
}
