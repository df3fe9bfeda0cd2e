use super::grammar::{Expr, ExprVisitor, InfixOperator, Literal, Operator, PrefixOperator};
use super::span::Span;

/// Renders an expression tree in prefix form, e.g. `(+ 1 (group 2))`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, literal: &Literal, _span: Span) -> String {
        match literal {
            Literal::Number(n) => n.to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Str(s) => s.clone(),
            Literal::Nil => "null".to_owned(),
        }
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_unary(&mut self, op: Operator<PrefixOperator>, operand: &Expr) -> String {
        self.parenthesize(op.op.symbol(), &[operand])
    }

    fn visit_binary(&mut self, op: Operator<InfixOperator>, lhs: &Expr, rhs: &Expr) -> String {
        self.parenthesize(op.op.symbol(), &[lhs, rhs])
    }
}

impl Expr {
    pub fn ast_string(&self) -> String {
        AstPrinter::new().print(self)
    }
}
