use super::span::Span;
use super::token::Token;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Negate,
    LogicalNot,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterEq,
    LessThan,
    LessEq,
}

/// An operator together with the span of its token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Operator<T> {
    pub op: T,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Expr {
    pub expr: ExprType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExprType {
    Literal(Literal),
    Grouping(Box<Expr>),
    Unary(Operator<PrefixOperator>, Box<Expr>),
    Binary(Operator<InfixOperator>, Box<Expr>, Box<Expr>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    Boolean(bool),
    Str(String),
    Nil,
}

/// One method per expression kind. Every consumer of the tree implements
/// all four; `Expr::accept` picks the one matching the node.
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, literal: &Literal, span: Span) -> Self::Output;

    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;

    fn visit_unary(&mut self, op: Operator<PrefixOperator>, operand: &Expr) -> Self::Output;

    fn visit_binary(
        &mut self,
        op: Operator<InfixOperator>,
        lhs: &Expr,
        rhs: &Expr,
    ) -> Self::Output;
}

impl PrefixOperator {
    pub fn from_token(token: &Token) -> Option<PrefixOperator> {
        let op = match token {
            Token::Minus => PrefixOperator::Negate,
            Token::Bang => PrefixOperator::LogicalNot,
            _ => return None,
        };

        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::LogicalNot => "!",
            PrefixOperator::Negate => "-",
        }
    }
}

impl InfixOperator {
    pub fn from_token(token: &Token) -> Option<InfixOperator> {
        let op = match token {
            Token::Plus => InfixOperator::Add,
            Token::Minus => InfixOperator::Subtract,
            Token::Asterisk => InfixOperator::Multiply,
            Token::Slash => InfixOperator::Divide,
            Token::DoubleEq => InfixOperator::EqualTo,
            Token::BangEq => InfixOperator::NotEqualTo,
            Token::RightAngle => InfixOperator::GreaterThan,
            Token::RightAngleEq => InfixOperator::GreaterEq,
            Token::LeftAngle => InfixOperator::LessThan,
            Token::LeftAngleEq => InfixOperator::LessEq,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::EqualTo => "==",
            InfixOperator::NotEqualTo => "!=",
            InfixOperator::GreaterThan => ">",
            InfixOperator::GreaterEq => ">=",
            InfixOperator::LessThan => "<",
            InfixOperator::LessEq => "<=",
        }
    }
}

impl<T> Operator<T> {
    pub fn new(op: T, span: Span) -> Self {
        Operator { op, span }
    }

    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl Expr {
    pub fn new(expr: ExprType, span: Span) -> Self {
        Expr { expr, span }
    }

    pub fn literal(literal: Literal, span: Span) -> Self {
        Expr::new(ExprType::Literal(literal), span)
    }

    pub fn grouping(inner: Expr, span: Span) -> Self {
        Expr::new(ExprType::Grouping(Box::new(inner)), span)
    }

    pub fn unary(op: Operator<PrefixOperator>, operand: Expr) -> Self {
        let span = op.span.extend(operand.span);
        Expr::new(ExprType::Unary(op, Box::new(operand)), span)
    }

    pub fn binary(op: Operator<InfixOperator>, lhs: Expr, rhs: Expr) -> Self {
        let span = lhs.span.extend(rhs.span);
        Expr::new(ExprType::Binary(op, Box::new(lhs), Box::new(rhs)), span)
    }

    /// Dispatches to the visitor method for this node's kind.
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match &self.expr {
            ExprType::Literal(literal) => visitor.visit_literal(literal, self.span),
            ExprType::Grouping(inner) => visitor.visit_grouping(inner),
            ExprType::Unary(op, operand) => visitor.visit_unary(*op, operand),
            ExprType::Binary(op, lhs, rhs) => visitor.visit_binary(*op, lhs, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts nodes, to check dispatch reaches every kind.
    struct NodeCounter {
        literals: usize,
        groupings: usize,
        unaries: usize,
        binaries: usize,
    }

    impl ExprVisitor for NodeCounter {
        type Output = ();

        fn visit_literal(&mut self, _literal: &Literal, _span: Span) {
            self.literals += 1;
        }

        fn visit_grouping(&mut self, inner: &Expr) {
            self.groupings += 1;
            inner.accept(self);
        }

        fn visit_unary(&mut self, _op: Operator<PrefixOperator>, operand: &Expr) {
            self.unaries += 1;
            operand.accept(self);
        }

        fn visit_binary(&mut self, _op: Operator<InfixOperator>, lhs: &Expr, rhs: &Expr) {
            self.binaries += 1;
            lhs.accept(self);
            rhs.accept(self);
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            InfixOperator::from_token(&Token::Plus),
            Some(InfixOperator::Add)
        );

        assert_eq!(
            InfixOperator::from_token(&Token::Minus),
            Some(InfixOperator::Subtract)
        );

        assert_eq!(
            PrefixOperator::from_token(&Token::Minus),
            Some(PrefixOperator::Negate)
        );

        assert_eq!(InfixOperator::from_token(&Token::Bang), None);
        assert_eq!(PrefixOperator::from_token(&Token::BangEq), None);
        assert_eq!(PrefixOperator::from_token(&Token::Asterisk), None);
    }

    #[test]
    fn test_accept_visits_every_kind() {
        let span = Span::default();
        let expr = Expr::binary(
            Operator::new(InfixOperator::Multiply, span),
            Expr::unary(
                Operator::new(PrefixOperator::Negate, span),
                Expr::literal(Literal::Number(123.0), span),
            ),
            Expr::grouping(Expr::literal(Literal::Number(45.67), span), span),
        );

        let mut counter = NodeCounter {
            literals: 0,
            groupings: 0,
            unaries: 0,
            binaries: 0,
        };
        expr.accept(&mut counter);

        assert_eq!(counter.literals, 2);
        assert_eq!(counter.groupings, 1);
        assert_eq!(counter.unaries, 1);
        assert_eq!(counter.binaries, 1);
    }
}
