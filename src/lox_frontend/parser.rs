use super::errors::{Item, ParserError, ParserErrorType, ParserResult};
use super::grammar::{Expr, InfixOperator, Literal, Operator, PrefixOperator};
use super::span::Span;
use super::token::{SpannedToken, Token};

const EQUALITY_OPS: [InfixOperator; 2] = [InfixOperator::NotEqualTo, InfixOperator::EqualTo];
const COMPARISON_OPS: [InfixOperator; 4] = [
    InfixOperator::GreaterThan,
    InfixOperator::GreaterEq,
    InfixOperator::LessThan,
    InfixOperator::LessEq,
];
const TERM_OPS: [InfixOperator; 2] = [InfixOperator::Add, InfixOperator::Subtract];
const FACTOR_OPS: [InfixOperator; 2] = [InfixOperator::Multiply, InfixOperator::Divide];

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ParserOptions {
    /// Parse the right operand of `+ - * /` with the `term` rule instead of
    /// the next tighter rule. `1 - 2 - 3` then groups as `1 - (2 - 3)` and
    /// `2 * 3 + 4` as `2 * (3 + 4)`.
    pub right_recursive_operands: bool,
}

/// Recursive descent parser for a single expression.
///
/// ```text
/// expression -> equality
/// equality   -> comparison (("!=" | "==") comparison)*
/// comparison -> term ((">" | ">=" | "<" | "<=") term)*
/// term       -> factor (("+" | "-") factor)*
/// factor     -> unary (("*" | "/") unary)*
/// unary      -> ("!" | "-") unary | primary
/// primary    -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
/// ```
pub struct Parser {
    tokens: Vec<SpannedToken>,
    current: usize,
    options: ParserOptions,
}

impl Parser {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        Parser::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(mut tokens: Vec<SpannedToken>, options: ParserOptions) -> Self {
        if tokens.last().map_or(true, |t| t.token != Token::EndOfFile) {
            let end = tokens.last().map(|t| t.span.end_pos);
            let span = end.map_or_else(Span::default, |pos| Span::new(pos, pos));
            tokens.push(SpannedToken::new(Token::EndOfFile, "", span));
        }

        Parser {
            tokens,
            current: 0,
            options,
        }
    }

    /// Parses one expression which must span the whole input. The first
    /// error ends the parse.
    pub fn parse(mut self) -> ParserResult<Expr> {
        let expr = self.parse_expression()?;

        let leftover = self.peek().token.clone();
        if leftover == Token::EndOfFile {
            return Ok(expr);
        }

        // A second operand is a missing end of input; anything else, keywords
        // included, is not an expression at all.
        let error = if starts_operand(&leftover) {
            ParserErrorType::ExpectedEndOfInput(leftover)
        } else {
            ParserErrorType::ExpectedExpr(leftover)
        };
        Err(self.error_at_current(error))
    }

    fn peek(&self) -> &SpannedToken {
        &self.tokens[self.current]
    }

    /// Advances the stream. Never moves past the end-of-file token.
    fn bump(&mut self) -> &SpannedToken {
        let index = self.current;
        if self.tokens[index].token != Token::EndOfFile {
            self.current += 1;
        }
        &self.tokens[index]
    }

    /// Checks whether or not the current token matches the given token.
    fn check(&self, t: &Token) -> bool {
        self.peek().token == *t
    }

    fn consume(&mut self, t: Token, error: ParserErrorType) -> ParserResult<Span> {
        if self.check(&t) {
            Ok(self.bump().span)
        } else {
            Err(self.error_at_current(error))
        }
    }

    fn error_at_current(&self, error: ParserErrorType) -> ParserError {
        ParserError {
            span: self.peek().span,
            error,
        }
    }

    /// Consumes the current token if it is one of the given operators.
    fn match_infix(&mut self, ops: &[InfixOperator]) -> Option<Operator<InfixOperator>> {
        let op = InfixOperator::from_token(&self.peek().token).filter(|op| ops.contains(op))?;
        let span = self.bump().span;
        Some(Operator::new(op, span))
    }

    pub fn parse_expression(&mut self) -> ParserResult<Expr> {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_comparison()?;
        while let Some(op) = self.match_infix(&EQUALITY_OPS) {
            let rhs = self.parse_comparison()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_comparison(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.match_infix(&COMPARISON_OPS) {
            let rhs = self.parse_term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_factor()?;
        while let Some(op) = self.match_infix(&TERM_OPS) {
            let rhs = if self.options.right_recursive_operands {
                self.parse_term()?
            } else {
                self.parse_factor()?
            };
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.match_infix(&FACTOR_OPS) {
            let rhs = if self.options.right_recursive_operands {
                self.parse_term()?
            } else {
                self.parse_unary()?
            };
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParserResult<Expr> {
        match PrefixOperator::from_token(&self.peek().token) {
            Some(op) => {
                let op = Operator::new(op, self.bump().span);
                let operand = self.parse_unary()?;
                Ok(Expr::unary(op, operand))
            }
            None => self.parse_primary(),
        }
    }

    /// Parse primary token.
    fn parse_primary(&mut self) -> ParserResult<Expr> {
        let literal = match &self.peek().token {
            Token::Number(n) => Literal::Number(*n),
            Token::String(s) => Literal::Str(s.clone()),
            Token::True => Literal::Boolean(true),
            Token::False => Literal::Boolean(false),
            Token::Nil => Literal::Nil,
            Token::LeftParen => {
                let open_span = self.bump().span;
                let inner = self.parse_expression()?;
                let close_span = self.consume(
                    Token::RightParen,
                    ParserErrorType::ExpectedAfter(")", Item::Expression),
                )?;
                return Ok(Expr::grouping(inner, open_span.extend(close_span)));
            }
            t => {
                let t = t.clone();
                return Err(self.error_at_current(ParserErrorType::ExpectedExpr(t)));
            }
        };

        let span = self.bump().span;
        Ok(Expr::literal(literal, span))
    }
}

/// Tokens `unary` accepts as the first token of an expression.
fn starts_operand(token: &Token) -> bool {
    matches!(
        token,
        Token::Number(_)
            | Token::String(_)
            | Token::True
            | Token::False
            | Token::Nil
            | Token::LeftParen
            | Token::Bang
            | Token::Minus
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lox_frontend::lexer::scan;

    fn parse_with(source: &str, options: ParserOptions) -> ParserResult<Expr> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected lexer errors: {:?}", errors);
        Parser::with_options(tokens, options).parse()
    }

    fn ast(source: &str) -> String {
        parse_with(source, ParserOptions::default())
            .expect("parse failed")
            .ast_string()
    }

    fn legacy_ast(source: &str) -> String {
        let options = ParserOptions {
            right_recursive_operands: true,
        };
        parse_with(source, options)
            .expect("parse failed")
            .ast_string()
    }

    fn parse_error(source: &str) -> ParserError {
        parse_with(source, ParserOptions::default()).expect_err("parse should fail")
    }

    #[test]
    fn test_precedence() {
        assert_eq!(ast("1+2*3"), "(+ 1 (* 2 3))");
        assert_eq!(ast("1 * 2 + 3"), "(+ (* 1 2) 3)");
        assert_eq!(ast("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
        assert_eq!(ast("-1 * !true"), "(* (- 1) (! true))");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(ast("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(ast("8 / 4 / 2"), "(/ (/ 8 4) 2)");
        assert_eq!(ast("1 == 2 != 3"), "(!= (== 1 2) 3)");
    }

    #[test]
    fn test_right_recursive_operands() {
        assert_eq!(legacy_ast("1 - 2 - 3"), "(- 1 (- 2 3))");
        assert_eq!(legacy_ast("2 * 3 + 4"), "(* 2 (+ 3 4))");
        assert_eq!(legacy_ast("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(legacy_ast("1 < 2 == true"), "(== (< 1 2) true)");
    }

    #[test]
    fn test_grouping_and_literals() {
        assert_eq!(ast("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
        assert_eq!(ast("nil"), "null");
        assert_eq!(ast("\"a b\" == false"), "(== a b false)");
        assert_eq!(ast("--1"), "(- (- 1))");
    }

    #[test]
    fn test_operator_span_is_kept() {
        let expr = parse_with("1 +\n2", ParserOptions::default()).unwrap();
        match expr.expr {
            crate::lox_frontend::grammar::ExprType::Binary(op, _, _) => {
                assert_eq!(op.op, InfixOperator::Add);
                assert_eq!(op.line(), 1);
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
        assert_eq!(expr.span.end_pos.line_no, 2);
    }

    #[test]
    fn test_missing_right_paren() {
        let error = parse_error("(1 + 2");
        assert_eq!(
            error.error,
            ParserErrorType::ExpectedAfter(")", Item::Expression)
        );
        assert_eq!(error.to_string(), "expected ')' after expression");
    }

    #[test]
    fn test_keywords_are_not_expressions() {
        for source in ["if", "var", "class", "1 + while", "fun"] {
            let error = parse_error(source);
            assert!(
                matches!(error.error, ParserErrorType::ExpectedExpr(_)),
                "{}: {:?}",
                source,
                error
            );
            assert_eq!(error.to_string(), "expected an expression");
        }
    }

    #[test]
    fn test_bang_eq_is_not_a_prefix_operator() {
        let error = parse_error("!= 1");
        assert_eq!(error.error, ParserErrorType::ExpectedExpr(Token::BangEq));
    }

    #[test]
    fn test_trailing_tokens() {
        let error = parse_error("1 2");
        assert_eq!(
            error.error,
            ParserErrorType::ExpectedEndOfInput(Token::Number(2.0))
        );
        assert_eq!(error.to_string(), "expected end of input after expression");

        let error = parse_error("(1) (2)");
        assert_eq!(
            error.error,
            ParserErrorType::ExpectedEndOfInput(Token::LeftParen)
        );
    }

    #[test]
    fn test_trailing_keywords_are_not_expressions() {
        for (source, token) in [
            ("1 if", Token::If),
            ("1 var", Token::Var),
            ("(1 + 2) while", Token::While),
        ] {
            let error = parse_error(source);
            assert_eq!(error.error, ParserErrorType::ExpectedExpr(token));
            assert_eq!(error.to_string(), "expected an expression");
        }

        let error = parse_error("1 )");
        assert_eq!(error.error, ParserErrorType::ExpectedExpr(Token::RightParen));
    }

    #[test]
    fn test_error_cites_current_line() {
        let error = parse_error("(1 +\n\n)");
        assert_eq!(error.line(), 3);
        assert_eq!(error.error, ParserErrorType::ExpectedExpr(Token::RightParen));

        let error = parse_error("1 +");
        assert_eq!(error.error, ParserErrorType::ExpectedExpr(Token::EndOfFile));
        assert_eq!(error.to_string(), "expected an expression");
    }

    #[test]
    fn test_missing_eof_is_added() {
        let (mut tokens, _) = scan("1");
        tokens.pop();
        let expr = Parser::new(tokens).parse().unwrap();
        assert_eq!(expr.ast_string(), "1");

        let error = Parser::new(vec![]).parse().unwrap_err();
        assert_eq!(error.error, ParserErrorType::ExpectedExpr(Token::EndOfFile));
    }
}
