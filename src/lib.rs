pub mod diagnostic;
pub mod lox_frontend;
pub mod treewalk_interpreter;

use diagnostic::Diagnostic;
use lox_frontend::grammar::Expr;
use lox_frontend::token::SpannedToken;
use lox_frontend::{scan, Parser, ParserOptions};
use treewalk_interpreter::{Interpreter, Object};

pub type PipelineResult<T> = Result<T, Vec<Diagnostic>>;

/// Scans the source. Fails with every lexical error found.
pub fn tokenize(source: &str) -> PipelineResult<Vec<SpannedToken>> {
    let (tokens, errors) = scan(source);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors.iter().map(Diagnostic::from).collect())
    }
}

/// Scans and parses the source into a single expression.
pub fn parse(source: &str, options: ParserOptions) -> PipelineResult<Expr> {
    let tokens = tokenize(source)?;
    Parser::with_options(tokens, options)
        .parse()
        .map_err(|error| vec![Diagnostic::from(&error)])
}

/// Parses the source and renders its tree in prefix form.
pub fn print_ast(source: &str, options: ParserOptions) -> PipelineResult<String> {
    parse(source, options).map(|expr| expr.ast_string())
}

/// Runs the whole pipeline: scan, parse, evaluate.
pub fn run(source: &str, options: ParserOptions) -> PipelineResult<Object> {
    let expr = parse(source, options)?;
    Interpreter::new()
        .eval_expression(&expr)
        .map_err(|error| vec![Diagnostic::from(&error)])
}
