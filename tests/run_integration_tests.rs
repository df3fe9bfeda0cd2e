use expr_lox::lox_frontend::ParserOptions;
use expr_lox::{print_ast, run};

use regex::Regex;
use test_generator::test_resources;

#[derive(Debug, PartialEq)]
struct Expectation {
    value: Option<String>,
    ast: Option<String>,
    errors: Vec<String>,
}

#[test_resources("tests/cases/**/*.lox")]
fn test_expression_cases(file: &str) {
    let source = std::fs::read_to_string(file).unwrap();
    let options = get_parser_options(&source);
    let expected = get_expected_output(&source);

    let mut actual = Expectation {
        value: None,
        ast: None,
        errors: vec![],
    };

    match run(&source, options) {
        Ok(value) => actual.value = Some(value.to_string()),
        Err(diagnostics) => actual.errors = diagnostics.iter().map(|d| d.to_string()).collect(),
    }

    if expected.ast.is_some() {
        actual.ast = print_ast(&source, options).ok();
    }

    assert_eq!(expected, actual, "in {}", file);
}

fn get_parser_options(source: &str) -> ParserOptions {
    let legacy_regexer = Regex::new(r"^// legacy precedence\s*$").unwrap();
    ParserOptions {
        right_recursive_operands: source.lines().any(|line| legacy_regexer.is_match(line)),
    }
}

fn get_expected_output(source: &str) -> Expectation {
    let value_regexer = Regex::new(r"// expect: (.*)$").unwrap();
    let ast_regexer = Regex::new(r"// expect ast: (.*)$").unwrap();
    let error_regexer = Regex::new(r"// expect error: (.*)$").unwrap();

    let mut result = Expectation {
        value: None,
        ast: None,
        errors: vec![],
    };

    for line in source.lines() {
        if let Some(r) = value_regexer.captures(line) {
            result.value.replace(r.get(1).unwrap().as_str().to_owned());
        }
        if let Some(r) = ast_regexer.captures(line) {
            result.ast.replace(r.get(1).unwrap().as_str().to_owned());
        }
        if let Some(r) = error_regexer.captures(line) {
            result.errors.push(r.get(1).unwrap().as_str().to_owned());
        }
    }

    result
}
