use anyhow::{Context, Result};
use clap::Parser;
use num_enum::IntoPrimitive;

use expr_lox::diagnostic::{Diagnostic, Stage};
use expr_lox::lox_frontend::ParserOptions;
use expr_lox::{print_ast, run, tokenize, PipelineResult};

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Evaluates a single expression from a file, or line by line from a prompt.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Script holding one expression. Starts a prompt when omitted.
    script: Option<PathBuf>,

    /// Parse the right operand of + - * / with the additive rule, so that
    /// `1 - 2 - 3` means `1 - (2 - 3)`.
    #[clap(long)]
    legacy_precedence: bool,

    /// Print the parsed tree instead of evaluating it.
    #[clap(long, conflicts_with = "tokens")]
    print_ast: bool,

    /// Print the token stream instead of evaluating it.
    #[clap(long)]
    tokens: bool,
}

/// Process exit codes, following sysexits.h.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive)]
#[repr(u8)]
enum ExitStatus {
    Success = 0,
    Usage = 64,
    DataError = 65,
    NoInput = 66,
    Software = 70,
    IoError = 74,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(u8::from(status))
    }
}

impl Args {
    fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            right_recursive_operands: self.legacy_precedence,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitStatus::Usage.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    let status = match &args.script {
        Some(path) => run_file(path, &args),
        None => run_prompt(&args),
    };

    status.into()
}

fn run_file(path: &Path, args: &Args) -> ExitStatus {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file `{}`", path.display()));

    match source {
        Ok(source) => execute(&source, args),
        Err(e) => {
            eprintln!("{:#}", e);
            ExitStatus::NoInput
        }
    }
}

fn run_prompt(args: &Args) -> ExitStatus {
    match prompt_loop(args) {
        Ok(()) => ExitStatus::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitStatus::IoError
        }
    }
}

/// Errors in a line are reported and the prompt continues.
fn prompt_loop(args: &Args) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Failed to read line")?;
        if read == 0 {
            println!();
            return Ok(());
        }

        let line = input.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        execute(line, args);
    }
}

/// Runs the requested stages on `source` and prints the outcome.
fn execute(source: &str, args: &Args) -> ExitStatus {
    let options = args.parser_options();
    let output: PipelineResult<String> = if args.tokens {
        tokenize(source).map(|tokens| {
            tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        })
    } else if args.print_ast {
        print_ast(source, options)
    } else {
        run(source, options).map(|value| value.to_string())
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitStatus::Success
        }
        Err(diagnostics) => {
            report_errors(&diagnostics);
            failure_status(&diagnostics)
        }
    }
}

fn report_errors(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}

fn failure_status(diagnostics: &[Diagnostic]) -> ExitStatus {
    match diagnostics.first().map(|d| d.stage) {
        Some(Stage::Runtime) => ExitStatus::Software,
        _ => ExitStatus::DataError,
    }
}
