pub mod cursor;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;
pub mod token;

pub use lexer::{scan, Lexer};
pub use parser::{Parser, ParserOptions};
pub use printer::AstPrinter;
