mod ast;
mod combinators;
mod grammar;
pub mod tokenizer;

pub use ast::*;
pub use grammar::{parse_statement, parse_test};
pub use tokenizer::{is_condition_header, normalize, phrases, Phrases};
