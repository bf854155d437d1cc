mod error;
pub use error::{Error, Result};

mod parser;
pub use parser::tokenizer::{FALSE, IF, PRINT, TRUE};
pub use parser::{
    is_condition_header, normalize, parse_statement, parse_test, phrases, Integer, Operator,
    Phrases, Statement, Term, Test,
};

mod interpreter;
pub use interpreter::{run, Environment, Interpreter, Value};
