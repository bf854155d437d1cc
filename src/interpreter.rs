use std::collections::HashMap;
use std::io::{self, Write};

use derivative::Derivative;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::parser::{
    normalize, parse_statement, phrases, Integer, Operator, Statement, Term, Test,
};

/// What an operand evaluates to. Bound names always read back as the text
/// they were assigned, never as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(Integer),
    Text(String),
}

impl Value {
    /// Coercion used by the ordering operators.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Self::Integer(n) => Ok(n.as_f64()),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::NumericFormat(text.clone())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Variable bindings, name to the literal right-hand side.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, returning the text it was bound to before.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let (name, value) = (name.into(), value.into());
        trace!(%name, %value, "define");
        self.variables.insert(name, value)
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Numbers stand for themselves and are never looked up.
    pub fn resolve(&self, term: &Term) -> Result<Value> {
        match term {
            Term::Number(n) => Ok(Value::Integer(n.clone())),
            Term::Name(name) => self
                .lookup(name)
                .map(|value| Value::Text(value.to_string()))
                .ok_or_else(|| Error::Name(name.clone())),
        }
    }

    pub fn evaluate(&self, test: &Test) -> Result<bool> {
        let outcome = match test {
            Test::Boolean(value) => *value,
            Test::Comparison(left, operator, right) => {
                let left = self.resolve(left)?;
                let right = self.resolve(right)?;
                operator.apply(&left, &right)?
            }
        };
        debug!(?test, outcome, "evaluated");
        Ok(outcome)
    }
}

impl Operator {
    /// `==` compares values as they are, so the text "5" differs from the
    /// number 5. `<` and `>` compare both sides as floats.
    pub fn apply(&self, left: &Value, right: &Value) -> Result<bool> {
        match self {
            Self::Equal => Ok(left == right),
            Self::LessThan => Ok(left.as_float()? < right.as_float()?),
            Self::GreaterThan => Ok(left.as_float()? > right.as_float()?),
        }
    }
}

/// Runs programs against one environment, printing to `out`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Interpreter<W: Write> {
    environment: Environment,
    #[derivative(Debug = "ignore")]
    out: W,
}

impl Interpreter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            environment: Environment::new(),
            out,
        }
    }

    pub fn with_environment(environment: Environment, out: W) -> Self {
        Self { environment, out }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes every statement of `source` in order. The first error aborts
    /// the rest; bindings made before it are kept.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let code = normalize(source);
        for phrase in phrases(&code) {
            let statement = parse_statement(phrase?)?;
            self.execute(&statement)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Print(message) => {
                let value = match self.environment.resolve(message) {
                    Ok(value) => value,
                    Err(err) if err.is_name_error() => Value::Text(message.to_string()),
                    Err(err) => return Err(err),
                };
                writeln!(self.out, "{value}")?;
            }
            Statement::Condition { test, action } => {
                if self.environment.evaluate(test)? {
                    self.run(action)?;
                } else {
                    trace!(%action, "skipped");
                }
            }
            Statement::Assignment { name, value } => {
                self.environment.define(name.as_str(), value.as_str());
            }
        }
        Ok(())
    }
}

/// Runs `source` in a fresh environment, printing to standard output.
pub fn run(source: &str) -> Result<()> {
    Interpreter::stdout().run(source)
}
