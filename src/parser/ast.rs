use super::tokenizer::{NUMBER, OPERATORS};

/// One classified phrase.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Print(Term),
    /// The action stays unparsed until the test holds.
    Condition {
        test: Test,
        action: String,
    },
    /// The value is kept as written and only read back through lookups.
    Assignment {
        name: String,
        value: String,
    },
}

/// The boolean test of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Test {
    Boolean(bool),
    Comparison(Term, Operator, Term),
}

/// An operand: a decimal literal or anything else, which is looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Number(Integer),
    Name(String),
}

impl Term {
    pub fn from_token(token: &str) -> Self {
        if NUMBER.is_match(token) {
            Self::Number(Integer::from_digits(token))
        } else {
            Self::Name(token.to_string())
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A non-negative integer of any length, held as its digits without leading
/// zeros. Equal numbers have equal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    pub fn from_digits(digits: &str) -> Self {
        match digits.trim_start_matches('0') {
            "" => Self("0".to_string()),
            trimmed => Self(trimmed.to_string()),
        }
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Digit runs beyond the float range come out as infinity.
    pub fn as_f64(&self) -> f64 {
        self.0.parse::<f64>().unwrap_or(f64::INFINITY)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    LessThan,
    GreaterThan,
}

impl Operator {
    pub(crate) fn from_symbol(symbol: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(lexeme, _)| *lexeme == symbol)
            .map(|(_, op)| *op)
    }

    pub fn symbol(&self) -> &'static str {
        OPERATORS
            .iter()
            .find(|(_, op)| op == self)
            .map(|(lexeme, _)| *lexeme)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
