use super::ast::Operator;
use crate::error::{Error, Result};
use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

pub const IF: &str = "אם";
pub const PRINT: &str = "הדפס";
pub const TRUE: &str = "אמת";
pub const FALSE: &str = "שקר";

const EQEQUAL: &str = "==";
const LESS: &str = "<";
const GREATER: &str = ">";

pub(crate) const OPERATORS: [(&str, Operator); 3] = [
    (EQEQUAL, Operator::Equal),
    (LESS, Operator::LessThan),
    (GREATER, Operator::GreaterThan),
];

const NEWLINE: char = '\n';

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(?:", alternative!($($ts),+), ")")
    }}
}

macro_rules! named {
    ($name:literal, $($ts:expr),+) => {{
        concatcp!(r"(?P<", $name, ">", alternative!($($ts),+), ")")
    }}
}

macro_rules! whole {
    ($t:expr) => {{
        concatcp!("^", group!($t), "$")
    }}
}

// Operands are free text and may contain spaces. The left operand stops at
// the leftmost operator token surrounded by single spaces.
const S_BOOL: &str = named!("bool", TRUE, FALSE);
const S_OPERATOR: &str = named!("operator", EQEQUAL, LESS, GREATER);
const S_COMPARISON: &str = concatcp!(r"(?P<operand1>.+?) ", S_OPERATOR, r" (?P<operand2>.+)");
const S_STATEMENT: &str = named!("statement", S_BOOL, S_COMPARISON);
const S_PRINT: &str = concatcp!(PRINT, r" (?P<message>.+)");
const S_CONDITION: &str = concatcp!(
    IF,
    " ",
    S_STATEMENT,
    r":\n(?P<indent>[^\S\n]+)(?P<action>.+)"
);
// The name is one whitespace-free token, so the first ` = ` delimits it.
const S_VARIABLE_DEFINITION: &str = r"(?P<var_name>\S+) = (?P<var_value>.*)";
const S_PHRASE: &str = concatcp!(
    "^",
    named!("phrase", S_PRINT, S_CONDITION, S_VARIABLE_DEFINITION)
);
const S_NUMBER: &str = r"[0-9]+";
const S_BLANK_LINE: &str = r"^\s*$";

static PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(S_PHRASE).expect("Error compiling regex."));
pub(super) static WHOLE_BOOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_BOOL)).expect("Error compiling regex."));
pub(super) static WHOLE_COMPARISON: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_COMPARISON)).expect("Error compiling regex."));
pub(super) static WHOLE_PRINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_PRINT)).expect("Error compiling regex."));
pub(super) static WHOLE_CONDITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_CONDITION)).expect("Error compiling regex."));
pub(super) static WHOLE_VARIABLE_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_VARIABLE_DEFINITION)).expect("Error compiling regex."));
pub(super) static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_NUMBER)).expect("Error compiling regex."));
static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_BLANK_LINE).expect("Error compiling regex."));

/// Drops every empty or whitespace-only line. A condition's action has to sit
/// on the line right after its header, so blank lines would break it apart.
pub fn normalize(source: &str) -> String {
    source
        .split(NEWLINE)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !BLANK_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// True for a line that opens a condition and still waits for its action.
pub fn is_condition_header(line: &str) -> bool {
    line.starts_with(concatcp!(IF, " ")) && line.trim_end().ends_with(':')
}

/// Splits normalized text into phrases, one statement each.
pub fn phrases(code: &str) -> Phrases<'_> {
    Phrases { rest: code }
}

/// Lazy phrase sequence over a shrinking view of the source. After the first
/// syntax error the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct Phrases<'a> {
    rest: &'a str,
}

impl<'a> Phrases<'a> {
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Phrases<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(phrase) = PHRASE.captures(self.rest).and_then(|c| c.name("phrase")) else {
            let remainder = std::mem::take(&mut self.rest);
            return Some(Err(Error::Syntax {
                remainder: remainder.to_string(),
            }));
        };
        let rest = &self.rest[phrase.end()..];
        self.rest = rest.strip_prefix(NEWLINE).unwrap_or(rest);
        tracing::trace!(phrase = phrase.as_str(), "segmented");
        Some(Ok(phrase.as_str()))
    }
}

impl std::iter::FusedIterator for Phrases<'_> {}
