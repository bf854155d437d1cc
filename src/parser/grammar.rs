// # ========================= THE GRAMMAR =========================
//
// Keywords are Hebrew words; `'...'` marks literal text.
//
// phrase:      print | condition | assignment
// print:       'הדפס' ' ' message
// condition:   'אם' ' ' statement ':' NEWLINE INDENT action
// assignment:  NAME ' = ' value
// statement:   bool | comparison
// bool:        'אמת' | 'שקר'
// comparison:  operand ' ' ('==' | '<' | '>') ' ' operand
//
// Segmentation tries the phrase alternatives in the order above. Once a
// phrase is isolated it is classified here, condition first.

use regex::Captures;

use super::ast::*;
use super::combinators::*;
use super::tokenizer::{
    TRUE, WHOLE_BOOL, WHOLE_COMPARISON, WHOLE_CONDITION, WHOLE_PRINT, WHOLE_VARIABLE_DEFINITION,
};
use crate::error::{Error, Result};

/// Classifies one phrase. A phrase that segmentation accepted but no shape
/// accepts here is a grammar inconsistency.
pub fn parse_statement(phrase: &str) -> Result<Statement> {
    let statement = left(condition.or(print).or(assignment), end_of_input)
        .parse(phrase)
        .output()
        .ok_or_else(|| Error::Grammar(phrase.to_string()))??;
    tracing::debug!(?statement, "classified");
    Ok(statement)
}

/// Classifies the boolean test of a condition.
pub fn parse_test(text: &str) -> Result<Test> {
    left(boolean.or(comparison), end_of_input)
        .parse(text)
        .output()
        .ok_or_else(|| Error::Grammar(text.to_string()))?
}

fn group<'c>(caps: &Captures<'c>, name: &str) -> &'c str {
    caps.name(name).map_or("", |m| m.as_str())
}

// condition: 'אם' ' ' statement ':' NEWLINE INDENT action
fn condition(input: &str) -> ParseResult<'_, Result<Statement>> {
    captures(&WHOLE_CONDITION)
        .map(|caps| {
            Ok(Statement::Condition {
                test: parse_test(group(&caps, "statement"))?,
                action: group(&caps, "action").to_string(),
            })
        })
        .parse(input)
}

// print: 'הדפס' ' ' message
fn print(input: &str) -> ParseResult<'_, Result<Statement>> {
    captures(&WHOLE_PRINT)
        .map(|caps| Ok(Statement::Print(Term::from_token(group(&caps, "message")))))
        .parse(input)
}

// assignment: NAME ' = ' value
fn assignment(input: &str) -> ParseResult<'_, Result<Statement>> {
    captures(&WHOLE_VARIABLE_DEFINITION)
        .map(|caps| {
            Ok(Statement::Assignment {
                name: group(&caps, "var_name").to_string(),
                value: group(&caps, "var_value").to_string(),
            })
        })
        .parse(input)
}

// bool: 'אמת' | 'שקר'
fn boolean(input: &str) -> ParseResult<'_, Result<Test>> {
    captures(&WHOLE_BOOL)
        .map(|caps| Ok(Test::Boolean(group(&caps, "bool") == TRUE)))
        .parse(input)
}

// comparison: operand ' ' ('==' | '<' | '>') ' ' operand
fn comparison(input: &str) -> ParseResult<'_, Result<Test>> {
    captures(&WHOLE_COMPARISON)
        .map(|caps| {
            let symbol = group(&caps, "operator");
            let operator =
                Operator::from_symbol(symbol).ok_or_else(|| Error::Grammar(symbol.to_string()))?;
            Ok(Test::Comparison(
                Term::from_token(group(&caps, "operand1")),
                operator,
                Term::from_token(group(&caps, "operand2")),
            ))
        })
        .parse(input)
}
