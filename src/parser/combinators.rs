use regex::{Captures, Regex};

#[derive(Debug)]
pub(crate) enum ParseResult<'a, Output> {
    Ok((Output, &'a str)),
    Err,
}

impl<'a, T> ParseResult<'a, T> {
    pub(super) fn or_else<O>(self, op: O) -> Self
    where
        O: FnOnce() -> Self,
    {
        match self {
            Self::Ok(inner) => Self::Ok(inner),
            Self::Err => op(),
        }
    }
    pub(super) fn map<U, F>(self, op: F) -> ParseResult<'a, U>
    where
        F: FnOnce((T, &'a str)) -> (U, &'a str),
    {
        match self {
            Self::Ok(inner) => ParseResult::Ok(op(inner)),
            Self::Err => ParseResult::Err,
        }
    }
    pub(super) fn output(self) -> Option<T> {
        match self {
            Self::Ok((output, _)) => Some(output),
            Self::Err => None,
        }
    }
}

pub(super) trait Parser<'a, Output> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, Output>;
    fn map<F, MappedOutput>(self, map_fn: F) -> BoxedParser<'a, MappedOutput>
    where
        Self: Sized + 'a,
        Output: 'a,
        MappedOutput: 'a,
        F: Fn(Output) -> MappedOutput + 'a,
    {
        BoxedParser::new(map(self, map_fn))
    }
    fn or(self, parser: impl Parser<'a, Output> + 'a) -> BoxedParser<'a, Output>
    where
        Self: Sized + 'a,
        Output: 'a,
    {
        let alternative =
            move |input: &'a str| self.parse(input).or_else(|| parser.parse(input));
        BoxedParser::new(alternative)
    }
}

impl<'a, F, Output> Parser<'a, Output> for F
where
    F: Fn(&'a str) -> ParseResult<'a, Output>,
{
    fn parse(&self, input: &'a str) -> ParseResult<'a, Output> {
        self(input)
    }
}

pub(super) struct BoxedParser<'a, Output> {
    parser: Box<dyn Parser<'a, Output> + 'a>,
}

impl<'a, Output> BoxedParser<'a, Output> {
    fn new(parser: impl Parser<'a, Output> + 'a) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl<'a, Output> Parser<'a, Output> for BoxedParser<'a, Output> {
    fn parse(&self, input: &'a str) -> ParseResult<'a, Output> {
        self.parser.parse(input)
    }
}

pub(super) fn map<'a, F, A, B>(
    parser: impl Parser<'a, A>,
    map_fn: F,
) -> impl Fn(&'a str) -> ParseResult<'a, B>
where
    F: Fn(A) -> B,
{
    move |input| {
        parser
            .parse(input)
            .map(|(result, rest)| (map_fn(result), rest))
    }
}

/// Runs `regex` against the front of the input and hands over its captures.
pub(super) fn captures<'a>(
    regex: &'static Regex,
) -> impl Fn(&'a str) -> ParseResult<'a, Captures<'a>> {
    move |input| match regex.captures(input) {
        Some(caps) if caps.get(0).is_some_and(|m| m.start() == 0) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            ParseResult::Ok((caps, &input[end..]))
        }
        _ => ParseResult::Err,
    }
}

pub(super) fn end_of_input(input: &str) -> ParseResult<'_, ()> {
    if input.is_empty() {
        ParseResult::Ok(((), input))
    } else {
        ParseResult::Err
    }
}

pub(super) fn left<'a, A, B>(
    left_parser: impl Parser<'a, A>,
    right_parser: impl Parser<'a, B>,
) -> impl Fn(&'a str) -> ParseResult<'a, A> {
    move |input| {
        let ParseResult::Ok((result, rest)) = left_parser.parse(input) else {
            return ParseResult::Err;
        };
        right_parser.parse(rest).map(|(_, rest)| (result, rest))
    }
}
