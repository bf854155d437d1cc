use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a program can fail. Nothing is recovered except a missing name
/// inside a print message.
#[derive(Debug, Error)]
pub enum Error {
    /// No statement shape matches the text at the current position.
    #[error("No phrase found in `{remainder}`")]
    Syntax { remainder: String },
    /// A token is neither a number nor a bound variable.
    #[error("{0} not found")]
    Name(String),
    /// `<` or `>` got an operand that does not read as a number.
    #[error("could not convert string to float: '{0}'")]
    NumericFormat(String),
    /// A segmented phrase that no statement shape accepts on its own.
    #[error("internal grammar inconsistency while classifying `{0}`")]
    Grammar(String),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_name_error(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    /// Short classification used when reporting to the user.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "SyntaxError",
            Self::Name(_) => "NameError",
            Self::NumericFormat(_) => "ValueError",
            Self::Grammar(_) => "InternalError",
            Self::Io(_) => "IOError",
        }
    }
}
