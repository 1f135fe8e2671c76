use derive_more::{Constructor, Error};
use std::fmt;

/// Input file parsing. See [input::parse_input].
pub mod input;
/// Single-particle states file parsing. See [states::parse_states].
pub mod states;

pub type Result<T> = std::result::Result<T, InputParseError>;

/// Error in the input or states file.
#[derive(Debug, Clone, Error, Constructor)]
pub struct InputParseError {
    pub details: String,
}

impl fmt::Display for InputParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parsing error encountered: {}", self.details)
    }
}

impl From<std::num::ParseIntError> for InputParseError {
    fn from(err: std::num::ParseIntError) -> Self {
        InputParseError::new(format!("Expected to parse an integer, {}.", err))
    }
}

impl From<std::num::ParseFloatError> for InputParseError {
    fn from(err: std::num::ParseFloatError) -> Self {
        InputParseError::new(format!("Expected to parse a real number, {}.", err))
    }
}

impl From<csv::Error> for InputParseError {
    fn from(err: csv::Error) -> Self {
        InputParseError::new(err.to_string())
    }
}

impl From<std::io::Error> for InputParseError {
    fn from(err: std::io::Error) -> Self {
        InputParseError::new(err.to_string())
    }
}

/// Reader shared by the input and states files. Lines starting with `#` are
/// comments, columns are separated by spaces, lines can have any number of
/// columns. Quotes have no meaning.
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .comment(Some(b'#'))
        .delimiter(b' ')
        .quoting(false)
        .flexible(true);
    builder
}

/// Splits a record in its non empty fields. Repeated spaces and tabs leave
/// empty or composite fields in the raw record.
fn fields(rec: &csv::StringRecord) -> Vec<&str> {
    rec.iter().flat_map(|f| f.split_whitespace()).collect()
}
