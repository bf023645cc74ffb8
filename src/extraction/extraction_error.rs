use std::error::Error;
use std::fmt;

/// Everything that can go wrong between a raw page body and a `Listing`.
/// Each step of the payload descent fails with its own variant so a bad
/// page is diagnosable from the log line alone.
#[derive(Debug)]
pub enum ExtractionError {
    MissingScriptBlock,
    InvalidJson(String),
    MissingField(&'static str),
    UnexpectedShape(String),
    Deserialize(String),
    ZeroLivingArea,
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::MissingScriptBlock => write!(f, "__NEXT_DATA__ not found"),
            ExtractionError::InvalidJson(msg) => write!(f, "JSON parse error: {msg}"),
            ExtractionError::MissingField(name) => write!(f, "Missing field: {name}"),
            ExtractionError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            ExtractionError::Deserialize(msg) => write!(f, "Deserialize error: {msg}"),
            ExtractionError::ZeroLivingArea => write!(f, "Living area is zero"),
        }
    }
}

impl Error for ExtractionError {}
