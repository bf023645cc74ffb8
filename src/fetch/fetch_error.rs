use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Io(String),
    BadHeader(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Io(msg) => write!(f, "I/O error: {msg}"),
            FetchError::BadHeader(msg) => write!(f, "Bad header: {msg}"),
        }
    }
}

impl Error for FetchError {}
