use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CommuteError {
    MissingApiKey,
    Network(String),
    Decode(String),
    Auth(String),
    Api(String),
    NoRoute,
}

impl fmt::Display for CommuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommuteError::MissingApiKey => {
                write!(f, "No GMAPS_API_KEY found in working directory or environment")
            }
            CommuteError::Network(msg) => write!(f, "Network error: {msg}"),
            CommuteError::Decode(msg) => write!(f, "Response decode error: {msg}"),
            CommuteError::Auth(msg) => write!(f, "Directions auth rejected: {msg}"),
            CommuteError::Api(msg) => write!(f, "Directions API error: {msg}"),
            CommuteError::NoRoute => write!(f, "No route found"),
        }
    }
}

impl Error for CommuteError {}
