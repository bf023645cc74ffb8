use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum TableError {
    Csv(String),
    MissingUrlColumn,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Csv(msg) => write!(f, "CSV error: {msg}"),
            TableError::MissingUrlColumn => write!(f, "Input table has no `url` column"),
        }
    }
}

impl Error for TableError {}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::Csv(err.to_string())
    }
}
