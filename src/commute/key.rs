use crate::commute::CommuteError;
use std::env;
use std::fs;

/// Both the conventional key file name and the environment variable.
pub const API_KEY_NAME: &str = "GMAPS_API_KEY";

/// Resolves the directions API key: a `GMAPS_API_KEY` file in the working
/// directory wins, then the environment variable. Absence is fatal at
/// startup, never a per-row failure.
pub fn load_api_key() -> Result<String, CommuteError> {
    if let Ok(contents) = fs::read_to_string(API_KEY_NAME) {
        return Ok(contents.trim().to_string());
    }
    env::var(API_KEY_NAME)
        .map(|key| key.trim().to_string())
        .map_err(|_| CommuteError::MissingApiKey)
}
