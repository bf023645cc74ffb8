// src/commute/oracle.rs

use crate::commute::models::DirectionsResponse;
use crate::commute::CommuteError;
use chrono::{DateTime, Local};
use reqwest::blocking::Client;
use std::time::Duration;

const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

pub const DEFAULT_MODE: &str = "driving";

/// Client for the external directions service. Constructed once at
/// startup and handed to the pipeline; no global lazily-initialized
/// state anywhere.
pub struct CommuteOracle {
    client: Client,
    api_key: String,
}

impl CommuteOracle {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, CommuteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CommuteError::Network(e.to_string()))?;
        Ok(CommuteOracle { client, api_key })
    }

    /// Travel time in minutes for one origin/destination pair, departing
    /// at `departure` (which must be in the future for the service to
    /// accept it).
    pub fn duration_minutes(
        &self,
        from_address: &str,
        to_address: &str,
        departure: DateTime<Local>,
        mode: &str,
    ) -> Result<f64, CommuteError> {
        let response: DirectionsResponse = self
            .client
            .get(DIRECTIONS_URL)
            .query(&[
                ("origin", from_address),
                ("destination", to_address),
                ("mode", mode),
                ("departure_time", &departure.timestamp().to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .map_err(|e| CommuteError::Network(e.to_string()))?
            .json()
            .map_err(|e| CommuteError::Decode(e.to_string()))?;

        first_leg_minutes(&response)
    }

    /// One duration per origin address, in input order. Fails the whole
    /// batch on the first error; the pipeline turns that into "unknown"
    /// for every address of the time window.
    pub fn durations(
        &self,
        from_addresses: &[String],
        to_address: &str,
        departure: DateTime<Local>,
        mode: &str,
    ) -> Result<Vec<f64>, CommuteError> {
        from_addresses
            .iter()
            .map(|from| self.duration_minutes(from, to_address, departure, mode))
            .collect()
    }
}

/// First route, first leg, seconds to minutes.
fn first_leg_minutes(response: &DirectionsResponse) -> Result<f64, CommuteError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Err(CommuteError::NoRoute),
        "REQUEST_DENIED" => {
            return Err(CommuteError::Auth(
                response.error_message.clone().unwrap_or_default(),
            ))
        }
        other => {
            return Err(CommuteError::Api(format!(
                "{other}: {}",
                response.error_message.as_deref().unwrap_or("")
            )))
        }
    }

    let leg = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .ok_or(CommuteError::NoRoute)?;
    Ok(leg.duration.value as f64 / 60.0)
}
