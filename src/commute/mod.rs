mod commute_error;
mod departure;
mod key;
mod models;
mod oracle;

pub use commute_error::CommuteError;
pub use departure::departure_tomorrow;
pub use key::load_api_key;
pub use oracle::{CommuteOracle, DEFAULT_MODE};
