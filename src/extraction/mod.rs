mod extraction_error;
mod extractor;
pub mod models;

pub use extraction_error::ExtractionError;
pub use extractor::extract_listing;
