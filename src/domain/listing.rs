// src/domain/listing.rs

use crate::extraction::models::PropertyInfo;
use crate::extraction::ExtractionError;

/// One rental unit's extracted facts, flattened and validated.
/// This acts as an anti-corruption layer between the raw page payload
/// and everything downstream: once built it is only ever read.
#[derive(Debug, PartialEq, Clone)]
pub struct Listing {
    pub url: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sqft: f64,
    pub rent: i64,
    /// Price per square foot. Always `rent / sqft`, never stored separately.
    pub ppsf: f64,
    /// "street, city, state"
    pub address: String,
    /// Attached by the walkscore stage when that variant is enabled.
    pub walkscore: Option<f64>,
}

impl Listing {
    /// Builds a `Listing` from the raw wire model, validating that every
    /// required field exists. A listing with no living area cannot be
    /// priced per square foot, so `sqft <= 0` is rejected here rather
    /// than allowed to reach the division.
    pub fn from_property_info(url: &str, info: &PropertyInfo) -> Result<Self, ExtractionError> {
        let street = info
            .street_address
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ExtractionError::MissingField("streetAddress"))?;
        let city = info
            .city
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ExtractionError::MissingField("city"))?;
        let state = info
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ExtractionError::MissingField("state"))?;

        let rent = info.price.ok_or(ExtractionError::MissingField("price"))?;
        let bedrooms = info
            .bedrooms
            .ok_or(ExtractionError::MissingField("bedrooms"))?;
        let bathrooms = info
            .bathrooms
            .ok_or(ExtractionError::MissingField("bathrooms"))?;
        let sqft = info
            .living_area_value
            .ok_or(ExtractionError::MissingField("livingAreaValue"))?;

        if sqft <= 0.0 {
            return Err(ExtractionError::ZeroLivingArea);
        }

        Ok(Listing {
            url: url.to_string(),
            bedrooms,
            bathrooms,
            sqft,
            rent,
            ppsf: rent as f64 / sqft,
            address: format!("{street}, {city}, {state}"),
            walkscore: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_info() -> PropertyInfo {
        PropertyInfo {
            street_address: Some("795 Monroe Dr NE".to_string()),
            city: Some("Atlanta".to_string()),
            state: Some("GA".to_string()),
            price: Some(2100),
            bedrooms: Some(2),
            bathrooms: Some(1),
            living_area_value: Some(840.0),
        }
    }

    #[test]
    fn builds_listing_with_exact_ppsf() {
        let listing = Listing::from_property_info("https://x.test/l1", &full_info()).unwrap();
        assert_eq!(listing.ppsf, 2100.0 / 840.0);
        assert_eq!(listing.address, "795 Monroe Dr NE, Atlanta, GA");
        assert_eq!(listing.walkscore, None);
    }

    #[test]
    fn rejects_zero_living_area_before_dividing() {
        let mut info = full_info();
        info.living_area_value = Some(0.0);
        let err = Listing::from_property_info("https://x.test/l1", &info).unwrap_err();
        assert!(matches!(err, ExtractionError::ZeroLivingArea));
    }

    #[test]
    fn names_the_missing_field() {
        let mut info = full_info();
        info.price = None;
        let err = Listing::from_property_info("https://x.test/l1", &info).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("price")));
    }
}
