// src/extraction/extractor.rs

use crate::domain::Listing;
use crate::extraction::models::PropertyInfo;
use crate::extraction::ExtractionError;
use scraper::{Html, Selector};
use serde_json::Value;

/// Turns a raw listing page body into a validated `Listing`.
pub fn extract_listing(url: &str, html: &str) -> Result<Listing, ExtractionError> {
    let data = extract_next_data(html)?;
    let info = extract_property_info(&data)?;
    Listing::from_property_info(url, &info)
}

fn extract_next_data(html: &str) -> Result<Value, ExtractionError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
        .map_err(|e| ExtractionError::UnexpectedShape(e.to_string()))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or(ExtractionError::MissingScriptBlock)?;

    let json_text = element
        .text()
        .next()
        .ok_or(ExtractionError::MissingScriptBlock)?;
    let data: Value =
        serde_json::from_str(json_text).map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;
    Ok(data)
}

/// Descends to the gdpClientCache payload, one named step at a time.
/// The cache value is itself a JSON-encoded string; its first entry's
/// `property` object is the source of truth. The page does not promise a
/// stable entry order, so "first" is whatever iteration yields.
fn extract_property_info(data: &Value) -> Result<PropertyInfo, ExtractionError> {
    let mut node = data;
    for step in ["props", "pageProps", "componentProps", "gdpClientCache"] {
        node = node.get(step).ok_or(ExtractionError::MissingField(step))?;
    }

    let cache_text = node.as_str().ok_or_else(|| {
        ExtractionError::UnexpectedShape("gdpClientCache is not a string".to_string())
    })?;
    let cache: Value = serde_json::from_str(cache_text)
        .map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;
    let entries = cache.as_object().ok_or_else(|| {
        ExtractionError::UnexpectedShape("gdpClientCache is not an object".to_string())
    })?;

    let first = entries.values().next().ok_or_else(|| {
        ExtractionError::UnexpectedShape("gdpClientCache has no entries".to_string())
    })?;
    let property = first
        .get("property")
        .ok_or(ExtractionError::MissingField("property"))?;

    serde_json::from_value(property.clone())
        .map_err(|e| ExtractionError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A minimal listing page with the nested payload the real site embeds.
    fn listing_page(price: i64, sqft: f64) -> String {
        let property = json!({
            "streetAddress": "795 Monroe Dr NE",
            "city": "Atlanta",
            "state": "GA",
            "price": price,
            "bedrooms": 2,
            "bathrooms": 1,
            "livingAreaValue": sqft,
        });
        let cache = json!({ "ForRent-cache-key": { "property": property } }).to_string();
        let next_data = json!({
            "props": { "pageProps": { "componentProps": { "gdpClientCache": cache } } }
        });
        format!(
            "<html><body><script id=\"__NEXT_DATA__\" type=\"application/json\">{next_data}</script></body></html>"
        )
    }

    #[test]
    fn extracts_listing_from_embedded_payload() {
        let html = listing_page(2100, 840.0);
        let listing = extract_listing("https://x.test/l1", &html).unwrap();
        assert_eq!(listing.rent, 2100);
        assert_eq!(listing.sqft, 840.0);
        assert_eq!(listing.ppsf, 2100.0 / 840.0);
        assert_eq!(listing.bedrooms, 2);
        assert_eq!(listing.address, "795 Monroe Dr NE, Atlanta, GA");
    }

    #[test]
    fn page_without_script_block_is_missing_script() {
        let err = extract_listing("u", "<html><body>nope</body></html>").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingScriptBlock));
    }

    #[test]
    fn unparseable_script_text_is_invalid_json() {
        let html = "<html><script id=\"__NEXT_DATA__\">{not json</script></html>";
        let err = extract_listing("u", html).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidJson(_)));
    }

    #[test]
    fn truncated_payload_names_the_missing_step() {
        let html = "<html><script id=\"__NEXT_DATA__\">{\"props\":{\"pageProps\":{}}}</script></html>";
        let err = extract_listing("u", html).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("componentProps")));
    }

    #[test]
    fn zero_sqft_fails_extraction_not_the_process() {
        let html = listing_page(2100, 0.0);
        let err = extract_listing("u", &html).unwrap_err();
        assert!(matches!(err, ExtractionError::ZeroLivingArea));
    }
}
