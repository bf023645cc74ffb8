use serde::Deserialize;

// __NEXT_DATA__
//  └── props
//       └── pageProps
//            └── componentProps
//                 └── gdpClientCache          (JSON-encoded string)
//                      └── { <cache key>: { property: PropertyInfo } }

/// The `property` sub-object of the first gdpClientCache entry. Every
/// field is optional here; required-field validation happens when the
/// domain `Listing` is built from this.
#[derive(Debug, Deserialize)]
pub struct PropertyInfo {
    #[serde(rename = "streetAddress")]
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub price: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    #[serde(rename = "livingAreaValue")]
    pub living_area_value: Option<f64>,
}
