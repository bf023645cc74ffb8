use serde::Deserialize;

// directions response
//  ├── status                 ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...)
//  ├── error_message
//  └── routes[]
//       └── legs[]
//            └── duration
//                 └── value   (seconds)

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
pub struct Leg {
    pub duration: TravelDuration,
}

#[derive(Debug, Deserialize)]
pub struct TravelDuration {
    pub value: i64,
}
