// CORS: one allowed origin, taken from configuration

use axum::http::{header::InvalidHeaderValue, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}
