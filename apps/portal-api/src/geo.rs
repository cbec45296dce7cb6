//! Country detection endpoint

use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use locale::{resolve_geo_country, Country};

#[derive(OpenApi)]
#[openapi(
    paths(detect_country),
    components(schemas(GeoResponse)),
    tags(
        (name = "Geo", description = "Country detection from request headers")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct GeoResponse {
    /// Lowercase country code
    #[schema(example = "rs")]
    pub country: String,
    #[schema(example = "Serbia")]
    pub name: String,
}

pub fn router() -> Router {
    Router::new().route("/geo", get(detect_country))
}

/// Detect the visitor's country from CDN geo headers or Accept-Language
#[utoipa::path(
    get,
    path = "",
    tag = "Geo",
    responses(
        (status = 200, description = "Detected country", body = GeoResponse)
    )
)]
async fn detect_country(headers: HeaderMap) -> Json<GeoResponse> {
    let country = resolve_geo_country(&headers, Country::DEFAULT);
    Json(GeoResponse {
        country: country.code().to_string(),
        name: country.display_name().to_string(),
    })
}
