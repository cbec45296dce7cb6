//! Country detection from CDN and browser headers.

use http::HeaderMap;

use crate::country::Country;

/// Geo headers set by common CDN/proxy layers, in precedence order.
const GEO_HEADERS: [&str; 3] = ["cf-ipcountry", "x-vercel-ip-country", "x-country-code"];

/// Detects the visitor's country from request headers.
///
/// CDN geolocation headers win; failing those, the region subtags of
/// `Accept-Language` are scanned (e.g. `sr-RS` yields Serbia). Unknown
/// or missing signals resolve to `default`.
pub fn resolve_geo_country(headers: &HeaderMap, default: Country) -> Country {
    for name in GEO_HEADERS {
        if let Some(country) = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(Country::from_code)
        {
            return country;
        }
    }

    if let Some(accept_language) = headers.get("accept-language").and_then(|v| v.to_str().ok()) {
        for tag in accept_language.split(',') {
            // "sr-RS;q=0.9" -> region subtag "RS"
            let tag = tag.split(';').next().unwrap_or("").trim();
            if let Some(region) = tag.split('-').nth(1) {
                if let Some(country) = Country::from_code(region) {
                    return country;
                }
            }
        }
    }

    default
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn cdn_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", HeaderValue::from_static("MK"));
        headers.insert(
            "accept-language",
            HeaderValue::from_static("sr-RS,sr;q=0.9"),
        );
        assert_eq!(resolve_geo_country(&headers, Country::DEFAULT), Country::Mk);
    }

    #[test]
    fn accept_language_region_is_used() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "accept-language",
            HeaderValue::from_static("en-US,en;q=0.9,bs-BA;q=0.8"),
        );
        assert_eq!(resolve_geo_country(&headers, Country::DEFAULT), Country::Ba);
    }

    #[test]
    fn unknown_signals_fall_back_to_default() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", HeaderValue::from_static("DE"));
        headers.insert("accept-language", HeaderValue::from_static("de-DE,de;q=0.9"));
        assert_eq!(resolve_geo_country(&headers, Country::Rs), Country::Rs);
    }

    #[test]
    fn empty_headers_fall_back_to_default() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_geo_country(&headers, Country::Me), Country::Me);
    }
}
