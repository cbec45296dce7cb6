//! Country resolution from URL paths.

use crate::country::{Country, CountryResolution};

/// Resolves the country from the leading path segment.
///
/// `/` asks for a redirect to the default country. `/{code}/...` with a
/// known code is a match. Anything else falls back to the default. This
/// function is total.
pub fn resolve_country_path(path: &str) -> CountryResolution {
    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    match segments.next() {
        None | Some("") => CountryResolution::RedirectToDefault,
        Some(first) => match Country::from_code(first) {
            Some(country) => CountryResolution::Match(country),
            None => CountryResolution::Fallback(Country::DEFAULT),
        },
    }
}

/// Rewrites the leading country segment, preserving the rest of the
/// path. A path without a country segment gets one prepended.
pub fn rewrite_country_path(path: &str, country: Country) -> String {
    let trimmed = path.trim_start_matches('/');
    let mut segments = trimmed.splitn(2, '/');
    let first = segments.next().unwrap_or("");
    let rest = segments.next();

    let remainder = if Country::from_code(first).is_some() {
        rest.unwrap_or("")
    } else {
        trimmed
    };

    if remainder.is_empty() {
        format!("/{}", country.code())
    } else {
        format!("/{}/{}", country.code(), remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_default() {
        assert_eq!(resolve_country_path("/"), CountryResolution::RedirectToDefault);
        assert_eq!(resolve_country_path(""), CountryResolution::RedirectToDefault);
    }

    #[test]
    fn known_codes_match() {
        assert_eq!(
            resolve_country_path("/mk"),
            CountryResolution::Match(Country::Mk)
        );
        assert_eq!(
            resolve_country_path("/ba/blog/some-post"),
            CountryResolution::Match(Country::Ba)
        );
    }

    #[test]
    fn unknown_segment_falls_back() {
        assert_eq!(
            resolve_country_path("/about"),
            CountryResolution::Fallback(Country::DEFAULT)
        );
        assert_eq!(
            resolve_country_path("/de/blog"),
            CountryResolution::Fallback(Country::DEFAULT)
        );
    }

    #[test]
    fn rewrite_replaces_country_segment() {
        assert_eq!(rewrite_country_path("/rs/blog/post", Country::Mk), "/mk/blog/post");
        assert_eq!(rewrite_country_path("/rs", Country::Me), "/me");
    }

    #[test]
    fn rewrite_inserts_missing_segment() {
        assert_eq!(rewrite_country_path("/about", Country::Ba), "/ba/about");
        assert_eq!(rewrite_country_path("/", Country::Rs), "/rs");
    }
}
