use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::language::Language;

/// Supported market countries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Country {
    /// Serbia
    Rs,
    /// North Macedonia
    Mk,
    /// Montenegro
    Me,
    /// Bosnia and Herzegovina
    Ba,
}

impl Country {
    /// Country adopted when nothing else decides one.
    pub const DEFAULT: Country = Country::Rs;

    pub const ALL: [Country; 4] = [Country::Rs, Country::Mk, Country::Me, Country::Ba];

    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Rs => "Serbia",
            Country::Mk => "North Macedonia",
            Country::Me => "Montenegro",
            Country::Ba => "Bosnia and Herzegovina",
        }
    }

    /// Lowercase ISO 3166-1 alpha-2 code used in URLs and storage.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Rs => "rs",
            Country::Mk => "mk",
            Country::Me => "me",
            Country::Ba => "ba",
        }
    }

    /// Case-insensitive parse of a country code.
    pub fn from_code(code: &str) -> Option<Country> {
        match code.to_ascii_lowercase().as_str() {
            "rs" => Some(Country::Rs),
            "mk" => Some(Country::Mk),
            "me" => Some(Country::Me),
            "ba" => Some(Country::Ba),
            _ => None,
        }
    }

    /// Languages the site offers for this country.
    pub fn allowed_languages(&self) -> &'static [Language] {
        match self {
            Country::Rs => &[Language::Sr, Language::En],
            Country::Mk => &[Language::Mk, Language::Sq, Language::En],
            Country::Me => &[Language::Sr, Language::En],
            Country::Ba => &[Language::Bs, Language::En],
        }
    }

    pub fn default_language(&self) -> Language {
        match self {
            Country::Rs => Language::Sr,
            Country::Mk => Language::Mk,
            Country::Me => Language::Sr,
            Country::Ba => Language::Bs,
        }
    }

    pub fn allows_language(&self, language: Language) -> bool {
        self.allowed_languages().contains(&language)
    }
}

/// Outcome of resolving a country from a URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryResolution {
    /// The leading path segment named a known country.
    Match(Country),
    /// Root path; the caller should redirect to the default country.
    RedirectToDefault,
    /// Unknown leading segment; the default country applies.
    Fallback(Country),
}

impl CountryResolution {
    /// Country in effect regardless of how it was decided.
    pub fn country(&self) -> Country {
        match self {
            CountryResolution::Match(country) | CountryResolution::Fallback(country) => *country,
            CountryResolution::RedirectToDefault => Country::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn default_language_is_always_allowed() {
        for country in Country::iter() {
            assert!(
                country.allows_language(country.default_language()),
                "{country} default language not in its allowed set"
            );
        }
    }

    #[test]
    fn codes_round_trip() {
        for country in Country::iter() {
            assert_eq!(Country::from_code(country.code()), Some(country));
        }
        assert_eq!(Country::from_code("RS"), Some(Country::Rs));
        assert_eq!(Country::from_code("de"), None);
    }

    #[test]
    fn strum_parse_matches_code() {
        assert_eq!(Country::from_str("ba").unwrap(), Country::Ba);
        assert_eq!(Country::Mk.to_string(), "mk");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Country::Me).unwrap(), "\"me\"");
        let parsed: Country = serde_json::from_str("\"rs\"").unwrap();
        assert_eq!(parsed, Country::Rs);
    }
}
