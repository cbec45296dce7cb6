use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Supported UI languages.
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
pub enum Language {
    /// Serbian
    Sr,
    /// Macedonian
    Mk,
    /// Albanian
    Sq,
    /// Bosnian
    Bs,
    /// English
    En,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Sr => "Srpski",
            Language::Mk => "Македонски",
            Language::Sq => "Shqip",
            Language::Bs => "Bosanski",
            Language::En => "English",
        }
    }

    /// Lowercase ISO 639-1 code used in URLs and storage keys.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Sr => "sr",
            Language::Mk => "mk",
            Language::Sq => "sq",
            Language::Bs => "bs",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "sr" => Some(Language::Sr),
            "mk" => Some(Language::Mk),
            "sq" => Some(Language::Sq),
            "bs" => Some(Language::Bs),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip() {
        for language in Language::iter() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::Sq).unwrap(), "\"sq\"");
        let parsed: Language = serde_json::from_str("\"bs\"").unwrap();
        assert_eq!(parsed, Language::Bs);
    }
}
