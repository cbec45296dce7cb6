//! # Locale
//!
//! Country and language resolution for the portal.
//!
//! Four market countries, five UI languages, and the rules that decide
//! which apply to a request: URL path segments, persisted visitor
//! preferences, per-country defaults, and CDN geolocation headers.
//!
//! Resolution functions are total. A malformed path, a missing
//! preference, or an unreadable store never produces an error at this
//! layer; callers always receive a usable `Country`/`Language`, with
//! [`preference::StoredPreference`] telling them which case occurred.

pub mod country;
pub mod geo;
pub mod language;
pub mod path;
pub mod preference;

pub use country::{Country, CountryResolution};
pub use geo::resolve_geo_country;
pub use language::Language;
pub use path::{resolve_country_path, rewrite_country_path};
pub use preference::{
    load_country_preference, load_language_preference, resolve_language,
    store_country_preference, store_language_preference, MemoryPreferenceStore, PreferenceStore,
    StoreError, StoredPreference,
};
