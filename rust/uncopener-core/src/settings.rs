//! Stored configuration record
//!
//! Mirrors what the options page writes to extension storage:
//! `{ scheme, htmlElements, activeUrls, allowedUncs }`. Missing fields take
//! their defaults, so an empty store behaves as "all pages, `<code>` only,
//! every UNC path allowed".

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::scope::{get_active_url_entry, parse_element_list, ActiveUrlEntry, ScopeEntry};
use crate::unc::DEFAULT_SCHEME;

/// Default semicolon-separated element list
pub const DEFAULT_HTML_ELEMENTS: &str = "code";

// =============================================================================
// Errors
// =============================================================================

/// Settings decoding errors
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    InvalidJson(String),
    InvalidRecord(String),
    SerializationError(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidJson(msg) => write!(f, "Invalid settings JSON: {}", msg),
            SettingsError::InvalidRecord(msg) => write!(f, "Invalid settings record: {}", msg),
            SettingsError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// =============================================================================
// Settings
// =============================================================================

/// UncOpener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Custom URL scheme. Default: "uncopener"
    pub scheme: String,
    /// Semicolon-separated tags scanned when no entry overrides them. Default: "code"
    pub html_elements: String,
    /// Ordered scope entries; empty means every page
    pub active_urls: Vec<ScopeEntry>,
    /// Ordered allowed UNC prefixes; empty means every path
    pub allowed_uncs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            html_elements: DEFAULT_HTML_ELEMENTS.to_string(),
            active_urls: Vec::new(),
            allowed_uncs: Vec::new(),
        }
    }
}

impl Settings {
    /// Decode a stored record from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SettingsError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode a stored record from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, SettingsError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| SettingsError::InvalidRecord(e.to_string()))
    }

    /// Decode a stored record handed over from extension storage
    ///
    /// `null`/`undefined` (nothing stored yet) yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, SettingsError> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| SettingsError::InvalidRecord(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(|e| SettingsError::SerializationError(e.to_string()))
    }

    /// Clean up values as the options page would before saving
    ///
    /// Blank scheme/element list fall back to defaults, allowlist entries are
    /// trimmed with blanks dropped, scope URLs are trimmed. Order is kept.
    pub fn normalized(&self) -> Self {
        let scheme = self.scheme.trim();
        let scheme = if scheme.is_empty() { DEFAULT_SCHEME } else { scheme };

        let elements = parse_element_list(&self.html_elements);
        let html_elements = if elements.is_empty() {
            DEFAULT_HTML_ELEMENTS.to_string()
        } else {
            elements.join(";")
        };

        let active_urls = self
            .active_urls
            .iter()
            .map(|entry| ScopeEntry {
                url_prefix: entry.url_prefix.as_deref().map(|url| url.trim().to_string()),
                element_tags: entry.element_tags.clone(),
            })
            .collect();

        let allowed_uncs = self
            .allowed_uncs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            scheme: scheme.to_string(),
            html_elements,
            active_urls,
            allowed_uncs,
        }
    }

    /// Parsed default element tags
    pub fn default_element_tags(&self) -> Vec<String> {
        parse_element_list(&self.html_elements)
    }

    /// Scope entry active for `current_url`, if any
    pub fn active_entry(&self, current_url: &str) -> Option<ActiveUrlEntry> {
        get_active_url_entry(current_url, &self.active_urls, &self.html_elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scheme, "uncopener");
        assert_eq!(settings.html_elements, "code");
        assert!(settings.active_urls.is_empty());
        assert!(settings.allowed_uncs.is_empty());
    }

    #[test]
    fn test_empty_record_takes_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
        assert_eq!(Settings::from_json("null").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_record() {
        let json = r#"{
            "scheme": "myopener",
            "htmlElements": "code;pre",
            "activeUrls": [
                { "url": "https://wiki.example.com/", "elements": "code" },
                { "url": "https://docs.example.com/" }
            ],
            "allowedUncs": ["\\\\fileserver\\share\\"],
            "somethingElse": 1
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.scheme, "myopener");
        assert_eq!(settings.default_element_tags(), vec!["code", "pre"]);
        assert_eq!(settings.active_urls.len(), 2);
        assert_eq!(settings.active_urls[1].element_tags, None);
        assert_eq!(settings.allowed_uncs, vec!["\\\\fileserver\\share\\"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidJson(_)));

        let err = Settings::from_json(r#"{"activeUrls": 5}"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidRecord(_)));
        assert!(err.to_string().starts_with("Invalid settings record"));
    }

    #[test]
    fn test_entry_without_url_does_not_shadow_later_entries() {
        let settings = Settings::from_json(
            r#"{"activeUrls":[{"elements":"pre"},{"url":"https://wiki/","elements":"code"}]}"#,
        )
        .unwrap();

        let active = settings.active_entry("https://wiki/page").unwrap();
        assert_eq!(active.url_prefix, "https://wiki/");
        assert_eq!(active.element_tags, vec!["code"]);
        assert!(settings.active_entry("https://unrelated.example/").is_none());

        // Still unmatchable after normalisation
        let normalized = settings.normalized();
        assert_eq!(normalized.active_urls[0].url_prefix, None);
        assert!(normalized.active_entry("https://unrelated.example/").is_none());
    }

    #[test]
    fn test_null_elements_do_not_fall_back() {
        let settings = Settings::from_json(
            r#"{"htmlElements":"code;pre","activeUrls":[{"url":"https://a/","elements":null}]}"#,
        )
        .unwrap();
        let active = settings.active_entry("https://a/x").unwrap();
        assert!(active.element_tags.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            scheme: "uncopener".to_string(),
            html_elements: "code;pre".to_string(),
            active_urls: vec![ScopeEntry::with_elements("https://a/", "kbd;samp")],
            allowed_uncs: vec!["\\\\srv\\".to_string()],
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""elements":"kbd;samp""#));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_normalized() {
        let settings = Settings {
            scheme: "  ".to_string(),
            html_elements: " ; ".to_string(),
            active_urls: vec![ScopeEntry::new(" https://a/ ", Some(vec!["pre".to_string()]))],
            allowed_uncs: vec![" \\\\srv\\a\\ ".to_string(), "".to_string(), "\\\\srv\\b".to_string()],
        }
        .normalized();

        assert_eq!(settings.scheme, "uncopener");
        assert_eq!(settings.html_elements, "code");
        assert_eq!(settings.active_urls[0].url_prefix.as_deref(), Some("https://a/"));
        assert_eq!(settings.active_urls[0].element_tags, Some(vec!["pre".to_string()]));
        assert_eq!(settings.allowed_uncs, vec!["\\\\srv\\a\\", "\\\\srv\\b"]);
    }

    #[test]
    fn test_normalized_keeps_element_case_rules() {
        let settings = Settings {
            html_elements: "CODE; Pre;code".to_string(),
            ..Settings::default()
        }
        .normalized();
        assert_eq!(settings.html_elements, "code;pre");
    }

    #[test]
    fn test_active_entry() {
        let settings = Settings {
            active_urls: vec![ScopeEntry::new("https://wiki.example.com/", None)],
            html_elements: "code;pre".to_string(),
            ..Settings::default()
        };
        let active = settings.active_entry("https://WIKI.example.com/x").unwrap();
        assert_eq!(active.element_tags, vec!["code", "pre"]);
        assert!(settings.active_entry("https://other.example.com/").is_none());
    }
}
