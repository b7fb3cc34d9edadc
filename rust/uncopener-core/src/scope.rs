//! URL scope matching
//!
//! Maps the current page URL to the list of element tags to scan, using the
//! configured `{url, elements}` entries. Entries are tried in configured order
//! and the first prefix match wins; there is no sorting by specificity.

use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::OnceLock;

// ==================== TYPE DEFINITIONS ====================

/// One configured scope rule
///
/// `url_prefix == None` is a stored entry without a usable `url`; it keeps
/// its position in the list but never matches.
///
/// `element_tags == None` means the rule never configured its own tags and
/// falls back to the global default list. `Some(vec![])` means "in scope,
/// scan nothing", which is also what `elements: null` or an unreadable
/// `elements` value decodes to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ScopeEntry {
    #[serde(
        rename = "url",
        alias = "urlPrefix",
        default,
        deserialize_with = "deserialize_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub url_prefix: Option<String>,
    #[serde(
        rename = "elements",
        alias = "elementTags",
        default,
        deserialize_with = "deserialize_elements",
        serialize_with = "serialize_elements",
        skip_serializing_if = "Option::is_none"
    )]
    pub element_tags: Option<Vec<String>>,
}

impl ScopeEntry {
    pub fn new(url_prefix: impl Into<String>, element_tags: Option<Vec<String>>) -> Self {
        Self {
            url_prefix: Some(url_prefix.into()),
            element_tags,
        }
    }

    /// Entry whose tags come from a semicolon-separated list
    pub fn with_elements(url_prefix: impl Into<String>, elements: &str) -> Self {
        Self::new(url_prefix, Some(parse_element_list(elements)))
    }

    /// Case-insensitive prefix test against a page URL
    pub fn matches(&self, current_url: &str) -> bool {
        self.matches_lowercase(&current_url.to_lowercase())
    }

    fn matches_lowercase(&self, url: &str) -> bool {
        match &self.url_prefix {
            Some(prefix) => url.starts_with(&prefix.to_lowercase()),
            None => false,
        }
    }
}

/// Result of scope matching, handed to the content script
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUrlEntry {
    pub url_prefix: String,
    pub element_tags: Vec<String>,
}

// ==================== MATCHING ====================

/// Find the scope entry active for `current_url`
///
/// - no entries: every page is in scope with the default tags
/// - otherwise: first entry whose prefix matches, or `None`
pub fn get_active_url_entry(
    current_url: &str,
    scope_entries: &[ScopeEntry],
    default_element_tags: &str,
) -> Option<ActiveUrlEntry> {
    if scope_entries.is_empty() {
        return Some(ActiveUrlEntry {
            url_prefix: String::new(),
            element_tags: parse_element_list(default_element_tags),
        });
    }

    let url = current_url.to_lowercase();
    scope_entries
        .iter()
        .find(|entry| entry.matches_lowercase(&url))
        .map(|entry| ActiveUrlEntry {
            url_prefix: entry.url_prefix.clone().unwrap_or_default(),
            element_tags: match &entry.element_tags {
                Some(tags) => normalize_tags(tags.iter().map(String::as_str)),
                None => parse_element_list(default_element_tags),
            },
        })
}

// ==================== ELEMENT LISTS ====================

static ELEMENT_NAME: OnceLock<Regex> = OnceLock::new();

/// Tag names usable as a bare CSS type selector
fn element_name() -> &'static Regex {
    ELEMENT_NAME.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap())
}

/// Parse `"Code; PRE ;;span"` into `["code", "pre", "span"]`
///
/// Segments are trimmed and lowercased. Empty segments and names that are not
/// plain element names (`c++`, `code)`) are dropped, duplicates removed keeping
/// the first occurrence.
pub fn parse_element_list(list: &str) -> Vec<String> {
    normalize_tags(list.split(';'))
}

/// Join tags back into the stored `"code;pre"` form
pub fn join_element_list<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(";")
}

/// CSS selector matching any of `tags`, `None` when there is nothing to scan
pub fn selector_for<S: AsRef<str>>(tags: &[S]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(","),
    )
}

fn normalize_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if element_name().is_match(&tag) && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

// ==================== SERDE HELPERS ====================

/// Stored `url`; anything but a string leaves the entry unmatchable
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUrl {
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawUrl> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawUrl::Text(url)) => Some(url),
        _ => None,
    })
}

/// Stored `elements` may be `"code;pre"` or `["code", "pre"]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawElements {
    Joined(String),
    List(Vec<String>),
    Other(IgnoredAny),
}

/// Only reached when `elements` is present; a missing field is `None` via
/// `#[serde(default)]`. Present-but-null or unreadable means "scan nothing".
fn deserialize_elements<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawElements> = Option::deserialize(deserializer)?;
    Ok(Some(match raw {
        Some(RawElements::Joined(list)) => parse_element_list(&list),
        Some(RawElements::List(list)) => normalize_tags(list.iter().map(String::as_str)),
        Some(RawElements::Other(_)) | None => Vec::new(),
    }))
}

fn serialize_elements<S>(tags: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match tags {
        Some(tags) => serializer.serialize_str(&join_element_list(tags)),
        None => serializer.serialize_none(),
    }
}

// ==================== TESTS ====================
