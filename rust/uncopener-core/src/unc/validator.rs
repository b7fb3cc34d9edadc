//! UNC path syntax validation
//!
//! A candidate is a UNC path when, as a whole:
//! - its length is within `MIN_UNC_LENGTH..=MAX_UNC_LENGTH`
//! - it starts with `\\`
//! - it contains no CR/LF anywhere
//! - the part after `\\` contains none of `< > : " | ? *` or a control char
//!
//! Lengths are counted in UTF-16 code units, the unit DOM strings and
//! Windows' MAX_PATH both use.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::converter::convert_unc_to_url;
use super::UNC_LEAD;

/// Shortest accepted path (`\\x`)
pub const MIN_UNC_LENGTH: usize = 3;

/// Longest accepted path (MAX_PATH)
pub const MAX_UNC_LENGTH: usize = 260;

static FORBIDDEN_CHARS: OnceLock<Regex> = OnceLock::new();

fn forbidden_chars() -> &'static Regex {
    FORBIDDEN_CHARS.get_or_init(|| Regex::new(r#"[<>:"|?*\x00-\x1F]"#).unwrap())
}

/// Check whether `text` is syntactically a UNC path
pub fn is_valid_unc_path(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let len = text.encode_utf16().count();
    if !(MIN_UNC_LENGTH..=MAX_UNC_LENGTH).contains(&len) {
        return false;
    }

    let Some(rest) = text.strip_prefix(UNC_LEAD) else {
        return false;
    };

    if text.contains(['\r', '\n']) {
        return false;
    }

    !forbidden_chars().is_match(rest)
}

/// A string that passed [`is_valid_unc_path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UncPath(String);

impl UncPath {
    /// Try to parse a string as a UNC path
    pub fn parse(text: &str) -> Option<Self> {
        is_valid_unc_path(text).then(|| UncPath(text.to_string()))
    }

    /// Wrap text the eligibility check already validated
    pub(crate) fn from_validated(text: String) -> Self {
        debug_assert!(is_valid_unc_path(&text));
        UncPath(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into a `scheme://` URL
    pub fn to_url(&self, scheme: &str) -> String {
        convert_unc_to_url(&self.0, scheme)
    }
}

impl TryFrom<String> for UncPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_unc_path(&value) {
            Ok(UncPath(value))
        } else {
            Err(format!("not a valid UNC path: {:?}", value))
        }
    }
}

impl From<UncPath> for String {
    fn from(path: UncPath) -> Self {
        path.0
    }
}

impl AsRef<str> for UncPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UncPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
