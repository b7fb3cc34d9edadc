//! Free-function JS exports
//!
//! Thin wrappers around the pure Rust API. `null`/`undefined` inputs are
//! treated as absent and classified as "not valid"/"no restriction" the same
//! way the Rust functions treat empty input.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::element::validate_code_element;
use crate::scope::{get_active_url_entry, join_element_list, parse_element_list, ScopeEntry};
use crate::settings::{Settings, DEFAULT_HTML_ELEMENTS};
use crate::unc::{convert_unc_to_url, is_unc_allowed, is_valid_unc_path};

/// Decode an optional JS value, `null`/`undefined` -> `T::default()`
///
/// A value of the wrong shape is logged and reported as `None`; callers turn
/// that into "not in scope" / "not allowed" rather than throwing.
fn decode_or_log<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Option<T> {
    if value.is_null() || value.is_undefined() {
        return Some(T::default());
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            web_sys::console::error_1(&format!("[uncopener] Failed to parse {}: {}", what, e).into());
            None
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(v) => v,
        Err(e) => {
            web_sys::console::error_1(&format!("[uncopener] Serialization failed: {:?}", e).into());
            JsValue::NULL
        }
    }
}

#[wasm_bindgen(js_name = isValidUncPath)]
pub fn js_is_valid_unc_path(text: Option<String>) -> bool {
    text.as_deref().is_some_and(is_valid_unc_path)
}

#[wasm_bindgen(js_name = convertUncToUrl)]
pub fn js_convert_unc_to_url(unc_path: &str, scheme: &str) -> String {
    convert_unc_to_url(unc_path, scheme)
}

/// `{ urlPrefix, elementTags }` or `null` when the page is out of scope
///
/// Unreadable scope entries count as out of scope.
#[wasm_bindgen(js_name = getActiveUrlEntry)]
pub fn js_get_active_url_entry(
    current_url: &str,
    scope_entries: JsValue,
    default_element_tags: Option<String>,
) -> JsValue {
    let Some(entries) = decode_or_log::<Vec<ScopeEntry>>(scope_entries, "scope entries") else {
        return JsValue::NULL;
    };
    let defaults = default_element_tags.unwrap_or_else(|| DEFAULT_HTML_ELEMENTS.to_string());

    match get_active_url_entry(current_url, &entries, &defaults) {
        Some(entry) => to_js(&entry),
        None => JsValue::NULL,
    }
}

/// Unreadable allowlists allow nothing
#[wasm_bindgen(js_name = isUncAllowed)]
pub fn js_is_unc_allowed(unc_path: Option<String>, allowed_prefixes: JsValue) -> bool {
    match decode_or_log::<Vec<String>>(allowed_prefixes, "allowed prefixes") {
        Some(prefixes) => is_unc_allowed(unc_path.as_deref().unwrap_or_default(), &prefixes),
        None => false,
    }
}

/// `{ valid, text? }`
#[wasm_bindgen(js_name = validateCodeElement)]
pub fn js_validate_code_element(element: &Element) -> JsValue {
    to_js(&validate_code_element(element))
}

#[wasm_bindgen(js_name = parseElementList)]
pub fn js_parse_element_list(list: &str) -> js_sys::Array {
    parse_element_list(list)
        .into_iter()
        .map(|tag| JsValue::from_str(&tag))
        .collect()
}

#[wasm_bindgen(js_name = serializeElementList)]
pub fn js_serialize_element_list(tags: js_sys::Array) -> String {
    let tags: Vec<String> = tags.iter().filter_map(|t| t.as_string()).collect();
    join_element_list(&tags)
}

/// Stored record with defaults filled in and values cleaned up
#[wasm_bindgen(js_name = normalizeSettings)]
pub fn js_normalize_settings(settings: JsValue) -> Result<JsValue, JsValue> {
    let settings = Settings::from_js(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(to_js(&settings.normalized()))
}
