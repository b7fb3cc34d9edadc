//! UncLinker: the full conversion pipeline
//!
//! eligibility -> allowlist -> conversion, with the settings passed in
//! explicitly. The content script builds one linker per scan pass (and a new
//! one on every settings change) instead of reading a global.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::element::{replace_with_link, validate_code_element, CandidateNode};
use crate::scope::selector_for;
use crate::settings::Settings;
use crate::unc::{is_unc_allowed, UncPath};

// =============================================================================
// Types
// =============================================================================

/// What a candidate element turns into
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LinkPlan {
    /// Original UNC text, kept as the link label
    pub unc: UncPath,
    /// `scheme://...` target
    pub href: String,
}

// =============================================================================
// UncLinker
// =============================================================================

#[wasm_bindgen]
pub struct UncLinker {
    settings: Settings,
}

impl Default for UncLinker {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl UncLinker {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings.normalized(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Tags to scan on `current_url`, `None` when the page is out of scope
    pub fn active_tags(&self, current_url: &str) -> Option<Vec<String>> {
        self.settings
            .active_entry(current_url)
            .map(|entry| entry.element_tags)
    }

    /// Pipeline over already-extracted text
    pub fn plan_text(&self, text: &str) -> Option<LinkPlan> {
        self.plan_path(UncPath::parse(text)?)
    }

    /// Pipeline over a DOM element
    pub fn plan<N: CandidateNode>(&self, element: &N) -> Option<LinkPlan> {
        let text = validate_code_element(element).text?;
        self.plan_path(UncPath::from_validated(text))
    }

    fn plan_path(&self, unc: UncPath) -> Option<LinkPlan> {
        if !is_unc_allowed(unc.as_str(), &self.settings.allowed_uncs) {
            return None;
        }
        let href = unc.to_url(&self.settings.scheme);
        Some(LinkPlan { unc, href })
    }

    fn link_one(&self, element: &Element) -> Result<bool, JsValue> {
        match self.plan(element) {
            Some(plan) => {
                replace_with_link(element, &plan)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[wasm_bindgen]
impl UncLinker {
    /// Create from a stored settings record (`undefined`/`null` -> defaults)
    #[wasm_bindgen(constructor)]
    pub fn js_new(settings: JsValue) -> Result<UncLinker, JsValue> {
        let settings = Settings::from_js(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::new(settings))
    }

    /// Normalised settings currently in use
    #[wasm_bindgen(js_name = getSettings)]
    pub fn js_settings(&self) -> JsValue {
        match serde_wasm_bindgen::to_value(&self.settings) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(&format!("[UncLinker] Serialization failed: {:?}", e).into());
                JsValue::NULL
            }
        }
    }

    /// Element tags to scan on `url`, or `null` when out of scope
    #[wasm_bindgen(js_name = activeTags)]
    pub fn js_active_tags(&self, url: &str) -> JsValue {
        match self.active_tags(url) {
            Some(tags) => serde_wasm_bindgen::to_value(&tags).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// `{ unc, href }` for a text candidate, or `null`
    #[wasm_bindgen(js_name = planText)]
    pub fn js_plan_text(&self, text: &str) -> JsValue {
        match self.plan_text(text) {
            Some(plan) => serde_wasm_bindgen::to_value(&plan).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Convert one element in place; `true` if it was linked
    #[wasm_bindgen(js_name = linkElement)]
    pub fn js_link_element(&self, element: &Element) -> Result<bool, JsValue> {
        self.link_one(element)
    }

    /// Convert every eligible element under `root` for page `url`
    ///
    /// A failure on one element is logged and skipped. Returns the number of
    /// elements linked.
    #[wasm_bindgen(js_name = linkAll)]
    pub fn js_link_all(&self, root: &Element, url: &str) -> Result<u32, JsValue> {
        let Some(tags) = self.active_tags(url) else {
            return Ok(0);
        };
        let Some(selector) = selector_for(&tags) else {
            return Ok(0);
        };

        let candidates = match root.query_selector_all(&selector) {
            Ok(candidates) => candidates,
            Err(e) => {
                web_sys::console::error_1(&format!("[UncLinker] Bad selector {:?}: {:?}", selector, e).into());
                return Ok(0);
            }
        };
        let mut linked = 0;
        for i in 0..candidates.length() {
            let Some(element) = candidates.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            match self.link_one(&element) {
                Ok(true) => linked += 1,
                Ok(false) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("[UncLinker] Link failed: {:?}", e).into());
                }
            }
        }

        if linked > 0 {
            web_sys::console::log_1(&format!(
                "[UncLinker] Linked {} of {} <{}> candidates",
                linked,
                candidates.length(),
                tags.join(">, <")
            ).into());
        }

        Ok(linked)
    }
}
