//! Element eligibility
//!
//! An element may be converted only when:
//! 1. neither it nor any ancestor below `<body>` is editable
//! 2. it has exactly one child node, and that child is text
//! 3. that text is a valid UNC path
//!
//! Rule 2 also makes conversion idempotent: a converted element's only child
//! is the `<a>` we inserted, not text.
//!
//! The checks run over [`CandidateNode`] so the logic is independent of the
//! concrete DOM binding. `dom.rs` implements it for `web_sys::Element`.

pub mod dom;

pub use dom::*;

use serde::{Deserialize, Serialize};

use crate::unc::is_valid_unc_path;

/// Attribute that marks an editing host
pub const CONTENTEDITABLE_ATTR: &str = "contenteditable";

/// Tags whose content is always user-editable
const EDITABLE_TAGS: [&str; 2] = ["input", "textarea"];

// ==================== NODE ABSTRACTION ====================

/// Read-only view of a DOM element as seen by the eligibility check
pub trait CandidateNode: Clone {
    /// Lowercase tag name
    fn tag_lowercase(&self) -> String;

    /// Whether this node itself is an editing host (not inherited state;
    /// ancestors are visited separately)
    fn content_editable_flag(&self) -> bool;

    fn attribute_value(&self, name: &str) -> Option<String>;

    fn parent_candidate(&self) -> Option<Self>;

    /// Text of the only child node, `None` unless there is exactly one child
    /// and it is a text node
    fn sole_text_child(&self) -> Option<String>;

    /// Editable-content marker on this node alone
    fn has_editable_marker(&self) -> bool {
        if self.content_editable_flag() {
            return true;
        }
        let tag = self.tag_lowercase();
        if EDITABLE_TAGS.contains(&tag.as_str()) {
            return true;
        }
        matches!(
            self.attribute_value(CONTENTEDITABLE_ATTR),
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case("true")
        )
    }
}

// ==================== RESULT ====================

/// Outcome of [`validate_code_element`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ElementValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ElementValidation {
    pub fn valid(text: String) -> Self {
        Self {
            valid: true,
            text: Some(text),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            text: None,
        }
    }
}

// ==================== CHECKS ====================

/// True if `node` or an ancestor below `<body>` is editable
pub fn is_within_editable<N: CandidateNode>(node: &N) -> bool {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if n.tag_lowercase() == "body" {
            return false;
        }
        if n.has_editable_marker() {
            return true;
        }
        current = n.parent_candidate();
    }
    false
}

/// Full eligibility check, returning the UNC text on success
pub fn validate_code_element<N: CandidateNode>(element: &N) -> ElementValidation {
    if is_within_editable(element) {
        return ElementValidation::invalid();
    }

    match element.sole_text_child() {
        Some(text) if is_valid_unc_path(&text) => ElementValidation::valid(text),
        _ => ElementValidation::invalid(),
    }
}
