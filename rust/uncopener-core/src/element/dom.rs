//! `web_sys` binding for the eligibility check, plus the link write-back

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use super::CandidateNode;
use crate::linker::LinkPlan;

impl CandidateNode for Element {
    fn tag_lowercase(&self) -> String {
        self.tag_name().to_ascii_lowercase()
    }

    /// Own `contentEditable` state; `isContentEditable` is inherited and would
    /// leak editability from above `<body>` into the walk
    fn content_editable_flag(&self) -> bool {
        self.dyn_ref::<HtmlElement>()
            .map(|el| el.content_editable().eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    fn attribute_value(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn parent_candidate(&self) -> Option<Self> {
        self.parent_element()
    }

    fn sole_text_child(&self) -> Option<String> {
        let children = self.child_nodes();
        if children.length() != 1 {
            return None;
        }
        let child = children.get(0)?;
        if child.node_type() != Node::TEXT_NODE {
            return None;
        }
        child.text_content()
    }
}

/// Replace the element's text with `<a href="{href}">{unc}</a>`
pub fn replace_with_link(element: &Element, plan: &LinkPlan) -> Result<(), JsValue> {
    let document = element
        .owner_document()
        .ok_or_else(|| JsValue::from_str("Element has no owner document"))?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &plan.href)?;
    anchor.set_text_content(Some(plan.unc.as_str()));

    element.set_text_content(None);
    element.append_child(&anchor)?;
    Ok(())
}
