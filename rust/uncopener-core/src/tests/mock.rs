//! In-memory element tree implementing `CandidateNode`

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::element::CandidateNode;

pub enum MockChild {
    Text(String),
    Element(MockNode),
    Comment,
}

struct MockInner {
    tag: String,
    content_editable: bool,
    attributes: RefCell<Vec<(String, String)>>,
    parent: RefCell<Weak<MockInner>>,
    children: RefCell<Vec<MockChild>>,
}

#[derive(Clone)]
pub struct MockNode(Rc<MockInner>);

impl MockNode {
    pub fn element(tag: &str) -> Self {
        Self::build(tag, false)
    }

    /// Element whose own `contentEditable` state is "true"
    pub fn editable(tag: &str) -> Self {
        Self::build(tag, true)
    }

    fn build(tag: &str, content_editable: bool) -> Self {
        MockNode(Rc::new(MockInner {
            tag: tag.to_string(),
            content_editable,
            attributes: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// `<tag>text</tag>`
    pub fn with_text(tag: &str, text: &str) -> Self {
        let node = Self::element(tag);
        node.push_text(text);
        node
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> &Self {
        self.0
            .attributes
            .borrow_mut()
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn push_text(&self, text: &str) -> &Self {
        self.0.children.borrow_mut().push(MockChild::Text(text.to_string()));
        self
    }

    pub fn push_comment(&self) -> &Self {
        self.0.children.borrow_mut().push(MockChild::Comment);
        self
    }

    pub fn append(&self, child: &MockNode) -> &Self {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0
            .children
            .borrow_mut()
            .push(MockChild::Element(child.clone()));
        self
    }

    /// Mimic the content script's write-back: text -> `<a>text</a>`
    pub fn replace_with_link(&self, label: &str) {
        let anchor = MockNode::with_text("a", label);
        self.0.children.borrow_mut().clear();
        self.append(&anchor);
    }

    pub fn element_child(&self, index: usize) -> Option<MockNode> {
        match self.0.children.borrow().get(index) {
            Some(MockChild::Element(node)) => Some(node.clone()),
            _ => None,
        }
    }

    pub fn child_count(&self) -> usize {
        self.0.children.borrow().len()
    }
}

impl CandidateNode for MockNode {
    fn tag_lowercase(&self) -> String {
        self.0.tag.to_ascii_lowercase()
    }

    fn content_editable_flag(&self) -> bool {
        self.0.content_editable
    }

    fn attribute_value(&self, name: &str) -> Option<String> {
        self.0
            .attributes
            .borrow()
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    fn parent_candidate(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(MockNode)
    }

    fn sole_text_child(&self) -> Option<String> {
        let children = self.0.children.borrow();
        match children.as_slice() {
            [MockChild::Text(text)] => Some(text.clone()),
            _ => None,
        }
    }
}

/// `<body>` > ... > `leaf`, returning the body so the tree stays alive
pub fn mount(path: &[&MockNode]) -> MockNode {
    let body = MockNode::element("body");
    let mut parent = body.clone();
    for node in path {
        parent.append(node);
        parent = (*node).clone();
    }
    body
}
