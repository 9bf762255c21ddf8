//! In-memory [`PageDom`] for behavior tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::dom::PageDom;

/// A child node appended by a behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryChild {
    pub tag: &'static str,
    pub class: Option<String>,
    /// Text for `<li>` items, raw markup for appended `<div>` fragments.
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub display: String,
    pub text: String,
    pub children: Vec<MemoryChild>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MemoryDocument {
    body_classes: BTreeSet<String>,
    elements: HashMap<String, MemoryElement>,
}

/// Document with a `<body>` and whichever ids a test registers.
#[derive(Debug, Default)]
pub struct MemoryDom {
    doc: RefCell<MemoryDocument>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing empty elements for each of `ids`.
    pub fn with_elements(ids: &[&str]) -> Self {
        let dom = Self::new();
        for id in ids {
            dom.doc.borrow_mut().elements.insert((*id).to_owned(), MemoryElement::default());
        }
        dom
    }

    /// Snapshot of element `id`.
    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.doc.borrow().elements.get(id).cloned()
    }

    pub fn children(&self, id: &str) -> Vec<MemoryChild> {
        self.element(id).map(|el| el.children).unwrap_or_default()
    }

    fn with_element(&self, id: &str, f: impl FnOnce(&mut MemoryElement)) {
        if let Some(el) = self.doc.borrow_mut().elements.get_mut(id) {
            f(el);
        }
    }
}

impl PageDom for MemoryDom {
    fn body_has_class(&self, class: &str) -> bool {
        self.doc.borrow().body_classes.contains(class)
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        let mut doc = self.doc.borrow_mut();
        if doc.body_classes.remove(class) {
            false
        } else {
            doc.body_classes.insert(class.to_owned());
            true
        }
    }

    fn add_body_class(&self, class: &str) {
        self.doc.borrow_mut().body_classes.insert(class.to_owned());
    }

    fn display(&self, id: &str) -> Option<String> {
        self.doc.borrow().elements.get(id).map(|el| el.display.clone())
    }

    fn set_display(&self, id: &str, value: &str) {
        self.with_element(id, |el| el.display = value.to_owned());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.with_element(id, |el| {
            el.text = text.to_owned();
            el.children.clear();
        });
    }

    fn clear_children(&self, id: &str) {
        self.with_element(id, |el| el.children.clear());
    }

    fn append_list_item(&self, id: &str, text: &str) {
        self.with_element(id, |el| {
            el.children.push(MemoryChild { tag: "li", class: None, content: text.to_owned() });
        });
    }

    fn append_html(&self, id: &str, class: &str, inner_html: &str) {
        self.with_element(id, |el| {
            el.children.push(MemoryChild {
                tag: "div",
                class: Some(class.to_owned()),
                content: inner_html.to_owned(),
            });
        });
    }
}
