//! Write access to process-wide document state (root/body classes, styles).
//!
//! Everything that mutates `<html>` or `<body>` goes through [`DocumentSink`]
//! so the browser document can be swapped for a recording fake in tests.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

pub trait DocumentSink {
    /// Sets a CSS custom property on the document root element.
    fn set_root_property(&self, name: &str, value: &str);
    fn set_root_class(&self, class: &str, present: bool);
    fn set_body_class(&self, class: &str, present: bool);
    fn has_body_class(&self, class: &str) -> bool;
    /// Sets an inline style property on `<body>`.
    fn set_body_style(&self, property: &str, value: &str);
}

/// The live browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebDocument;

impl WebDocument {
    fn root() -> Option<HtmlElement> {
        window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn body() -> Option<HtmlElement> {
        window()?.document()?.body()
    }
}

fn toggle_class(element: &HtmlElement, class: &str, present: bool) {
    let list = element.class_list();
    let _ = if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

impl DocumentSink for WebDocument {
    fn set_root_property(&self, name: &str, value: &str) {
        if let Some(root) = Self::root() {
            let _ = root.style().set_property(name, value);
        }
    }

    fn set_root_class(&self, class: &str, present: bool) {
        if let Some(root) = Self::root() {
            toggle_class(&root, class, present);
        }
    }

    fn set_body_class(&self, class: &str, present: bool) {
        if let Some(body) = Self::body() {
            toggle_class(&body, class, present);
        }
    }

    fn has_body_class(&self, class: &str) -> bool {
        Self::body()
            .map(|body| body.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_body_style(&self, property: &str, value: &str) {
        if let Some(body) = Self::body() {
            let _ = body.style().set_property(property, value);
        }
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingDocument;

#[cfg(test)]
mod recording {
    use super::DocumentSink;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory document used by unit tests.
    #[derive(Default)]
    pub(crate) struct RecordingDocument {
        pub root_properties: RefCell<BTreeMap<String, String>>,
        pub root_classes: RefCell<BTreeSet<String>>,
        pub body_classes: RefCell<BTreeSet<String>>,
        pub body_styles: RefCell<BTreeMap<String, String>>,
    }

    impl RecordingDocument {
        pub fn root_property(&self, name: &str) -> Option<String> {
            self.root_properties.borrow().get(name).cloned()
        }

        pub fn root_has_class(&self, class: &str) -> bool {
            self.root_classes.borrow().contains(class)
        }

        pub fn body_style(&self, property: &str) -> Option<String> {
            self.body_styles.borrow().get(property).cloned()
        }
    }

    fn set(classes: &RefCell<BTreeSet<String>>, class: &str, present: bool) {
        let mut classes = classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    impl DocumentSink for RecordingDocument {
        fn set_root_property(&self, name: &str, value: &str) {
            self.root_properties
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }

        fn set_root_class(&self, class: &str, present: bool) {
            set(&self.root_classes, class, present);
        }

        fn set_body_class(&self, class: &str, present: bool) {
            set(&self.body_classes, class, present);
        }

        fn has_body_class(&self, class: &str) -> bool {
            self.body_classes.borrow().contains(class)
        }

        fn set_body_style(&self, property: &str, value: &str) {
            self.body_styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }
    }
}
