use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::surface::Surface;

#[derive(Debug, Default)]
struct Node {
    data: HashMap<String, String>,
    classes: Vec<String>,
    added: Vec<String>,
    text: String,
    texts: Vec<String>,
    styles: HashMap<String, String>,
}

/// In-memory element recording everything done to it.
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    node: Rc<RefCell<Node>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let element = Self::new();
        element.node.borrow_mut().text = text.to_string();
        element
    }

    pub fn with_data(name: &str, value: &str) -> Self {
        let element = Self::new();
        element.set_data(name, value);
        element
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    /// How many times `class` was added, including repeats.
    pub fn times_added(&self, class: &str) -> usize {
        self.node.borrow().added.iter().filter(|c| *c == class).count()
    }

    /// Every text content written, in order.
    pub fn texts(&self) -> Vec<String> {
        self.node.borrow().texts.clone()
    }

    pub fn style(&self, property: &str) -> String {
        self.node.borrow().styles.get(property).cloned().unwrap_or_default()
    }
}

impl Surface for FakeElement {
    fn data(&self, name: &str) -> Option<String> {
        self.node.borrow().data.get(name).cloned()
    }

    fn set_data(&self, name: &str, value: &str) {
        self.node.borrow_mut().data.insert(name.to_string(), value.to_string());
    }

    fn add_class(&self, class: &str) {
        let mut node = self.node.borrow_mut();
        node.added.push(class.to_string());
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn text(&self) -> String {
        self.node.borrow().text.clone()
    }

    fn show_text(&self, text: &str) {
        let mut node = self.node.borrow_mut();
        node.text = text.to_string();
        node.texts.push(text.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.node.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }
}
