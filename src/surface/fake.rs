//! In-memory Surface for tests
//!
//! Elements are registered with the exact selectors they answer to
//! (".nav-link", "#qty-input", "[data-close]") plus an optional parent.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use super::Surface;

#[derive(Default)]
struct FakeElement {
    selectors: Vec<String>,
    parent: Option<usize>,
    classes: BTreeSet<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    value: String,
}

#[derive(Default)]
pub struct FakeSurface {
    elements: RefCell<Vec<FakeElement>>,
    active: Cell<Option<usize>>,
    focus_moves: Cell<usize>,
    path: RefCell<String>,
    scroll_y: Cell<f64>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: &str) -> Self {
        let surface = Self::default();
        *surface.path.borrow_mut() = path.to_string();
        surface
    }

    pub fn add(&self, selectors: &[&str]) -> usize {
        self.insert(selectors, None)
    }

    pub fn add_child(&self, parent: usize, selectors: &[&str]) -> usize {
        self.insert(selectors, Some(parent))
    }

    fn insert(&self, selectors: &[&str], parent: Option<usize>) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            parent,
            ..Default::default()
        });
        elements.len() - 1
    }

    pub fn put_attr(&self, node: usize, name: &str, value: &str) {
        self.set_attribute(&node, name, value);
    }

    pub fn put_text(&self, node: usize, text: &str) {
        self.set_text(&node, text);
    }

    pub fn attr(&self, node: usize, name: &str) -> Option<String> {
        self.attribute(&node, name)
    }

    pub fn text_of(&self, node: usize) -> String {
        self.text(&node)
    }

    pub fn value_of(&self, node: usize) -> String {
        self.value(&node)
    }

    pub fn style(&self, node: usize, property: &str) -> Option<String> {
        self.elements.borrow()[node].styles.get(property).cloned()
    }

    pub fn classes(&self, node: usize) -> Vec<String> {
        self.elements.borrow()[node].classes.iter().cloned().collect()
    }

    /// Focus without counting it as a move made by the code under test
    pub fn put_focus(&self, node: Option<usize>) {
        self.active.set(node);
    }

    pub fn focus_moves(&self) -> usize {
        self.focus_moves.get()
    }

    pub fn put_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    fn matches(&self, node: usize, selector: &str) -> bool {
        self.elements.borrow()[node].selectors.iter().any(|s| s == selector)
    }

    fn is_descendant(&self, node: usize, root: usize) -> bool {
        let elements = self.elements.borrow();
        let mut current = elements[node].parent;
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = elements[id].parent;
        }
        false
    }

    fn ids(&self) -> std::ops::Range<usize> {
        0..self.elements.borrow().len()
    }
}

impl Surface for FakeSurface {
    type Node = usize;

    fn query(&self, selector: &str) -> Option<usize> {
        self.ids().find(|&id| self.matches(id, selector))
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.ids().filter(|&id| self.matches(id, selector)).collect()
    }

    fn query_in(&self, root: &usize, selector: &str) -> Option<usize> {
        self.query_all_in(root, selector).into_iter().next()
    }

    fn query_all_in(&self, root: &usize, selector: &str) -> Vec<usize> {
        self.ids()
            .filter(|&id| self.matches(id, selector) && self.is_descendant(id, *root))
            .collect()
    }

    fn closest(&self, node: &usize, selector: &str) -> Option<usize> {
        let mut current = Some(*node);
        while let Some(id) = current {
            if self.matches(id, selector) {
                return Some(id);
            }
            current = self.elements.borrow()[id].parent;
        }
        None
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.elements.borrow()[*node].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &usize, name: &str, value: &str) {
        self.elements.borrow_mut()[*node]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self, node: &usize) -> String {
        self.elements.borrow()[*node].text.clone()
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.elements.borrow_mut()[*node].text = text.to_string();
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.elements.borrow()[*node].classes.contains(class)
    }

    fn set_class(&self, node: &usize, class: &str, on: bool) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[*node].classes;
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        let mut elements = self.elements.borrow_mut();
        let styles = &mut elements[*node].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn value(&self, node: &usize) -> String {
        self.elements.borrow()[*node].value.clone()
    }

    fn set_value(&self, node: &usize, value: &str) {
        self.elements.borrow_mut()[*node].value = value.to_string();
    }

    fn focus(&self, node: &usize) {
        self.active.set(Some(*node));
        self.focus_moves.set(self.focus_moves.get() + 1);
    }

    fn active_element(&self) -> Option<usize> {
        self.active.get()
    }

    fn location_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        self.scroll_y.set(0.0);
    }
}
