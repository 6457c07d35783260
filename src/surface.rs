//! Rendering Surface
//!
//! The small slice of the DOM the page behaviors touch. `WebSurface` backs
//! it with the browser; tests use the in-memory `FakeSurface`.

pub mod web;
#[cfg(test)]
pub mod fake;

pub use web::WebSurface;

pub trait Surface {
    /// Element handle
    type Node: Clone + PartialEq;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First descendant of `root` matching `selector`
    fn query_in(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn query_all_in(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;
    /// Nearest inclusive ancestor matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);
    /// Inline style property; an empty value removes it
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Current value of a form input
    fn value(&self, node: &Self::Node) -> String;
    fn set_value(&self, node: &Self::Node, value: &str);

    fn focus(&self, node: &Self::Node);
    fn active_element(&self) -> Option<Self::Node>;

    fn location_path(&self) -> String;
    fn scroll_y(&self) -> f64;
    fn scroll_to_top(&self);
}
