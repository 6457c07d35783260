//! Site Navigation
//!
//! Active-link marking and the collapsible mobile menu.

use std::rc::Rc;

use crate::surface::Surface;

pub const NAV_LINK: &str = ".nav-link";
pub const NAV: &str = ".nav";
pub const NAV_TOGGLE: &str = ".nav-toggle";

const GLYPH_OPEN: &str = "✕";
const GLYPH_CLOSED: &str = "☰";

/// Whether a nav link with `href` points at `path`
pub fn is_active_link(path: &str, href: &str, home_href: &str) -> bool {
    path.ends_with(href) || (path.ends_with('/') && href == home_href)
}

/// Re-derive the `active` class on every nav link. Returns how many links ended up active.
pub fn mark_active_links<S: Surface>(surface: &S, path: &str, home_href: &str) -> usize {
    let links = surface.query_all(NAV_LINK);
    for link in &links {
        surface.set_class(link, "active", false);
    }

    let mut active = 0;
    for link in &links {
        let Some(href) = surface.attribute(link, "href") else {
            continue;
        };
        if is_active_link(path, &href, home_href) {
            surface.set_class(link, "active", true);
            active += 1;
        }
    }
    active
}

/// Mobile menu open/closed state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state, returning the new one
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn glyph(&self) -> &'static str {
        if self.open { GLYPH_OPEN } else { GLYPH_CLOSED }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Mobile menu bound to its toggle button and panel
pub struct MobileNav<S: Surface> {
    surface: Rc<S>,
    toggle_button: S::Node,
    panel: S::Node,
    state: NavToggle,
}

impl<S: Surface> MobileNav<S> {
    /// `None` when the page has no toggle button or nav panel
    pub fn attach(surface: Rc<S>) -> Option<Self> {
        let toggle_button = surface.query(NAV_TOGGLE)?;
        let panel = surface.query(NAV)?;
        let nav = Self {
            surface,
            toggle_button,
            panel,
            state: NavToggle::default(),
        };
        nav.render();
        Some(nav)
    }

    pub fn toggle_button(&self) -> &S::Node {
        &self.toggle_button
    }

    /// Links inside the panel that close it when activated
    pub fn links(&self) -> Vec<S::Node> {
        self.surface.query_all_in(&self.panel, NAV_LINK)
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        let open = self.state.toggle();
        log::debug!("[NAV] Menu {}", if open { "opened" } else { "closed" });
        self.render();
    }

    pub fn on_link_activated(&mut self) {
        if self.state.close() {
            self.render();
        }
    }

    fn render(&self) {
        self.surface.set_class(&self.panel, "open", self.state.is_open());
        self.surface.set_attribute(&self.toggle_button, "aria-expanded", self.state.aria_expanded());
        self.surface.set_text(&self.toggle_button, self.state.glyph());
    }
}
