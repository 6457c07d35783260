//! Sticky Header
//!
//! Shrinks the header once the page is scrolled past a threshold and hides
//! it while scrolling down. Scroll events are folded into at most one
//! pending animation frame.

use std::rc::Rc;

use crate::config::StorefrontConfig;
use crate::surface::Surface;

pub const SITE_HEADER: &str = ".site-header";
pub const LOGO: &str = ".logo";

/// Visual state of the header after a sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub shrunk: bool,
    pub hidden: bool,
}

#[derive(Clone, Debug)]
pub struct HeaderScroll {
    last: f64,
    state: HeaderState,
    shrink_threshold: f64,
    hide_threshold: f64,
}

impl HeaderScroll {
    pub fn new(initial: f64, shrink_threshold: f64, hide_threshold: f64) -> Self {
        Self {
            last: initial,
            state: HeaderState::default(),
            shrink_threshold,
            hide_threshold,
        }
    }

    /// Fold one scroll position into the state
    pub fn sample(&mut self, current: f64) -> HeaderState {
        let delta = current - self.last;

        self.state.shrunk = current > self.shrink_threshold;

        if delta.abs() > self.hide_threshold {
            self.state.hidden = delta > 0.0;
        } else if current <= self.shrink_threshold {
            self.state.hidden = false;
        }

        self.last = current;
        self.state
    }
}

/// At most one pending frame
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Header element plus its scroll state
pub struct HeaderController<S: Surface> {
    surface: Rc<S>,
    header: S::Node,
    scroll: HeaderScroll,
    gate: FrameGate,
}

impl<S: Surface> HeaderController<S> {
    /// `None` when the page has no site header
    pub fn attach(surface: Rc<S>, config: &StorefrontConfig) -> Option<Self> {
        let header = surface.query(SITE_HEADER)?;
        let scroll = HeaderScroll::new(surface.scroll_y(), config.shrink_threshold, config.hide_threshold);
        Some(Self {
            surface,
            header,
            scroll,
            gate: FrameGate::default(),
        })
    }

    /// Called on every scroll event; true when a frame must be scheduled
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Called from the scheduled frame
    pub fn on_frame(&mut self) {
        let state = self.scroll.sample(self.surface.scroll_y());
        self.surface.set_class(&self.header, "shrink", state.shrunk);
        self.surface.set_class(&self.header, "hidden", state.hidden);
        self.gate.complete();
    }
}

/// Logo that scrolls the page back to the top
pub struct LogoLink<S: Surface> {
    surface: Rc<S>,
    logo: S::Node,
}

impl<S: Surface> LogoLink<S> {
    /// `None` when the page has no logo
    pub fn attach(surface: Rc<S>) -> Option<Self> {
        let logo = surface.query(LOGO)?;
        Some(Self { surface, logo })
    }

    pub fn logo(&self) -> &S::Node {
        &self.logo
    }

    pub fn on_click(&self) {
        self.surface.scroll_to_top();
    }
}
