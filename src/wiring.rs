//! Browser Wiring
//!
//! Binds the page behaviors to DOM events once the document is ready.
//! Element listeners are leaked for the page lifetime; window listeners and
//! animation frames go through Leptos helpers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::{request_animation_frame, window_event_listener};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::header::{HeaderController, LogoLink};
use crate::modal::{ProductModal, CHECKOUT_BUTTON};
use crate::nav::{self, MobileNav};
use crate::surface::{Surface, WebSurface};

/// Attach now, or on `DOMContentLoaded` if the document is still loading
pub fn start() -> Result<()> {
    let surface = Rc::new(WebSurface::new()?);
    if surface.document().ready_state() == "loading" {
        let mut pending = Some(surface.clone());
        on_event(surface.document(), "DOMContentLoaded", move |_| {
            if let Some(surface) = pending.take() {
                attach_all(surface);
            }
        });
    } else {
        attach_all(surface);
    }
    Ok(())
}

pub fn attach_all(surface: Rc<WebSurface>) {
    let config = Rc::new(StorefrontConfig::load(&*surface));

    let path = surface.location_path();
    let active = nav::mark_active_links(&*surface, &path, &config.home_href);
    log::info!("[NAV] {} active link(s) for {}", active, path);

    attach_mobile_nav(surface.clone());
    attach_header(surface.clone(), &config);
    attach_logo(surface.clone());
    attach_modal(surface, config);
}

fn on_event(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn on_click(element: &Element, handler: impl FnMut(Event) + 'static) {
    on_event(element, "click", handler);
}

fn attach_mobile_nav(surface: Rc<WebSurface>) {
    let Some(menu) = MobileNav::attach(surface) else {
        log::debug!("[NAV] No mobile toggle on this page");
        return;
    };
    let toggle_button = menu.toggle_button().clone();
    let links = menu.links();
    let menu = Rc::new(RefCell::new(menu));

    {
        let menu = menu.clone();
        on_click(&toggle_button, move |_| menu.borrow_mut().toggle());
    }
    for link in &links {
        let menu = menu.clone();
        on_click(link, move |_| menu.borrow_mut().on_link_activated());
    }
}

fn attach_header(surface: Rc<WebSurface>, config: &StorefrontConfig) {
    let Some(controller) = HeaderController::attach(surface, config) else {
        log::debug!("[HEADER] No site header on this page");
        return;
    };
    let controller = Rc::new(RefCell::new(controller));
    let _ = window_event_listener(ev::scroll, move |_| {
        if controller.borrow_mut().on_scroll() {
            let controller = controller.clone();
            request_animation_frame(move || controller.borrow_mut().on_frame());
        }
    });
}

fn attach_logo(surface: Rc<WebSurface>) {
    let Some(link) = LogoLink::attach(surface) else {
        return;
    };
    let logo = link.logo().clone();
    on_click(&logo, move |_| link.on_click());
}

fn attach_modal(surface: Rc<WebSurface>, config: Rc<StorefrontConfig>) {
    let Some(modal) = ProductModal::attach(surface.clone(), config) else {
        return;
    };
    let size_buttons = modal.size_buttons().to_vec();
    let qty_input = modal.qty_input().cloned();
    let qty_increase = modal.qty_increase().cloned();
    let qty_decrease = modal.qty_decrease().cloned();
    let close_triggers = modal.close_triggers();
    let modal = Rc::new(RefCell::new(modal));

    for button in surface.query_all(CHECKOUT_BUTTON) {
        let modal = modal.clone();
        let trigger = button.clone();
        on_click(&button, move |_| {
            let card = modal.borrow().card_for(&trigger);
            if let Some(card) = card {
                modal.borrow_mut().open(&card);
            }
        });
    }

    for button in size_buttons {
        let modal = modal.clone();
        let surface = surface.clone();
        let source = button.clone();
        on_click(&button, move |_| {
            let key = surface.attribute(&source, "data-size").unwrap_or_default();
            modal.borrow_mut().select_size(&key);
        });
    }

    if let Some(button) = qty_increase {
        let modal = modal.clone();
        on_click(&button, move |_| modal.borrow_mut().increment_quantity());
    }
    if let Some(button) = qty_decrease {
        let modal = modal.clone();
        on_click(&button, move |_| modal.borrow_mut().decrement_quantity());
    }
    if let Some(input) = qty_input {
        let modal = modal.clone();
        let surface = surface.clone();
        let source = input.clone();
        on_event(&input, "input", move |_| {
            let raw = surface.value(&source);
            modal.borrow_mut().set_quantity_from_input(&raw);
        });
    }

    for trigger in close_triggers {
        let modal = modal.clone();
        on_click(&trigger, move |_| modal.borrow_mut().close());
    }

    let _ = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
        modal.borrow_mut().handle_key(&e.key());
    });
    log::info!("[MODAL] Product modal ready");
}
