//! Product Quick-Order Modal
//!
//! Opens from a product card, tracks size and quantity, keeps the price and
//! WhatsApp link in sync, and hands focus back to the trigger on close.

use std::rc::Rc;

use crate::config::StorefrontConfig;
use crate::order::{format_currency, OrderSummary, PriceTable, SizeKey};
use crate::surface::Surface;

pub const MODAL: &str = "#product-modal";
pub const MODAL_IMAGE: &str = "#modal-product-img";
pub const MODAL_NAME: &str = "#modal-product-name";
pub const MODAL_PRICE: &str = "#modal-price";
pub const QTY_INPUT: &str = "#qty-input";
pub const QTY_INCREASE: &str = "#qty-increase";
pub const QTY_DECREASE: &str = "#qty-decrease";
pub const ORDER_LINK: &str = "#wa-order-link";
pub const SIZE_BUTTON: &str = ".size-btn";
pub const CLOSE_BUTTON: &str = ".modal-close";
pub const CLOSE_TRIGGER: &str = "[data-close]";
pub const CHECKOUT_BUTTON: &str = ".btn-checkout";
pub const PRODUCT_CARD: &str = ".product-card";

/// Order quantity, never below 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Positive integers pass through; anything else is 1
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Quantity(n),
            _ => Quantity::ONE,
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Quantity(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Quantity(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

/// Data carried by a product card's `data-*` attributes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub image: String,
    pub prices: PriceTable,
}

impl ProductCard {
    pub fn read<S: Surface>(surface: &S, card: &S::Node, fallback_name: &str) -> Self {
        let attr = |name: &str| surface.attribute(card, name);
        let name = attr("data-name")
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| fallback_name.to_string());
        let (p50, p100, p200) = (attr("data-price-50"), attr("data-price-100"), attr("data-price-200"));
        Self {
            name,
            image: attr("data-img").unwrap_or_default(),
            prices: PriceTable::from_raw(p50.as_deref(), p100.as_deref(), p200.as_deref()),
        }
    }
}

/// State of one open-modal interaction
#[derive(Clone, Debug)]
pub struct ModalSession<N> {
    pub product_name: String,
    pub size: SizeKey,
    pub prices: PriceTable,
    pub quantity: Quantity,
    /// Element to refocus on close
    pub previously_focused: Option<N>,
}

impl<N> ModalSession<N> {
    pub fn new(card: &ProductCard, previously_focused: Option<N>) -> Self {
        Self {
            product_name: card.name.clone(),
            size: SizeKey::default(),
            prices: card.prices,
            quantity: Quantity::ONE,
            previously_focused,
        }
    }

    pub fn total(&self) -> u64 {
        self.prices
            .unit_price(self.size)
            .saturating_mul(u64::from(self.quantity.get()))
    }

    pub fn summary(&self) -> OrderSummary<'_> {
        OrderSummary {
            product: &self.product_name,
            size: self.size,
            quantity: self.quantity.get(),
            total: self.total(),
        }
    }
}

/// Modal elements; only the dialog itself is required
struct ModalElements<N> {
    dialog: N,
    image: Option<N>,
    name: Option<N>,
    price: Option<N>,
    qty_input: Option<N>,
    qty_increase: Option<N>,
    qty_decrease: Option<N>,
    order_link: Option<N>,
    close_button: Option<N>,
    size_buttons: Vec<N>,
    body: Option<N>,
}

pub struct ProductModal<S: Surface> {
    surface: Rc<S>,
    config: Rc<StorefrontConfig>,
    elements: ModalElements<S::Node>,
    session: Option<ModalSession<S::Node>>,
}

impl<S: Surface> ProductModal<S> {
    /// `None` when the page has no product modal
    pub fn attach(surface: Rc<S>, config: Rc<StorefrontConfig>) -> Option<Self> {
        let dialog = surface.query(MODAL)?;
        let elements = ModalElements {
            image: surface.query(MODAL_IMAGE),
            name: surface.query(MODAL_NAME),
            price: surface.query(MODAL_PRICE),
            qty_input: surface.query(QTY_INPUT),
            qty_increase: surface.query(QTY_INCREASE),
            qty_decrease: surface.query(QTY_DECREASE),
            order_link: surface.query(ORDER_LINK),
            close_button: surface.query_in(&dialog, CLOSE_BUTTON),
            size_buttons: surface.query_all(SIZE_BUTTON),
            body: surface.query("body"),
            dialog,
        };
        Some(Self {
            surface,
            config,
            elements,
            session: None,
        })
    }

    pub fn session(&self) -> Option<&ModalSession<S::Node>> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn size_buttons(&self) -> &[S::Node] {
        &self.elements.size_buttons
    }

    pub fn qty_input(&self) -> Option<&S::Node> {
        self.elements.qty_input.as_ref()
    }

    pub fn qty_increase(&self) -> Option<&S::Node> {
        self.elements.qty_increase.as_ref()
    }

    pub fn qty_decrease(&self) -> Option<&S::Node> {
        self.elements.qty_decrease.as_ref()
    }

    /// Elements inside the dialog that close it when clicked
    pub fn close_triggers(&self) -> Vec<S::Node> {
        self.surface.query_all_in(&self.elements.dialog, CLOSE_TRIGGER)
    }

    /// Card data for a checkout button, if it sits inside a product card
    pub fn card_for(&self, trigger: &S::Node) -> Option<ProductCard> {
        let card = self.surface.closest(trigger, PRODUCT_CARD)?;
        Some(ProductCard::read(&*self.surface, &card, &self.config.fallback_product_name))
    }

    pub fn open(&mut self, card: &ProductCard) {
        let s = &*self.surface;
        let session = ModalSession::new(card, s.active_element());
        log::debug!("[MODAL] Open: {}", session.product_name);

        if let Some(input) = &self.elements.qty_input {
            s.set_value(input, &session.quantity.get().to_string());
        }
        if let Some(image) = &self.elements.image {
            s.set_attribute(image, "src", &card.image);
            s.set_attribute(image, "alt", &session.product_name);
        }
        if let Some(name) = &self.elements.name {
            s.set_text(name, &session.product_name);
        }

        self.session = Some(session);
        self.render_size();
        self.recompute();

        s.set_attribute(&self.elements.dialog, "aria-hidden", "false");
        if let Some(body) = &self.elements.body {
            s.set_style(body, "overflow", "hidden");
        }
        if let Some(close) = &self.elements.close_button {
            s.focus(close);
        }
    }

    /// Unknown keys leave the selection unchanged
    pub fn select_size(&mut self, key: &str) {
        let Some(size) = SizeKey::from_key(key) else {
            log::warn!("[MODAL] Ignoring unknown size {:?}", key);
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.size = size;
        self.render_size();
        self.recompute();
    }

    pub fn increment_quantity(&mut self) {
        self.update_quantity(Quantity::increment);
    }

    pub fn decrement_quantity(&mut self) {
        self.update_quantity(Quantity::decrement);
    }

    pub fn set_quantity_from_input(&mut self, raw: &str) {
        let quantity = Quantity::parse(raw);
        self.update_quantity(|_| quantity);
    }

    fn update_quantity(&mut self, f: impl FnOnce(Quantity) -> Quantity) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.quantity = f(session.quantity);
        let text = session.quantity.get().to_string();
        if let Some(input) = &self.elements.qty_input {
            self.surface.set_value(input, &text);
        }
        self.recompute();
    }

    pub fn close(&mut self) {
        let s = &*self.surface;
        s.set_attribute(&self.elements.dialog, "aria-hidden", "true");
        if let Some(body) = &self.elements.body {
            s.set_style(body, "overflow", "");
        }

        let Some(session) = self.session.take() else {
            return;
        };
        log::debug!("[MODAL] Close: {}", session.product_name);
        if let Some(previous) = session.previously_focused {
            s.focus(&previous);
        }
    }

    /// Escape closes an open modal wherever focus is
    pub fn handle_key(&mut self, key: &str) {
        if key == "Escape" && self.is_open() {
            self.close();
        }
    }

    fn render_size(&self) {
        let Some(session) = &self.session else {
            return;
        };
        for button in &self.elements.size_buttons {
            let selected = self.surface.attribute(button, "data-size").as_deref() == Some(session.size.as_str());
            self.surface.set_class(button, "active", selected);
        }
    }

    /// Price text and order link, written together
    fn recompute(&self) {
        let Some(session) = &self.session else {
            return;
        };
        let summary = session.summary();
        if let Some(price) = &self.elements.price {
            self.surface.set_text(price, &format_currency(&self.config.currency_prefix, summary.total));
        }
        if let Some(link) = &self.elements.order_link {
            self.surface.set_attribute(link, "href", &summary.link(&self.config));
        }
    }
}
