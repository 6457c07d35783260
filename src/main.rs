//! Storefront Page Behaviors Entry Point

mod config;
mod error;
mod header;
mod modal;
mod nav;
mod order;
mod surface;
mod wiring;

use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = console_logger::init(level);

    if let Err(e) = wiring::start() {
        log::error!("[APP] Startup failed: {}", e);
    }
}
