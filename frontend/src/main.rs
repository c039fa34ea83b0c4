//! Entry point for the WASM application

use parche_frontend::enhance_page;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🌱 Parche Verde - page enhancements loading");

    enhance_page();
}
