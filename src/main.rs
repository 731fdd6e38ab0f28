//! Portfolio Page Frontend Entry Point

mod app;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod models;
mod seed;
mod state;
mod storage;
mod store;
mod wiring;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    app::init_page();
}
