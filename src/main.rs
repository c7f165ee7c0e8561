use log::info;

mod app;
mod components;
mod config;
mod content;
mod dom;
mod icons;
mod motion;
mod reveal;
mod state;

use app::App;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
