use log::{info, warn};

mod config;
mod error;
mod clock;
mod surface;
mod effects {
    pub mod stagger;
    pub mod reveal;
    pub mod hero;
    pub mod tilt;
}
mod boot;
mod dom;

#[cfg(test)]
mod testing;


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio animations");
    if let Err(e) = dom::launch() {
        warn!("Animations not attached: {}", e);
    }
}
