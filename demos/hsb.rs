//! Standalone demo: opens a window with three cross-wired spectrum pickers.
//!
//! Set `RUST_LOG=floem_spectrum=debug` to watch gesture transitions.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_spectrum::{spectrum_panel, Hsb};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let color = RwSignal::new(Hsb::new(0.58, 0.75, 0.9));

    floem::Application::new()
        .window(
            move |_| {
                spectrum_panel(color).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 220.0))
                    .title("floem-spectrum"),
            ),
        )
        .run();
}
