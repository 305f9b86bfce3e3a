//! Rideshare - demo ride-hailing front-end
//!
//! Desktop client with simulated sign-up, login, booking, ride history and
//! vehicle browsing. All backend calls are local stand-ins.

use std::sync::Arc;

use slint::ComponentHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Rideshare demo");

    // Simulated round trips run on the tokio runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    let _guard = runtime.enter();

    let app_state = match state::AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let main_window = match MainWindow::new() {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    viewmodel::setup_bindings(&main_window, app_state);

    if let Err(e) = main_window.run() {
        tracing::error!("Event loop exited with error: {}", e);
        std::process::exit(1);
    }
}
