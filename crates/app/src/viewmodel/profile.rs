//! Profile page view model

use std::sync::Arc;

use rideshare_core::update_display_name;
use rideshare_core::view::Notice;
use slint::ComponentHandle;

use super::{refresh_session, show_notice};
use crate::state::AppState;
use crate::MainWindow;

const PROFILE_UPDATED: &str = "Profile updated successfully!";

pub fn setup_profile_bindings(window: &MainWindow, state: Arc<AppState>) {
    let window_weak = window.as_weak();
    window.on_save_display_name(move |name| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let notice = match update_display_name(&state.session, &name) {
            Ok(Some(_)) => {
                refresh_session(&w, &state);
                Notice::success(PROFILE_UPDATED)
            }
            // Empty or unchanged
            Ok(None) => return,
            Err(e) => Notice::for_error(&e),
        };
        show_notice(
            &w,
            &notice,
            MainWindow::get_profile_notice,
            MainWindow::set_profile_notice,
        );
    });
}
