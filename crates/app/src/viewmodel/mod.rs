//! View model bindings for Slint UI

mod auth;
mod booking;
mod catalog;
mod convert;
mod profile;

use std::sync::Arc;

use rideshare_core::mock::{NOTICE_TTL, REDIRECT_DELAY};
use rideshare_core::view::{AuthView, Notice, ProfileView};
use rideshare_core::{PendingGate, PendingGuard};
use slint::ComponentHandle;

use crate::state::AppState;
use crate::{MainWindow, NoticeData, Page, ProfileData};

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    refresh_session(window, &state);
    setup_navigation(window);

    auth::setup_auth_bindings(window, state.clone());
    booking::setup_booking_bindings(window, state.clone());
    catalog::setup_catalog_bindings(window, state.clone());
    profile::setup_profile_bindings(window, state);
}

fn setup_navigation(window: &MainWindow) {
    let window_weak = window.as_weak();
    window.on_navigate(move |page| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        w.set_page(page);

        // Lists are fetched each time their page opens
        match page {
            Page::Rides => w.invoke_load_rides(),
            Page::Vehicles => w.invoke_load_vehicles(),
            Page::Login => w.set_login_error("".into()),
            _ => {}
        }
    });
}

/// Sync the header and profile page with the stored session
pub(crate) fn refresh_session(window: &MainWindow, state: &AppState) {
    let profile = match state.session.with(|s| s.current_user()) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Failed to read session: {}", e);
            None
        }
    };

    match AuthView::from_session(profile.as_ref()) {
        AuthView::Authenticated {
            greeting_name,
            badge,
        } => {
            window.set_is_logged_in(true);
            window.set_greeting_name(greeting_name.into());
            window.set_account_badge(badge.into());
        }
        AuthView::Anonymous => {
            window.set_is_logged_in(false);
            window.set_greeting_name("".into());
            window.set_account_badge("".into());
        }
    }

    match profile {
        Some(p) => {
            window.set_profile(convert::profile_data(&ProfileView::new(&p)));
            window.set_edit_name(p.display_name().into());
        }
        None => {
            window.set_profile(ProfileData::default());
            window.set_edit_name("".into());
        }
    }
}

pub(crate) fn notice_data(notice: &Notice) -> NoticeData {
    NoticeData {
        text: notice.text.as_str().into(),
        level: notice.level.as_str().into(),
    }
}

/// Show an inline notice; success notices clear after [`NOTICE_TTL`]
pub(crate) fn show_notice(
    window: &MainWindow,
    notice: &Notice,
    get: fn(&MainWindow) -> NoticeData,
    set: fn(&MainWindow, NoticeData),
) {
    let data = notice_data(notice);
    set(window, data.clone());
    if notice.level.auto_hides() {
        clear_later(window, data, get, set);
    }
}

/// Show a header notification, which always clears after [`NOTICE_TTL`]
pub(crate) fn show_toast(window: &MainWindow, notice: &Notice) {
    let data = notice_data(notice);
    window.set_notification(data.clone());
    clear_later(
        window,
        data,
        MainWindow::get_notification,
        MainWindow::set_notification,
    );
}

// Only clears if the same notice is still showing
fn clear_later(
    window: &MainWindow,
    shown: NoticeData,
    get: fn(&MainWindow) -> NoticeData,
    set: fn(&MainWindow, NoticeData),
) {
    let window_weak = window.as_weak();
    slint::Timer::single_shot(NOTICE_TTL, move || {
        if let Some(w) = window_weak.upgrade() {
            if get(&w) == shown {
                set(&w, NoticeData::default());
            }
        }
    });
}

/// Return to the home page after a successful sign-in
pub(crate) fn redirect_home(window: &MainWindow) {
    let window_weak = window.as_weak();
    slint::Timer::single_shot(REDIRECT_DELAY, move || {
        if let Some(w) = window_weak.upgrade() {
            w.invoke_navigate(Page::Home);
        }
    });
}

/// Start an operation on `gate`, flagging `set_busy` until the guard drops
///
/// Returns `None` while a previous operation is still running.
pub(crate) fn begin_pending(
    window: &MainWindow,
    gate: &PendingGate,
    set_busy: fn(&MainWindow, bool),
) -> Option<PendingGuard> {
    let guard = gate.try_begin()?;
    set_busy(window, true);

    let window_weak = window.as_weak();
    Some(guard.on_release(move || {
        let _ = window_weak.upgrade_in_event_loop(move |w| set_busy(&w, false));
    }))
}
