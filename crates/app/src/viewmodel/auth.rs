//! Authentication view model

use std::sync::Arc;

use rideshare_core::account::{login_notice, quick_login_notice, sign_up_notice, SIGN_OUT_NOTICE};
use rideshare_core::view::Notice;
use rideshare_core::{
    login, quick_login, request_password_reset, sign_out, sign_up, DemoAccount, LoginForm,
};
use slint::ComponentHandle;

use super::{begin_pending, convert, redirect_home, refresh_session, show_notice, show_toast};
use crate::state::AppState;
use crate::{MainWindow, Page, SignUpErrors};

pub fn setup_auth_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Login callback
    let state_login = state.clone();
    let window_weak = window.as_weak();
    window.on_login(move |email, password| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(guard) = begin_pending(&w, &state_login.gates.login, MainWindow::set_login_busy)
        else {
            return;
        };
        w.set_login_error("".into());

        let form = LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        };
        let state = state_login.clone();
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = login(&state.session, form).await;

            let _ = window_weak.upgrade_in_event_loop(move |w| match result {
                Ok(profile) => {
                    w.set_login_password("".into());
                    refresh_session(&w, &state);
                    show_toast(&w, &Notice::success(login_notice(&profile)));
                    redirect_home(&w);
                }
                Err(e) => {
                    tracing::debug!("Login rejected: {}", e);
                    w.set_login_error(e.to_string().into());
                }
            });
        });
    });

    // Demo account buttons
    let state_quick = state.clone();
    let window_weak = window.as_weak();
    window.on_quick_login(move |key| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(account) = DemoAccount::from_key(&key) else {
            tracing::warn!("Unknown demo account: {}", key);
            return;
        };

        match quick_login(&state_quick.session, account) {
            Ok(profile) => {
                refresh_session(&w, &state_quick);
                show_toast(&w, &Notice::success(quick_login_notice(&profile)));
                redirect_home(&w);
            }
            Err(e) => {
                tracing::error!("Demo login failed: {}", e);
                w.set_login_error(format!("Error: {}", e).into());
            }
        }
    });

    // Sign-up callback
    let state_sign_up = state.clone();
    let window_weak = window.as_weak();
    window.on_sign_up(move |data| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(guard) =
            begin_pending(&w, &state_sign_up.gates.sign_up, MainWindow::set_sign_up_busy)
        else {
            return;
        };
        w.set_sign_up_error("".into());
        w.set_sign_up_errors(SignUpErrors::default());

        let form = convert::sign_up_form(&data);
        let state = state_sign_up.clone();
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = sign_up(&state.session, form).await;

            let _ = window_weak.upgrade_in_event_loop(move |w| match result {
                Ok(profile) => {
                    refresh_session(&w, &state);
                    show_toast(&w, &Notice::success(sign_up_notice(&profile)));
                    redirect_home(&w);
                }
                Err(e) => {
                    if let Some(v) = e.as_validation() {
                        w.set_sign_up_errors(convert::sign_up_errors(v.invalid_fields()));
                    }
                    w.set_sign_up_error(e.to_string().into());
                }
            });
        });
    });

    // Sign-out callback
    let state_sign_out = state.clone();
    let window_weak = window.as_weak();
    window.on_sign_out(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        if let Err(e) = sign_out(&state_sign_out.session) {
            tracing::error!("Failed to sign out: {}", e);
            show_toast(&w, &Notice::danger(format!("Error: {}", e)));
            return;
        }

        refresh_session(&w, &state_sign_out);
        w.set_has_booking(false);
        w.set_profile_notice(Default::default());
        show_toast(&w, &Notice::success(SIGN_OUT_NOTICE));
        w.invoke_navigate(Page::Home);
    });

    // Password reset
    let state_reset = state;
    let window_weak = window.as_weak();
    window.on_request_reset(move |email| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(guard) = begin_pending(&w, &state_reset.gates.reset, MainWindow::set_reset_busy)
        else {
            return;
        };
        w.set_reset_notice(Default::default());

        let email = email.to_string();
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = request_password_reset(email).await;

            let _ = window_weak.upgrade_in_event_loop(move |w| {
                let notice = match result {
                    Ok(message) => {
                        w.set_reset_email("".into());
                        Notice::success(message)
                    }
                    Err(e) => Notice::for_error(&e),
                };
                show_notice(
                    &w,
                    &notice,
                    MainWindow::get_reset_notice,
                    MainWindow::set_reset_notice,
                );
            });
        });
    });
}
