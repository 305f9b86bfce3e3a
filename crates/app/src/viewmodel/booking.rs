//! Ride booking and contact form view model

use std::sync::Arc;

use rideshare_core::view::{BookingConfirmation, Notice};
use rideshare_core::{book_ride, send_contact_message, ContactForm, Error, RideRequest};
use slint::ComponentHandle;

use super::{begin_pending, convert, show_notice};
use crate::state::AppState;
use crate::MainWindow;

pub fn setup_booking_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Book ride callback
    let state_book = state.clone();
    let window_weak = window.as_weak();
    window.on_book_ride(move |origin, destination| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(guard) = begin_pending(&w, &state_book.gates.booking, MainWindow::set_booking_busy)
        else {
            return;
        };
        w.set_booking_notice(Default::default());
        w.set_booking_needs_sign_in(false);
        w.set_has_booking(false);

        let request = RideRequest::new(origin.as_str(), destination.as_str());
        let state = state_book.clone();
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = book_ride(&state.session, request).await;

            let _ = window_weak.upgrade_in_event_loop(move |w| match result {
                Ok(ride) => {
                    w.set_booking(convert::booking_data(&BookingConfirmation::new(&ride)));
                    w.set_has_booking(true);
                    w.set_ride_origin("".into());
                    w.set_ride_destination("".into());
                }
                Err(e) => {
                    w.set_booking_needs_sign_in(matches!(e, Error::NotAuthenticated(_)));
                    show_notice(
                        &w,
                        &Notice::for_error(&e),
                        MainWindow::get_booking_notice,
                        MainWindow::set_booking_notice,
                    );
                }
            });
        });
    });

    // Contact form callback
    let state_contact = state;
    let window_weak = window.as_weak();
    window.on_send_contact(move |name, email, message| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Some(guard) =
            begin_pending(&w, &state_contact.gates.contact, MainWindow::set_contact_busy)
        else {
            return;
        };
        w.set_contact_notice(Default::default());

        let form = ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = send_contact_message(form).await;

            let _ = window_weak.upgrade_in_event_loop(move |w| {
                let notice = match result {
                    Ok(confirmation) => {
                        w.set_contact_name("".into());
                        w.set_contact_email("".into());
                        w.set_contact_message("".into());
                        Notice::success(confirmation)
                    }
                    Err(e) => Notice::for_error(&e),
                };
                show_notice(
                    &w,
                    &notice,
                    MainWindow::get_contact_notice,
                    MainWindow::set_contact_notice,
                );
            });
        });
    });
}
