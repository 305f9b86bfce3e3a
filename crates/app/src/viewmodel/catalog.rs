//! Ride history and vehicle catalog view model

use std::sync::Arc;

use rideshare_core::view::{vehicle_selected_message, Notice, RideCardView, VehicleCardView};
use rideshare_core::{fetch_rides, fetch_vehicles};
use slint::{ComponentHandle, ModelRc, VecModel};

use super::{convert, notice_data, show_toast};
use crate::state::AppState;
use crate::{MainWindow, RideItem, VehicleItem};

pub fn setup_catalog_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Load rides for the signed-in user
    let state_rides = state;
    let window_weak = window.as_weak();
    window.on_load_rides(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        w.set_rides_loading(true);
        w.set_rides_notice(Default::default());

        let owner = state_rides.current_email();
        let state = state_rides.clone();
        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let result = fetch_rides(&state.session, owner).await;
            let items: Result<Vec<RideItem>, _> = result.map(|rides| {
                rides
                    .iter()
                    .map(|ride| convert::ride_item(&RideCardView::new(ride)))
                    .collect()
            });

            let _ = window_weak.upgrade_in_event_loop(move |w| {
                match items {
                    Ok(items) => w.set_rides(ModelRc::new(VecModel::from(items))),
                    Err(e) => {
                        tracing::error!("Failed to load rides: {}", e);
                        w.set_rides(ModelRc::default());
                        w.set_rides_notice(notice_data(&Notice::danger("Error loading rides.")));
                    }
                }
                w.set_rides_loading(false);
            });
        });
    });

    // Load the vehicle catalog
    let window_weak = window.as_weak();
    window.on_load_vehicles(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        w.set_vehicles_loading(true);

        let window_weak = window_weak.clone();
        tokio::spawn(async move {
            let items: Vec<VehicleItem> = fetch_vehicles()
                .await
                .iter()
                .map(|v| convert::vehicle_item(&VehicleCardView::new(v)))
                .collect();

            let _ = window_weak.upgrade_in_event_loop(move |w| {
                w.set_vehicles(ModelRc::new(VecModel::from(items)));
                w.set_vehicles_loading(false);
            });
        });
    });

    // Vehicle selection
    let window_weak = window.as_weak();
    window.on_select_vehicle(move |vehicle_id| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };
        let Ok(vehicle_id) = u32::try_from(vehicle_id) else {
            return;
        };
        show_toast(&w, &Notice::info(vehicle_selected_message(vehicle_id)));
    });
}
