//! Simulated backend calls
//!
//! Stand-ins for a real service: each call waits a fixed delay and then
//! answers from local state or a fixed catalog.

mod catalog;
mod ids;

use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{RideRecord, VehicleListing};
use crate::storage::{BlobStore, SharedSession};

pub use catalog::{demo_rides, vehicle_catalog};
pub use ids::{
    estimate_fare, generate_ride_id, generate_unique_ride_id, MAX_FARE, MIN_FARE, RIDE_ID_LEN,
};

/// Sign-up and login round trip
pub const AUTH_DELAY: Duration = Duration::from_millis(2000);
/// Booking round trip
pub const BOOKING_DELAY: Duration = Duration::from_millis(2000);
/// Contact and password reset round trip
pub const MESSAGE_DELAY: Duration = Duration::from_millis(2000);
/// Ride history and vehicle catalog fetch
pub const FETCH_DELAY: Duration = Duration::from_millis(1000);
/// Pause between a successful sign-in and returning home
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// How long a success notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_millis(5000);

/// Ride history for `owner_email`, or everyone's when `None`
///
/// An empty result is replaced by the demo rides, including for a signed-in
/// user who has never booked.
#[instrument(skip(session))]
pub async fn fetch_rides<S: BlobStore>(
    session: &SharedSession<S>,
    owner_email: Option<String>,
) -> Result<Vec<RideRecord>> {
    tokio::time::sleep(FETCH_DELAY).await;

    let rides = session.with(|s| s.list_rides(owner_email.as_deref()))?;
    if rides.is_empty() {
        debug!("No stored rides, serving demo history");
        return Ok(demo_rides());
    }
    Ok(rides)
}

/// The fixed vehicle catalog
pub async fn fetch_vehicles() -> Vec<VehicleListing> {
    tokio::time::sleep(FETCH_DELAY).await;
    vehicle_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    #[tokio::test(start_paused = true)]
    async fn empty_history_falls_back_to_demo_rides() {
        let session = SharedSession::new(MemoryBlobStore::new());
        let rides = fetch_rides(&session, Some("new@x.com".into())).await.unwrap();

        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].id, "DEMO001");
        assert_eq!(rides[1].id, "DEMO002");
        assert!(rides[0].booked_at > rides[1].booked_at);
    }

    #[tokio::test(start_paused = true)]
    async fn other_owners_rides_do_not_count() {
        let session = SharedSession::new(MemoryBlobStore::new());
        session
            .with(|s| {
                s.append_ride(RideRecord::confirmed(
                    "ABC123XYZ".into(),
                    "Heliopolis".into(),
                    "Zamalek".into(),
                    30,
                    "omar@x.com".into(),
                ))
            })
            .unwrap();

        let mine = fetch_rides(&session, Some("jane@x.com".into())).await.unwrap();
        assert_eq!(mine[0].id, "DEMO001");

        let omars = fetch_rides(&session, Some("omar@x.com".into())).await.unwrap();
        assert_eq!(omars.len(), 1);
        assert_eq!(omars[0].id, "ABC123XYZ");

        let everyone = fetch_rides(&session, None).await.unwrap();
        assert_eq!(everyone.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_the_fixed_delay() {
        let start = tokio::time::Instant::now();
        let vehicles = fetch_vehicles().await;
        assert!(start.elapsed() >= FETCH_DELAY);
        assert_eq!(vehicles, vehicle_catalog());
    }

    #[test]
    fn catalog_has_three_vehicles() {
        let catalog = vehicle_catalog();
        let ids: Vec<u32> = catalog.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog[1].title(), "Honda CR-V");
        assert_eq!(catalog[2].features.len(), 3);
    }
}
