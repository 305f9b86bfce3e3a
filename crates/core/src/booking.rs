//! Ride booking

use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::mock::{estimate_fare, generate_unique_ride_id, BOOKING_DELAY};
use crate::models::RideRecord;
use crate::storage::{BlobStore, SharedSession};
use crate::validation::validate_locations;

pub const SIGN_IN_TO_BOOK: &str = "Please sign in to book a ride.";

/// Pickup and drop-off as typed by the user
#[derive(Debug, Clone, Default)]
pub struct RideRequest {
    pub origin: String,
    pub destination: String,
}

impl RideRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Book a ride for the signed-in user and record it in history
#[instrument(skip_all)]
pub async fn book_ride<S: BlobStore>(
    session: &SharedSession<S>,
    request: RideRequest,
) -> Result<RideRecord> {
    let origin = request.origin.trim().to_string();
    let destination = request.destination.trim().to_string();
    validate_locations(&origin, &destination)?;

    let owner = session
        .with(|s| s.current_user())?
        .ok_or_else(|| Error::NotAuthenticated(SIGN_IN_TO_BOOK.into()))?;

    tokio::time::sleep(BOOKING_DELAY).await;

    let ride = session.with(|s| {
        let existing = s.list_rides(None)?;
        let id = generate_unique_ride_id(existing.iter().map(|r| r.id.as_str()));
        let ride = RideRecord::confirmed(id, origin, destination, estimate_fare(), owner.email);
        s.append_ride(ride.clone())?;
        Ok::<_, Error>(ride)
    })?;

    info!(ride_id = %ride.id, price = ride.price, "Ride booked");
    Ok(ride)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{quick_login, DemoAccount};
    use crate::mock::{MAX_FARE, MIN_FARE};
    use crate::models::RideStatus;
    use crate::storage::MemoryBlobStore;
    use crate::validation::ValidationError;

    #[tokio::test(start_paused = true)]
    async fn booking_requires_a_session() {
        let session = SharedSession::new(MemoryBlobStore::new());
        let err = book_ride(&session, RideRequest::new("Maadi", "Giza"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotAuthenticated(_)));
        assert_eq!(err.to_string(), SIGN_IN_TO_BOOK);
        assert!(session.with(|s| s.list_rides(None)).unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_locations_are_rejected_first() {
        let session = SharedSession::new(MemoryBlobStore::new());
        let err = book_ride(&session, RideRequest::new("  ", "Giza"))
            .await
            .unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingLocations));
    }

    #[tokio::test(start_paused = true)]
    async fn booked_ride_lands_in_history() {
        let session = SharedSession::new(MemoryBlobStore::new());
        quick_login(&session, DemoAccount::Passenger).unwrap();

        let ride = book_ride(&session, RideRequest::new(" Maadi ", "Giza Pyramids"))
            .await
            .unwrap();
        assert_eq!(ride.origin, "Maadi");
        assert_eq!(ride.status, RideStatus::Confirmed);
        assert_eq!(ride.owner_email.as_deref(), Some("user@demo.com"));
        assert!((MIN_FARE..=MAX_FARE).contains(&ride.price));

        let history = session
            .with(|s| s.list_rides(Some("user@demo.com")))
            .unwrap();
        assert_eq!(history, vec![ride]);
    }

    #[tokio::test(start_paused = true)]
    async fn ids_stay_unique_within_history() {
        let session = SharedSession::new(MemoryBlobStore::new());
        quick_login(&session, DemoAccount::Admin).unwrap();

        for _ in 0..5 {
            book_ride(&session, RideRequest::new("A", "B")).await.unwrap();
        }
        let mut ids: Vec<String> = session
            .with(|s| s.list_rides(None))
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
