//! Session store
//!
//! The only code that knows where the current profile and ride history
//! live inside the blob store. Everything else goes through this API.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::blob::BlobStore;
use crate::error::Result;
use crate::models::{RideRecord, UserProfile};

const CURRENT_USER_KEY: &str = "rideshare_user";
const RIDE_HISTORY_KEY: &str = "rideshare_rides";

/// Number of rides kept in history
pub const RIDE_HISTORY_LIMIT: usize = 10;

/// Current profile and ride history on top of a [`BlobStore`]
pub struct SessionStore<S> {
    store: S,
}

impl<S: BlobStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a JSON blob, treating malformed data as absent
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed persisted state");
                Ok(None)
            }
        }
    }

    /// The signed-in profile, if any
    ///
    /// Malformed persisted data reads as signed out.
    pub fn current_user(&self) -> Result<Option<UserProfile>> {
        self.read_json(CURRENT_USER_KEY)
    }

    /// Replace the signed-in profile
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub fn set_current_user(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.store.set(CURRENT_USER_KEY, &json)
    }

    /// Forget the signed-in profile
    #[instrument(skip(self))]
    pub fn clear_current_user(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)
    }

    /// Whether a profile is currently stored
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Put a ride at the front of history, keeping the newest
    /// [`RIDE_HISTORY_LIMIT`] entries
    #[instrument(skip(self, ride), fields(ride_id = %ride.id))]
    pub fn append_ride(&self, ride: RideRecord) -> Result<()> {
        let mut rides: Vec<RideRecord> = self.read_json(RIDE_HISTORY_KEY)?.unwrap_or_default();
        rides.insert(0, ride);
        rides.truncate(RIDE_HISTORY_LIMIT);

        let json = serde_json::to_string(&rides)?;
        self.store.set(RIDE_HISTORY_KEY, &json)?;
        debug!(stored = rides.len(), "Ride history updated");
        Ok(())
    }

    /// Stored rides, newest first, optionally limited to one owner
    pub fn list_rides(&self, owner_email: Option<&str>) -> Result<Vec<RideRecord>> {
        let rides: Vec<RideRecord> = self.read_json(RIDE_HISTORY_KEY)?.unwrap_or_default();
        Ok(match owner_email {
            Some(email) => rides.into_iter().filter(|r| r.is_owned_by(email)).collect(),
            None => rides,
        })
    }
}

/// Session store shared between the UI thread and background tasks
///
/// Access goes through [`SharedSession::with`], so the lock is never held
/// across an await point.
pub struct SharedSession<S> {
    inner: Arc<Mutex<SessionStore<S>>>,
}

impl<S> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: BlobStore> SharedSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionStore::new(store))),
        }
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&SessionStore<S>) -> R) -> R {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }
}
