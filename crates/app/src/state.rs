//! Application state management

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rideshare_core::{Database, Error, PendingGate, Result, SharedSession};

const DATABASE_FILE: &str = "rideshare.db";

/// One gate per control that starts a simulated round trip
#[derive(Debug, Default)]
pub struct Gates {
    pub login: PendingGate,
    pub sign_up: PendingGate,
    pub booking: PendingGate,
    pub contact: PendingGate,
    pub reset: PendingGate,
}

/// Main application state
pub struct AppState {
    pub session: SharedSession<Database>,
    pub gates: Gates,
}

impl AppState {
    /// Open the session database in the per-user data directory
    pub fn new() -> Result<Self> {
        Self::open_in(&Self::data_path()?)
    }

    /// Open the session database inside `dir`, creating it if needed
    pub fn open_in(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let db = Database::open(dir.join(DATABASE_FILE))?;
        tracing::info!(
            data_dir = %dir.display(),
            schema = db.schema_version()?,
            "Session database opened"
        );

        Ok(Self {
            session: SharedSession::new(db),
            gates: Gates::default(),
        })
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "rideshare", "rideshare-demo").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }

    /// Email of the signed-in user, if any
    pub fn current_email(&self) -> Option<String> {
        self.session
            .with(|s| s.current_user())
            .ok()
            .flatten()
            .map(|p| p.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rideshare_core::{quick_login, DemoAccount};

    #[test]
    fn state_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");

        let state = AppState::open_in(&nested).unwrap();
        assert!(nested.join(DATABASE_FILE).exists());
        assert_eq!(state.current_email(), None);
        quick_login(&state.session, DemoAccount::Admin).unwrap();
        drop(state);

        let reopened = AppState::open_in(&nested).unwrap();
        assert_eq!(reopened.current_email().as_deref(), Some("admin@demo.com"));
    }

    #[test]
    fn login_in_flight_does_not_block_sign_up() {
        let gates = Gates::default();
        let _login = gates.login.try_begin().unwrap();
        assert!(gates.login.try_begin().is_none());

        let sign_up = gates.sign_up.try_begin();
        assert!(sign_up.is_some());
        assert!(gates.sign_up.try_begin().is_none());
    }
}
