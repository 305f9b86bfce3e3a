//! Account flows: sign-up, login, demo login, sign-out and profile edits
//!
//! Each flow validates first, then waits out the simulated round trip, then
//! writes the session store. Nothing here verifies a password; any
//! well-formed login succeeds.

use chrono::Utc;
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::mock::AUTH_DELAY;
use crate::models::{AccountType, UserProfile};
use crate::storage::{BlobStore, SharedSession};
use crate::validation::{LoginForm, SignUpForm};

/// Prebuilt accounts for one-click login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAccount {
    Passenger,
    Driver,
    Admin,
}

impl DemoAccount {
    /// Parse the button value used by the login page
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "user" | "passenger" => Some(DemoAccount::Passenger),
            "driver" => Some(DemoAccount::Driver),
            "admin" => Some(DemoAccount::Admin),
            _ => None,
        }
    }

    fn details(&self) -> (&'static str, &'static str, AccountType) {
        match self {
            DemoAccount::Passenger => ("user@demo.com", "John Doe", AccountType::Passenger),
            DemoAccount::Driver => ("driver@demo.com", "Mike Johnson", AccountType::Driver),
            DemoAccount::Admin => ("admin@demo.com", "Sarah Admin", AccountType::Admin),
        }
    }

    pub fn profile(&self) -> UserProfile {
        let (email, name, account_type) = self.details();
        let now = Utc::now();
        UserProfile {
            display_name: Some(name.to_string()),
            last_login_at: Some(now),
            created_at: Some(now),
            ..UserProfile::new(email.to_string(), account_type)
        }
    }
}

impl UserProfile {
    /// Profile for a newly registered account
    pub fn from_sign_up(form: &SignUpForm) -> Self {
        let first = form.first_name.trim();
        let last = form.last_name.trim();
        let phone = form.phone.trim();
        UserProfile {
            display_name: Some(format!("{first} {last}")),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            ..UserProfile::new(form.email.trim().to_string(), form.account_type)
        }
    }

    /// Profile for a login, named after the email's local part
    pub fn from_login(email: &str) -> Self {
        let mut profile = UserProfile::new(email.trim().to_string(), AccountType::Passenger);
        profile.display_name = Some(profile.email_local_part().to_string());
        profile.last_login_at = profile.created_at;
        profile
    }
}

/// Register and sign in
#[instrument(skip_all, fields(email = %form.email.trim()))]
pub async fn sign_up<S: BlobStore>(
    session: &SharedSession<S>,
    form: SignUpForm,
) -> Result<UserProfile> {
    form.validate()?;
    tokio::time::sleep(AUTH_DELAY).await;

    let profile = UserProfile::from_sign_up(&form);
    session.with(|s| s.set_current_user(&profile))?;
    info!(account_type = %profile.account_type, "Account created");
    Ok(profile)
}

/// Sign in with any well-formed credentials
#[instrument(skip_all, fields(email = %form.email.trim()))]
pub async fn login<S: BlobStore>(session: &SharedSession<S>, form: LoginForm) -> Result<UserProfile> {
    form.validate()?;
    tokio::time::sleep(AUTH_DELAY).await;

    let profile = UserProfile::from_login(&form.email);
    session.with(|s| s.set_current_user(&profile))?;
    info!("Signed in");
    Ok(profile)
}

/// Sign in as one of the demo accounts, immediately
#[instrument(skip(session))]
pub fn quick_login<S: BlobStore>(
    session: &SharedSession<S>,
    account: DemoAccount,
) -> Result<UserProfile> {
    let profile = account.profile();
    session.with(|s| s.set_current_user(&profile))?;
    Ok(profile)
}

#[instrument(skip(session))]
pub fn sign_out<S: BlobStore>(session: &SharedSession<S>) -> Result<()> {
    session.with(|s| s.clear_current_user())
}

/// Rename the signed-in user
///
/// Returns `None` when the trimmed name is empty or unchanged.
#[instrument(skip(session))]
pub fn update_display_name<S: BlobStore>(
    session: &SharedSession<S>,
    new_name: &str,
) -> Result<Option<UserProfile>> {
    session.with(|s| {
        let mut profile = s
            .current_user()?
            .ok_or_else(|| Error::NotAuthenticated("Sign in to edit your profile.".into()))?;

        let name = new_name.trim();
        if name.is_empty() || name == profile.display_name() {
            return Ok(None);
        }

        profile.display_name = Some(name.to_string());
        s.set_current_user(&profile)?;
        Ok(Some(profile))
    })
}

/// Welcome message after registration
pub fn sign_up_notice(profile: &UserProfile) -> String {
    format!(
        "Welcome {}! Your {} account has been created.",
        profile.display_name(),
        profile.account_type
    )
}

/// Welcome message after login
pub fn login_notice(profile: &UserProfile) -> String {
    format!("Welcome back, {}!", profile.display_name())
}

/// Message after a demo login
pub fn quick_login_notice(profile: &UserProfile) -> String {
    format!(
        "Logged in as {} ({})",
        profile.display_name(),
        profile.account_type
    )
}

pub const SIGN_OUT_NOTICE: &str = "You have been signed out successfully.";
