//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of account a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Older stored profiles used `user` for passengers
    #[default]
    #[serde(alias = "user")]
    Passenger,
    Driver,
    Admin,
}

impl AccountType {
    /// Parse the form value of an account type, defaulting to passenger
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "driver" => AccountType::Driver,
            "admin" => AccountType::Admin,
            _ => AccountType::Passenger,
        }
    }

    /// Value used in forms and persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Passenger => "passenger",
            AccountType::Driver => "driver",
            AccountType::Admin => "admin",
        }
    }

    /// Short label shown next to the greeting
    pub fn badge_label(&self) -> &'static str {
        match self {
            AccountType::Passenger => "Passenger",
            AccountType::Driver => "Driver",
            AccountType::Admin => "Admin",
        }
    }

    /// Long label shown on the profile page
    pub fn profile_label(&self) -> &'static str {
        match self {
            AccountType::Passenger => "Passenger",
            AccountType::Driver => "Professional Driver",
            AccountType::Admin => "System Administrator",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user's profile
///
/// At most one profile exists at a time; its presence is what makes the
/// session authenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn new(email: String, account_type: AccountType) -> Self {
        Self {
            email,
            display_name: None,
            first_name: None,
            last_name: None,
            phone: None,
            account_type,
            created_at: Some(Utc::now()),
            last_login_at: None,
        }
    }

    /// Part of the email before the `@`
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email_local_part(),
        }
    }
}
