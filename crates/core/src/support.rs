//! Contact form and password reset
//!
//! Neither sends anything anywhere; both only simulate the round trip.

use tracing::instrument;

use crate::error::Result;
use crate::mock::MESSAGE_DELAY;
use crate::validation::{validate_contact, validate_reset_email};

pub const CONTACT_SENT: &str = "Thank you for your message! We'll get back to you soon.";
pub const RESET_LINK_SENT: &str = "Password reset link sent to your email!";

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Returns the confirmation to show
#[instrument(skip_all)]
pub async fn send_contact_message(form: ContactForm) -> Result<&'static str> {
    validate_contact(&form.name, &form.email, &form.message)?;
    tokio::time::sleep(MESSAGE_DELAY).await;
    Ok(CONTACT_SENT)
}

/// Returns the confirmation to show
#[instrument]
pub async fn request_password_reset(email: String) -> Result<&'static str> {
    validate_reset_email(&email)?;
    tokio::time::sleep(MESSAGE_DELAY).await;
    Ok(RESET_LINK_SENT)
}
