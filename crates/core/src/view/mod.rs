//! Display models
//!
//! Turns session state and fetched collections into ready-to-show values.
//! The desktop UI binds these directly; [`html`] renders them as escaped
//! markup fragments.

pub mod html;

use chrono::{DateTime, Local, Utc};

use crate::error::Error;
use crate::models::{RideRecord, RideStatus, UserProfile, VehicleListing};
use crate::validation::ValidationError;

/// Severity of an inline notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
        }
    }

    /// Success notices clear themselves after a while
    pub fn auto_hides(&self) -> bool {
        matches!(self, NoticeLevel::Success)
    }
}

/// A message shown next to a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    /// How a failed flow is shown inline
    ///
    /// Missing input is a warning, malformed input is danger, and an
    /// unauthenticated action is an informational prompt.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::Validation(
                v @ (ValidationError::MissingCredentials
                | ValidationError::MissingContactFields
                | ValidationError::MissingLocations),
            ) => Notice::warning(v.to_string()),
            Error::Validation(v) => Notice::danger(v.to_string()),
            Error::NotAuthenticated(msg) => Notice::info(msg.clone()),
            other => Notice::danger(format!("Something went wrong: {other}")),
        }
    }
}

/// Header area: sign-in buttons or a greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthView {
    Anonymous,
    Authenticated { greeting_name: String, badge: String },
}

impl AuthView {
    pub fn from_session(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(p) => AuthView::Authenticated {
                greeting_name: p.display_name().to_string(),
                badge: p.account_type.badge_label().to_string(),
            },
            None => AuthView::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthView::Authenticated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub account_type: String,
    pub phone: String,
    pub member_since: String,
}

impl ProfileView {
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            name: profile.display_name().to_string(),
            email: profile.email.clone(),
            account_type: profile.account_type.profile_label().to_string(),
            phone: profile
                .phone
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "Not provided".to_string()),
            member_since: profile
                .created_at
                .map(format_date)
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Badge tone for a ride status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideCardView {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub status: String,
    pub tone: StatusTone,
}

impl RideCardView {
    pub fn new(ride: &RideRecord) -> Self {
        let tone = match ride.status {
            RideStatus::Completed => StatusTone::Success,
            RideStatus::Confirmed => StatusTone::Warning,
        };
        Self {
            id: ride.id.clone(),
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            date: format_date(ride.booked_at),
            time: format_time(ride.booked_at),
            price: format_price(ride.price),
            status: ride.status.label().to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCardView {
    pub id: u32,
    pub title: String,
    pub year: String,
    pub category: String,
    pub plate: String,
    pub full_stars: u8,
    pub half_star: bool,
    pub rating: String,
    pub features: Vec<String>,
    pub image_url: String,
}

impl VehicleCardView {
    pub fn new(vehicle: &VehicleListing) -> Self {
        let (full_stars, half_star) = vehicle.stars();
        Self {
            id: vehicle.id,
            title: vehicle.title(),
            year: vehicle.year.to_string(),
            category: vehicle.category.label().to_string(),
            plate: vehicle.plate.clone(),
            full_stars,
            half_star,
            rating: format!("{:.1}", vehicle.rating),
            features: vehicle.features.clone(),
            image_url: vehicle.image_url.clone(),
        }
    }

    /// Stars as text, e.g. "★★★★½"
    pub fn star_text(&self) -> String {
        let mut stars = "★".repeat(self.full_stars as usize);
        if self.half_star {
            stars.push('½');
        }
        stars
    }
}

/// Details shown after a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub origin: String,
    pub destination: String,
    pub booking_id: String,
    pub estimated_cost: String,
}

impl BookingConfirmation {
    pub const FOOTNOTE: &'static str =
        "Driver will be assigned shortly. You'll receive a notification.";

    pub fn new(ride: &RideRecord) -> Self {
        Self {
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            booking_id: ride.id.clone(),
            estimated_cost: format_price(ride.price),
        }
    }
}

pub fn vehicle_selected_message(vehicle_id: u32) -> String {
    format!("Vehicle selected! (Car ID: {vehicle_id})")
}

pub fn format_price(price: u32) -> String {
    format!("${price}")
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%m/%d/%Y").to_string()
}

pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{demo_rides, vehicle_catalog};
    use crate::models::AccountType;

    #[test]
    fn auth_view_tracks_session_presence() {
        assert_eq!(AuthView::from_session(None), AuthView::Anonymous);

        let profile = UserProfile::new("sam@rides.io".into(), AccountType::Admin);
        let view = AuthView::from_session(Some(&profile));
        assert!(view.is_authenticated());
        assert_eq!(
            view,
            AuthView::Authenticated {
                greeting_name: "sam".into(),
                badge: "Admin".into()
            }
        );
    }

    #[test]
    fn profile_view_defaults() {
        let profile = UserProfile::new("sam@rides.io".into(), AccountType::Driver);
        let view = ProfileView::new(&profile);
        assert_eq!(view.name, "sam");
        assert_eq!(view.phone, "Not provided");
        assert_eq!(view.account_type, "Professional Driver");
        assert_eq!(view.member_since, format_date(profile.created_at.unwrap()));

        let undated = UserProfile {
            created_at: None,
            ..profile
        };
        assert_eq!(ProfileView::new(&undated).member_since, "N/A");
    }

    #[test]
    fn ride_card_tones() {
        let demo = &demo_rides()[0];
        let card = RideCardView::new(demo);
        assert_eq!(card.price, "$45");
        assert_eq!(card.status, "Completed");
        assert_eq!(card.tone, StatusTone::Success);

        let booked = RideRecord::confirmed("X".into(), "a".into(), "b".into(), 20, "c@d.ef".into());
        assert_eq!(RideCardView::new(&booked).tone, StatusTone::Warning);
    }

    #[test]
    fn vehicle_card_stars() {
        let catalog = vehicle_catalog();
        let camry = VehicleCardView::new(&catalog[0]);
        assert_eq!(camry.star_text(), "★★★★½");
        assert_eq!(camry.rating, "4.8");

        let bmw = VehicleCardView::new(&catalog[2]);
        assert_eq!(bmw.star_text(), "★★★★★");
        assert_eq!(bmw.category, "Luxury");
    }

    #[test]
    fn booking_confirmation_fields() {
        let ride = RideRecord::confirmed(
            "Q1W2E3R4T".into(),
            "Maadi".into(),
            "Giza".into(),
            64,
            "c@d.ef".into(),
        );
        let confirmation = BookingConfirmation::new(&ride);
        assert_eq!(confirmation.booking_id, "Q1W2E3R4T");
        assert_eq!(confirmation.estimated_cost, "$64");
        assert_eq!(vehicle_selected_message(2), "Vehicle selected! (Car ID: 2)");
    }

    #[test]
    fn error_notice_levels() {
        let missing = Error::Validation(ValidationError::MissingLocations);
        assert_eq!(Notice::for_error(&missing).level, NoticeLevel::Warning);

        let bad_email = Error::Validation(ValidationError::InvalidEmail);
        let notice = Notice::for_error(&bad_email);
        assert_eq!(notice.level, NoticeLevel::Danger);
        assert_eq!(notice.text, "Please enter a valid email address.");

        let anonymous = Error::NotAuthenticated("Please sign in to book a ride.".into());
        assert_eq!(
            Notice::for_error(&anonymous),
            Notice::info("Please sign in to book a ride.")
        );
    }

    #[test]
    fn only_success_notices_auto_hide() {
        assert!(Notice::success("ok").level.auto_hides());
        assert!(!Notice::warning("careful").level.auto_hides());
        assert!(!Notice::danger("no").level.auto_hides());
    }
}
