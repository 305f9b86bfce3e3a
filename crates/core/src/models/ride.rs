//! Ride booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking state of a ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    #[serde(alias = "Confirmed")]
    Confirmed,
    #[serde(alias = "Completed")]
    Completed,
}

impl RideStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Confirmed => "Confirmed",
            RideStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A booked or historical ride
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub booked_at: DateTime<Utc>,
    pub status: RideStatus,
    pub price: u32,
    /// Email of the profile that booked the ride; demo rides have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

impl RideRecord {
    /// A freshly booked ride
    pub fn confirmed(
        id: String,
        origin: String,
        destination: String,
        price: u32,
        owner_email: String,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            booked_at: Utc::now(),
            status: RideStatus::Confirmed,
            price,
            owner_email: Some(owner_email),
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email.as_deref() == Some(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_shape_uses_camel_case() {
        let ride = RideRecord::confirmed(
            "K3J9X0P2A".into(),
            "Maadi".into(),
            "Zamalek".into(),
            22,
            "jane@x.com".into(),
        );
        let json = serde_json::to_value(&ride).unwrap();
        assert_eq!(json["ownerEmail"], "jane@x.com");
        assert_eq!(json["status"], "confirmed");
        assert!(json.get("bookedAt").is_some());
    }

    #[test]
    fn capitalized_status_is_accepted() {
        let json = r#"{"id":"A","origin":"x","destination":"y","bookedAt":"2024-05-01T10:00:00Z","status":"Completed","price":10}"#;
        let ride: RideRecord = serde_json::from_str(json).unwrap();
        assert_eq!(ride.status, RideStatus::Completed);
        assert!(ride.owner_email.is_none());
        assert!(!ride.is_owned_by("a@b.co"));
    }
}
