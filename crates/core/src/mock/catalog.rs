//! Fixed demo payloads

use chrono::{Duration, Utc};

use crate::models::{RideRecord, RideStatus, VehicleCategory, VehicleListing};

/// Rides shown when the viewer has no stored history
pub fn demo_rides() -> Vec<RideRecord> {
    let now = Utc::now();
    vec![
        RideRecord {
            id: "DEMO001".into(),
            origin: "Downtown Cairo".into(),
            destination: "Giza Pyramids".into(),
            booked_at: now - Duration::days(1),
            status: RideStatus::Completed,
            price: 45,
            owner_email: None,
        },
        RideRecord {
            id: "DEMO002".into(),
            origin: "Maadi".into(),
            destination: "New Cairo".into(),
            booked_at: now - Duration::days(2),
            status: RideStatus::Completed,
            price: 35,
            owner_email: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    make: &str,
    model: &str,
    year: u16,
    plate: &str,
    category: VehicleCategory,
    features: &[&str],
    rating: f32,
    image_url: &str,
) -> VehicleListing {
    VehicleListing {
        id,
        make: make.into(),
        model: model.into(),
        year,
        plate: plate.into(),
        category,
        features: features.iter().map(|f| f.to_string()).collect(),
        rating,
        image_url: image_url.into(),
    }
}

/// The vehicle catalog; identical on every call
pub fn vehicle_catalog() -> Vec<VehicleListing> {
    vec![
        listing(
            1,
            "Toyota",
            "Camry",
            2022,
            "ABC-1234",
            VehicleCategory::Sedan,
            &["AC", "GPS", "Bluetooth"],
            4.8,
            "https://images.pexels.com/photos/116675/pexels-photo-116675.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        listing(
            2,
            "Honda",
            "CR-V",
            2023,
            "XYZ-5678",
            VehicleCategory::Suv,
            &["AC", "GPS", "WiFi", "USB"],
            4.9,
            "https://images.pexels.com/photos/1051073/pexels-photo-1051073.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
        listing(
            3,
            "BMW",
            "5 Series",
            2023,
            "LUX-9999",
            VehicleCategory::Luxury,
            &["Leather", "Premium Sound", "Climate Control"],
            5.0,
            "https://images.pexels.com/photos/244206/pexels-photo-244206.jpeg?auto=compress&cs=tinysrgb&w=400",
        ),
    ]
}
