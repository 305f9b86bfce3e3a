//! Vehicle catalog model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Luxury,
}

impl VehicleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Sedan => "Sedan",
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only catalog entry; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListing {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub plate: String,
    pub category: VehicleCategory,
    pub features: Vec<String>,
    /// 0.0 to 5.0
    pub rating: f32,
    pub image_url: String,
}

impl VehicleListing {
    /// "Make Model"
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Full and half stars for the rating
    pub fn stars(&self) -> (u8, bool) {
        let rating = self.rating.clamp(0.0, 5.0);
        let full = rating.floor() as u8;
        let half = rating.fract() > f32::EPSILON;
        (full, half)
    }
}
