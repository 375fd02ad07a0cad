//! Listing records and the browse fixtures.
//!
//! DESIGN
//! ======
//! `Listing` doubles as the persisted shape of the saved collection, so its
//! serde layout (camelCase keys, display-string property types) is the local
//! storage format and must stay stable.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use serde::{Deserialize, Serialize};

/// Kinds of rentable property shown in the browse view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Studio,
    Room,
    #[serde(rename = "Shared Housing")]
    SharedHousing,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [Self::Apartment, Self::Studio, Self::Room, Self::SharedHousing];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Studio => "Studio",
            Self::Room => "Room",
            Self::SharedHousing => "Shared Housing",
        }
    }

    /// Parse a display label back into a property type.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == raw)
    }
}

/// A rental listing and its host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Monthly rent in whole dollars.
    pub price: u32,
    pub location: String,
    pub availability: String,
    pub description: String,
    pub host_name: String,
    /// Host rating on a 0–5 scale.
    pub host_rating: f64,
    pub property_type: PropertyType,
    pub amenities: Vec<String>,
    pub report_count: u32,
    pub verified_host: bool,
    pub images: Vec<String>,
    /// ISO `YYYY-MM-DD`; lexicographic order is chronological order.
    pub created_at: String,
}

/// Safety classification derived from a listing's discrimination reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    VerifiedSafe,
    Reported(u32),
    HighRisk(u32),
}

impl RiskLevel {
    pub fn from_report_count(count: u32) -> Self {
        match count {
            0 => Self::VerifiedSafe,
            1..=2 => Self::Reported(count),
            _ => Self::HighRisk(count),
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::VerifiedSafe => "Verified Safe".to_owned(),
            Self::Reported(1) => "1 Report".to_owned(),
            Self::Reported(n) => format!("{n} Reports"),
            Self::HighRisk(n) => format!("High Risk ({n} Reports)"),
        }
    }

    /// Badge modifier class suffix.
    pub fn variant(self) -> &'static str {
        match self {
            Self::VerifiedSafe => "success",
            Self::Reported(_) => "warning",
            Self::HighRisk(_) => "destructive",
        }
    }
}

/// Number of amenity tags shown on a card before collapsing into "+N more".
pub const AMENITY_PREVIEW_LEN: usize = 3;

impl Listing {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_report_count(self.report_count)
    }

    /// Leading amenity tags for card previews plus the hidden remainder count.
    pub fn amenity_preview(&self) -> (&[String], usize) {
        let shown = self.amenities.len().min(AMENITY_PREVIEW_LEN);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// The static listings shown on the browse page.
pub fn mock_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_owned(),
            title: "Modern 2BR Apartment Near Campus".to_owned(),
            price: 1800,
            location: "Boston, MA".to_owned(),
            availability: "Available Now".to_owned(),
            description: "Beautiful 2-bedroom apartment with modern amenities, close to public transport and universities."
                .to_owned(),
            host_name: "Sarah Johnson".to_owned(),
            host_rating: 4.8,
            property_type: PropertyType::Apartment,
            amenities: tags(&["WiFi", "Laundry", "Parking", "Pet Friendly"]),
            report_count: 0,
            verified_host: true,
            images: tags(&["/placeholder.svg"]),
            created_at: "2024-01-15".to_owned(),
        },
        Listing {
            id: "2".to_owned(),
            title: "Shared Student Housing".to_owned(),
            price: 900,
            location: "New York, NY".to_owned(),
            availability: "Available Feb 1".to_owned(),
            description: "Affordable shared housing perfect for students. All utilities included.".to_owned(),
            host_name: "Mike Chen".to_owned(),
            host_rating: 4.5,
            property_type: PropertyType::SharedHousing,
            amenities: tags(&["WiFi", "Utilities Included", "Study Area"]),
            report_count: 1,
            verified_host: true,
            images: tags(&["/placeholder.svg"]),
            created_at: "2024-01-10".to_owned(),
        },
        Listing {
            id: "3".to_owned(),
            title: "Luxury Studio Downtown".to_owned(),
            price: 2200,
            location: "San Francisco, CA".to_owned(),
            availability: "Available Now".to_owned(),
            description: "Premium studio apartment in the heart of downtown with stunning city views.".to_owned(),
            host_name: "Jennifer Davis".to_owned(),
            host_rating: 4.9,
            property_type: PropertyType::Studio,
            amenities: tags(&["WiFi", "Gym", "Concierge", "City View"]),
            report_count: 0,
            verified_host: true,
            images: tags(&["/placeholder.svg"]),
            created_at: "2024-01-20".to_owned(),
        },
        Listing {
            id: "4".to_owned(),
            title: "Cozy Room in Family Home".to_owned(),
            price: 750,
            location: "Austin, TX".to_owned(),
            availability: "Available Mar 1".to_owned(),
            description: "Comfortable room in a welcoming family home. Great for international students.".to_owned(),
            host_name: "Robert Wilson".to_owned(),
            host_rating: 4.2,
            property_type: PropertyType::Room,
            amenities: tags(&["WiFi", "Kitchen Access", "Family Friendly"]),
            report_count: 2,
            verified_host: false,
            images: tags(&["/placeholder.svg"]),
            created_at: "2024-01-05".to_owned(),
        },
    ]
}
