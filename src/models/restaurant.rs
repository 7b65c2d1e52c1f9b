//! Restaurant records
//!
//! Normalized shapes returned by every Places client and stored in the cache.

use serde::{Deserialize, Serialize};

/// One row of a text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
}

/// Full detail record for a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    /// Formatted phone number
    pub contact: Option<String>,
    pub website: Option<String>,
    pub reservation_url: Option<String>,
    pub reservation_partner: Option<String>,
    pub operating_hours: Option<OperatingHours>,
    pub socials: Option<Socials>,
    pub menu_url: Option<String>,
    pub amenities: Amenities,
    pub summaries: Summaries,
    pub vibes: Vec<String>,
    /// Photo URLs
    pub images: Vec<String>,
    pub how_found: HowFound,
}

/// Opening hours with today's slot resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub periods: Vec<Period>,
    pub weekday_text: Vec<String>,
    /// Day of week, Monday = 0
    pub today: u32,
    pub today_hours: Option<String>,
    pub current_period: Option<CurrentPeriod>,
    pub open_now: bool,
    pub day_names: Vec<String>,
}

/// An opening window. `close` is absent for places open around the clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub open: PeriodTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<PeriodTime>,
}

/// Day (Sunday = 0) and `HHMM` time as the Places API reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTime {
    pub day: u8,
    pub time: String,
}

/// Today's window rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPeriod {
    pub open: String,
    pub close: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenities {
    pub dine_in: bool,
    pub delivery: bool,
    pub takeout: bool,
    pub outdoor_seating: bool,
    pub live_music: bool,
    pub good_for_groups: bool,
    pub good_for_children: bool,
    pub serves_dinner: bool,
    pub serves_lunch: bool,
    pub serves_wine: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summaries {
    pub review_summary: String,
    pub generative_summary: String,
    pub editorial_summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Socials {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

/// Where the reservation link and images came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowFound {
    pub reservation_url: String,
    pub images: String,
}

impl HowFound {
    pub fn from_source(source: &str) -> Self {
        Self {
            reservation_url: source.to_string(),
            images: source.to_string(),
        }
    }
}
