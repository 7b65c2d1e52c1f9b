//! Place normalization
//!
//! Turns raw Places API fields into the record shape the service serves:
//! amenity flags, vibe tags, summaries, photo URLs and opening hours.

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::models::{Amenities, CurrentPeriod, OperatingHours, Period, Summaries};

/// Photo URLs kept per place.
pub const MAX_PHOTOS: usize = 10;

/// Vibe tags kept per place.
pub const MAX_VIBES: usize = 8;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// `opening_hours` as the Places API returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

fn has_type(types: &[String], wanted: &str) -> bool {
    types.iter().any(|t| t == wanted)
}

/// Derives amenity flags from place `types`.
///
/// Dine-in, lunch and dinner are assumed for every restaurant.
pub fn extract_amenities(types: &[String]) -> Amenities {
    Amenities {
        dine_in: true,
        delivery: has_type(types, "delivery") || has_type(types, "takeout"),
        takeout: has_type(types, "takeout"),
        outdoor_seating: has_type(types, "outdoor_seating"),
        live_music: false,
        good_for_groups: has_type(types, "meal_takeaway"),
        good_for_children: has_type(types, "family_restaurant"),
        serves_dinner: true,
        serves_lunch: true,
        serves_wine: has_type(types, "bar") || has_type(types, "wine_bar"),
    }
}

/// Tags a place with coarse vibes from its amenities, price level and types.
///
/// Each category appears at most once. Callers must not rely on the order.
pub fn classify_vibes(
    amenities: &Amenities,
    price_level: Option<u8>,
    types: &[String],
) -> Vec<String> {
    let rules: [(bool, &str); 7] = [
        (amenities.live_music, "Lively"),
        (amenities.good_for_children, "Family-friendly"),
        (
            amenities.serves_wine && amenities.outdoor_seating,
            "Chill / Lounge",
        ),
        (price_level.unwrap_or(0) >= 4, "Luxury dining"),
        (has_type(types, "romantic_restaurant"), "Romantic"),
        (has_type(types, "casual_restaurant"), "Casual"),
        (has_type(types, "fine_dining"), "Fine Dining"),
    ];

    rules
        .iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, vibe)| vibe.to_string())
        .take(MAX_VIBES)
        .collect()
}

pub fn build_summaries(rating: Option<f64>) -> Summaries {
    let rating = rating
        .map(|r| format!("{:?}", r))
        .unwrap_or_else(|| "N/A".to_string());

    Summaries {
        review_summary: format!("Rated {} by customers", rating),
        generative_summary: "A popular dining destination".to_string(),
        editorial_summary: "Well-reviewed restaurant in the area".to_string(),
    }
}

/// Builds Places Photo URLs for up to [`MAX_PHOTOS`] references.
pub fn photo_urls<'a>(
    base_url: &str,
    api_key: &str,
    references: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    references
        .into_iter()
        .filter(|r| !r.is_empty())
        .take(MAX_PHOTOS)
        .map(|r| {
            format!(
                "{}/photo?maxwidth=400&photoreference={}&key={}",
                base_url, r, api_key
            )
        })
        .collect()
}

fn parse_hhmm(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H%M").ok()
}

/// Resolves today's hours and whether the place is open at `now`.
///
/// `today` counts from Monday = 0 while the API's `periods` count days from
/// Sunday = 0. Windows that close before they open wrap past midnight.
pub fn format_hours(raw: RawOpeningHours, now: NaiveDateTime) -> OperatingHours {
    let weekday = now.weekday();
    let today = weekday.num_days_from_monday();
    let api_day = weekday.num_days_from_sunday() as u8;
    let time = now.time();

    let today_hours = raw.weekday_text.get(today as usize).cloned();

    let current_period = raw
        .periods
        .iter()
        .find(|p| p.open.day == api_day)
        .and_then(|p| {
            let open = parse_hhmm(&p.open.time)?;
            let close = parse_hhmm(&p.close.as_ref()?.time)?;
            let is_open = if close < open {
                time >= open || time <= close
            } else {
                open <= time && time <= close
            };
            Some(CurrentPeriod {
                open: open.format("%I:%M %p").to_string(),
                close: close.format("%I:%M %p").to_string(),
                is_open,
            })
        });

    let computed_open = current_period.as_ref().is_some_and(|p| p.is_open);

    OperatingHours {
        open_now: raw.open_now.unwrap_or(false) || computed_open,
        periods: raw.periods,
        weekday_text: raw.weekday_text,
        today,
        today_hours,
        current_period,
        day_names: DAY_NAMES.iter().map(|d| d.to_string()).collect(),
    }
}
