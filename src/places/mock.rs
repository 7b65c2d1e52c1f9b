//! Mock Places client
//!
//! Fixed fixtures served when no API key is configured.

use async_trait::async_trait;
use chrono::Local;

use super::normalize::{format_hours, RawOpeningHours};
use super::PlacesClient;
use crate::error::Result;
use crate::models::{
    Amenities, HowFound, Period, PeriodTime, Restaurant, SearchRequest, SearchResult, Socials,
    Summaries,
};

const MOCK_ADDRESSES: [&str; 3] = [
    "123 Main Street, Sample City, SC 12345",
    "456 Oak Avenue, Sample City, SC 12345",
    "789 Pine Road, Sample City, SC 12345",
];

const MOCK_WEEK: [(&str, &str, &str); 7] = [
    ("Sunday", "1000", "2100"),
    ("Monday", "1100", "2200"),
    ("Tuesday", "1100", "2200"),
    ("Wednesday", "1100", "2200"),
    ("Thursday", "1100", "2200"),
    ("Friday", "1100", "2300"),
    ("Saturday", "1000", "2300"),
];

const MOCK_WEEKDAY_TEXT: [&str; 7] = [
    "Monday: 11:00 AM – 10:00 PM",
    "Tuesday: 11:00 AM – 10:00 PM",
    "Wednesday: 11:00 AM – 10:00 PM",
    "Thursday: 11:00 AM – 10:00 PM",
    "Friday: 11:00 AM – 11:00 PM",
    "Saturday: 10:00 AM – 11:00 PM",
    "Sunday: 10:00 AM – 9:00 PM",
];

/// Serves canned restaurants without touching the network.
#[derive(Debug, Clone, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        Self
    }

    fn mock_hours() -> RawOpeningHours {
        let periods = MOCK_WEEK
            .iter()
            .enumerate()
            .map(|(day, (_, open, close))| Period {
                open: PeriodTime {
                    day: day as u8,
                    time: open.to_string(),
                },
                close: Some(PeriodTime {
                    day: day as u8,
                    time: close.to_string(),
                }),
            })
            .collect();

        RawOpeningHours {
            open_now: Some(true),
            periods,
            weekday_text: MOCK_WEEKDAY_TEXT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl PlacesClient for MockClient {
    async fn text_search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        let query = request.query_text();
        let names = [
            format!("Sample Restaurant for '{}'", query),
            format!("Another Restaurant for '{}'", query),
            format!("Third Restaurant for '{}'", query),
        ];
        let ratings = [4.5, 4.2, 3.8];

        Ok(names
            .into_iter()
            .zip(MOCK_ADDRESSES)
            .zip(ratings)
            .enumerate()
            .map(|(i, ((name, address), rating))| SearchResult {
                place_id: format!("mock_place_{}", i + 1),
                name,
                address: address.to_string(),
                rating: Some(rating),
            })
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<Restaurant> {
        Ok(Restaurant {
            place_id: place_id.to_string(),
            name: "Sample Restaurant".to_string(),
            address: MOCK_ADDRESSES[0].to_string(),
            rating: Some(4.5),
            contact: Some("(555) 123-4567".to_string()),
            website: Some("https://example-restaurant.com".to_string()),
            reservation_url: None,
            reservation_partner: Some("None".to_string()),
            operating_hours: Some(format_hours(Self::mock_hours(), Local::now().naive_local())),
            socials: Some(Socials {
                instagram: Some("https://instagram.com/sample_restaurant".to_string()),
                facebook: Some("https://facebook.com/sample_restaurant".to_string()),
                twitter: None,
            }),
            menu_url: Some("https://example-restaurant.com/menu".to_string()),
            amenities: Amenities {
                dine_in: true,
                delivery: true,
                takeout: true,
                outdoor_seating: true,
                live_music: false,
                good_for_groups: true,
                good_for_children: true,
                serves_dinner: true,
                serves_lunch: true,
                serves_wine: true,
            },
            summaries: Summaries {
                review_summary: "Highly rated restaurant with excellent food and service"
                    .to_string(),
                generative_summary: "A popular dining destination known for its quality cuisine"
                    .to_string(),
                editorial_summary: "Well-reviewed restaurant in the heart of the city"
                    .to_string(),
            },
            vibes: vec![
                "Family-friendly".to_string(),
                "Casual".to_string(),
                "Good for Groups".to_string(),
            ],
            images: vec![
                "https://via.placeholder.com/400x300/667eea/ffffff?text=Restaurant+Image+1"
                    .to_string(),
                "https://via.placeholder.com/400x300/764ba2/ffffff?text=Restaurant+Image+2"
                    .to_string(),
            ],
            how_found: HowFound::from_source("mock data"),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
