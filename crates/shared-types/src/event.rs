use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog event available for registration.
///
/// Events are statically defined at compile time and never created or
/// destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Remote image shown on the event card.
    pub image_url: String,
}

impl Event {
    fn new(title: &str, description: &str, date: NaiveDate, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            date,
            image_url: image_url.to_string(),
        }
    }

    /// Event date formatted for display (e.g. "Mar 15, 2024").
    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed event catalog shown on the events screen.
pub fn event_catalog() -> Vec<Event> {
    vec![
        Event::new(
            "Annual Sports Meet",
            "Join us for an exciting day of sports and competition",
            date(2024, 3, 15),
            "https://images.unsplash.com/photo-1461896836934-ffe607ba8211",
        ),
        Event::new(
            "Marathon 2024",
            "Run for a cause in our annual marathon event",
            date(2024, 4, 1),
            "https://images.unsplash.com/photo-1452626038306-9aae5e071dd3",
        ),
        Event::new(
            "Startup Summit",
            "Connect with entrepreneurs and innovators",
            date(2024, 3, 20),
            "https://images.unsplash.com/photo-1515187029135-18ee286d815b",
        ),
        Event::new(
            "College Fest",
            "Annual cultural extravaganza",
            date(2024, 3, 25),
            "https://images.unsplash.com/photo-1523580494863-6f3031224c94",
        ),
    ]
}
