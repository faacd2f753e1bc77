//! Hardcoded site content.
//!
//! Everything here is a `const` record; pages borrow it for `'static`.

pub mod pnw;
pub mod portfolio;

use crate::trip::{Trip, TripSummary};

/// Title of the trips landing page.
pub const TRIPS_TITLE: &str = "Thomp Trips";

pub const TRIPS_TAGLINE: &str = "Trip plans, itineraries, and memories to share";

pub const TRIPS_INTRO: &str = "Hey there! I love planning adventures and wanted a place to organize all my trip plans and itineraries. Feel free to browse around and steal any ideas for your own travels!";

pub const TRIPS_HEADING: &str = "My Trip Plans";

/// Call to action at the foot of each trip card.
pub const TRIP_CARD_CTA: &str = "View detailed itinerary";

pub const TRIPS_FOOTER: &str = "© 2025 Mike Thompson - Happy travels! ✈️";

/// Trip write-ups listed on the landing page.
pub const TRIPS: &[TripSummary] = &[pnw::TRIP.summary];

/// Full itineraries, keyed by URL slug.
const ITINERARIES: &[(&str, Trip)] = &[(pnw::SLUG, pnw::TRIP)];

/// Itinerary for a `/trips/{slug}` path segment.
pub fn trip_by_slug(slug: &str) -> Option<&'static Trip> {
    ITINERARIES
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, trip)| trip)
}

/// Every page path the site serves, for sitemaps.
pub fn page_paths() -> Vec<&'static str> {
    let mut paths = vec!["/", "/trips"];
    paths.extend(TRIPS.iter().map(|trip| trip.link));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_by_slug() {
        let trip = trip_by_slug("pacific-northwest-family-adventure").expect("known slug");
        assert_eq!(trip.summary.title, "Pacific Northwest Family Adventure");
        assert!(trip_by_slug("alaska").is_none());
    }

    #[test]
    fn test_landing_copy() {
        assert_eq!(TRIPS_HEADING, "My Trip Plans");
        assert_eq!(TRIP_CARD_CTA, "View detailed itinerary");
        assert_ne!(TRIPS_HEADING, TRIPS_TITLE);
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(
            page_paths(),
            vec!["/", "/trips", "/trips/pacific-northwest-family-adventure"]
        );
    }
}
