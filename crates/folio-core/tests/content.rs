//! Integrity checks over the hardcoded site content.

use std::collections::HashSet;

use folio_core::{
    Location, Section, TripTab, TripView,
    content::{self, pnw, portfolio},
    trip::item_key,
};

#[test]
fn test_nav_covers_every_section_in_order() {
    let sections: Vec<_> = portfolio::NAV.iter().map(|entry| entry.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
}

#[test]
fn test_skill_categories_are_populated() {
    assert_eq!(portfolio::SKILLS.len(), 6);
    for category in portfolio::SKILLS {
        assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        assert!(category.color.starts_with("from-"));
    }
}

#[test]
fn test_experiences_are_complete() {
    assert_eq!(portfolio::EXPERIENCES.len(), 8);
    for exp in portfolio::EXPERIENCES {
        assert!(!exp.achievements.is_empty(), "{} has no achievements", exp.title);
        assert!(!exp.technologies.is_empty(), "{} has no technologies", exp.title);
    }

    let with_website: Vec<_> = portfolio::EXPERIENCES
        .iter()
        .filter(|exp| exp.website.is_some())
        .map(|exp| exp.company)
        .collect();
    assert_eq!(with_website, vec!["Sudo Squad LLC"]);
}

#[test]
fn test_profile_links_are_outbound() {
    for link in portfolio::PROFILE.links {
        assert!(
            link.href.starts_with("mailto:") || link.href.starts_with("https://"),
            "{} is not an outbound link",
            link.href
        );
    }
    assert_eq!(portfolio::PROFILE.full_name(), "Mike Thompson");
}

#[test]
fn test_detail_keys_are_unique() {
    let keys: Vec<_> = pnw::TRIP.details.keys().collect();
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(keys.len(), unique.len());
    assert_eq!(keys.len(), 8);
}

#[test]
fn test_every_detail_is_reachable_from_the_page() {
    let trip = pnw::TRIP;
    let mut reachable = HashSet::new();

    for location in Location::ALL {
        for group in trip.activity_groups(location) {
            for item in group.items {
                if trip.details.contains(item_key(item)) {
                    reachable.insert(item_key(item));
                }
            }
        }
    }
    for guide in trip.dining {
        for group in guide.groups {
            for restaurant in group.restaurants {
                if let Some(key) = restaurant.detail_key {
                    reachable.insert(key);
                }
            }
        }
    }

    let all: HashSet<_> = trip.details.keys().collect();
    assert_eq!(reachable, all);
}

#[test]
fn test_restaurant_detail_keys_resolve() {
    for guide in pnw::TRIP.dining {
        for group in guide.groups {
            for restaurant in group.restaurants {
                if let Some(key) = restaurant.detail_key {
                    assert!(pnw::TRIP.details.contains(key), "{key} has no record");
                }
            }
        }
    }
}

#[test]
fn test_each_location_shows_its_own_groups() {
    let trip = pnw::TRIP;
    let mut view = TripView::new();
    view.select_tab(TripTab::Activities);

    view.select_location(Location::Whidbey);
    let whidbey: Vec<_> = trip
        .activity_groups(view.location())
        .iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(
        whidbey,
        vec!["Outdoor Adventures", "Museums & Culture", "Nature & Wildlife", "Arts & Crafts"]
    );

    view.select_location(Location::Leavenworth);
    let leavenworth: Vec<_> = trip
        .activity_groups(view.location())
        .iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(
        leavenworth,
        vec!["Outdoor Adventures", "Bavarian Culture", "Wine & Beer", "Gardens & Nature"]
    );
}

#[test]
fn test_known_detail_modal_fields() {
    let trip = pnw::TRIP;
    let mut view = TripView::new();

    assert!(view.open_detail("Fly Fishing", &trip.details));
    let detail = view.modal(&trip.details).expect("modal open");
    let headings: Vec<_> = detail.fields().iter().map(|f| f.heading()).collect();
    assert_eq!(headings, vec!["Guide Services", "Insider Tips"]);

    assert!(view.open_detail("Meerkerk Gardens", &trip.details));
    let detail = view.modal(&trip.details).expect("modal open");
    let headings: Vec<_> = detail.fields().iter().map(|f| f.heading()).collect();
    assert_eq!(headings, vec!["Location", "Contact", "Insider Tips"]);

    view.close_detail();
    assert!(view.modal(&trip.details).is_none());
}

#[test]
fn test_item_without_record_is_not_clickable() {
    let trip = pnw::TRIP;
    assert!(trip.details.for_item("Joseph Whidbey State Park - 2.5-mile loop").is_none());

    let mut view = TripView::new();
    assert!(!view.open_detail("Joseph Whidbey State Park", &trip.details));
    assert!(view.modal(&trip.details).is_none());
}

#[test]
fn test_accommodations_per_location() {
    for location in Location::ALL {
        let stay = pnw::TRIP.accommodation(location).expect("stay per location");
        assert!(!stay.address.is_empty());
        assert!(pnw::TRIP.dining_guide(location).is_some());
    }
}

#[test]
fn test_landing_links_resolve_to_itineraries() {
    for trip in content::TRIPS {
        let slug = trip
            .link
            .strip_prefix("/trips/")
            .expect("trip links live under /trips/");
        assert!(content::trip_by_slug(slug).is_some(), "{slug} has no itinerary");
    }
}

#[test]
fn test_weather_links_out() {
    assert!(pnw::TRIP.weather.forecast_url.starts_with("https://"));
    assert!(!pnw::TRIP.weather.call_to_action.is_empty());
}
