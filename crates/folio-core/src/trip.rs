//! Records rendered by the trip landing and itinerary pages.

use serde::Serialize;

use crate::{icon::Icon, state::Location};

/// Separator between an activity's name and its short blurb in list items.
const ITEM_SEPARATOR: &str = " - ";

/// A trip write-up card on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripSummary {
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub dates: &'static str,
    pub group_size: &'static str,

    /// Path of the itinerary page.
    pub link: &'static str,

    /// Shown in place of the image when no image is configured.
    pub icon: Icon,
    pub image: Option<&'static str>,
}

impl TripSummary {
    /// Chips rendered under the description.
    pub fn chips(&self) -> [&'static str; 3] {
        [self.duration, self.dates, self.group_size]
    }
}

/// Extended information about one attraction or restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityDetail {
    /// Lookup key, matching the name shown in activity lists.
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub location: Option<&'static str>,
    pub contact: Option<&'static str>,
    pub hours: Option<&'static str>,
    pub tips: Option<&'static str>,

    /// Guide services; empty when the record has none.
    pub guides: &'static [&'static str],
}

/// An optional section of the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DetailField {
    Location(&'static str),
    Contact(&'static str),
    Hours(&'static str),
    Guides(&'static [&'static str]),
    Tips(&'static str),
}

impl DetailField {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Location(_) => "Location",
            Self::Contact(_) => "Contact",
            Self::Hours(_) => "Hours",
            Self::Guides(_) => "Guide Services",
            Self::Tips(_) => "Insider Tips",
        }
    }

    /// Icon next to the heading. Guide services have none.
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Self::Location(_) => Some(Icon::MapPin),
            Self::Contact(_) => Some(Icon::Phone),
            Self::Hours(_) => Some(Icon::Clock),
            Self::Guides(_) => None,
            Self::Tips(_) => Some(Icon::Star),
        }
    }
}

impl ActivityDetail {
    /// Heading and icon above the `details` list.
    pub const DETAILS_HEADING: &'static str = "Details";
    pub const DETAILS_ICON: Icon = Icon::Info;

    /// Optional fields that are present, in display order.
    pub fn fields(&self) -> Vec<DetailField> {
        let mut fields = Vec::with_capacity(5);
        if let Some(location) = self.location {
            fields.push(DetailField::Location(location));
        }
        if let Some(contact) = self.contact {
            fields.push(DetailField::Contact(contact));
        }
        if let Some(hours) = self.hours {
            fields.push(DetailField::Hours(hours));
        }
        if !self.guides.is_empty() {
            fields.push(DetailField::Guides(self.guides));
        }
        if let Some(tips) = self.tips {
            fields.push(DetailField::Tips(tips));
        }
        fields
    }
}

/// Keyed collection of activity detail records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailCatalog {
    entries: &'static [ActivityDetail],
}

impl DetailCatalog {
    pub const fn new(entries: &'static [ActivityDetail]) -> Self {
        Self { entries }
    }

    /// Find the record for `key`.
    pub fn lookup(&self, key: &str) -> Option<&'static ActivityDetail> {
        self.entries.iter().find(|detail| detail.name == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|detail| detail.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record for an activity list item such as `"Penn Cove - Bird watching"`.
    ///
    /// The key is the text before the first `" - "`.
    pub fn for_item(&self, item: &str) -> Option<&'static ActivityDetail> {
        self.lookup(item_key(item))
    }
}

/// Name portion of an activity list item.
pub fn item_key(item: &str) -> &str {
    item.split(ITEM_SEPARATOR).next().unwrap_or(item)
}

/// A titled list of activities for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [&'static str],
}

/// Activity groups shown for one location sub-tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationActivities {
    pub location: Location,
    pub groups: &'static [ActivityGroup],
}

/// Activity available at every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnytimeActivity {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// A day with fixed commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleDay {
    pub date: &'static str,
    pub icon: Icon,
    pub events: &'static [&'static str],
}

/// Static weather card. There is no live forecast; the card links out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weather {
    pub headline: &'static str,
    pub summary: &'static str,
    pub forecast_url: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: Icon,

    /// Color tone used for the tile background (green, blue, ...).
    pub tone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub name: &'static str,
    pub address: Option<&'static str>,
    pub blurb: &'static str,

    /// Detail record opened when the name is clicked.
    pub detail_key: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestaurantGroup {
    pub title: &'static str,
    pub restaurants: &'static [Restaurant],
}

/// Restaurant guide column for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiningGuide {
    pub location: Location,
    pub groups: &'static [RestaurantGroup],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accommodation {
    pub location: Location,
    pub name: &'static str,
    pub address: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub notes: &'static str,
}

/// Address worth calling out on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyAddress {
    pub label: &'static str,
    pub address: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub route: &'static str,
    pub description: &'static str,
}

/// Things to book ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingWindow {
    pub title: &'static str,
    pub icon: Icon,
    pub tone: &'static str,
    pub tasks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackingGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetLine {
    pub item: &'static str,
    pub cost: &'static str,
}

/// Everything the itinerary page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub summary: TripSummary,
    pub subtitle: &'static str,
    pub full_dates: &'static str,
    pub party: &'static str,
    pub bases: &'static str,
    pub schedule: &'static [ScheduleDay],
    pub weather: Weather,
    pub highlights: &'static [Highlight],
    pub activities: &'static [LocationActivities],
    pub anytime: &'static [AnytimeActivity],
    pub dining: &'static [DiningGuide],
    pub accommodations: &'static [Accommodation],
    pub key_address: KeyAddress,
    pub directions: &'static [Direction],
    pub flexible_note: &'static str,
    pub booking: &'static [BookingWindow],
    pub packing: &'static [PackingGroup],
    pub budget: &'static [BudgetLine],
    pub free_activities: &'static str,
    pub passes: &'static [&'static str],
    pub details: DetailCatalog,
    pub farewell: &'static str,
    pub footnote: &'static str,
}

impl Trip {
    /// Activity groups shown for `location`; empty when none are listed.
    pub fn activity_groups(&self, location: Location) -> &'static [ActivityGroup] {
        self.activities
            .iter()
            .find(|entry| entry.location == location)
            .map(|entry| entry.groups)
            .unwrap_or(&[])
    }

    pub fn dining_guide(&self, location: Location) -> Option<&'static DiningGuide> {
        self.dining.iter().find(|guide| guide.location == location)
    }

    pub fn accommodation(&self, location: Location) -> Option<&'static Accommodation> {
        self.accommodations
            .iter()
            .find(|stay| stay.location == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: ActivityDetail = ActivityDetail {
        name: "Fly Fishing",
        description: "Guided trips.",
        details: &["Half-day trips"],
        location: Some("Icicle Creek"),
        contact: Some("555-0100"),
        hours: Some("Dawn to dusk"),
        tips: Some("Book early."),
        guides: &["Guide A", "Guide B"],
    };

    const BARE: ActivityDetail = ActivityDetail {
        name: "Bridge",
        description: "A bridge.",
        details: &[],
        location: None,
        contact: None,
        hours: None,
        tips: None,
        guides: &[],
    };

    const ENTRIES: &[ActivityDetail] = &[FULL, BARE];
    const CATALOG: DetailCatalog = DetailCatalog::new(ENTRIES);

    #[test]
    fn test_item_key_splits_on_first_separator() {
        assert_eq!(item_key("Penn Cove - Bird watching, 211+ species"), "Penn Cove");
        assert_eq!(item_key("Colchuck Lake - 8.7 miles - hard"), "Colchuck Lake");
        assert_eq!(item_key("Art galleries downtown"), "Art galleries downtown");
    }

    #[test]
    fn test_item_key_keeps_hyphenated_names() {
        assert_eq!(item_key("Paint-your-own pottery"), "Paint-your-own pottery");
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(CATALOG.lookup("Fly Fishing"), Some(&ENTRIES[0]));
        assert!(CATALOG.lookup("fly fishing").is_none());
        assert!(CATALOG.contains("Bridge"));
        assert_eq!(CATALOG.len(), 2);
        assert!(!CATALOG.is_empty());
    }

    #[test]
    fn test_catalog_for_item() {
        let detail = CATALOG.for_item("Fly Fishing - Guided trips available");
        assert_eq!(detail.map(|d| d.name), Some("Fly Fishing"));
        assert!(CATALOG.for_item("River tubing on Wenatchee River").is_none());
    }

    #[test]
    fn test_fields_in_display_order() {
        let fields = FULL.fields();
        let headings: Vec<_> = fields.iter().map(DetailField::heading).collect();
        assert_eq!(
            headings,
            vec!["Location", "Contact", "Hours", "Guide Services", "Insider Tips"]
        );
        assert_eq!(fields[3], DetailField::Guides(&["Guide A", "Guide B"]));
    }

    #[test]
    fn test_fields_omit_absent_values() {
        assert!(BARE.fields().is_empty());

        let partial = ActivityDetail {
            hours: Some("Daily 11am-9pm"),
            ..BARE
        };
        assert_eq!(partial.fields(), vec![DetailField::Hours("Daily 11am-9pm")]);
    }

    #[test]
    fn test_details_heading_is_distinct_from_fields() {
        assert_eq!(ActivityDetail::DETAILS_HEADING, "Details");
        assert_eq!(ActivityDetail::DETAILS_ICON, Icon::Info);

        let detail = ActivityDetail {
            location: Some("Coupeville"),
            contact: Some("(360) 555-0100"),
            hours: Some("Daily"),
            tips: Some("Go early"),
            guides: &["Guide A"],
            ..BARE
        };
        assert!(
            detail
                .fields()
                .iter()
                .all(|field| field.heading() != ActivityDetail::DETAILS_HEADING)
        );
    }

    #[test]
    fn test_guides_have_no_icon() {
        assert!(DetailField::Guides(&[]).icon().is_none());
        assert_eq!(DetailField::Tips("x").icon(), Some(Icon::Star));
    }

    #[test]
    fn test_detail_field_serialization() {
        let json = serde_json::to_string(&DetailField::Hours("9-5")).unwrap();
        assert_eq!(json, r#"{"kind":"hours","value":"9-5"}"#);
    }
}
