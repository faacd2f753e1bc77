//! Transient view state for the pages.
//!
//! Each page owns its own state; nothing here is shared between pages or
//! persisted. The types are plain values so the transitions can be tested
//! without a browser.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::{CoreError, Result},
    trip::{ActivityDetail, DetailCatalog},
};

/// Scroll distance after which the portfolio nav switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Distance below the viewport top used as the scroll-spy reference point.
pub const SCROLL_SPY_OFFSET: f64 = 200.0;

/// Half the cursor follower's size; the follower is centred on the pointer.
pub const CURSOR_RADIUS: f64 = 12.0;

/// Itinerary tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripTab {
    #[default]
    Overview,
    Activities,
    Dining,
    Details,
    Schedule,
    Essentials,
}

impl TripTab {
    /// All tabs in display order.
    pub const ALL: [TripTab; 6] = [
        Self::Overview,
        Self::Activities,
        Self::Dining,
        Self::Details,
        Self::Schedule,
        Self::Essentials,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Activities => "activities",
            Self::Dining => "dining",
            Self::Details => "details",
            Self::Schedule => "schedule",
            Self::Essentials => "essentials",
        }
    }

    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Trip Details",
            other => other.id(),
        }
    }
}

impl fmt::Display for TripTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TripTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| CoreError::unknown_tab(s))
    }
}

/// Location sub-tab inside the activities tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Whidbey,
    Leavenworth,
}

impl Location {
    pub const ALL: [Location; 2] = [Self::Whidbey, Self::Leavenworth];

    pub fn id(self) -> &'static str {
        match self {
            Self::Whidbey => "whidbey",
            Self::Leavenworth => "leavenworth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Whidbey => "Whidbey Island",
            Self::Leavenworth => "Leavenworth",
        }
    }

    /// Accent tone used for headings that belong to this location.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Whidbey => "blue",
            Self::Leavenworth => "green",
        }
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|location| location.id() == s)
            .ok_or_else(|| CoreError::unknown_location(s))
    }
}

/// State of the itinerary page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripView {
    tab: TripTab,
    location: Location,
    selected: Option<&'static str>,
}

impl TripView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from the `tab` and `location` query parameters.
    ///
    /// Missing or unrecognised values keep the defaults.
    pub fn from_query(tab: Option<&str>, location: Option<&str>) -> Self {
        let mut view = Self::new();
        if let Some(tab) = tab {
            match tab.parse() {
                Ok(tab) => view.select_tab(tab),
                Err(err) => log::debug!("ignoring tab parameter: {err}"),
            }
        }
        if let Some(location) = location {
            match location.parse() {
                Ok(location) => view.select_location(location),
                Err(err) => log::debug!("ignoring location parameter: {err}"),
            }
        }
        view
    }

    pub fn tab(&self) -> TripTab {
        self.tab
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Key of the open detail record, if any.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn select_tab(&mut self, tab: TripTab) {
        self.tab = tab;
    }

    pub fn select_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Whether the content block for `tab` is shown.
    pub fn is_visible(&self, tab: TripTab) -> bool {
        self.tab == tab
    }

    /// Open the detail modal for `key`.
    ///
    /// Keys missing from `catalog` leave the page with no modal open and
    /// return `false`.
    pub fn open_detail(&mut self, key: &str, catalog: &DetailCatalog) -> bool {
        match catalog.lookup(key) {
            Some(detail) => {
                self.selected = Some(detail.name);
                true
            }
            None => {
                log::debug!("no detail record for {key:?}");
                self.selected = None;
                false
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Record the modal should render, if one is open and known.
    pub fn modal(&self, catalog: &DetailCatalog) -> Option<&'static ActivityDetail> {
        self.selected.and_then(|key| catalog.lookup(key))
    }
}

/// Sections of the portfolio page, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    Skills,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Hero,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Contact,
    ];

    /// Element id of the section, also its anchor.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Section named by a URL fragment such as `#skills`.
    ///
    /// An empty fragment names no section; an unknown one is logged.
    pub fn from_hash(hash: &str) -> Option<Self> {
        if hash.trim_start_matches('#').is_empty() {
            return None;
        }
        hash.parse()
            .map_err(|err| log::debug!("ignoring fragment: {err}"))
            .ok()
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| CoreError::unknown_section(s))
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose bounds contain the scroll-spy reference point.
///
/// Bounds are checked in the order given; the first match wins.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let reference = scroll_y + SCROLL_SPY_OFFSET;
    bounds
        .iter()
        .find(|b| b.contains(reference))
        .map(|b| b.section)
}

/// State of the portfolio page, excluding the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioView {
    active: Section,
    scrolled: bool,
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Apply a scroll event.
    ///
    /// When no section contains the reference point the previous active
    /// section is kept.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: &[SectionBounds]) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(section) = active_section(scroll_y, bounds) {
            self.active = section;
        }
    }
}

/// Last known pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner of the cursor follower.
    pub fn follower_origin(&self) -> (f64, f64) {
        (self.x - CURSOR_RADIUS, self.y - CURSOR_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS: &[ActivityDetail] = &[
        ActivityDetail {
            name: "Penn Cove",
            description: "Saltwater cove.",
            details: &["Bird watching"],
            location: Some("Coupeville"),
            contact: None,
            hours: None,
            tips: Some("Low tide."),
            guides: &[],
        },
        ActivityDetail {
            name: "München Haus",
            description: "Beer garden.",
            details: &["Bratwurst"],
            location: Some("709 Front St"),
            contact: None,
            hours: Some("Daily 11am-9pm"),
            tips: None,
            guides: &[],
        },
    ];
    const CATALOG: DetailCatalog = DetailCatalog::new(DETAILS);

    fn page_bounds() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(Section::Hero, 0.0, 900.0),
            SectionBounds::new(Section::Skills, 900.0, 700.0),
            SectionBounds::new(Section::Experience, 1600.0, 2400.0),
            SectionBounds::new(Section::Education, 4000.0, 600.0),
            SectionBounds::new(Section::Contact, 4600.0, 500.0),
        ]
    }

    #[test]
    fn test_trip_view_initial_state() {
        let view = TripView::new();
        assert_eq!(view.tab(), TripTab::Overview);
        assert_eq!(view.location(), Location::Whidbey);
        assert!(view.selected().is_none());
        assert!(view.modal(&CATALOG).is_none());
    }

    #[test]
    fn test_selecting_tab_shows_only_that_tab() {
        let mut view = TripView::new();
        for tab in TripTab::ALL {
            view.select_tab(tab);
            let visible: Vec<_> = TripTab::ALL
                .into_iter()
                .filter(|t| view.is_visible(*t))
                .collect();
            assert_eq!(visible, vec![tab]);
        }
    }

    #[test]
    fn test_tab_transitions_have_no_history() {
        let mut view = TripView::new();
        view.select_tab(TripTab::Dining);
        view.select_tab(TripTab::Schedule);
        view.select_tab(TripTab::Schedule);
        assert_eq!(view.tab(), TripTab::Schedule);
    }

    #[test]
    fn test_location_survives_tab_switch() {
        let mut view = TripView::new();
        view.select_tab(TripTab::Activities);
        view.select_location(Location::Leavenworth);
        view.select_tab(TripTab::Overview);
        view.select_tab(TripTab::Activities);
        assert_eq!(view.location(), Location::Leavenworth);
    }

    #[test]
    fn test_open_known_detail() {
        let mut view = TripView::new();
        assert!(view.open_detail("Penn Cove", &CATALOG));
        assert_eq!(view.selected(), Some("Penn Cove"));
        assert_eq!(view.modal(&CATALOG).map(|d| d.description), Some("Saltwater cove."));
    }

    #[test]
    fn test_open_unknown_detail_renders_no_modal() {
        let mut view = TripView::new();
        assert!(!view.open_detail("Joseph Whidbey State Park", &CATALOG));
        assert!(view.selected().is_none());
        assert!(view.modal(&CATALOG).is_none());
    }

    #[test]
    fn test_open_unknown_detail_replaces_open_modal() {
        let mut view = TripView::new();
        view.open_detail("Penn Cove", &CATALOG);
        view.open_detail("Nowhere", &CATALOG);
        assert!(view.modal(&CATALOG).is_none());
    }

    #[test]
    fn test_close_detail_always_clears() {
        for key in CATALOG.keys() {
            let mut view = TripView::new();
            view.open_detail(key, &CATALOG);
            view.close_detail();
            assert!(view.selected().is_none());
        }

        let mut view = TripView::new();
        view.close_detail();
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_detail_survives_tab_switch() {
        let mut view = TripView::new();
        view.select_tab(TripTab::Dining);
        view.open_detail("München Haus", &CATALOG);
        view.select_tab(TripTab::Essentials);
        assert_eq!(view.selected(), Some("München Haus"));
    }

    #[test]
    fn test_trip_tab_labels() {
        assert_eq!(TripTab::Details.label(), "Trip Details");
        assert_eq!(TripTab::Overview.label(), "overview");
        assert_eq!(TripTab::Essentials.to_string(), "essentials");
    }

    #[test]
    fn test_trip_tab_from_str() {
        for tab in TripTab::ALL {
            assert_eq!(tab.id().parse::<TripTab>(), Ok(tab));
        }
        assert_eq!(
            "itinerary".parse::<TripTab>(),
            Err(CoreError::unknown_tab("itinerary"))
        );
    }

    #[test]
    fn test_location_from_str() {
        assert_eq!("leavenworth".parse::<Location>(), Ok(Location::Leavenworth));
        assert!("Whidbey".parse::<Location>().is_err());
    }

    #[test]
    fn test_section_from_str_accepts_anchor() {
        assert_eq!("#skills".parse::<Section>(), Ok(Section::Skills));
        assert_eq!("contact".parse::<Section>(), Ok(Section::Contact));
        assert!("#projects".parse::<Section>().is_err());
    }

    #[test]
    fn test_trip_view_from_query() {
        let view = TripView::from_query(Some("dining"), Some("leavenworth"));
        assert_eq!(view.tab(), TripTab::Dining);
        assert_eq!(view.location(), Location::Leavenworth);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_trip_view_from_query_ignores_unknown_values() {
        let view = TripView::from_query(Some("Trip Details"), Some("seattle"));
        assert_eq!(view, TripView::new());

        let view = TripView::from_query(None, Some("leavenworth"));
        assert_eq!(view.tab(), TripTab::Overview);
        assert_eq!(view.location(), Location::Leavenworth);
    }

    #[test]
    fn test_section_from_hash() {
        assert_eq!(Section::from_hash("#education"), Some(Section::Education));
        assert_eq!(Section::from_hash("contact"), Some(Section::Contact));
        assert_eq!(Section::from_hash(""), None);
        assert_eq!(Section::from_hash("#"), None);
        assert_eq!(Section::from_hash("#blog"), None);
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(Section::Experience.anchor(), "#experience");
    }

    #[test]
    fn test_portfolio_view_initial_state() {
        let view = PortfolioView::new();
        assert_eq!(view.active(), Section::Hero);
        assert!(!view.scrolled());
    }

    #[test]
    fn test_scroll_into_skills_marks_skills_active() {
        let mut view = PortfolioView::new();
        // reference point 1000 lies in skills [900, 1600)
        view.on_scroll(800.0, &page_bounds());

        assert_eq!(view.active(), Section::Skills);
        for section in Section::ALL {
            assert_eq!(view.is_active(section), section == Section::Skills);
        }
    }

    #[test]
    fn test_scroll_boundary_is_half_open() {
        let bounds = page_bounds();
        assert_eq!(active_section(700.0, &bounds), Some(Section::Skills));
        assert_eq!(active_section(699.0, &bounds), Some(Section::Hero));
    }

    #[test]
    fn test_scroll_outside_all_sections_keeps_previous() {
        let mut view = PortfolioView::new();
        view.on_scroll(1500.0, &page_bounds());
        assert_eq!(view.active(), Section::Experience);

        view.on_scroll(10_000.0, &page_bounds());
        assert_eq!(view.active(), Section::Experience);
    }

    #[test]
    fn test_scroll_with_missing_sections() {
        let bounds = vec![SectionBounds::new(Section::Contact, 0.0, 10.0)];
        let mut view = PortfolioView::new();
        view.on_scroll(400.0, &bounds);
        assert_eq!(view.active(), Section::Hero);
        view.on_scroll(400.0, &[]);
        assert_eq!(view.active(), Section::Hero);
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let mut view = PortfolioView::new();
        view.on_scroll(50.0, &[]);
        assert!(!view.scrolled());
        view.on_scroll(50.5, &[]);
        assert!(view.scrolled());
        view.on_scroll(0.0, &[]);
        assert!(!view.scrolled());
    }

    #[test]
    fn test_overlapping_bounds_prefer_first() {
        let bounds = vec![
            SectionBounds::new(Section::Skills, 0.0, 1000.0),
            SectionBounds::new(Section::Experience, 100.0, 1000.0),
        ];
        assert_eq!(active_section(100.0, &bounds), Some(Section::Skills));
    }

    #[test]
    fn test_pointer_follower_origin() {
        let pointer = Pointer::new(100.0, 40.0);
        assert_eq!(pointer.follower_origin(), (88.0, 28.0));
        assert_eq!(Pointer::default().follower_origin(), (-12.0, -12.0));
    }
}
