//! One module per routed page.

mod itinerary;
mod portfolio;
mod trips_landing;

pub use itinerary::ItineraryPage;
pub use portfolio::PortfolioPage;
pub use trips_landing::TripsLanding;

/// Attributes for links that leave the site.
pub(crate) const OUTBOUND_TARGET: &str = "_blank";
pub(crate) const OUTBOUND_REL: &str = "noopener noreferrer";
