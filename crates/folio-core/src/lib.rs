//! Folio Core Library
//!
//! Static content records, the hardcoded site content, and the view-state
//! machines behind the portfolio and trip pages.

pub mod content;
pub mod error;
pub mod icon;
pub mod portfolio;
pub mod state;
pub mod trip;

pub use error::{CoreError, Result};
pub use icon::Icon;
pub use state::{Location, Pointer, PortfolioView, Section, SectionBounds, TripTab, TripView};
pub use trip::{ActivityDetail, DetailCatalog, DetailField, Trip, TripSummary};
