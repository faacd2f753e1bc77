//! Folio UI Components
//!
//! Leptos components shared by the folio pages.
//!
//! # Components
//!
//! ## Cards
//! - [`GlassCard`] - Translucent card with optional hover lift
//! - [`GradientText`] - Gradient-painted inline text
//! - [`IconGlyph`] / [`IconBadge`] - Icons, bare or on a gradient tile
//! - [`ChipList`] - Row of rounded labels
//!
//! ## Navigation
//! - [`SectionNav`] - Fixed pill navigation with active highlighting
//! - [`TabBar`] - Tab strip over any `Copy` value
//! - [`SegmentedToggle`] - Pill toggle between a few options
//!
//! ## Overlays and effects
//! - [`Modal`] - Dialog closed by button, overlay click, or Escape
//! - [`FallibleImage`] - Image hidden when it fails to load
//! - [`MouseTracker`] - Cursor follower
//! - [`FloatingOrbs`] - Decorative background orbs
//!
//! # Example
//!
//! ```ignore
//! use folio_core::TripTab;
//! use folio_ui::{TabBar, TabItem};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Tabs() -> impl IntoView {
//!     let active = RwSignal::new(TripTab::Overview);
//!     let tabs = TripTab::ALL.map(|t| TabItem::new(t, t.label())).to_vec();
//!
//!     view! { <TabBar tabs=tabs active=active.into() on_select=Callback::new(move |t| active.set(t)) /> }
//! }
//! ```

pub mod card;
pub mod dom;
pub mod effects;
pub mod error;
pub mod image;
pub mod modal;
pub mod navigation;

pub use card::{ChipList, GlassCard, GradientText, IconBadge, IconGlyph};
pub use effects::{FloatingOrbs, MouseTracker, OrbLayout};
pub use error::{Result, UiError};
pub use image::FallibleImage;
pub use modal::Modal;
pub use navigation::{SectionNav, SegmentedToggle, TabBar, TabItem};
