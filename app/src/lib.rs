//! Routes and pages of the folio site.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

pub mod pages;

use pages::{ItineraryPage, PortfolioPage, TripsLanding};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=PortfolioPage />
            <Route path=StaticSegment("trips") view=TripsLanding />
            <Route path=(StaticSegment("trips"), ParamSegment("slug")) view=ItineraryPage />
          </Routes>
        </main>
      </Router>
    }
}
