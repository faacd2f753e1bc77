//! Landing page listing the trip write-ups.

use folio_core::{
    Icon, TripSummary,
    content::{
        TRIP_CARD_CTA, TRIPS, TRIPS_FOOTER, TRIPS_HEADING, TRIPS_INTRO, TRIPS_TAGLINE,
        TRIPS_TITLE,
    },
};
use folio_ui::{FallibleImage, GlassCard, GradientText, IconBadge, IconGlyph, MouseTracker};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn TripsLanding() -> impl IntoView {
    view! {
      <Title text=TRIPS_TITLE />
      <div class="trips-landing">
        <MouseTracker />
        <header class="trips-header">
          <div class="trips-brand">
            <IconBadge icon=Icon::Compass color="from-blue-600 to-green-600" />
            <h1>
              <GradientText>{TRIPS_TITLE}</GradientText>
            </h1>
          </div>
          <p class="trips-tagline">{TRIPS_TAGLINE}</p>
        </header>
        <GlassCard class="trips-intro" hover=false>
          <p>{TRIPS_INTRO}</p>
        </GlassCard>
        <h2 class="trips-section-title">{TRIPS_HEADING}</h2>
        <div class="trip-grid">
          {TRIPS.iter().map(|trip| view! { <TripCard trip=*trip /> }).collect_view()}
        </div>
        <footer class="trips-footer">{TRIPS_FOOTER}</footer>
      </div>
    }
}

#[component]
fn TripCard(trip: TripSummary) -> impl IntoView {
    view! {
      <A href=trip.link attr:class="trip-card-link">
        <GlassCard class="trip-card">
          <div class="trip-card-media">
            {match trip.image {
              Some(src) => {
                view! { <FallibleImage src=src alt=trip.title class="trip-card-image" /> }
                  .into_any()
              }
              None => {
                view! {
                  <div class="trip-card-placeholder">
                    <IconGlyph icon=trip.icon />
                  </div>
                }
                  .into_any()
              }
            }}
          </div>
          <div class="trip-card-body">
            <h2 class="trip-card-title">{trip.title}</h2>
            <p class="trip-card-location">{trip.location}</p>
            <p class="trip-card-description">{trip.description}</p>
            <div class="trip-card-chips">
              {trip.chips().into_iter().map(|chip| view! { <span class="chip">{chip}</span> }).collect_view()}
            </div>
            <div class="trip-card-cta">
              <span>{TRIP_CARD_CTA}</span>
              <IconGlyph icon=Icon::ExternalLink />
            </div>
          </div>
        </GlassCard>
      </A>
    }
}
