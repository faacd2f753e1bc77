//! Overview tab: fixed schedule, weather, and trip highlights.

use folio_core::{Icon, Trip};
use folio_ui::{GlassCard, IconGlyph};
use leptos::prelude::*;

use crate::pages::{OUTBOUND_REL, OUTBOUND_TARGET};

#[component]
pub(super) fn OverviewTab(trip: &'static Trip) -> impl IntoView {
    let weather = trip.weather;

    view! {
      <div class="tab-panel overview">
        <GlassCard class="schedule-card" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Calendar />
            "Fixed Schedule"
          </h2>
          <div class="schedule-days">
            {trip
              .schedule
              .iter()
              .map(|day| {
                view! {
                  <div class="schedule-day">
                    <h3>
                      <IconGlyph icon=day.icon />
                      {day.date}
                    </h3>
                    <ul>
                      {day.events.iter().map(|event| view! { <li>{*event}</li> }).collect_view()}
                    </ul>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </GlassCard>

        <GlassCard class="weather-card" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Sun />
            {weather.headline}
          </h2>
          <p>{weather.summary}</p>
          <a class="weather-link" href=weather.forecast_url target=OUTBOUND_TARGET rel=OUTBOUND_REL>
            <IconGlyph icon=Icon::Cloud />
            {weather.call_to_action}
            <IconGlyph icon=Icon::ExternalLink />
          </a>
        </GlassCard>

        <div class="highlight-grid">
          {trip
            .highlights
            .iter()
            .map(|highlight| {
              view! {
                <div class=format!("highlight tone-{}", highlight.tone)>
                  <IconGlyph icon=highlight.icon class="highlight-icon" />
                  <h3>{highlight.title}</h3>
                  <p>{highlight.subtitle}</p>
                </div>
              }
            })
            .collect_view()}
        </div>

        <p class="detail-hint">
          <IconGlyph icon=Icon::Info />
          "Click on activities marked with an info icon for details, hours, and insider tips."
        </p>
      </div>
    }
}
