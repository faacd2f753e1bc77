//! Schedule tab: flexible-itinerary note and advance booking timeline.

use folio_core::{Icon, Trip};
use folio_ui::{GlassCard, IconGlyph};
use leptos::prelude::*;

#[component]
pub(super) fn ScheduleTab(trip: &'static Trip) -> impl IntoView {
    view! {
      <div class="tab-panel schedule">
        <GlassCard class="flexible-note" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Compass />
            "Flexible Itinerary"
          </h2>
          <p>{trip.flexible_note}</p>
        </GlassCard>

        <GlassCard class="booking" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::AlertCircle />
            "Advance Booking Timeline"
          </h2>
          {trip
            .booking
            .iter()
            .map(|window| {
              view! {
                <div class=format!("booking-window tone-{}", window.tone)>
                  <h3>
                    <IconGlyph icon=window.icon />
                    {window.title}
                  </h3>
                  <ul>
                    {window.tasks.iter().map(|task| view! { <li>{*task}</li> }).collect_view()}
                  </ul>
                </div>
              }
            })
            .collect_view()}
        </GlassCard>
      </div>
    }
}
