//! Trip details tab: where we stay and how we get there.

use folio_core::{Icon, Trip};
use folio_ui::{GlassCard, IconGlyph};
use leptos::prelude::*;

#[component]
pub(super) fn TripDetailsTab(trip: &'static Trip) -> impl IntoView {
    let key_address = trip.key_address;

    view! {
      <div class="tab-panel trip-details">
        <div class="accommodation-grid">
          {trip
            .accommodations
            .iter()
            .map(|stay| {
              view! {
                <GlassCard class=format!("accommodation tone-{}", stay.location.tone()) hover=false>
                  <h2 class="panel-title">
                    <IconGlyph icon=Icon::Home />
                    {stay.location.label()}
                  </h2>
                  <h3>{stay.name}</h3>
                  <p class="address">
                    <IconGlyph icon=Icon::MapPin />
                    {stay.address}
                  </p>
                  <dl>
                    <dt>"Check-in"</dt>
                    <dd>{stay.check_in}</dd>
                    <dt>"Check-out"</dt>
                    <dd>{stay.check_out}</dd>
                  </dl>
                  <p class="notes">{stay.notes}</p>
                </GlassCard>
              }
            })
            .collect_view()}
        </div>

        <GlassCard class="key-address" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Navigation />
            {key_address.label}
          </h2>
          <p class="address">{key_address.address}</p>
          <p class="notes">{key_address.note}</p>
        </GlassCard>

        <GlassCard class="directions" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Car />
            "Driving Directions"
          </h2>
          {trip
            .directions
            .iter()
            .map(|direction| {
              view! {
                <div class="direction">
                  <h3>{direction.route}</h3>
                  <p>{direction.description}</p>
                </div>
              }
            })
            .collect_view()}
        </GlassCard>
      </div>
    }
}
