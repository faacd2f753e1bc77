//! Activities tab: per-location groups plus anytime activities.

use folio_core::{Location, Trip, TripView};
use folio_ui::{GlassCard, IconGlyph, SegmentedToggle, TabItem};
use leptos::prelude::*;

use super::{ActivityItem, detail_opener};

#[component]
pub(super) fn ActivitiesTab(trip: &'static Trip, state: RwSignal<TripView>) -> impl IntoView {
    let catalog = trip.details;
    let on_open = detail_opener(state, catalog);

    let options = Location::ALL
        .into_iter()
        .map(|location| TabItem::new(location, location.label()))
        .collect::<Vec<_>>();
    let location = Signal::derive(move || state.with(|view| view.location()));
    let on_location =
        Callback::new(move |location: Location| state.update(|view| view.select_location(location)));

    view! {
      <div class="tab-panel activities">
        <SegmentedToggle options=options active=location on_select=on_location />

        {move || {
          let location = location.get();
          view! {
            <div class=format!("activity-grid tone-{}", location.tone())>
              {trip
                .activity_groups(location)
                .iter()
                .map(|group| {
                  view! {
                    <GlassCard class="activity-group">
                      <h3>
                        <IconGlyph icon=group.icon />
                        {group.title}
                      </h3>
                      <ul>
                        {group
                          .items
                          .iter()
                          .map(|item| {
                            view! { <ActivityItem item=*item catalog=catalog on_open=on_open /> }
                          })
                          .collect_view()}
                      </ul>
                    </GlassCard>
                  }
                })
                .collect_view()}
            </div>
          }
        }}

        <GlassCard class="anytime" hover=false>
          <h2 class="panel-title">"Anytime Activities"</h2>
          <div class="anytime-grid">
            {trip
              .anytime
              .iter()
              .map(|activity| {
                view! {
                  <div class="anytime-item">
                    <IconGlyph icon=activity.icon />
                    <h3>{activity.title}</h3>
                    <p>{activity.description}</p>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </GlassCard>
      </div>
    }
}
