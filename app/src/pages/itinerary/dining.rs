//! Dining tab: restaurant guide for both locations.

use folio_core::{
    Icon, Trip, TripView,
    trip::{DiningGuide, Restaurant},
};
use folio_ui::{GlassCard, IconGlyph};
use leptos::prelude::*;

use super::detail_opener;

#[component]
pub(super) fn DiningTab(trip: &'static Trip, state: RwSignal<TripView>) -> impl IntoView {
    let on_open = detail_opener(state, trip.details);

    view! {
      <div class="tab-panel dining">
        {trip
          .dining
          .iter()
          .map(|guide| view! { <DiningColumn guide=guide on_open=on_open /> })
          .collect_view()}
      </div>
    }
}

#[component]
fn DiningColumn(guide: &'static DiningGuide, on_open: Callback<&'static str>) -> impl IntoView {
    view! {
      <GlassCard class=format!("dining-guide tone-{}", guide.location.tone()) hover=false>
        <h2 class="panel-title">
          <IconGlyph icon=Icon::Utensils />
          {guide.location.label()}
        </h2>
        {guide
          .groups
          .iter()
          .map(|group| {
            view! {
              <div class="restaurant-group">
                <h3>{group.title}</h3>
                {group
                  .restaurants
                  .iter()
                  .map(|restaurant| view! { <RestaurantEntry restaurant=restaurant on_open=on_open /> })
                  .collect_view()}
              </div>
            }
          })
          .collect_view()}
      </GlassCard>
    }
}

#[component]
fn RestaurantEntry(
    restaurant: &'static Restaurant,
    on_open: Callback<&'static str>,
) -> impl IntoView {
    let body = view! {
      <h4>{restaurant.name}</h4>
      {restaurant.address.map(|address| view! { <p class="restaurant-address">{address}</p> })}
      <p class="restaurant-blurb">{restaurant.blurb}</p>
    };

    match restaurant.detail_key {
        Some(key) => view! {
          <div class="restaurant clickable" on:click=move |_| on_open.run(key)>
            {body}
            <IconGlyph icon=Icon::Info class="activity-info" />
          </div>
        }
        .into_any(),
        None => view! { <div class="restaurant">{body}</div> }.into_any(),
    }
}
