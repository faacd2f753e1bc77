//! Trip itinerary page.
//!
//! The whole page is driven by one [`TripView`] signal: the active tab, the
//! activities location toggle, and the open detail record. The `tab` and
//! `location` query parameters pick the starting view.

mod activities;
mod detail_modal;
mod dining;
mod essentials;
mod overview;
mod schedule;
mod trip_details;

use folio_core::{DetailCatalog, Icon, Trip, TripTab, TripView, content};
use folio_ui::{GradientText, IconGlyph, TabBar, TabItem};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

use self::{
    activities::ActivitiesTab, detail_modal::DetailModal, dining::DiningTab,
    essentials::EssentialsTab, overview::OverviewTab, schedule::ScheduleTab,
    trip_details::TripDetailsTab,
};

/// Route view for `/trips/{slug}`.
#[component]
pub fn ItineraryPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match content::trip_by_slug(&slug) {
            Some(trip) => view! { <Itinerary trip=trip /> }.into_any(),
            None => {
                log::debug!("no itinerary for slug {slug:?}");
                view! { "Page not found." }.into_any()
            }
        }
    }
}

#[component]
fn Itinerary(trip: &'static Trip) -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|query| {
        TripView::from_query(query.get_str("tab"), query.get_str("location"))
    });
    let state = RwSignal::new(initial);

    let tabs = TripTab::ALL
        .into_iter()
        .map(|tab| TabItem::new(tab, tab.label()))
        .collect::<Vec<_>>();
    let active_tab = Signal::derive(move || state.with(|view| view.tab()));
    let on_tab = Callback::new(move |tab: TripTab| state.update(|view| view.select_tab(tab)));
    let on_close = Callback::new(move |()| state.update(|view| view.close_detail()));

    let visible = move |tab: TripTab| move || state.with(|view| view.is_visible(tab));

    view! {
      <Title text=trip.summary.title />
      <div class="itinerary">
        <header class="itinerary-header">
          <A href="/trips" attr:class="back-link">
            <IconGlyph icon=Icon::ChevronRight class="flip" />
            "All trips"
          </A>
          <h1>
            <GradientText>{trip.summary.title}</GradientText>
          </h1>
          <p class="itinerary-subtitle">{trip.subtitle}</p>
          <div class="itinerary-facts">
            <span>
              <IconGlyph icon=Icon::Calendar />
              {trip.full_dates}
            </span>
            <span>
              <IconGlyph icon=Icon::Users />
              {trip.party}
            </span>
            <span>
              <IconGlyph icon=Icon::MapPin />
              {trip.bases}
            </span>
          </div>
        </header>

        <TabBar tabs=tabs active=active_tab on_select=on_tab />

        <div class="tab-panels">
          <Show when=visible(TripTab::Overview)>
            <OverviewTab trip=trip />
          </Show>
          <Show when=visible(TripTab::Activities)>
            <ActivitiesTab trip=trip state=state />
          </Show>
          <Show when=visible(TripTab::Dining)>
            <DiningTab trip=trip state=state />
          </Show>
          <Show when=visible(TripTab::Details)>
            <TripDetailsTab trip=trip />
          </Show>
          <Show when=visible(TripTab::Schedule)>
            <ScheduleTab trip=trip />
          </Show>
          <Show when=visible(TripTab::Essentials)>
            <EssentialsTab trip=trip />
          </Show>
        </div>

        <footer class="itinerary-footer">
          <h2>{trip.farewell}</h2>
          <p>{trip.footnote}</p>
        </footer>

        {move || {
          state
            .with(|view| view.modal(&trip.details))
            .map(|detail| view! { <DetailModal detail=detail on_close=on_close /> })
        }}
      </div>
    }
}

/// Callback that opens the detail record for `key`, if the catalog has one.
fn detail_opener(state: RwSignal<TripView>, catalog: DetailCatalog) -> Callback<&'static str> {
    Callback::new(move |key: &'static str| {
        state.update(|view| {
            view.open_detail(key, &catalog);
        });
    })
}

/// Activity line; clickable when its name has a detail record.
#[component]
fn ActivityItem(
    item: &'static str,
    catalog: DetailCatalog,
    on_open: Callback<&'static str>,
) -> impl IntoView {
    match catalog.for_item(item) {
        Some(detail) => view! {
          <li class="activity-item clickable" on:click=move |_| on_open.run(detail.name)>
            <span>{item}</span>
            <IconGlyph icon=Icon::Info class="activity-info" />
          </li>
        }
        .into_any(),
        None => view! { <li class="activity-item">{item}</li> }.into_any(),
    }
}
