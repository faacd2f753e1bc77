//! Essentials tab: packing list, budget, and passes.

use folio_core::{Icon, Trip};
use folio_ui::{GlassCard, IconGlyph};
use leptos::prelude::*;

#[component]
pub(super) fn EssentialsTab(trip: &'static Trip) -> impl IntoView {
    view! {
      <div class="tab-panel essentials">
        <GlassCard class="packing" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Shield />
            "Packing List"
          </h2>
          <div class="packing-grid">
            {trip
              .packing
              .iter()
              .map(|group| {
                view! {
                  <div class="packing-group">
                    <h3>{group.title}</h3>
                    <ul>
                      {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </GlassCard>

        <GlassCard class="budget" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::DollarSign />
            "Budget Guide"
          </h2>
          <table class="budget-table">
            <tbody>
              {trip
                .budget
                .iter()
                .map(|line| {
                  view! {
                    <tr>
                      <td>{line.item}</td>
                      <td class="cost">{line.cost}</td>
                    </tr>
                  }
                })
                .collect_view()}
            </tbody>
          </table>
          <p class="free-activities">
            <strong>"Free: "</strong>
            {trip.free_activities}
          </p>
        </GlassCard>

        <GlassCard class="passes" hover=false>
          <h2 class="panel-title">
            <IconGlyph icon=Icon::Target />
            "Passes & Licenses"
          </h2>
          <ul>{trip.passes.iter().map(|pass| view! { <li>{*pass}</li> }).collect_view()}</ul>
        </GlassCard>
      </div>
    }
}
