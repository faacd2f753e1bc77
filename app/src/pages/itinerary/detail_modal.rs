//! Modal body for one activity detail record.

use folio_core::{ActivityDetail, DetailField, Icon};
use folio_ui::{IconGlyph, Modal};
use leptos::prelude::*;

#[component]
pub(super) fn DetailModal(
    detail: &'static ActivityDetail,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
      <Modal title=detail.name on_close=on_close>
        <p class="detail-description">{detail.description}</p>
        <div class="detail-field">
          <h4>
            <IconGlyph icon=ActivityDetail::DETAILS_ICON />
            {ActivityDetail::DETAILS_HEADING}
          </h4>
          <ul class="detail-list">
            {detail
              .details
              .iter()
              .map(|line| {
                view! {
                  <li>
                    <IconGlyph icon=Icon::ChevronRight class="detail-bullet" />
                    <span>{*line}</span>
                  </li>
                }
              })
              .collect_view()}
          </ul>
        </div>
        {detail.fields().into_iter().map(|field| view! { <FieldBlock field=field /> }).collect_view()}
      </Modal>
    }
}

#[component]
fn FieldBlock(field: DetailField) -> impl IntoView {
    let body = match field {
        DetailField::Guides(guides) => view! {
          <ul class="guide-list">
            {guides.iter().map(|guide| view! { <li>{*guide}</li> }).collect_view()}
          </ul>
        }
        .into_any(),
        DetailField::Location(text)
        | DetailField::Contact(text)
        | DetailField::Hours(text)
        | DetailField::Tips(text) => view! { <p>{text}</p> }.into_any(),
    };

    view! {
      <div class="detail-field">
        <h4>
          {field.icon().map(|icon| view! { <IconGlyph icon=icon /> })}
          {field.heading()}
        </h4>
        {body}
      </div>
    }
}
