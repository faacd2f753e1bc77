//! Modal dialog frame.

use folio_core::Icon;
use leptos::{ev, prelude::*};

use crate::card::IconGlyph;

/// Modal dialog with a titled header and a close button.
///
/// The parent decides whether the modal exists; this component only reports
/// dismissal through `on_close` (close button, overlay click, or Escape).
#[component]
pub fn Modal(
    /// Header title.
    #[prop(into)]
    title: String,
    /// Called when the user dismisses the modal.
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    // Close on Escape key
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Close when clicking overlay
    let on_overlay_click = move |_| on_close.run(());

    // Prevent closing when clicking modal content
    let on_content_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
      <div class="modal-overlay" on:click=on_overlay_click>
        <div class="modal-content" role="dialog" aria-modal="true" on:click=on_content_click>
          <div class="modal-header">
            <h3 class="modal-title">{title}</h3>
            <button class="modal-close" on:click=move |_| on_close.run(()) aria-label="Close">
              <IconGlyph icon=Icon::Close />
            </button>
          </div>
          <div class="modal-body">{children()}</div>
        </div>
      </div>
    }
}
