//! Image that hides itself when it fails to load.

use leptos::prelude::*;

/// `<img>` that is hidden after a load error. No retry, no placeholder.
#[component]
pub fn FallibleImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let src_for_log = src.clone();

    view! {
      <img
        src=src
        alt=alt
        class=move || if failed.get() { format!("{class} hidden") } else { class.clone() }
        on:error=move |_| {
          log::debug!("image failed to load: {src_for_log}");
          failed.set(true);
        }
      />
    }
}
