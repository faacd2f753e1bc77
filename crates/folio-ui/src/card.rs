//! Card and text building blocks.

use folio_core::Icon;
use leptos::prelude::*;

/// Classes for a glass card; `hover` adds the lift-on-hover treatment.
pub fn glass_class(hover: bool, extra: &str) -> String {
    let mut class = String::from("glass-card");
    if hover {
        class.push_str(" glass-card-hover");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Translucent blurred card.
#[component]
pub fn GlassCard(
    /// Extra classes.
    #[prop(optional, into)]
    class: String,
    /// Whether the card reacts to hover.
    #[prop(default = true)]
    hover: bool,
    children: Children,
) -> impl IntoView {
    view! { <div class=glass_class(hover, &class)>{children()}</div> }
}

/// Text painted with the site gradient.
#[component]
pub fn GradientText(
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "gradient-text".to_string()
    } else {
        format!("gradient-text {class}")
    };
    view! { <span class=class>{children()}</span> }
}

/// An icon glyph.
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let class = format!("icon icon-{} {class}", icon.name());
    view! {
      <span class=class.trim_end().to_string() aria-hidden="true">
        {icon.glyph()}
      </span>
    }
}

/// Icon on a gradient tile, as used by skill and experience headers.
#[component]
pub fn IconBadge(
    icon: Icon,
    /// Gradient class pair (e.g. `from-purple-500 to-pink-500`).
    #[prop(into)]
    color: String,
) -> impl IntoView {
    view! {
      <div class=format!("icon-badge bg-gradient {color}")>
        <IconGlyph icon=icon />
      </div>
    }
}

/// Row of rounded labels.
#[component]
pub fn ChipList(
    items: &'static [&'static str],
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let class = if class.is_empty() {
        "chip-list".to_string()
    } else {
        format!("chip-list {class}")
    };

    view! {
      <div class=class>
        {items.iter().map(|item| view! { <span class="chip">{*item}</span> }).collect_view()}
      </div>
    }
}
