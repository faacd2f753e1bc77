//! Navigation components: section pill nav, tab bar, and segmented toggle.

use folio_core::{Section, portfolio::NavEntry};
use leptos::prelude::*;

use crate::card::IconGlyph;

/// One selectable option in a [`TabBar`] or [`SegmentedToggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem<T> {
    /// Value reported when the option is selected.
    pub value: T,

    /// Display label.
    pub label: &'static str,
}

impl<T> TabItem<T> {
    pub fn new(value: T, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Fixed pill navigation over the portfolio sections.
///
/// Each entry links to its section anchor. Clicks are handed to
/// `on_select` instead of jumping. The entry matching `active` is
/// highlighted; `scrolled` switches the bar to its solid background.
#[component]
pub fn SectionNav(
    /// Navigation entries, in display order.
    entries: &'static [NavEntry],
    /// Section currently in view.
    active: Signal<Section>,
    /// Whether the page has scrolled past the threshold.
    scrolled: Signal<bool>,
    /// Called with the clicked section.
    on_select: Callback<Section>,
) -> impl IntoView {
    view! {
      <nav class="section-nav" class:scrolled=move || scrolled.get() aria-label="Main navigation">
        <div class="section-nav-pill">
          {entries
            .iter()
            .map(|entry| {
              let section = entry.section;
              let is_active = Memo::new(move |_| active.get() == section);
              view! {
                <a
                  href=section.anchor()
                  class="section-nav-link"
                  class:active=move || is_active.get()
                  aria-current=move || { if is_active.get() { Some("true") } else { None } }
                  on:click=move |ev| {
                    ev.prevent_default();
                    on_select.run(section);
                  }
                >
                  <IconGlyph icon=entry.icon />
                  <span class="section-nav-label">{entry.label}</span>
                </a>
              }
            })
            .collect_view()}
        </div>
      </nav>
    }
}

/// Horizontal tab bar; exactly one option is active.
#[component]
pub fn TabBar<T>(
    tabs: Vec<TabItem<T>>,
    active: Signal<T>,
    on_select: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
      <div class="tab-bar" role="tablist">
        {tabs
          .into_iter()
          .map(|tab| {
            let value = tab.value;
            let is_active = Memo::new(move |_| active.get() == value);
            view! {
              <button
                role="tab"
                class="tab-bar-tab"
                class:active=move || is_active.get()
                aria-selected=move || is_active.get().to_string()
                on:click=move |_| on_select.run(value)
              >
                {tab.label}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

/// Two-or-more option pill toggle.
#[component]
pub fn SegmentedToggle<T>(
    options: Vec<TabItem<T>>,
    active: Signal<T>,
    on_select: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
      <div class="segmented-toggle">
        {options
          .into_iter()
          .map(|option| {
            let value = option.value;
            let is_active = Memo::new(move |_| active.get() == value);
            view! {
              <button
                class="segmented-option"
                class:active=move || is_active.get()
                on:click=move |_| on_select.run(value)
              >
                {option.label}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_item_creation() {
        let item = TabItem::new(1u8, "Overview");
        assert_eq!(item.value, 1);
        assert_eq!(item.label, "Overview");
    }
}
