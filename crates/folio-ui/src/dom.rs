//! Small DOM helpers used by the page components.

use folio_core::{Section, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::{Result, UiError};

fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<()> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::element_not_found(id))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Fragment of the current URL including its `#`, if any.
pub fn location_hash() -> Option<String> {
    window()
        .ok()
        .and_then(|w| w.location().hash().ok())
        .filter(|hash| !hash.is_empty())
}

/// Current vertical scroll offset of the window, 0 when unavailable.
pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Measure the rendered sections, in the order given.
///
/// Sections without a matching element are skipped.
pub fn measure_sections(sections: &[Section]) -> Vec<SectionBounds> {
    let Ok(document) = document() else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                *section,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        })
        .collect()
}
