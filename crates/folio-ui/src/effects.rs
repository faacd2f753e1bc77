//! Decorative background effects.
//!
//! Provides the cursor follower and the floating orbs behind the portfolio.

use folio_core::Pointer;
use leptos::{ev, prelude::*};

/// Number of orbs drawn by [`FloatingOrbs`].
pub const ORB_COUNT: usize = 8;

const ORB_COLORS: [&str; 4] = ["#8B5CF6", "#06B6D4", "#10B981", "#F59E0B"];

/// Placement and animation timing of one orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbLayout {
    pub color: &'static str,
    /// Percent of the viewport width.
    pub left: usize,
    /// Percent of the viewport height.
    pub top: usize,
    /// Seconds.
    pub delay: f64,
    /// Seconds.
    pub duration: f64,
}

impl OrbLayout {
    /// Layout of the `index`th orb.
    pub fn nth(index: usize) -> Self {
        Self {
            color: ORB_COLORS[index % ORB_COLORS.len()],
            left: (index * 15) % 100,
            top: (index * 20) % 100,
            delay: index as f64 * 0.5,
            duration: 3.0 + index as f64 * 0.5,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background: radial-gradient(circle, {color}40 0%, transparent 70%); \
             left: {left}%; top: {top}%; animation-delay: {delay}s; animation-duration: {duration}s;",
            color = self.color,
            left = self.left,
            top = self.top,
            delay = self.delay,
            duration = self.duration,
        )
    }
}

/// Softly pulsing colored orbs fixed behind the page.
#[component]
pub fn FloatingOrbs() -> impl IntoView {
    view! {
      <div class="floating-orbs" aria-hidden="true">
        {(0..ORB_COUNT)
          .map(|i| view! { <div class="orb" style=OrbLayout::nth(i).style()></div> })
          .collect_view()}
      </div>
    }
}

/// Small blurred dot that follows the mouse pointer.
///
/// Owns its pointer state; the listener is removed when the component
/// is unmounted.
#[component]
pub fn MouseTracker() -> impl IntoView {
    let pointer = RwSignal::new(Pointer::default());

    let handle = window_event_listener(ev::mousemove, move |ev| {
        pointer.set(Pointer::new(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        ));
    });
    on_cleanup(move || handle.remove());

    view! {
      <div
        class="cursor-follower"
        aria-hidden="true"
        style:left=move || format!("{}px", pointer.get().follower_origin().0)
        style:top=move || format!("{}px", pointer.get().follower_origin().1)
      ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_orb_layout() {
        let orb = OrbLayout::nth(0);
        assert_eq!(orb.color, "#8B5CF6");
        assert_eq!((orb.left, orb.top), (0, 0));
        assert_eq!(orb.duration, 3.0);
    }

    #[test]
    fn test_orb_layout_wraps() {
        let orb = OrbLayout::nth(7);
        assert_eq!(orb.color, "#F59E0B");
        assert_eq!(orb.left, 5);
        assert_eq!(orb.top, 40);
        assert_eq!(orb.delay, 3.5);
        assert_eq!(orb.duration, 6.5);
    }

    #[test]
    fn test_orb_colors_cycle() {
        assert_eq!(OrbLayout::nth(1).color, OrbLayout::nth(5).color);
    }

    #[test]
    fn test_orb_style() {
        let style = OrbLayout::nth(2).style();
        assert!(style.contains("#10B98140"));
        assert!(style.contains("left: 30%"));
        assert!(style.contains("animation-delay: 1s"));
    }
}
