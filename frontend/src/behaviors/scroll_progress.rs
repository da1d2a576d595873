use std::cell::Cell;

use log::warn;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::config;
use crate::dom;
use crate::error::{self, EnhanceError, Result};

/// Share of the scrollable distance covered, in percent.
///
/// Pages that fit in the viewport report 0; overscroll is clamped to [0, 100].
pub fn scroll_percentage(offset: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

fn update_indicator() -> Result<()> {
    let window = error::window()?;
    let document = window.document().ok_or(EnhanceError::NoDocument)?;
    let root = document.document_element().ok_or(EnhanceError::NoDocument)?;

    let offset = match window.scroll_y() {
        Ok(y) if y != 0.0 => y,
        _ => root.scroll_top() as f64,
    };
    let percentage = scroll_percentage(
        offset,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );

    let indicator = error::element_by_id(&document, config::SCROLL_PROGRESS_ID)?;
    dom::style_of(&indicator)?.set_property("width", &format!("{}%", percentage))?;
    Ok(())
}

/// Stretches `#scroll-progress` to match the scroll position on every scroll event.
#[hook]
pub fn use_scroll_progress() {
    let warned = Cell::new(false);
    use_event_with_window("scroll", move |_: Event| {
        if let Err(e) = update_indicator() {
            if !warned.replace(true) {
                warn!("Scroll progress not updated: {}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_to_offset() {
        assert_eq!(scroll_percentage(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(scroll_percentage(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_percentage(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_reports_zero() {
        assert_eq!(scroll_percentage(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percentage(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        // rubber-band scrolling on touch devices
        assert_eq!(scroll_percentage(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn non_finite_offset_reports_zero() {
        assert_eq!(scroll_percentage(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn stays_in_range_for_every_offset() {
        for offset in (0..=2000).step_by(50) {
            let pct = scroll_percentage(offset as f64, 3000.0, 1000.0);
            assert!((0.0..=100.0).contains(&pct));
            assert!((pct - offset as f64 / 20.0).abs() < 1e-9);
        }
    }
}
