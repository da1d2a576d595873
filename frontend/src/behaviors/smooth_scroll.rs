use log::{debug, info, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Listener};
use crate::error::Result;

/// Id referenced by a same-page link such as `#section2`.
///
/// `None` for bare `#` links and anything that isn't a fragment. Fragments
/// are percent-decoded so `#%EA%B8%B0%EC%88%A0` finds `id="기술"`.
pub fn anchor_target_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let id = urlencoding::decode(fragment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(id)
}

fn scroll_to_fragment(document: &Document, anchor: &Element) {
    let Some(id) = anchor.get_attribute("href").as_deref().and_then(anchor_target_id) else {
        return;
    };
    match document.get_element_by_id(&id) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No element for #{}", id),
    }
}

fn bind_anchors() -> Result<Vec<Listener>> {
    let document = crate::error::document()?;
    let anchors = dom::query_all(&document, config::ANCHOR_SELECTOR)?;
    Ok(anchors
        .into_iter()
        .map(|anchor| {
            let document = document.clone();
            let link = anchor.clone();
            Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                scroll_to_fragment(&document, &link);
            })
        })
        .collect())
}

/// Replaces jumps to in-page anchors with a smooth scroll.
///
/// Only links present when the page loads are bound.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        move |_| {
            let listeners = bind_anchors().unwrap_or_else(|e| {
                warn!("Smooth scrolling disabled: {}", e);
                Vec::new()
            });
            info!("Smooth scrolling bound to {} anchors", listeners.len());
            move || drop(listeners)
        },
        (),
    );
}
