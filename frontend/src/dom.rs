use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, SvgElement};

use crate::error::{EnhanceError, Result};

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) = target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to add {} listener: {}", event_type, crate::error::describe(&e));
        }
        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// Elements matching `selector` right now; later additions are not seen.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Inline style of an HTML or SVG element.
pub fn style_of(element: &Element) -> Result<CssStyleDeclaration> {
    if let Some(svg) = element.dyn_ref::<SvgElement>() {
        return Ok(svg.style());
    }
    element
        .dyn_ref::<HtmlElement>()
        .map(HtmlElement::style)
        .ok_or_else(|| EnhanceError::Js(format!("<{}> has no inline style", element.tag_name())))
}
