use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::{self, Result};

/// Visibility of a fade-in target. Only ever moves from `Hidden` to `Visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Hidden,
    Visible,
}

impl FadeState {
    /// Reads the state back from an element's inline `opacity`.
    pub fn from_opacity(opacity: &str) -> Self {
        if opacity.trim() == "0" {
            FadeState::Hidden
        } else {
            FadeState::Visible
        }
    }

    pub fn on_intersection(self, is_intersecting: bool) -> Self {
        if is_intersecting {
            FadeState::Visible
        } else {
            self
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            FadeState::Hidden => "0",
            FadeState::Visible => "1",
        }
    }

    pub fn transform(&self) -> String {
        match self {
            FadeState::Hidden => format!("translateY({}px)", config::FADE_IN_OFFSET_PX),
            FadeState::Visible => "translateY(0)".to_string(),
        }
    }
}

fn apply(element: &Element, state: FadeState) -> Result<()> {
    let style = dom::style_of(element)?;
    style.set_property("opacity", state.opacity())?;
    style.set_property("transform", &state.transform())?;
    Ok(())
}

fn hide(element: &Element) -> Result<()> {
    apply(element, FadeState::Hidden)?;
    dom::style_of(element)?.set_property("transition", config::FADE_IN_TRANSITION)?;
    Ok(())
}

fn on_entry(entry: &IntersectionObserverEntry) -> Result<()> {
    let target = entry.target();
    let current = FadeState::from_opacity(&dom::style_of(&target)?.get_property_value("opacity")?);
    let next = current.on_intersection(entry.is_intersecting());
    if next != current {
        apply(&target, next)?;
        debug!("Revealed <{}>", target.tag_name().to_lowercase());
    }
    Ok(())
}

/// Runs `prepare` on every target and keeps the ones it succeeded on.
/// A target that can't be styled is logged and left visible.
fn prepare_targets<'a, T, F>(targets: &'a [T], mut prepare: F) -> Vec<&'a T>
where
    F: FnMut(&T) -> Result<()>,
{
    targets
        .iter()
        .filter(|target| match prepare(target) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping fade-in target: {}", e);
                false
            }
        })
        .collect()
}

/// Live observer plus the callback it calls into.
struct FadeIn {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for FadeIn {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_targets() -> Result<FadeIn> {
    let document = error::document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if let Err(e) = on_entry(&entry) {
                warn!("Fade-in update failed: {}", e);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::FADE_IN_THRESHOLD));
    options.set_root_margin(config::FADE_IN_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    let fade_in = FadeIn {
        observer,
        _callback: callback,
    };

    let targets = dom::query_all(&document, config::FADE_IN_SELECTOR)?;
    let watched = prepare_targets(&targets, hide);
    for target in &watched {
        fade_in.observer.observe(target);
    }
    info!("Fade-in watching {} of {} elements", watched.len(), targets.len());

    Ok(fade_in)
}

/// Hides the feature cards and spec rows, then fades each one in the first
/// time it scrolls into view.
#[hook]
pub fn use_fade_in() {
    use_effect_with_deps(
        move |_| {
            let fade_in = observe_targets()
                .map_err(|e| warn!("Fade-in disabled: {}", e))
                .ok();
            move || drop(fade_in)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyleable_targets_are_skipped() {
        let targets = ["div", "svg", "section", "math"];
        let watched = prepare_targets(&targets, |tag| match *tag {
            "math" => Err(crate::error::EnhanceError::Js(format!("<{}> has no inline style", tag))),
            _ => Ok(()),
        });
        assert_eq!(watched, vec![&"div", &"svg", &"section"]);
    }

    #[test]
    fn every_target_is_attempted_after_a_failure() {
        let targets = [1, 2, 3];
        let mut attempted = Vec::new();
        let watched = prepare_targets(&targets, |n| {
            attempted.push(*n);
            if *n == 1 {
                Err(crate::error::EnhanceError::Js("no style".to_string()))
            } else {
                Ok(())
            }
        });
        assert_eq!(attempted, vec![1, 2, 3]);
        assert_eq!(watched, vec![&2, &3]);
    }

    #[test]
    fn hidden_until_first_intersection() {
        let state = FadeState::Hidden.on_intersection(false);
        assert_eq!(state, FadeState::Hidden);
        assert_eq!(state.on_intersection(true), FadeState::Visible);
    }

    #[test]
    fn reveal_happens_once() {
        let mut state = FadeState::Hidden;
        let mut reveals = 0;
        for visible in [true, false, true, false, true] {
            let next = state.on_intersection(visible);
            if next != state {
                reveals += 1;
            }
            state = next;
        }
        assert_eq!(reveals, 1);
        assert_eq!(state, FadeState::Visible);
    }

    #[test]
    fn never_rehidden() {
        assert_eq!(FadeState::Visible.on_intersection(false), FadeState::Visible);
    }

    #[test]
    fn styles_per_state() {
        assert_eq!(FadeState::Hidden.opacity(), "0");
        assert_eq!(FadeState::Hidden.transform(), "translateY(30px)");
        assert_eq!(FadeState::Visible.opacity(), "1");
        assert_eq!(FadeState::Visible.transform(), "translateY(0)");
    }

    #[test]
    fn state_read_back_from_opacity() {
        assert_eq!(FadeState::from_opacity("0"), FadeState::Hidden);
        assert_eq!(FadeState::from_opacity("1"), FadeState::Visible);
        // not managed by us, leave it alone
        assert_eq!(FadeState::from_opacity(""), FadeState::Visible);
    }
}
