use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Element};
use yew::prelude::*;

use super::translate::{rewrite_for, ElementKind, Rewrite};
use super::store::save_language;
use super::Language;
use crate::config;
use crate::context::PageContext;
use crate::dom::{self, Listener};
use crate::error::Result;

/// Records `lang` as current and persists it. A storage failure is logged;
/// the in-memory choice still changes.
fn commit_language(context: &PageContext, lang: Language) {
    context.set_language(lang);
    if let Err(e) = save_language(context.store(), lang) {
        warn!("Could not persist language {}: {}", lang, e);
    }
}

/// Selector control ids paired with whether each should carry the active class.
fn control_states(lang: Language) -> [(&'static str, bool); 3] {
    Language::ALL.map(|candidate| (candidate.button_id(), candidate == lang))
}

/// Makes `lang` the page language: state, storage, selector controls,
/// root `lang` attribute and every translatable element.
pub fn switch_language(document: &Document, context: &PageContext, lang: Language) -> Result<()> {
    commit_language(context, lang);

    for (id, active) in control_states(lang) {
        match document.get_element_by_id(id) {
            Some(button) => {
                button.class_list().toggle_with_force(config::ACTIVE_CLASS, active)?;
            }
            None => warn!("Language control #{} not found", id),
        }
    }

    if let Some(root) = document.document_element() {
        root.set_attribute("lang", lang.html_lang())?;
    }

    let mut rewritten = 0;
    for element in dom::query_all(document, config::TRANSLATABLE_SELECTOR)? {
        let kind = ElementKind::from_tag(&element.tag_name());
        if let Some(rewrite) = rewrite_for(kind, lang, |name| element.get_attribute(name)) {
            apply(&element, rewrite)?;
            rewritten += 1;
        }
    }
    debug!("Switched to {}: {} elements rewritten", lang, rewritten);
    Ok(())
}

fn apply(element: &Element, rewrite: Rewrite) -> Result<()> {
    match rewrite {
        Rewrite::Placeholder(placeholder) => element.set_attribute("placeholder", &placeholder)?,
        Rewrite::Text(text) => element.set_text_content(Some(&text)),
        Rewrite::Markup(markup) => element.set_inner_html(&markup),
    }
    Ok(())
}

fn bind_controls(document: &Document, context: &Rc<PageContext>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for lang in Language::ALL {
        let Some(button) = document.get_element_by_id(lang.button_id()) else {
            continue;
        };
        let document = document.clone();
        let context = context.clone();
        listeners.push(Listener::new(&button, "click", move |_| {
            if let Err(e) = switch_language(&document, &context, lang) {
                warn!("Language switch to {} failed: {}", lang, e);
            }
        }));
    }
    listeners
}

/// Renders the page in the remembered language and wires the ko/en/zh controls.
#[hook]
pub fn use_language_switcher(context: Rc<PageContext>) {
    use_effect_with_deps(
        move |_| {
            let listeners = match crate::error::document() {
                Ok(document) => {
                    let initial = context.language();
                    info!("Applying saved language {}", initial);
                    if let Err(e) = switch_language(&document, &context, initial) {
                        warn!("Initial translation failed: {}", e);
                    }
                    bind_controls(&document, &context)
                }
                Err(e) => {
                    warn!("Language switcher disabled: {}", e);
                    Vec::new()
                }
            };
            move || drop(listeners)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{load_language, MemoryStore, PreferenceStore};
    use crate::error::EnhanceError;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(EnhanceError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn exactly_one_control_is_active() {
        for lang in Language::ALL {
            let states = control_states(lang);
            let active: Vec<_> = states.iter().filter(|(_, on)| *on).map(|(id, _)| *id).collect();
            assert_eq!(active, vec![lang.button_id()]);
        }
    }

    #[test]
    fn every_control_is_listed() {
        let ids: Vec<_> = control_states(Language::En).iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["lang-ko", "lang-en", "lang-zh"]);
    }

    #[test]
    fn commit_updates_state_and_storage() {
        let context = PageContext::new(Box::new(MemoryStore::default()));
        commit_language(&context, Language::Zh);
        assert_eq!(context.language(), Language::Zh);
        assert_eq!(load_language(context.store()), Language::Zh);
    }

    #[test]
    fn commit_survives_storage_failure() {
        let context = PageContext::new(Box::new(ReadOnlyStore));
        commit_language(&context, Language::En);
        assert_eq!(context.language(), Language::En);
    }
}
