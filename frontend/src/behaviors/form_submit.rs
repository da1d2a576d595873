use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Array};
use web_sys::{File, FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config;
use crate::context::PageContext;
use crate::dom::{self, Listener};
use crate::error::{self, EnhanceError, Result};

/// Named fields of a submitted form. A name that appears twice keeps its last value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<String, String>);

impl FormRecord {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = BTreeMap::new();
        for (name, value) in entries {
            fields.insert(name, value);
        }
        FormRecord(fields)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Reads the form the way a browser would encode it; file inputs contribute the file name.
fn read_form(form: &HtmlFormElement) -> Result<FormRecord> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?
        .ok_or_else(|| EnhanceError::Js("FormData is not iterable".to_string()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let pair: Array = entry?.unchecked_into();
        let name = pair.get(0).as_string().unwrap_or_default();
        let value = pair.get(1);
        let value = value
            .as_string()
            .or_else(|| value.dyn_ref::<File>().map(File::name))
            .unwrap_or_default();
        fields.push((name, value));
    }
    Ok(FormRecord::from_entries(fields))
}

fn handle_submit(form: &HtmlFormElement, context: &PageContext) -> Result<()> {
    let record = read_form(form)?;
    if record.is_empty() {
        debug!("Signup form has no named fields");
    }
    gloo_console::log!("Beta signup data:", record.to_json());

    // Nothing is sent anywhere yet; the signup endpoint doesn't exist.
    let message = context.language().signup_confirmation();
    error::window()?.alert_with_message(message)?;
    form.reset();
    info!("Signup form handled ({} fields)", record.len());
    Ok(())
}

fn bind_forms(context: &Rc<PageContext>) -> Result<Vec<Listener>> {
    let document = error::document()?;
    let forms = dom::query_all(&document, config::FORM_SELECTOR)?;
    Ok(forms
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
        .map(|form| {
            let context = context.clone();
            let target = form.clone();
            Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                if let Err(e) = handle_submit(&target, &context) {
                    warn!("Form submit failed: {}", e);
                }
            })
        })
        .collect())
}

/// Keeps forms on the page: confirms the submission in the active language and clears the fields.
#[hook]
pub fn use_form_submit(context: Rc<PageContext>) {
    use_effect_with_deps(
        move |_| {
            let listeners = bind_forms(&context).unwrap_or_else(|e| {
                warn!("Form handling disabled: {}", e);
                Vec::new()
            });
            info!("Submit handler bound to {} forms", listeners.len());
            move || drop(listeners)
        },
        (),
    );
}
