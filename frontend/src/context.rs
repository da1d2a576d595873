use std::cell::Cell;

use crate::i18n::{load_language, Language, PreferenceStore};

/// State shared by the page behaviours: the active language and where it is persisted.
pub struct PageContext {
    language: Cell<Language>,
    store: Box<dyn PreferenceStore>,
}

impl PageContext {
    /// Starts from whatever language the store remembers.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let language = load_language(store.as_ref());
        Self {
            language: Cell::new(language),
            store,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryStore;

    #[test]
    fn starts_from_stored_language() {
        let store = MemoryStore::default();
        store.set("language", "zh").unwrap();
        let context = PageContext::new(Box::new(store));
        assert_eq!(context.language(), Language::Zh);
    }

    #[test]
    fn defaults_without_stored_language() {
        let context = PageContext::new(Box::new(MemoryStore::default()));
        assert_eq!(context.language(), Language::Ko);
    }

    #[test]
    fn set_language_does_not_touch_store() {
        let context = PageContext::new(Box::new(MemoryStore::default()));
        context.set_language(Language::En);
        assert_eq!(context.language(), Language::En);
        assert_eq!(context.store().get("language").unwrap(), None);
    }
}
