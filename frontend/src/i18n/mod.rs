//! Three-language text swapping for the landing page.
//!
//! Copy for each language lives in `data-ko` / `data-en` / `data-zh`
//! attributes written by the page template; this module only picks between
//! them and remembers the choice.

mod language;
mod store;
mod switcher;
mod translate;

pub use language::Language;
pub use store::{load_language, open_store, PreferenceStore};
pub use switcher::use_language_switcher;

#[cfg(test)]
pub use store::MemoryStore;
