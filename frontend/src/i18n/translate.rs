//! Which content a translatable element receives for a language.

use super::Language;

/// How an element displays translated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<input>` / `<textarea>`: only the placeholder changes.
    TextField,
    /// `<option>`: plain text content.
    SelectOption,
    /// Anything else: inner markup.
    Other,
}

impl ElementKind {
    pub fn from_tag(tag_name: &str) -> Self {
        match tag_name.to_ascii_uppercase().as_str() {
            "INPUT" | "TEXTAREA" => ElementKind::TextField,
            "OPTION" => ElementKind::SelectOption,
            _ => ElementKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Placeholder(String),
    Text(String),
    Markup(String),
}

/// Works out the rewrite for one element. `attr` looks up an attribute by name.
///
/// Returns `None` when the element must keep its current content: the language
/// attribute is absent or empty, or a text field lacks the placeholder variant.
/// Markup values come from page authors and are inserted as-is.
pub fn rewrite_for<F>(kind: ElementKind, lang: Language, attr: F) -> Option<Rewrite>
where
    F: Fn(&str) -> Option<String>,
{
    let text = attr(&lang.text_attribute()).filter(|t| !t.is_empty())?;
    match kind {
        ElementKind::TextField => attr(&lang.placeholder_attribute()).map(Rewrite::Placeholder),
        ElementKind::SelectOption => Some(Rewrite::Text(text)),
        ElementKind::Other => Some(Rewrite::Markup(text)),
    }
}
