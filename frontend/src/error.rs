use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Js(describe(&value))
    }
}

/// Best-effort string form of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, EnhanceError>;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(EnhanceError::NoDocument)
}

pub fn element_by_id(document: &web_sys::Document, id: &str) -> Result<web_sys::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EnhanceError::MissingElement(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_message_names_the_id() {
        let err = EnhanceError::MissingElement("scroll-progress".to_string());
        assert_eq!(err.to_string(), "element #scroll-progress not found");
    }

    #[test]
    fn storage_error_keeps_reason() {
        let err = EnhanceError::Storage("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
