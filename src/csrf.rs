//! Anti-forgery token, read once from `<meta name="csrf-token">`.

use web_sys::Document;

use crate::constants::SEL_CSRF_META;

/// Never refreshed: a rotated server token means a page reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Missing meta tag yields an empty token; the server rejects the request
    /// and the user sees its error message.
    pub fn from_document(document: &Document) -> Self {
        let value = document
            .query_selector(SEL_CSRF_META)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .unwrap_or_default();
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
