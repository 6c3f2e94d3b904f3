//! The JSON configuration document: style scopes plus text content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Property name -> CSS value, in document order.
pub type Declarations = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub styles: Styles,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Styles {
    pub body: Declarations,
    pub header: Declarations,
    #[serde(rename = "headerP")]
    pub header_p: Declarations,
}

/// Text content; keys other than `headerText` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub header_text: String,
}

impl Configuration {
    /// Parses a configuration document.
    ///
    /// Malformed JSON and documents missing one of the documented fields are
    /// both reported as a `serde_json::Error`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Text a declaration value contributes to the stylesheet.
///
/// Strings are used as is; numbers, booleans and anything else use their JSON text.
pub fn css_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
