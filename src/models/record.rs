use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open JSON object carried through the service untouched.
///
/// Key order is preserved (`serde_json` is built with `preserve_order`), so a
/// record serializes back to exactly the object it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String form of a field for equality lookups.
    ///
    /// Strings yield their contents and numbers their decimal rendering, so
    /// `{"id": 7}` is found by the key `"7"`. Any other JSON type has no text.
    pub fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.0.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    pub fn field_eq(&self, field: &str, key: &str) -> bool {
        self.field_text(field).is_some_and(|text| text == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
