use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Record;

/// A catalog product: an open record queried by its `id` and `brand` fields.
///
/// Neither field is required; a product missing one simply never matches
/// lookups on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Record);

impl Product {
    pub const ID_FIELD: &'static str = "id";
    pub const BRAND_FIELD: &'static str = "brand";

    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.0.field_text(Self::ID_FIELD)
    }

    pub fn brand(&self) -> Option<Cow<'_, str>> {
        self.0.field_text(Self::BRAND_FIELD)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.0.field_eq(Self::ID_FIELD, id)
    }

    pub fn is_brand(&self, brand_key: &str) -> bool {
        self.0.field_eq(Self::BRAND_FIELD, brand_key)
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

impl From<Record> for Product {
    fn from(record: Record) -> Self {
        Self(record)
    }
}
