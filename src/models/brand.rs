use serde::{Deserialize, Serialize};

use super::Record;

/// A catalog brand, carried opaquely from its source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brand(Record);

impl Brand {
    pub fn record(&self) -> &Record {
        &self.0
    }
}

impl From<Record> for Brand {
    fn from(record: Record) -> Self {
        Self(record)
    }
}
