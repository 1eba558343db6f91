use crate::prelude::{JsonRecord, Validate};
use serde::{Deserialize, Serialize};

/// Agency and author responsible for a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "AgencyID", default)]
    pub agency_id: String,
    #[serde(rename = "Author", default)]
    pub author: String,
}

impl Source {
    pub fn new(agency_id: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            agency_id: agency_id.into(),
            author: author.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.agency_id.is_empty() && self.author.is_empty()
    }
}

impl JsonRecord for Source {}

impl Validate for Source {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.agency_id.is_empty() {
            errors.push("Empty AgencyID in Source class.".to_string());
        }
        if self.author.is_empty() {
            errors.push("Empty Author in Source class.".to_string());
        }
        errors
    }
}
