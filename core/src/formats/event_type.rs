use crate::prelude::{JsonRecord, Validate};
use crate::util::values::{is_event_type, is_event_type_certainty};
use serde::{Deserialize, Serialize};

/// Classification of an event and how sure the producer is of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventType {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certainty: String,
}

impl EventType {
    pub fn new(event_type: impl Into<String>, certainty: impl Into<String>) -> Self {
        Self {
            r#type: event_type.into(),
            certainty: certainty.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.r#type.is_empty() && self.certainty.is_empty()
    }
}

impl JsonRecord for EventType {}

impl Validate for EventType {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.r#type.is_empty() {
            if !self.certainty.is_empty() {
                errors.push("Certainty given without a Type in EventType class.".to_string());
            }
        } else if !is_event_type(&self.r#type) {
            errors.push(format!(
                "Invalid Type {} in EventType class.",
                self.r#type
            ));
        }

        if !self.certainty.is_empty() && !is_event_type_certainty(&self.certainty) {
            errors.push(format!(
                "Invalid Certainty {} in EventType class.",
                self.certainty
            ));
        }

        errors
    }
}
