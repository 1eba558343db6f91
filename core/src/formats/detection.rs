use crate::formats::{EventType, Hypocenter, Source};
use crate::prelude::{check_range, finite, JsonRecord, Validate};
use crate::util::format_type::FormatType;
use crate::util::time::iso8601;
use crate::util::values::is_detection_type;
use serde::{Deserialize, Serialize};

/// Event detection message: a hypocenter plus the quality metrics of the solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Detection {
    /// `"Detection"` when constructed; whatever the producer wrote when decoded.
    #[serde(rename = "Type", default)]
    pub message_type: String,
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub hypocenter: Hypocenter,
    /// One of `New`, `Update`, `Final`, `Retract`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detection_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601")]
    pub detection_time: Option<f64>,
    #[serde(default, skip_serializing_if = "EventType::is_empty")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub bayes: Option<f64>,
    /// Degrees to the closest station.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub minimum_distance: Option<f64>,
    #[serde(
        rename = "RMS",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite"
    )]
    pub rms: Option<f64>,
    /// Largest azimuthal gap between stations, degrees.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub gap: Option<f64>,
}

impl Default for Detection {
    fn default() -> Self {
        Self {
            message_type: FormatType::Detection.type_key().to_string(),
            id: String::new(),
            source: Source::default(),
            hypocenter: Hypocenter::default(),
            detection_type: String::new(),
            detection_time: None,
            event_type: EventType::default(),
            bayes: None,
            minimum_distance: None,
            rms: None,
            gap: None,
        }
    }
}

impl Detection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        agency_id: &str,
        author: &str,
        latitude: f64,
        longitude: f64,
        time: f64,
        depth: f64,
        latitude_error: f64,
        longitude_error: f64,
        time_error: f64,
        depth_error: f64,
        detection_type: &str,
        detection_time: f64,
        event_type: &str,
        certainty: &str,
        bayes: f64,
        minimum_distance: f64,
        rms: f64,
        gap: f64,
    ) -> Self {
        Self::from_parts(
            id,
            Source::new(agency_id, author),
            Hypocenter::new(
                latitude,
                longitude,
                time,
                depth,
                latitude_error,
                longitude_error,
                time_error,
                depth_error,
            ),
            detection_type,
            Some(detection_time),
            EventType::new(event_type, certainty),
            Some(bayes),
            Some(minimum_distance),
            Some(rms),
            Some(gap),
        )
    }

    /// Builds a message from already assembled sub-objects.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: &str,
        source: Source,
        hypocenter: Hypocenter,
        detection_type: &str,
        detection_time: Option<f64>,
        event_type: EventType,
        bayes: Option<f64>,
        minimum_distance: Option<f64>,
        rms: Option<f64>,
        gap: Option<f64>,
    ) -> Self {
        Self {
            message_type: FormatType::Detection.type_key().to_string(),
            id: id.to_string(),
            source,
            hypocenter,
            detection_type: detection_type.to_string(),
            detection_time,
            event_type,
            bayes,
            minimum_distance,
            rms,
            gap,
        }
    }

    /// True when nothing beyond the type has been filled in.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.source.is_empty()
            && self.hypocenter.is_empty()
            && self.detection_type.is_empty()
            && self.detection_time.is_none()
            && self.event_type.is_empty()
            && self.bayes.is_none()
            && self.minimum_distance.is_none()
            && self.rms.is_none()
            && self.gap.is_none()
    }
}

impl JsonRecord for Detection {}

impl Validate for Detection {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.message_type != FormatType::Detection.type_key() {
            errors.push("Non-Detection type in Detection class.".to_string());
        }
        if self.id.is_empty() {
            errors.push("Empty ID in Detection class.".to_string());
        }
        if !self.source.is_valid() {
            errors.push("Source object did not validate in Detection class.".to_string());
        }
        if !self.hypocenter.is_valid() {
            errors.push("Hypocenter object did not validate in Detection class.".to_string());
        }

        if !self.detection_type.is_empty() && !is_detection_type(&self.detection_type) {
            errors.push(format!(
                "Invalid DetectionType {} in Detection class.",
                self.detection_type
            ));
        }
        if !self.event_type.is_empty() && !self.event_type.is_valid() {
            errors.push("EventType object did not validate in Detection class.".to_string());
        }

        check_range(
            &mut errors,
            self.bayes,
            "Bayes",
            "Detection",
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        check_range(
            &mut errors,
            self.minimum_distance,
            "MinimumDistance",
            "Detection",
            0.0,
            f64::INFINITY,
        );
        check_range(&mut errors, self.rms, "RMS", "Detection", f64::NEG_INFINITY, f64::INFINITY);
        check_range(&mut errors, self.gap, "Gap", "Detection", 0.0, 360.0);

        if !errors.is_empty() {
            log::debug!("detection {:?} has {} error(s)", self.id, errors.len());
        }
        errors
    }
}
