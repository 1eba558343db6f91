use crate::formats::{Beam, Detection, StationInfo};
use crate::prelude::{FormatError, FormatResult, JsonRecord, Validate};
use crate::util::format_type::{detection_type, FormatType};
use serde_json::Value;

/// True when `text` parses as JSON at all.
pub fn is_json_valid(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Decodes a message according to its `Type` key and returns its validation errors.
pub fn json_errors(text: &str) -> FormatResult<Vec<String>> {
    let json: Value = serde_json::from_str(text)?;
    let format = detection_type(&json);
    log::debug!("validating {:?} message", format);

    match format {
        FormatType::StationInfo => Ok(StationInfo::from_json(&json)?.errors()),
        FormatType::Beam => Ok(Beam::from_json(&json)?.errors()),
        FormatType::Detection => Ok(Detection::from_json(&json)?.errors()),
        FormatType::Unknown => Err(FormatError::UnknownType),
        other => Err(FormatError::UnsupportedType(other.type_key().to_string())),
    }
}

/// True only when the message decodes and has no validation errors.
pub fn validate_json(text: &str) -> bool {
    match json_errors(text) {
        Ok(errors) => errors.is_empty(),
        Err(err) => {
            log::debug!("message did not validate: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATION: &str = r#"{"Type":"StationInfo","Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00","Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},"Enable":true,"Use":true,"UseForTeleseismic":false}"#;

    #[test]
    fn validates_station_info() {
        assert!(is_json_valid(STATION));
        assert!(validate_json(STATION));
        assert!(json_errors(STATION).unwrap().is_empty());
    }

    #[test]
    fn validates_typed_beam() {
        let beam = r#"{"Type":"Beam","BackAzimuth":2.65,"Slowness":1.44,"PowerRatio":12.18}"#;
        assert!(validate_json(beam));

        let sentinel = r#"{"Type":"Beam","BackAzimuth":-99.0,"Slowness":-99.0}"#;
        assert!(!validate_json(sentinel));
        assert_eq!(json_errors(sentinel).unwrap().len(), 2);
    }

    #[test]
    fn validates_detection() {
        let detection = r#"{"Type":"Detection","ID":"12GFH48776857","Source":{"AgencyID":"US","Author":"TestAuthor"},"Hypocenter":{"Latitude":40.3344,"Longitude":-121.44,"Time":"2015-12-28T21:32:24.017Z","Depth":32.44},"DetectionType":"New","Gap":33.67}"#;
        assert!(validate_json(detection));

        let retyped = r#"{"Type":"Detection","ID":"","Source":{"AgencyID":"US","Author":"TestAuthor"},"Hypocenter":{"Latitude":40.3344,"Longitude":-121.44,"Time":"2015-12-28T21:32:24.017Z","Depth":32.44},"EventType":{"Type":"Meteor"}}"#;
        assert_eq!(json_errors(retyped).unwrap().len(), 2);

        let bad_time = r#"{"Type":"Detection","Hypocenter":{"Time":"yesterday"}}"#;
        assert!(matches!(json_errors(bad_time), Err(FormatError::Json(_))));
    }

    #[test]
    fn reports_unknown_and_unsupported_types() {
        assert!(matches!(
            json_errors(r#"{"ID":"1"}"#),
            Err(FormatError::UnknownType)
        ));
        assert!(matches!(
            json_errors(r#"{"Type":"Pick"}"#),
            Err(FormatError::UnsupportedType(name)) if name == "Pick"
        ));
        assert!(!validate_json(r#"{"Type":"Pick"}"#));
    }

    #[test]
    fn malformed_text_is_not_valid() {
        let text = r#"{"Type":"Beam","SlownessError":0.4"PowerRatio":12.18}"#;
        assert!(!is_json_valid(text));
        assert!(!validate_json(text));
        assert!(matches!(json_errors(text), Err(FormatError::Json(_))));
    }

    #[test]
    fn type_mismatch_inside_message_is_an_error() {
        let text = r#"{"Type":"StationInfo","Enable":"yes"}"#;
        assert!(matches!(json_errors(text), Err(FormatError::Json(_))));
    }
}
