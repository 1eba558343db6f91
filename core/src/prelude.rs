use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Value producers write when a measurement could not be determined.
pub const SENTINEL: f64 = -99.0;

/// Common error type for decoding and inspecting detection-format messages.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serialization error: {0}")]
    Serialize(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("message has no recognizable Type")]
    UnknownType,
    #[error("unsupported message type: {0}")]
    UnsupportedType(String),
}

pub type FormatResult<T> = Result<T, FormatError>;

/// Validation contract shared by every record in the format family.
///
/// A failed validation is not an error; callers inspect the returned list.
pub trait Validate {
    /// Human-readable reasons the record is invalid, empty when valid.
    fn errors(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        let errors = self.errors();
        if !errors.is_empty() {
            log::debug!("validation failed with {} error(s)", errors.len());
        }
        errors.is_empty()
    }
}

/// JSON codec for records, built on their serde derives.
pub trait JsonRecord: Serialize + DeserializeOwned {
    fn from_json(json: &Value) -> FormatResult<Self> {
        Deserialize::deserialize(json).map_err(|err| {
            log::debug!("failed to decode record: {}", err);
            FormatError::Json(err)
        })
    }

    fn from_json_str(text: &str) -> FormatResult<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Fails with [`FormatError::Serialize`] when a numeric field is NaN or infinite,
    /// which JSON cannot represent.
    fn to_json(&self) -> FormatResult<Value> {
        serde_json::to_value(self).map_err(|err| FormatError::Serialize(err.to_string()))
    }

    fn to_json_string(&self) -> FormatResult<String> {
        serde_json::to_string(self).map_err(|err| FormatError::Serialize(err.to_string()))
    }
}

/// `serialize_with` helper for optional numbers: refuses NaN and infinities
/// instead of letting them degrade to `null`.
pub(crate) fn finite<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) if !number.is_finite() => Err(S::Error::custom(format!(
            "{} cannot be written as a JSON number",
            number
        ))),
        Some(number) => serializer.serialize_some(number),
        None => serializer.serialize_none(),
    }
}

/// Pushes a range error for a present value that is non-finite or outside `[min, max]`.
pub(crate) fn check_range(
    errors: &mut Vec<String>,
    value: Option<f64>,
    name: &str,
    class: &str,
    min: f64,
    max: f64,
) {
    let Some(value) = value else {
        return;
    };
    if !value.is_finite() || value < min || value > max {
        if max == f64::INFINITY && min.is_finite() {
            errors.push(format!("{} in {} class is less than {}.", name, class, min));
        } else if !min.is_finite() && !max.is_finite() {
            errors.push(format!("{} in {} class is not a finite number.", name, class));
        } else {
            errors.push(format!(
                "{} in {} class not in the range of {} to {}.",
                name, class, min, max
            ));
        }
    }
}

/// Like [`check_range`], but also rejects the producer's [`SENTINEL`] unset value.
pub(crate) fn check_measurement(
    errors: &mut Vec<String>,
    value: Option<f64>,
    name: &str,
    class: &str,
    min: f64,
    max: f64,
) {
    if value == Some(SENTINEL) {
        errors.push(format!("{} in {} class is the unset value {}.", name, class, SENTINEL));
    } else {
        check_range(errors, value, name, class, min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_ignores_absent_values() {
        let mut errors = Vec::new();
        check_range(&mut errors, None, "Slowness", "Beam", 0.0, f64::INFINITY);
        check_measurement(&mut errors, None, "Slowness", "Beam", 0.0, f64::INFINITY);
        assert!(errors.is_empty());
    }

    #[test]
    fn check_range_flags_bounds_and_non_finite() {
        let mut errors = Vec::new();
        check_range(&mut errors, Some(361.0), "BackAzimuth", "Beam", 0.0, 360.0);
        check_range(&mut errors, Some(-1.0), "PowerRatio", "Beam", 0.0, f64::INFINITY);
        check_range(&mut errors, Some(f64::NAN), "PowerRatio", "Beam", 0.0, f64::INFINITY);
        check_range(
            &mut errors,
            Some(f64::INFINITY),
            "Residual",
            "AssociationInfo",
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("range of 0 to 360"));
        assert!(errors[1].contains("less than 0"));
        assert!(errors[3].contains("not a finite number"));
    }

    #[test]
    fn sentinel_is_only_rejected_for_measurements() {
        let mut errors = Vec::new();
        check_range(&mut errors, Some(SENTINEL), "Longitude", "Site", -180.0, 180.0);
        assert!(errors.is_empty());

        check_measurement(&mut errors, Some(SENTINEL), "Slowness", "Beam", -100.0, 100.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unset value"));
    }

    #[test]
    fn finite_refuses_nan_and_infinity() {
        #[derive(Serialize)]
        struct Wrapper(#[serde(serialize_with = "finite")] Option<f64>);

        assert_eq!(serde_json::to_string(&Wrapper(Some(1.5))).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Wrapper(None)).unwrap(), "null");
        assert!(serde_json::to_string(&Wrapper(Some(f64::NAN))).is_err());
        assert!(serde_json::to_string(&Wrapper(Some(f64::NEG_INFINITY))).is_err());
    }
}
