use crate::prelude::{check_range, finite, JsonRecord, Validate};
use crate::util::time::iso8601;
use serde::{Deserialize, Serialize};

/// Earthquake location: epicenter, origin time and depth, each with an optional error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hypocenter {
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub longitude: Option<f64>,
    /// Origin time as epoch seconds; ISO-8601 on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso8601")]
    pub time: Option<f64>,
    /// Kilometres below sea level.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub latitude_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub longitude_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub time_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub depth_error: Option<f64>,
}

impl Hypocenter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude: f64,
        longitude: f64,
        time: f64,
        depth: f64,
        latitude_error: f64,
        longitude_error: f64,
        time_error: f64,
        depth_error: f64,
    ) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            time: Some(time),
            depth: Some(depth),
            latitude_error: Some(latitude_error),
            longitude_error: Some(longitude_error),
            time_error: Some(time_error),
            depth_error: Some(depth_error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.time.is_none()
            && self.depth.is_none()
            && self.latitude_error.is_none()
            && self.longitude_error.is_none()
            && self.time_error.is_none()
            && self.depth_error.is_none()
    }
}

impl JsonRecord for Hypocenter {}

impl Validate for Hypocenter {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.latitude.is_none() {
            errors.push("No Latitude in Hypocenter class.".to_string());
        }
        if self.longitude.is_none() {
            errors.push("No Longitude in Hypocenter class.".to_string());
        }
        if self.time.is_none() {
            errors.push("No Time in Hypocenter class.".to_string());
        }
        if self.depth.is_none() {
            errors.push("No Depth in Hypocenter class.".to_string());
        }

        check_range(&mut errors, self.latitude, "Latitude", "Hypocenter", -90.0, 90.0);
        check_range(&mut errors, self.longitude, "Longitude", "Hypocenter", -180.0, 180.0);
        check_range(&mut errors, self.depth, "Depth", "Hypocenter", -100.0, 1500.0);
        for (value, name) in [
            (self.latitude_error, "LatitudeError"),
            (self.longitude_error, "LongitudeError"),
            (self.time_error, "TimeError"),
            (self.depth_error, "DepthError"),
        ] {
            check_range(&mut errors, value, name, "Hypocenter", 0.0, f64::INFINITY);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::time::iso8601_to_epoch;
    use serde_json::json;

    fn reference_hypocenter() -> Hypocenter {
        let time = iso8601_to_epoch("2015-12-28T21:32:24.017Z").unwrap();
        Hypocenter::new(40.3344, -121.44, time, 32.44, 1.12, 2.11, 1.984, 12.5)
    }

    #[test]
    fn hypocenter_writes_time_as_iso8601() {
        let json = reference_hypocenter().to_json().unwrap();
        assert_eq!(json["Time"], json!("2015-12-28T21:32:24.017Z"));
        assert_eq!(json["Depth"], json!(32.44));

        let decoded = Hypocenter::from_json(&json).unwrap();
        assert_eq!(decoded.latitude, Some(40.3344));
        assert!((decoded.time.unwrap() - reference_hypocenter().time.unwrap()).abs() < 1e-4);
    }

    #[test]
    fn hypocenter_rejects_numeric_time() {
        let err = Hypocenter::from_json(&json!({"Time": 1451338344.017}));
        assert!(err.is_err());
    }

    #[test]
    fn hypocenter_validation() {
        assert!(reference_hypocenter().is_valid());
        assert_eq!(Hypocenter::default().errors().len(), 4);

        let mut deep = reference_hypocenter();
        deep.depth = Some(2000.0);
        deep.time_error = Some(-1.0);
        assert_eq!(deep.errors().len(), 2);

        let mut west = reference_hypocenter();
        west.longitude = Some(-99.0);
        assert!(west.is_valid());
    }

    #[test]
    fn hypocenter_is_empty() {
        assert!(Hypocenter::default().is_empty());
        assert!(!reference_hypocenter().is_empty());
    }
}
