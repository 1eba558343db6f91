use crate::prelude::{check_measurement, finite, JsonRecord, Validate};
use serde::{Deserialize, Serialize};

/// Beamforming measurement: back azimuth, horizontal slowness and power ratio
/// with their uncertainties. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Beam {
    /// Degrees clockwise from north, `[0, 360]`.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub back_azimuth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub back_azimuth_error: Option<f64>,
    /// Seconds per kilometre.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub slowness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub slowness_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub power_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub power_ratio_error: Option<f64>,
}

impl Beam {
    /// Stores the values as given; range checks happen in [`Validate::errors`].
    pub fn new(
        back_azimuth: f64,
        back_azimuth_error: f64,
        slowness: f64,
        slowness_error: f64,
        power_ratio: f64,
        power_ratio_error: f64,
    ) -> Self {
        Self {
            back_azimuth: Some(back_azimuth),
            back_azimuth_error: Some(back_azimuth_error),
            slowness: Some(slowness),
            slowness_error: Some(slowness_error),
            power_ratio: Some(power_ratio),
            power_ratio_error: Some(power_ratio_error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.back_azimuth.is_none()
            && self.back_azimuth_error.is_none()
            && self.slowness.is_none()
            && self.slowness_error.is_none()
            && self.power_ratio.is_none()
            && self.power_ratio_error.is_none()
    }
}

impl JsonRecord for Beam {}

impl Validate for Beam {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // required
        if self.back_azimuth.is_none() {
            errors.push("No BackAzimuth in Beam class.".to_string());
        }
        if self.slowness.is_none() {
            errors.push("No Slowness in Beam class.".to_string());
        }

        check_measurement(&mut errors, self.back_azimuth, "BackAzimuth", "Beam", 0.0, 360.0);
        check_measurement(
            &mut errors,
            self.back_azimuth_error,
            "BackAzimuthError",
            "Beam",
            0.0,
            f64::INFINITY,
        );
        check_measurement(&mut errors, self.slowness, "Slowness", "Beam", 0.0, f64::INFINITY);
        check_measurement(
            &mut errors,
            self.slowness_error,
            "SlownessError",
            "Beam",
            0.0,
            f64::INFINITY,
        );
        check_measurement(&mut errors, self.power_ratio, "PowerRatio", "Beam", 0.0, f64::INFINITY);
        check_measurement(
            &mut errors,
            self.power_ratio_error,
            "PowerRatioError",
            "Beam",
            0.0,
            f64::INFINITY,
        );

        errors
    }
}
