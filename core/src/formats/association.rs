use crate::prelude::{check_range, finite, JsonRecord, Validate};
use crate::util::text::is_phase_code;
use serde::{Deserialize, Serialize};

/// Association of a detection with a hypocenter: phase, distance, azimuth and residual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    /// Epicentral distance in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub azimuth: Option<f64>,
    /// Observed minus predicted travel time, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub residual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub sigma: Option<f64>,
}

impl AssociationInfo {
    pub fn new(
        phase: impl Into<String>,
        distance: f64,
        azimuth: f64,
        residual: f64,
        sigma: f64,
    ) -> Self {
        Self {
            phase: phase.into(),
            distance: Some(distance),
            azimuth: Some(azimuth),
            residual: Some(residual),
            sigma: Some(sigma),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
            && self.distance.is_none()
            && self.azimuth.is_none()
            && self.residual.is_none()
            && self.sigma.is_none()
    }
}

impl JsonRecord for AssociationInfo {}

impl Validate for AssociationInfo {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.phase.is_empty() && !is_phase_code(&self.phase) {
            errors.push(format!(
                "Phase {:?} in AssociationInfo class contains invalid characters.",
                self.phase
            ));
        }
        check_range(&mut errors, self.distance, "Distance", "AssociationInfo", 0.0, 180.0);
        check_range(&mut errors, self.azimuth, "Azimuth", "AssociationInfo", 0.0, 360.0);
        check_range(
            &mut errors,
            self.residual,
            "Residual",
            "AssociationInfo",
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        check_range(&mut errors, self.sigma, "Sigma", "AssociationInfo", 0.0, f64::INFINITY);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn association_reads_json() {
        let info = AssociationInfo::from_json(&json!({
            "Distance": 0.442559,
            "Azimuth": 0.418479,
            "Phase": "P",
            "Sigma": 0.086333,
            "Residual": -0.025393
        }))
        .unwrap();
        assert_eq!(
            info,
            AssociationInfo::new("P", 0.442559, 0.418479, -0.025393, 0.086333)
        );
        assert!(info.is_valid());
    }

    #[test]
    fn association_empty_is_valid() {
        let info = AssociationInfo::default();
        assert!(info.is_empty());
        assert!(info.is_valid());
        assert_eq!(info.to_json().unwrap(), json!({}));
    }

    #[test]
    fn association_rejects_bad_values() {
        let info = AssociationInfo::new("P?", 181.0, -1.0, 0.0, -0.5);
        assert_eq!(info.errors().len(), 4);
    }

    #[test]
    fn association_residual_may_be_minus_ninety_nine() {
        let info = AssociationInfo::new("P", 90.0, 45.0, -99.0, 1.0);
        assert!(info.is_valid());
    }

    #[test]
    fn association_accepts_multi_letter_phases() {
        assert!(AssociationInfo::new("PKiKP", 120.0, 10.0, 0.3, 0.1).is_valid());
        assert!(AssociationInfo::new("Pn", 5.0, 10.0, -1.2, 0.1).is_valid());
    }
}
