use crate::prelude::{check_range, finite, JsonRecord, Validate};
use serde::{Deserialize, Serialize};

/// Station/channel/network/location identifier with optional coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Site {
    #[serde(default)]
    pub station: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel: String,
    #[serde(default)]
    pub network: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub longitude: Option<f64>,
    /// Metres above sea level.
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub elevation: Option<f64>,
}

impl Site {
    pub fn new(
        station: impl Into<String>,
        channel: impl Into<String>,
        network: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station: station.into(),
            channel: channel.into(),
            network: network.into(),
            location: location.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            elevation: Some(elevation),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.station.is_empty()
            && self.channel.is_empty()
            && self.network.is_empty()
            && self.location.is_empty()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.elevation.is_none()
    }
}

impl JsonRecord for Site {}

impl Validate for Site {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.station.is_empty() {
            errors.push("Empty Station in Site class.".to_string());
        }
        if self.network.is_empty() {
            errors.push("Empty Network in Site class.".to_string());
        }
        check_range(&mut errors, self.latitude, "Latitude", "Site", -90.0, 90.0);
        check_range(&mut errors, self.longitude, "Longitude", "Site", -180.0, 180.0);
        check_range(&mut errors, self.elevation, "Elevation", "Site", -500.0, 8900.0);
        errors
    }
}
