use crate::formats::{Site, Source};
use crate::prelude::{finite, JsonRecord, Validate};
use crate::util::format_type::FormatType;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Station metadata message: where a station is and how it should be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    /// `"StationInfo"` when constructed; whatever the producer wrote when decoded.
    #[serde(rename = "Type", default)]
    pub message_type: String,
    #[serde(rename = "Site", default)]
    pub site: Site,
    #[serde(rename = "Quality", default, skip_serializing_if = "Option::is_none", serialize_with = "finite")]
    pub quality: Option<f64>,
    #[serde(rename = "Enable", default = "default_true")]
    pub enable: bool,
    #[serde(rename = "Use", default = "default_true")]
    pub use_station: bool,
    #[serde(rename = "UseForTeleseismic", default)]
    pub use_for_teleseismic: bool,
    #[serde(
        rename = "InformationRequestor",
        default,
        skip_serializing_if = "Source::is_empty"
    )]
    pub information_requestor: Source,
}

impl Default for StationInfo {
    fn default() -> Self {
        Self {
            message_type: FormatType::StationInfo.type_key().to_string(),
            site: Site::default(),
            quality: None,
            enable: true,
            use_station: true,
            use_for_teleseismic: false,
            information_requestor: Source::default(),
        }
    }
}

impl StationInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        station: &str,
        channel: &str,
        network: &str,
        location: &str,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        quality: f64,
        enable: bool,
        use_station: bool,
        use_for_teleseismic: bool,
        agency_id: &str,
        author: &str,
    ) -> Self {
        Self::from_parts(
            Site::new(station, channel, network, location, latitude, longitude, elevation),
            Some(quality),
            enable,
            use_station,
            use_for_teleseismic,
            Source::new(agency_id, author),
        )
    }

    /// Builds a message from already assembled sub-objects.
    pub fn from_parts(
        site: Site,
        quality: Option<f64>,
        enable: bool,
        use_station: bool,
        use_for_teleseismic: bool,
        information_requestor: Source,
    ) -> Self {
        Self {
            message_type: FormatType::StationInfo.type_key().to_string(),
            site,
            quality,
            enable,
            use_station,
            use_for_teleseismic,
            information_requestor,
        }
    }

    /// True when nothing beyond the type and usage flags has been filled in.
    pub fn is_empty(&self) -> bool {
        self.site.is_empty() && self.quality.is_none() && self.information_requestor.is_empty()
    }
}

impl JsonRecord for StationInfo {}

impl Validate for StationInfo {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.message_type != FormatType::StationInfo.type_key() {
            errors.push("Non-stationInfo type in stationInfo class.".to_string());
        }

        if !self.site.is_valid() {
            errors.push("Site object did not validate in stationInfo class.".to_string());
        }

        match self.site.latitude {
            None => errors.push("No Latitude in stationInfo class.".to_string()),
            Some(lat) if !(-90.0..=90.0).contains(&lat) => errors.push(
                "Latitude in stationInfo class not in the range of -90 to 90.".to_string(),
            ),
            Some(_) => {}
        }

        match self.site.longitude {
            None => errors.push("No Longitude in stationInfo class.".to_string()),
            Some(lon) if !(-180.0..=180.0).contains(&lon) => errors.push(
                "Longitude in stationInfo class not in the range of -180 to 180.".to_string(),
            ),
            Some(_) => {}
        }

        match self.site.elevation {
            None => errors.push("No Elevation in stationInfo class.".to_string()),
            Some(elev) if !(-500.0..=8900.0).contains(&elev) => errors.push(
                "Elevation in stationInfo class not in the range of -500 to 8900.".to_string(),
            ),
            Some(_) => {}
        }

        // Quality, Enable, Use and UseForTeleseismic carry no constraints.

        if !self.information_requestor.is_empty() && !self.information_requestor.is_valid() {
            errors.push(
                "InformationRequestor object did not validate in stationInfo class.".to_string(),
            );
        }

        errors
    }
}
