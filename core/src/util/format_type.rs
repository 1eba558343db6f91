use crate::prelude::FormatResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key every top-level message uses to name its format.
pub const TYPE_KEY: &str = "Type";

/// Top-level message types of the detection-format family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormatType {
    Pick,
    Correlation,
    Detection,
    Retract,
    StationInfo,
    StationInfoRequest,
    Beam,
    Unknown,
}

impl FormatType {
    pub const KNOWN: [FormatType; 7] = [
        FormatType::Pick,
        FormatType::Correlation,
        FormatType::Detection,
        FormatType::Retract,
        FormatType::StationInfo,
        FormatType::StationInfoRequest,
        FormatType::Beam,
    ];

    /// Value of the `Type` key for this format; empty for `Unknown`.
    pub fn type_key(&self) -> &'static str {
        match self {
            FormatType::Pick => "Pick",
            FormatType::Correlation => "Correlation",
            FormatType::Detection => "Detection",
            FormatType::Retract => "Retract",
            FormatType::StationInfo => "StationInfo",
            FormatType::StationInfoRequest => "StationInfoRequest",
            FormatType::Beam => "Beam",
            FormatType::Unknown => "",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FormatType::Pick => Some("jsonpick"),
            FormatType::Correlation => Some("jsoncorl"),
            FormatType::Detection => Some("jsondetect"),
            FormatType::Retract => Some("jsonrtct"),
            FormatType::StationInfo => Some("jsonsta"),
            FormatType::StationInfoRequest => Some("jsonstareq"),
            FormatType::Beam => Some("jsonbeam"),
            FormatType::Unknown => None,
        }
    }

    pub fn from_type_key(key: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|format| format.type_key() == key)
            .unwrap_or(FormatType::Unknown)
    }

    pub fn from_extension(extension: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|format| format.extension() == Some(extension))
            .unwrap_or(FormatType::Unknown)
    }
}

/// Reads the `Type` key of a decoded message.
pub fn detection_type(json: &Value) -> FormatType {
    json.get(TYPE_KEY)
        .and_then(Value::as_str)
        .map(FormatType::from_type_key)
        .unwrap_or(FormatType::Unknown)
}

pub fn detection_type_str(text: &str) -> FormatResult<FormatType> {
    let json: Value = serde_json::from_str(text)?;
    Ok(detection_type(&json))
}
