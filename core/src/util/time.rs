use crate::prelude::{FormatError, FormatResult};
use chrono::{DateTime, SecondsFormat, Utc};

/// Converts an ISO-8601 / RFC 3339 timestamp to decimal epoch seconds.
pub fn iso8601_to_epoch(text: &str) -> FormatResult<f64> {
    let parsed = DateTime::parse_from_rfc3339(text)
        .map_err(|err| FormatError::InvalidTime(format!("{}: {}", text, err)))?;
    Ok(parsed.timestamp_micros() as f64 / 1_000_000.0)
}

/// Formats decimal epoch seconds as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn epoch_to_iso8601(epoch: f64) -> FormatResult<String> {
    if !epoch.is_finite() {
        return Err(FormatError::InvalidTime(format!("{} is not a finite time", epoch)));
    }
    let millis = (epoch * 1000.0).round() as i64;
    let time = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| FormatError::InvalidTime(format!("{} is out of range", epoch)))?;
    Ok(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serde adapter that carries optional epoch seconds as ISO-8601 strings on the wire.
pub mod iso8601 {
    use super::{epoch_to_iso8601, iso8601_to_epoch};
    use crate::util::text::is_string_iso8601;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(epoch) => {
                let text = epoch_to_iso8601(*epoch).map_err(S::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !is_string_iso8601(&text) {
            log::debug!("time {} is not in YYYY-MM-DDTHH:MM:SS.sssZ layout", text);
        }
        iso8601_to_epoch(&text).map(Some).map_err(D::Error::custom)
    }
}
