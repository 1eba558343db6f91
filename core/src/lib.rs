//! JSON detection-format records for exchanging seismic detection data.
//!
//! Every record decodes from and encodes to its wire JSON, validates itself
//! against the format's range and presence rules, and reports emptiness.

pub mod formats;
pub mod prelude;
pub mod util;
pub mod validate;

pub use formats::{
    AssociationInfo, Beam, Detection, EventType, Hypocenter, Site, Source, StationInfo,
};
pub use prelude::{FormatError, FormatResult, JsonRecord, Validate};
pub use validate::{is_json_valid, json_errors, validate_json};
