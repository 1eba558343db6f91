pub mod format_type;
pub mod text;
pub mod time;
pub mod values;

pub use format_type::{detection_type, detection_type_str, FormatType};
pub use text::{is_string_alpha, is_string_iso8601};
pub use time::{epoch_to_iso8601, iso8601_to_epoch};
