use chrono::NaiveDateTime;

/// True for a non-empty string of ASCII letters only.
pub fn is_string_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// True for the exact `YYYY-MM-DDTHH:MM:SS.sssZ` layout the formats use.
pub fn is_string_iso8601(text: &str) -> bool {
    text.len() == 24 && NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.3fZ").is_ok()
}

/// Seismic phase codes start with a letter and continue with letters or digits.
pub(crate) fn is_phase_code(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_strings() {
        assert!(is_string_alpha("Pick"));
        assert!(!is_string_alpha(""));
        assert!(!is_string_alpha("P1"));
        assert!(!is_string_alpha("a b"));
    }

    #[test]
    fn iso8601_strings() {
        assert!(is_string_iso8601("2015-12-28T21:32:24.017Z"));
        assert!(!is_string_iso8601("2015-12-28T21:32:24Z"));
        assert!(!is_string_iso8601("2015-13-28T21:32:24.017Z"));
        assert!(!is_string_iso8601("not a time at all, sorry"));
    }

    #[test]
    fn phase_codes() {
        assert!(is_phase_code("P"));
        assert!(is_phase_code("PKP2"));
        assert!(!is_phase_code("2P"));
        assert!(!is_phase_code(""));
        assert!(!is_phase_code("P'P'"));
    }
}
