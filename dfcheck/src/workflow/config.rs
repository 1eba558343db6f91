use anyhow::Context;
use detectionformats::util::FormatType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub fail_fast: bool,
    pub list_errors: bool,
    /// Extensions scanned in directories; empty means every known format extension.
    pub extensions: Vec<String>,
}

impl CheckConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading check config {}", path_ref.display()))?;
        let config: CheckConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing check config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(fail_fast: bool, list_errors: bool) -> Self {
        Self {
            fail_fast,
            list_errors,
            extensions: Vec::new(),
        }
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        if self.extensions.is_empty() {
            FormatType::from_extension(extension) != FormatType::Unknown
        } else {
            self.extensions.iter().any(|ext| ext == extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_accepts_known_extensions() {
        let cfg = CheckConfig::from_args(true, false);
        assert!(cfg.fail_fast);
        assert!(cfg.accepts_extension("jsonsta"));
        assert!(cfg.accepts_extension("jsonbeam"));
        assert!(!cfg.accepts_extension("json"));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"list_errors: true\nextensions:\n  - json\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = CheckConfig::load(&path).unwrap();
        assert!(cfg.list_errors);
        assert!(!cfg.fail_fast);
        assert!(cfg.accepts_extension("json"));
        assert!(!cfg.accepts_extension("jsonsta"));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = CheckConfig::load("/nonexistent/dfcheck.yaml").unwrap_err();
        assert!(err.to_string().contains("reading check config"));
    }
}
