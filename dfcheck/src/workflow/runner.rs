use crate::workflow::config::CheckConfig;
use crate::workflow::tally::{Counts, ValidationTally};
use anyhow::Context;
use detectionformats::util::{detection_type_str, FormatType};
use detectionformats::json_errors;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    Valid,
    Invalid(Vec<String>),
    /// The file could not be read, parsed, or is of a type this tool does not model.
    Unreadable(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub format: FormatType,
    pub status: FileStatus,
}

pub struct CheckResult {
    pub reports: Vec<FileReport>,
    pub counts: Counts,
}

pub struct Runner {
    config: CheckConfig,
}

impl Runner {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Expands directories (one level deep) into the format files they contain.
    pub fn collect_paths(&self, inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for input in inputs {
            if !input.is_dir() {
                paths.push(input.clone());
                continue;
            }
            let entries = fs::read_dir(input)
                .with_context(|| format!("listing directory {}", input.display()))?;
            let mut found = Vec::new();
            for entry in entries {
                let path = entry
                    .with_context(|| format!("reading entry in {}", input.display()))?
                    .path();
                let accepted = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| self.config.accepts_extension(ext))
                    .unwrap_or(false);
                if path.is_file() && accepted {
                    found.push(path);
                }
            }
            found.sort();
            paths.extend(found);
        }
        Ok(paths)
    }

    pub fn check_file(&self, path: &Path, tally: &ValidationTally) -> FileReport {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("cannot read {}: {}", path.display(), err);
                tally.record_unreadable();
                return FileReport {
                    path: path.to_path_buf(),
                    format: FormatType::Unknown,
                    status: FileStatus::Unreadable(err.to_string()),
                };
            }
        };

        let format = detection_type_str(&text).unwrap_or(FormatType::Unknown);
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            let expected = FormatType::from_extension(ext);
            if expected != FormatType::Unknown && expected != format {
                warn!(
                    "{} has extension {} but Type {:?}",
                    path.display(),
                    ext,
                    format
                );
            }
        }

        let status = match json_errors(&text) {
            Ok(errors) if errors.is_empty() => {
                tally.record_valid();
                FileStatus::Valid
            }
            Ok(errors) => {
                tally.record_invalid();
                FileStatus::Invalid(errors)
            }
            Err(err) => {
                warn!("cannot decode {}: {}", path.display(), err);
                tally.record_unreadable();
                FileStatus::Unreadable(err.to_string())
            }
        };
        info!("checked {} as {:?}", path.display(), format);

        FileReport {
            path: path.to_path_buf(),
            format,
            status,
        }
    }

    pub fn execute(&self, inputs: &[PathBuf]) -> anyhow::Result<CheckResult> {
        let paths = self.collect_paths(inputs)?;
        let tally = ValidationTally::new();
        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            let report = self.check_file(&path, &tally);
            let failed = report.status != FileStatus::Valid;
            reports.push(report);
            if failed && self.config.fail_fast {
                break;
            }
        }
        Ok(CheckResult {
            reports,
            counts: tally.snapshot(),
        })
    }

    pub fn list_errors(&self) -> bool {
        self.config.list_errors
    }
}
