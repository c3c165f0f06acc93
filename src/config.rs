// Wed Oct 14 2026 - Alex

use crate::error::{ConvertError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub show_summary: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "input map file path is empty".to_string(),
            ));
        }
        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(ConvertError::InvalidConfig(
                    "output path is empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
