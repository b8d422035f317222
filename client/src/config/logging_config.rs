use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub verbose: bool,
    /// Log lines go here instead of stderr when set.
    pub file: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err("log file path must not be empty".to_string());
        }
        Ok(())
    }
}
