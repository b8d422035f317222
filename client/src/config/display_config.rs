use common::config::Validate;
use serde::{Deserialize, Serialize};

/// Width of the title banner; narrower borders would not frame it.
pub const MIN_SCREEN_WIDTH: usize = 80;
pub const MAX_SCREEN_WIDTH: usize = 200;
pub const MAX_CLEAR_LINES: usize = 500;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub screen_width: usize,
    pub clear_screen: bool,
    pub clear_lines: usize,
    /// Empty cells show their index so players know what to type.
    pub show_cell_hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 80,
            clear_screen: true,
            clear_lines: 100,
            show_cell_hints: true,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.screen_width < MIN_SCREEN_WIDTH || self.screen_width > MAX_SCREEN_WIDTH {
            return Err(format!(
                "Screen width must be between {} and {}",
                MIN_SCREEN_WIDTH, MAX_SCREEN_WIDTH
            ));
        }
        if self.clear_lines > MAX_CLEAR_LINES {
            return Err(format!("Clear lines must not exceed {}", MAX_CLEAR_LINES));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_width_is_accepted() {
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_width_narrower_than_banner_is_rejected() {
        let display = DisplayConfig {
            screen_width: MIN_SCREEN_WIDTH - 1,
            ..DisplayConfig::default()
        };

        assert!(display.validate().is_err());
    }

    #[test]
    fn test_too_many_clear_lines_is_rejected() {
        let display = DisplayConfig {
            clear_lines: MAX_CLEAR_LINES + 1,
            ..DisplayConfig::default()
        };

        assert!(display.validate().is_err());
    }
}
