use crate::{
    constants::DEFAULT_WHEEL_STEP,
    error::ConfigError,
    navigation::{EdgePolicy, NavigationConfig},
};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub navigation: NavigationConfig,
    /// Cells of travel reported per wheel notch.
    pub wheel_step: u16,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::terminal(),
            wheel_step: DEFAULT_WHEEL_STEP,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn with_settle_delay(mut self, settle_ms: u64) -> Self {
        self.navigation.settle_delay = Duration::from_millis(settle_ms);
        self
    }

    pub fn with_advance_threshold(mut self, threshold: f64) -> Self {
        self.navigation.advance_threshold = threshold;
        self
    }

    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.navigation.edge_policy = policy;
        self
    }

    pub fn with_wheel_step(mut self, step: u16) -> Self {
        self.wheel_step = step;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.settle_delay.is_zero() {
            return Err(ConfigError::NonPositive {
                name: "settle delay",
            });
        }
        if self.wheel_step == 0 {
            return Err(ConfigError::NonPositive { name: "wheel step" });
        }
        let threshold = self.navigation.advance_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Negative {
                name: "advance threshold",
                value: threshold,
            });
        }
        Ok(())
    }
}
