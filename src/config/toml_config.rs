use crate::utils::error::{IsbnError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Reject 13-digit input whose last digit disagrees with the recomputed one.
    pub strict_check_digit: bool,
    /// Include the digit string in debug events.
    pub log_inputs: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            strict_check_digit: false,
            log_inputs: true,
        }
    }
}

impl VerifierConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IsbnError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| IsbnError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for VerifierConfig {
    // 兩個布林值的任何組合都合法
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
