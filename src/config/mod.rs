#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_DEVICE_URL: &str = "http://192.168.2.155/mfc.js";
pub const DEFAULT_MBAR_DIVISOR: f64 = 1.333;

/// 由主機名稱組出狀態檔 URL
pub fn device_url_for_host(host: &str) -> String {
    format!("http://{}/mfc.js", host.trim_end_matches('/'))
}

/// 合併 CLI 與 TOML 之後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub device_url: String,
    pub mbar_divisor: f64,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            device_url: DEFAULT_DEVICE_URL.to_string(),
            mbar_divisor: DEFAULT_MBAR_DIVISOR,
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for ProbeConfig {
    fn device_url(&self) -> &str {
        &self.device_url
    }

    fn mbar_divisor(&self) -> f64 {
        self.mbar_divisor
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("device_url", &self.device_url)?;
        validation::validate_divisor("mbar_divisor", self.mbar_divisor)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
