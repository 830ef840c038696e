use crate::config::{ProbeConfig, DEFAULT_MBAR_DIVISOR};
use crate::utils::error::{MfcError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub device: DeviceConfig,
    pub conversion: Option<ConversionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub mbar_divisor: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MfcError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MFC_HOST})，找不到的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn mbar_divisor(&self) -> f64 {
        self.conversion
            .as_ref()
            .and_then(|c| c.mbar_divisor)
            .unwrap_or(DEFAULT_MBAR_DIVISOR)
    }

    pub fn to_probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            device_url: self.device.url.clone(),
            mbar_divisor: self.mbar_divisor(),
            timeout_seconds: self.device.timeout_seconds,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let config = self.to_probe_config();
        config.validate().map_err(|e| match e {
            MfcError::InvalidConfigValue {
                field,
                value,
                reason,
            } => MfcError::InvalidConfigValue {
                field: toml_key(&field).to_string(),
                value,
                reason,
            },
            other => other,
        })
    }
}

fn toml_key(field: &str) -> &str {
    match field {
        "device_url" => "device.url",
        "timeout_seconds" => "device.timeout_seconds",
        "mbar_divisor" => "conversion.mbar_divisor",
        other => other,
    }
}
