use crate::config::toml_config::TomlConfig;
use crate::config::{device_url_for_host, ProbeConfig, DEFAULT_DEVICE_URL, DEFAULT_MBAR_DIVISOR};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mfc-probe")]
#[command(about = "Read flow and pressure from a networked mass flow controller")]
pub struct CliConfig {
    #[arg(long, conflicts_with = "host", help = "Status file URL [default: http://192.168.2.155/mfc.js]")]
    pub url: Option<String>,

    #[arg(long, help = "Device host; reads http://<HOST>/mfc.js")]
    pub host: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Divisor converting the pressure reading to mbar [default: 1.333]")]
    pub mbar_divisor: Option<f64>,

    #[arg(long, help = "Request timeout in seconds (none by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 優先順序：命令列參數 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<ProbeConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Some(toml.to_probe_config())
            }
            None => None,
        };

        let device_url = self
            .url
            .clone()
            .or_else(|| self.host.as_deref().map(device_url_for_host))
            .or_else(|| file_config.as_ref().map(|c| c.device_url.clone()))
            .unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string());

        let mbar_divisor = self
            .mbar_divisor
            .or_else(|| file_config.as_ref().map(|c| c.mbar_divisor))
            .unwrap_or(DEFAULT_MBAR_DIVISOR);

        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| file_config.as_ref().and_then(|c| c.timeout_seconds));

        let config = ProbeConfig {
            device_url,
            mbar_divisor,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }
}
