pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpStatusSource;
pub use config::{toml_config::TomlConfig, ProbeConfig};
pub use core::probe::Probe;
pub use domain::model::{Field, FieldReading, Reading, Report};
pub use utils::error::{MfcError, Result};
