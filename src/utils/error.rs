use thiserror::Error;

#[derive(Error, Debug)]
pub enum MfcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 設定錯誤，使用者可自行修正
    Config,
    /// 裝置無法連線
    Transport,
    /// 程式內部問題
    Internal,
}

impl MfcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MfcError::ConfigParse { .. } | MfcError::InvalidConfigValue { .. } => {
                ErrorSeverity::Config
            }
            MfcError::Http(_) => ErrorSeverity::Transport,
            MfcError::Io(_) | MfcError::Regex(_) => ErrorSeverity::Internal,
        }
    }

    /// 程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Config => 1,
            ErrorSeverity::Transport => 2,
            ErrorSeverity::Internal => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MfcError::Http(e) if e.is_timeout() => "The device did not answer in time".to_string(),
            MfcError::Http(e) if e.is_connect() => "Could not connect to the device".to_string(),
            MfcError::Http(_) => "The HTTP request to the device failed".to_string(),
            MfcError::Io(e) => format!("File access failed: {}", e),
            MfcError::Regex(_) => "Internal pattern error".to_string(),
            MfcError::ConfigParse { message } => format!("Could not read configuration: {}", message),
            MfcError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MfcError::Http(_) => {
                "Check that the controller is powered on and reachable, or pass --url / --host"
            }
            MfcError::Io(_) => "Check that the configuration file exists and is readable",
            MfcError::Regex(_) => "Please report this as a bug",
            MfcError::ConfigParse { .. } => "Check the TOML syntax of the configuration file",
            MfcError::InvalidConfigValue { .. } => "Fix the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, MfcError>;
