use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    HttpStatusError { status: u16, endpoint: String },

    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponseError { endpoint: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Lookup task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::ApiError(_) | TrackerError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            TrackerError::MalformedResponseError { .. } => ErrorCategory::Data,
            TrackerError::MissingConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            TrackerError::IoError(_) | TrackerError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路與資料錯誤只記錄，元件仍可互動
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TrackerError::ApiError(_) => {
                "Check the network connection and that the tracking service is reachable"
                    .to_string()
            }
            TrackerError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API key (TRACKER_API_KEY) is valid".to_string()
            }
            TrackerError::HttpStatusError { .. } => {
                "The tracking service rejected the request, try again later".to_string()
            }
            TrackerError::MalformedResponseError { .. } => {
                "The service returned an unexpected payload, check the endpoint configuration"
                    .to_string()
            }
            TrackerError::MissingConfigError { field } => {
                format!("Provide a value for '{}' via flag, config file or environment", field)
            }
            TrackerError::InvalidConfigValueError { field, .. }
            | TrackerError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            TrackerError::IoError(_) => "Check file paths and permissions".to_string(),
            TrackerError::TaskError(_) => "Re-run the command".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the tracking service ({})", self),
            ErrorCategory::Data => format!("Received unexpected data ({})", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
