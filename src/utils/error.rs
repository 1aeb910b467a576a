use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed API response: {0}")]
    MalformedResponseError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No published Fedora build found for project '{project}'")]
    NoMatchingVersion { project: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
