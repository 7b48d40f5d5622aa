use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoltviewError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {0}")]
    Http(reqwest::StatusCode),

    #[error("VoltviewError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for VoltviewError {
    fn from(error: std::io::Error) -> Self {
        VoltviewError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for VoltviewError {
    fn from(error: reqwest::Error) -> Self {
        VoltviewError::Reqwest(Box::new(error))
    }
}
