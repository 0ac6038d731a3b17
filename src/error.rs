use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("XML parsing error: {0}")]
    XmlError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<quick_xml::DeError> for DartError {
    fn from(error: quick_xml::DeError) -> Self {
        DartError::XmlError(error.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for DartError {
    fn from(error: serde_urlencoded::ser::Error) -> Self {
        DartError::InvalidResponse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DartError>;
