use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
/// Utility error
pub enum UtilError {
    #[error("read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rename {from} to {to}: {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json parse: {0}")]
    JsonParse(String),

    #[error("date parse: {0}")]
    DateParse(String),

    #[error("pipeline: {0}")]
    Pipeline(String),
}

/// Error that carries the parameters a failing operation was called with,
/// so they end up in the log next to the failure. Do not put confidential
/// values in the parameter list.
#[derive(Error, Debug)]
pub struct ParameterAwareError {
    error_code: String,
    message: String,
    parameters: Vec<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ParameterAwareError {
    pub fn new(
        error_code: impl Into<String>,
        message: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            parameters,
            source: None,
        }
    }

    pub fn with_source(
        error_code: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: source.to_string(),
            parameters,
            source: Some(source),
        }
    }

    /// Error code that distinguishes project specific failures.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

impl fmt::Display for ParameterAwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}\nParameters: [{}]",
            self.error_code,
            self.message,
            self.parameters.join(", ")
        )
    }
}
