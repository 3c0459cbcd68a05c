//! Error type for logging setup

/// Observability error
#[derive(Debug, thiserror::Error, Clone)]
pub enum ObservabilityError {
    /// Bad filter directive or subscriber failure
    #[error("Logging error: {message}")]
    Logging { message: String },

    /// Log file could not be prepared
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ObservabilityError {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Logging { .. } => "logging",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for ObservabilityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ObservabilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = ObservabilityError::logging("bad directive");
        assert_eq!(err.category(), "logging");
        assert_eq!(err.to_string(), "Logging error: bad directive");

        let err: ObservabilityError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.category(), "io");
    }
}
