use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{service} API {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl AppError {
    pub fn status(service: &'static str, status: u16) -> Self {
        AppError::UpstreamStatus { service, status }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message() {
        let err = AppError::status("GitHub", 403);
        assert_eq!(err.to_string(), "GitHub API 403");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let parse_err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(err.to_string().starts_with("Decode error:"));
    }
}
