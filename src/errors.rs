use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DirviewErrorType {
    BackendUnavailable,
    BadStatus,
    MalformedListing,
}

#[derive(Debug)]
pub(crate) struct DirviewError {
    pub(crate) error_type: DirviewErrorType,
    pub(crate) message: String,
}

impl DirviewError {
    pub(crate) fn new(error_type: DirviewErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
        }
    }
}

impl std::fmt::Display for DirviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.error_type, self.message)
    }
}

impl From<reqwest::Error> for DirviewError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            error_type: DirviewErrorType::BackendUnavailable,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DirviewError {
    fn from(error: serde_json::Error) -> Self {
        Self {
            error_type: DirviewErrorType::MalformedListing,
            message: error.to_string(),
        }
    }
}

impl Error for DirviewError {}

pub(crate) type Result<T> = std::result::Result<T, DirviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_malformed_listing() {
        let parse_error = serde_json::from_str::<Vec<serde_json::Value>>("not json").unwrap_err();
        let error = DirviewError::from(parse_error);
        assert_eq!(error.error_type, DirviewErrorType::MalformedListing);
        assert!(error.to_string().starts_with("MalformedListing: "));
    }
}
