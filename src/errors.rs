//! Error types for ontoport

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to fetch resource: {0}")]
    Fetch(String),

    #[error("Subject is not a member of the ontology: {0}")]
    NotAMember(String),

    #[error("No local id registered for subject: {0}")]
    NotRegistered(String),

    #[error("Invalid ontology root URL: {0}")]
    InvalidRoot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = ExportError::Fetch("https://x.test/onto: 404 Not Found".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Failed to fetch resource"));
        assert!(display.contains("404 Not Found"));
    }

    #[test]
    fn test_not_a_member_error_display() {
        let err = ExportError::NotAMember("https://other.test/Thing".to_string());
        let display = format!("{}", err);
        assert!(display.contains("not a member"));
        assert!(display.contains("https://other.test/Thing"));
    }

    #[test]
    fn test_not_registered_error_display() {
        let err = ExportError::NotRegistered("https://x.test/onto/Person".to_string());
        let display = format!("{}", err);
        assert!(display.contains("No local id registered"));
        assert!(display.contains("Person"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExportError = io_err.into();

        match err {
            ExportError::Io(_) => {} // Success
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json = "{invalid json}";
        let result: std::result::Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str(json);
        let json_err = result.unwrap_err();

        let err: ExportError = json_err.into();
        match err {
            ExportError::Json(_) => {} // Success
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ExportError>();
        assert_sync::<ExportError>();
    }
}
