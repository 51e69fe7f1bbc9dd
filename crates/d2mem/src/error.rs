use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Failed to open process: {0}")]
    ProcessOpenFailed(String),

    #[error("Failed to read process memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Invalid character metadata: array_ptr={array_ptr:#x}, count={count}")]
    CorruptMetadata { array_ptr: u64, count: i64 },

    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error reports metadata that failed bounds validation
    pub fn is_corrupt_metadata(&self) -> bool {
        matches!(self, Error::CorruptMetadata { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_corrupt_metadata_includes_bad_values() {
        let err = Error::CorruptMetadata {
            array_ptr: 0x1F00,
            count: 48,
        };
        assert!(err.is_corrupt_metadata());
        assert_eq!(
            err.to_string(),
            "Invalid character metadata: array_ptr=0x1f00, count=48"
        );
    }
}
