use thiserror::Error;

/// Core error types for lmps-lsp.
///
/// Almost everything in the core is infallible by design: a documentation
/// lookup that finds nothing is a normal negative result (`None`), not an
/// error. The variants here cover the few places that can genuinely fail,
/// all of them around loading a documentation dataset.
#[derive(Error, Debug)]
pub enum LmpsError {
    #[error("failed to parse documentation index: {0}")]
    IndexParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, LmpsError>`.
pub type Result<T> = std::result::Result<T, LmpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: LmpsError = io_err.into();
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_index_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: LmpsError = json_err.into();
        assert!(
            error
                .to_string()
                .starts_with("failed to parse documentation index")
        );
    }
}
