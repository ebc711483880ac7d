use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    /// A widget kind with no registered factory was requested.
    #[error("unknown widget kind: {0}")]
    UnknownWidgetKind(String),

    /// A placement or restore operation ran before a host was attached.
    #[error("dock not attached, call attach() first")]
    NotAttached,

    #[error("layout json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("markers.tab must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: markers.tab must not be empty"
        );
    }

    #[test]
    fn dock_error_display() {
        let err = DockError::UnknownWidgetKind("TERMINAL".into());
        assert_eq!(err.to_string(), "unknown widget kind: TERMINAL");

        let err = DockError::NotAttached;
        assert_eq!(err.to_string(), "dock not attached, call attach() first");

        let err = DockError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn dock_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DockError = config_err.into();
        assert!(matches!(err, DockError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dock_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DockError = json_err.into();
        assert!(matches!(err, DockError::Json(_)));
        assert!(err.to_string().starts_with("layout json error:"));
    }

    #[test]
    fn dock_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockError = io_err.into();
        assert!(matches!(err, DockError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
