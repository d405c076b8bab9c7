//! Unified Error Model
//!
//! Pruning itself is total; these errors only surface while loading
//! options or decoding JSON at the edges of the crate.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinedError {
    #[error("JSON/{0}")]
    InvalidJson(String),

    #[error("OPTIONS/{0}")]
    InvalidOptions(String),

    #[error("IO/{0}")]
    Io(String),
}

impl From<serde_json::Error> for DefinedError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

impl From<serde_yaml::Error> for DefinedError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

impl From<std::io::Error> for DefinedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            DefinedError::InvalidJson("eof".to_string()).to_string(),
            "JSON/eof"
        );
        assert_eq!(
            DefinedError::InvalidOptions("bad drop".to_string()).to_string(),
            "OPTIONS/bad drop"
        );
        assert_eq!(DefinedError::Io("missing".to_string()).to_string(), "IO/missing");
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(DefinedError::from(err), DefinedError::InvalidJson(_)));
    }
}
