use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WoordError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("List {id} has {found} subject(s), expected 2")]
    MissingLanguages { id: String, found: usize },

    #[error("Word file unusable: {}: {reason}", path.display())]
    WordFile { path: PathBuf, reason: String },

    #[error("Fetch was cancelled")]
    Cancelled,
}

impl WoordError {
    /// Errors that abort startup instead of shrinking the result.
    pub fn is_fatal(&self) -> bool {
        matches!(self, WoordError::Auth(_) | WoordError::WordFile { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, WoordError::Http(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, WoordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(WoordError::Auth("bad password".into()).is_fatal());
        assert!(
            WoordError::WordFile {
                path: PathBuf::from("words.txt"),
                reason: "empty".into(),
            }
            .is_fatal()
        );
        assert!(
            !WoordError::MissingLanguages {
                id: "42".into(),
                found: 1,
            }
            .is_fatal()
        );
        assert!(!WoordError::Cancelled.is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = WoordError::MissingLanguages {
            id: "42".into(),
            found: 1,
        };
        assert_eq!(err.to_string(), "List 42 has 1 subject(s), expected 2");
        assert!(!err.is_timeout());
    }
}
