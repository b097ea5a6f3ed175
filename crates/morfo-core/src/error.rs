// Failure of an external collaborator (spelling oracle, stemmer)

use std::path::PathBuf;

/// A collaborator could not answer.
///
/// The checker never turns this into an accept or a flag decision; it is
/// returned to the caller and the current word or batch is abandoned.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The backing service or data is not available.
    #[error("{resource} is unavailable: {reason}")]
    Unavailable {
        resource: &'static str,
        reason: String,
    },

    /// Reading a backing file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    pub fn unavailable(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            resource,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_names_resource() {
        let e = ResourceError::unavailable("speller", "dictionary not loaded");
        assert_eq!(e.to_string(), "speller is unavailable: dictionary not loaded");
    }

    #[test]
    fn io_message_includes_path() {
        let e = ResourceError::Io {
            path: PathBuf::from("/nonexistent/words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/nonexistent/words.txt"));
        assert!(msg.contains("no such file"));
    }
}
