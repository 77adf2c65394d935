//! Picture resolution errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ContainerId;

/// Convenience alias for picture resolution results.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by `ImageResolver`.
///
/// A missing picture is never an error: the resolver always hands back a
/// best-effort path. These cover broken installs only.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The container's packaged image directory does not exist.
    #[error("Can not find directory {}, the game definition may be broken", path.display())]
    BrokenContainer { path: PathBuf },

    /// The card's container is not installed.
    #[error("{container_id} is not installed")]
    UnknownContainer { container_id: ContainerId },

    /// Listing an image directory failed.
    #[error("Failed to list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_container_message_names_path() {
        let err = ResolveError::BrokenContainer {
            path: PathBuf::from("/games/demo/sets/core/cards"),
        };
        assert!(err.to_string().contains("/games/demo/sets/core/cards"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = ResolveError::Io {
            path: PathBuf::from("cards"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to list cards"));
    }
}
