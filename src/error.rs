//! Error taxonomy for tree traversal.
//!
//! Root-level failures are typed so callers can tell a missing path from a
//! permission problem without string matching. Binaries wrap these in
//! `anyhow` for display.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify an I/O failure against the path it occurred on.
    ///
    /// NotFound and PermissionDenied get their own variants (the two kinds
    /// the traversal contract distinguishes); everything else is carried as
    /// `Io` with the original error attached.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        match TreeError::from_io(Path::new("/missing"), err) {
            TreeError::NotFound(p) => assert_eq!(p, PathBuf::from("/missing")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "locked");
        match TreeError::from_io(Path::new("/locked"), err) {
            TreeError::PermissionDenied(p) => assert_eq!(p, PathBuf::from("/locked")),
            other => panic!("expected PermissionDenied, got {other:?}"),
        }
    }

    #[test]
    fn test_from_io_other_kinds_stay_io() {
        let err = io::Error::new(io::ErrorKind::InvalidData, "bad");
        match TreeError::from_io(Path::new("/odd"), err) {
            TreeError::Io { path, .. } => assert_eq!(path, PathBuf::from("/odd")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_display_names_the_path() {
        let err = TreeError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "path not found: /missing");
    }
}
