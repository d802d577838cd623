//! Errors for a single file-creation run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::services::clipboard::ClipboardError;

/// Everything that can stop a run, one variant per step that can fail.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("clipboard is empty, nothing to use as a title")]
    EmptyClipboard,

    #[error("could not read clipboard")]
    ClipboardRead(#[source] ClipboardError),

    #[error("could not determine existing numbering in {}", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    /// The OS rejected the path built from the name argument.
    #[error("cannot create {}: path is not valid here", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was written but the clipboard could not be updated.
    #[error("created {} but could not update clipboard", path.display())]
    ClipboardWrite {
        path: PathBuf,
        #[source]
        source: ClipboardError,
    },
}

impl CreateError {
    /// Classify a failed write of `path`.
    pub fn from_write(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidFilename
            | io::ErrorKind::NotFound => {
                Self::InvalidPath { path, source }
            }
            _ => Self::Write { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_write_classifies_kinds() {
        let path = PathBuf::from("001-x.mdx");

        let err = CreateError::from_write(path.clone(), io::ErrorKind::AlreadyExists.into());
        assert!(matches!(err, CreateError::AlreadyExists { .. }));

        let err = CreateError::from_write(path.clone(), io::ErrorKind::InvalidInput.into());
        assert!(matches!(err, CreateError::InvalidPath { .. }));

        let err = CreateError::from_write(path.clone(), io::ErrorKind::InvalidFilename.into());
        assert!(matches!(err, CreateError::InvalidPath { .. }));

        let err = CreateError::from_write(path, io::ErrorKind::PermissionDenied.into());
        assert!(matches!(err, CreateError::Write { .. }));
    }

    #[test]
    fn test_messages_name_the_step() {
        let err = CreateError::Scan {
            dir: PathBuf::from("/nope"),
            source: io::ErrorKind::NotFound.into(),
        };
        assert_eq!(err.to_string(), "could not determine existing numbering in /nope");

        let err = CreateError::AlreadyExists { path: PathBuf::from("002-a.mdx") };
        assert_eq!(err.to_string(), "002-a.mdx already exists (use --force to overwrite)");
    }
}
