use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid path goes beyond root directory.")]
    RootPath,
    #[error("cannot open directory {}: {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read entry in {}: {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this failure. A short-format stat failure
    /// exits with the byte value of `-1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Stat { .. } => 255,
            _ => 1,
        }
    }

    /// The line printed to stderr before exiting.
    pub fn diagnostic(&self) -> String {
        match self {
            Error::RootPath => format!("Error: {self}"),
            _ => format!("dirls: {self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn stat_failure_exits_with_255() {
        let err = Error::Stat {
            path: PathBuf::from("/tmp/missing"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 255);
    }

    #[test]
    fn fatal_setup_failures_exit_with_1() {
        let not_found = || io::Error::from(io::ErrorKind::NotFound);
        let errors = [
            Error::RootPath,
            Error::Resolve { path: "x".into(), source: not_found() },
            Error::OpenDir { path: "x".into(), source: not_found() },
            Error::ReadEntry { path: "x".into(), source: not_found() },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn root_rejection_message() {
        assert_eq!(
            Error::RootPath.diagnostic(),
            "Error: Invalid path goes beyond root directory."
        );
    }

    #[test]
    fn other_diagnostics_name_the_path() {
        let err = Error::OpenDir {
            path: PathBuf::from("/tmp/file.txt"),
            source: io::Error::from_raw_os_error(libc::ENOTDIR),
        };
        let line = err.diagnostic();
        assert!(line.starts_with("dirls: cannot open directory /tmp/file.txt: "));
    }
}
