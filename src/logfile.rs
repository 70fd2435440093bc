//! Append-only ADIF log file store.
//!
//! [`LogFile`] appends one serialized record per line to a text log,
//! creating the file with an ADIF header on first use. Every append is a
//! scoped open/write/close; no handle is held between calls. The store
//! never rewrites or reorders existing lines.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::adif::EOH;

/// Errors reported by [`LogFile`]. All of them are recoverable; a failed
/// append leaves the store and the caller in a usable state.
#[derive(Debug)]
pub enum LogError {
    /// No log file path has been supplied.
    MissingPath,
    /// Creating the file with its header failed; nothing was written.
    Create {
        /// Path of the store that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Appending a record failed.
    Write {
        /// Path of the store that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::MissingPath => write!(f, "no log file path specified"),
            LogError::Create { path, source } => {
                write!(f, "error creating {}: {source}", path.display())
            }
            LogError::Write { path, source } => {
                write!(f, "error writing {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::MissingPath => None,
            LogError::Create { source, .. } | LogError::Write { source, .. } => Some(source),
        }
    }
}

/// Result alias for log store operations.
pub type LogResult<T> = Result<T, LogError>;

/// Append-only ADIF log store backed by a plain text file.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: Option<PathBuf>,
    program: String,
}

impl LogFile {
    /// A store at `path`, identifying the current program in the header.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_program(path, current_program())
    }

    /// A store at `path` with an explicit program name for the header.
    pub fn with_program(path: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            program: program.into(),
        }
    }

    /// A store with no path yet; [`LogFile::append`] fails with
    /// [`LogError::MissingPath`] until one is supplied.
    pub fn unconfigured() -> Self {
        Self {
            path: None,
            program: current_program(),
        }
    }

    /// Supplies or replaces the store path.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// The configured store path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends one ADIF record as a single line.
    ///
    /// If the backing file does not exist it is created first with the
    /// two-line header `ADIF log file created by <program>` + `<EOH>`.
    /// The record plus its trailing newline is written in one scoped
    /// open/write/close; on failure nothing partial is left behind and
    /// the caller may retry.
    pub fn append(&self, record: &str) -> LogResult<()> {
        let Some(path) = self.path.as_deref() else {
            warn!("log append dropped: no filename specified");
            return Err(LogError::MissingPath);
        };

        if !path.is_file() {
            self.create(path)?;
        }

        let line = format!("{record}\n");
        OpenOptions::new()
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|source| {
                warn!("error writing {}: {source}", path.display());
                LogError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })
    }

    fn create(&self, path: &Path) -> LogResult<()> {
        let header = format!("ADIF log file created by {}\n{EOH}\n", self.program);
        std::fs::write(path, header).map_err(|source| {
            warn!("error creating {}: {source}", path.display());
            LogError::Create {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("created log file {}", path.display());
        Ok(())
    }
}

/// Basename of the running executable, used in the log file header.
fn current_program() -> String {
    let arg0 = std::env::args_os().next().unwrap_or_default();
    Path::new(&arg0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
