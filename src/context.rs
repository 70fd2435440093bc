//! Application context: configuration and log store wired together.
//!
//! Replaces process-wide globals with one explicitly constructed object.
//! Initialization order is fixed: configuration is read first, then the
//! log store path is resolved from it. [`AppContext::close`] persists
//! settings on shutdown.

use tracing::debug;

use crate::{
    config::{ConfigError, ConfigStore, load_user_fields},
    form::QsoForm,
    logfile::LogFile,
};

/// Log file path used when configuration does not name one.
pub const DEFAULT_LOG_PATH: &str = "log/adiflog.adi";

const LOG_SECTION: &str = "log";
const LOG_FILE_KEY: &str = "filename";

/// Owns the configuration store and log store for one application run.
#[derive(Debug)]
pub struct AppContext {
    config: ConfigStore,
    log: LogFile,
}

impl AppContext {
    /// Opens the context: reads configuration at `config_path`, then
    /// builds the log store at the configured path (or
    /// [`DEFAULT_LOG_PATH`]). The log file itself is created lazily on
    /// first append.
    pub fn open(config_path: impl Into<std::path::PathBuf>) -> Result<Self, ConfigError> {
        let config = ConfigStore::open(config_path)?;
        let log_path = match config.get(LOG_SECTION, LOG_FILE_KEY) {
            "" => DEFAULT_LOG_PATH,
            configured => configured,
        };
        let log = LogFile::new(log_path);
        debug!(log_path, "application context ready");
        Ok(Self { config, log })
    }

    /// The configuration store.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Mutable access to the configuration store.
    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    /// The log store.
    pub fn log(&self) -> &LogFile {
        &self.log
    }

    /// A new entry form with the configured user-defined fields
    /// appended after the fixed set.
    pub fn new_form(&self) -> QsoForm {
        QsoForm::with_user_fields(&load_user_fields(&self.config))
    }

    /// Shuts the context down, writing configuration back. The log
    /// store holds no open handle and needs no teardown.
    pub fn close(self) -> Result<(), ConfigError> {
        self.config.write()
    }
}
