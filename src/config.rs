//! Sectioned configuration store.
//!
//! Persists application settings and user-defined field definitions
//! across sessions as a TOML file of `[section]` tables with string
//! values. Lookups never fail: an absent section or key reads as the
//! empty string.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::{DEFAULT_FIELD_WIDTH, NUM_USER_FIELDS, UserFieldDef};
use crate::types::FieldKind;

type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Errors reported by [`ConfigStore`].
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    Io {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file contents were not valid configuration TOML.
    Parse {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying parse failure.
        source: toml::de::Error,
    },
    /// Serializing the configuration failed.
    Serialize {
        /// Underlying serialization failure.
        source: toml::ser::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "config i/o error on {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "config parse error in {}: {source}", path.display())
            }
            ConfigError::Serialize { source } => {
                write!(f, "config serialize error: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize { source } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct ConfigDoc {
    sections: Sections,
}

/// Section → key → value configuration store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    doc: ConfigDoc,
}

impl ConfigStore {
    /// Opens the store at `path`, reading it if the file exists. A
    /// missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut store = Self {
            path: path.into(),
            doc: ConfigDoc::default(),
        };
        store.read()?;
        Ok(store)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the backing file, replacing in-memory state. A missing
    /// file leaves the store empty.
    pub fn read(&mut self) -> Result<(), ConfigError> {
        if !self.path.is_file() {
            debug!("no config file at {}, starting empty", self.path.display());
            self.doc = ConfigDoc::default();
            return Ok(());
        }
        let text = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.doc = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Writes the current state back to the backing file.
    pub fn write(&self) -> Result<(), ConfigError> {
        let text =
            toml::to_string(&self.doc).map_err(|source| ConfigError::Serialize { source })?;
        std::fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Value for `key` in `section`; empty string when absent.
    pub fn get(&self, section: &str, key: &str) -> &str {
        self.doc
            .sections
            .get(section)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Sets `key` in `section`, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.doc
            .sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Ensures `section` exists.
    pub fn add_section(&mut self, section: &str) {
        self.doc.sections.entry(section.to_string()).or_default();
    }
}

fn user_section(slot: usize) -> String {
    format!("user_field_{slot}")
}

/// Loads user field definitions from `[user_field_1]` through
/// `[user_field_4]`. Slots without an ADIF field name are skipped;
/// unknown kinds and widths fall back to free text and the default
/// width.
pub fn load_user_fields(config: &ConfigStore) -> Vec<UserFieldDef> {
    let mut out = Vec::new();
    for slot in 1..=NUM_USER_FIELDS {
        let section = user_section(slot);
        let field = config.get(&section, "field").trim();
        if field.is_empty() {
            continue;
        }

        let kind = match config.get(&section, "kind") {
            "" => FieldKind::FreeText,
            name => toml::Value::from(name)
                .try_into()
                .unwrap_or(FieldKind::FreeText),
        };
        let width = config
            .get(&section, "width")
            .parse()
            .unwrap_or(DEFAULT_FIELD_WIDTH);
        let to_upper = matches!(config.get(&section, "upper"), "true" | "1");

        out.push(UserFieldDef {
            title: config.get(&section, "title").to_string(),
            field: field.to_string(),
            kind,
            width,
            to_upper,
        });
    }
    out
}

/// Writes user field definitions back to their numbered sections. At
/// most [`NUM_USER_FIELDS`] definitions are stored.
pub fn store_user_fields(config: &mut ConfigStore, defs: &[UserFieldDef]) {
    for (idx, def) in defs.iter().take(NUM_USER_FIELDS).enumerate() {
        let section = user_section(idx + 1);
        config.set(&section, "title", def.title.as_str());
        config.set(&section, "field", def.field.as_str());
        if let Ok(toml::Value::String(kind)) = toml::Value::try_from(def.kind) {
            config.set(&section, "kind", kind);
        }
        config.set(&section, "width", def.width.to_string());
        config.set(&section, "upper", if def.to_upper { "true" } else { "false" });
    }
}
