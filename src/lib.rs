//! Validated QSO entry logging with append-only ADIF output.
//!
//! The crate is the headless core of a contact-entry application: a UI
//! layer binds text widgets to a [`form::QsoForm`], routes keystrokes
//! through the per-field validators, and on a "log" action the form
//! formats its values into one ADIF record and appends it to a
//! [`logfile::LogFile`].
//!
//! # Examples
//!
//! Keystroke validation and record assembly:
//! ```
//! use adiflog::form::QsoForm;
//!
//! let mut form = QsoForm::new();
//! let call = form.field_mut("CALL").expect("CALL field");
//! assert!(call.insert(0, "ab3gy"));
//! assert!(!call.insert(5, "!"));
//! assert_eq!(call.value(), "AB3GY");
//!
//! form.set_value("RST_SENT", "599");
//! assert_eq!(
//!     form.build_record().to_adif(),
//!     "<CALL:5>AB3GY <RST_SENT:3>599 <EOR>",
//! );
//! ```
//!
//! Appending to the log store:
//! ```no_run
//! use adiflog::{form::QsoForm, logfile::LogFile};
//!
//! let store = LogFile::new("log/adiflog.adi");
//! let mut form = QsoForm::new();
//! form.set_value("CALL", "K3MJW");
//! form.log_to(&store).expect("append");
//! ```
#![deny(missing_docs)]

/// ADIF field formatting and record assembly.
pub mod adif;
/// Frequency-to-band lookup and default choice lists.
pub mod band;
/// Line-oriented choice lists for combo population.
pub mod choices;
/// Sectioned configuration store.
pub mod config;
/// Application context owning config and log store.
pub mod context;
/// Entry-field definitions, fixed and user-defined.
pub mod field;
/// In-memory QSO entry form.
pub mod form;
/// Append-only ADIF log file store.
pub mod logfile;
/// Shared field and edit vocabulary.
pub mod types;
/// Keystroke validators for entry fields.
pub mod validate;
