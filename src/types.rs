//! Shared field and edit vocabulary.

use serde::{Deserialize, Serialize};

/// Semantic type of an entry field, selecting its keystroke validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Station callsign.
    Callsign,
    /// QSO date.
    Date,
    /// QSO time.
    Time,
    /// Frequency in kHz as typed by the operator.
    Frequency,
    /// RST triple or signed digital-mode SNR.
    SignalReport,
    /// Transmit power in watts.
    Power,
    /// Primary administrative subdivision (1-3 alphanumerics).
    State,
    /// Special-interest-group info (letters, digits, dash).
    SigInfo,
    /// General free text.
    FreeText,
    /// Value picked from a fixed choice list.
    Choice,
}

/// What kind of widget edit is being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Text inserted at a position.
    Insert,
    /// Text deleted at a position.
    Delete,
    /// Any other change, such as a programmatic set.
    Other,
}
