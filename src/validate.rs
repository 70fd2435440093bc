//! Keystroke validators for entry fields.
//!
//! Each validator is a pure predicate over one attempted [`Edit`]: it
//! decides whether the intermediate value produced by the edit is an
//! acceptable prefix of some complete field value. Only insertions are
//! ever rejected; deletions and programmatic sets always pass so an
//! operator can never be locked out of correcting a field. A rejected
//! edit is simply not applied, nothing is raised.
//!
//! Validators check shape, not meaning: `99/99/9999` is an acceptable
//! date and `999.999999` an acceptable frequency.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{EditKind, FieldKind};

/// One attempted edit to a field value, as reported by the text widget.
#[derive(Debug, Clone, Copy)]
pub struct Edit<'a> {
    /// Kind of change being attempted.
    pub kind: EditKind,
    /// Character index where the change begins.
    pub at: usize,
    /// The text being inserted or deleted.
    pub text: &'a str,
    /// The full value the field will have if the change is allowed.
    pub resulting: &'a str,
}

impl<'a> Edit<'a> {
    /// An insertion of `text` at character index `at`.
    pub fn insert(at: usize, text: &'a str, resulting: &'a str) -> Self {
        Self {
            kind: EditKind::Insert,
            at,
            text,
            resulting,
        }
    }

    /// A deletion of `text` starting at character index `at`.
    pub fn delete(at: usize, text: &'a str, resulting: &'a str) -> Self {
        Self {
            kind: EditKind::Delete,
            at,
            text,
            resulting,
        }
    }

    /// A programmatic set or any change that is neither insert nor delete.
    pub fn other(resulting: &'a str) -> Self {
        Self {
            kind: EditKind::Other,
            at: 0,
            text: "",
            resulting,
        }
    }
}

/// Predicate deciding whether an edit is acceptable for a field.
pub type Validator = fn(&Edit<'_>) -> bool;

/// Returns the validator used for fields of the given kind.
pub fn dispatch(kind: FieldKind) -> Validator {
    match kind {
        FieldKind::Callsign => callsign,
        FieldKind::Date => date,
        FieldKind::Time => time,
        FieldKind::Frequency => frequency,
        FieldKind::SignalReport => rst,
        FieldKind::Power => power,
        FieldKind::State => state,
        FieldKind::SigInfo => sig_info,
        FieldKind::FreeText | FieldKind::Choice => text,
    }
}

fn matched(cell: &'static OnceLock<Regex>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).expect("valid validator regex"))
        .is_match(value)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Allows only letters, digits, and `/` in callsigns.
///
/// Does not attempt to validate actual callsign formats.
pub fn callsign(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(&PAT, r"^[A-Za-z0-9/]+$", edit.text)
}

/// Allows prefixes of `YYYY-MM-DD`, `MM/DD/YY`, or `MM/DD/YYYY`.
///
/// Months, days, and years are not range-checked.
pub fn date(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(
        &PAT,
        r"^(?:\d{1,4}-?|\d{4}-\d{1,2}|\d{4}-\d{2}-?|\d{4}-\d{2}-\d{1,2}|\d{1,2}/?|\d{1,2}/\d{1,2}/?|\d{1,2}/\d{1,2}/\d{1,4})$",
        edit.resulting,
    )
}

/// Allows prefixes of `HH:MM`.
pub fn time(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(&PAT, r"^(?:\d{1,2}|\d{1,2}:\d{0,2})$", edit.resulting)
}

/// Allows a numeric frequency of at most 10 characters with one decimal
/// point.
pub fn frequency(edit: &Edit<'_>) -> bool {
    static FRACTION: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    if edit.resulting.chars().count() > 10 {
        return false; // max 10 characters
    }
    if is_digits(edit.text) {
        return true;
    }
    if edit.resulting.matches('.').count() > 1 {
        return false; // only one decimal point allowed
    }
    matched(&FRACTION, r"^\d*\.\d*$", edit.text)
}

/// Allows a TX power of up to 4 digits.
pub fn power(edit: &Edit<'_>) -> bool {
    if edit.kind != EditKind::Insert {
        return true;
    }
    if edit.resulting.chars().count() > 4 {
        return false;
    }
    is_digits(edit.text)
}

/// Allows RST triples and signed digital-mode SNR reports.
///
/// Readability and strength digits are 1-5, the tone digit 1-9; an SNR
/// is `+` or `-` followed by up to two digits.
pub fn rst(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(
        &PAT,
        r"^(?:[1-5]|[1-5][1-9]|[1-5][1-9][1-9]|[+-]\d{0,2})$",
        edit.resulting,
    )
}

/// Allows any combination of letters, digits, and a dash.
///
/// Character order is not validated.
pub fn sig_info(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(&PAT, r"^[A-Za-z0-9-]+$", edit.text)
}

/// Allows 1-3 letters or numbers, the shape of a primary administrative
/// subdivision enumeration.
pub fn state(edit: &Edit<'_>) -> bool {
    static PAT: OnceLock<Regex> = OnceLock::new();
    if edit.kind != EditKind::Insert {
        return true;
    }
    matched(&PAT, r"^[A-Za-z0-9]{1,3}$", edit.resulting)
}

/// Allows general text, rejecting the characters that would corrupt a
/// line-based ADIF record: double quote and backslash.
pub fn text(edit: &Edit<'_>) -> bool {
    if edit.kind != EditKind::Insert {
        return true;
    }
    !edit.text.contains('"') && !edit.text.contains('\\')
}
