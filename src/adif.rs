//! ADIF field formatting and record assembly.
//!
//! [`format_field`] brings a raw widget value into the canonical wire
//! representation for its field; [`AdifRecord`] collects formatted
//! (name, value) pairs in insertion order and serializes them as one
//! tagged record line:
//!
//! ```text
//! <CALL:5>AB3GY <RST_SENT:3>599 <EOR>
//! ```

use std::fmt::Write as _;
use std::sync::OnceLock;

use hashbrown::HashMap;
use regex::Regex;

/// End-of-record tag closing every serialized record.
pub const EOR: &str = "<EOR>";
/// End-of-header tag closing the log file preamble.
pub const EOH: &str = "<EOH>";

/// Formats a raw field value into its canonical ADIF representation.
///
/// Formatting is idempotent and total: values that are already canonical,
/// incomplete, or unrecognized pass through trimmed. Unknown field names
/// are treated as free text.
pub fn format_field(name: &str, raw: &str) -> String {
    let value = raw.trim();
    match name.trim().to_ascii_uppercase().as_str() {
        "CALL" | "MODE" => value.to_ascii_uppercase(),
        "BAND" => value.to_ascii_lowercase(),
        "QSO_DATE" => format_date(value),
        "TIME_ON" | "TIME_OFF" => format_time(value),
        "FREQ" => value.trim_end_matches('.').to_string(),
        _ => value.to_string(),
    }
}

/// Rewrites a complete `YYYY-M-D` or `M/D/YY[YY]` date as ADIF
/// `YYYYMMDD`. Two-digit years land in 2000-2099. Anything else passes
/// through unchanged, including already-canonical 8-digit dates.
fn format_date(value: &str) -> String {
    static ISO: OnceLock<Regex> = OnceLock::new();
    static US: OnceLock<Regex> = OnceLock::new();

    let iso = ISO.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid date regex")
    });
    if let Some(caps) = iso.captures(value) {
        return format!("{}{:0>2}{:0>2}", &caps[1], &caps[2], &caps[3]);
    }

    let us = US.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{1,4})$").expect("valid date regex")
    });
    if let Some(caps) = us.captures(value) {
        let year = &caps[3];
        let year = if year.len() <= 2 {
            format!("20{year:0>2}")
        } else {
            format!("{year:0>4}")
        };
        return format!("{}{:0>2}{:0>2}", year, &caps[1], &caps[2]);
    }

    value.to_string()
}

/// Rewrites a complete `H:M` time as ADIF `HHMM`; anything else passes
/// through unchanged.
fn format_time(value: &str) -> String {
    static PAT: OnceLock<Regex> = OnceLock::new();
    let pat =
        PAT.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("valid time regex"));
    match pat.captures(value) {
        Some(caps) => format!("{:0>2}{:0>2}", &caps[1], &caps[2]),
        None => value.to_string(),
    }
}

/// One ADIF record under construction: an insertion-ordered set of
/// uppercase field names with their formatted values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdifRecord {
    order: Vec<String>,
    values: HashMap<String, String>,
}

impl AdifRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value. The name is uppercased; the first set of a
    /// name fixes its position in the record, a later set overwrites the
    /// value in place.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let name = name.trim().to_ascii_uppercase();
        if !self.values.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.values.insert(name, value.into());
    }

    /// Returns the value for `name`, if set.
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Iterates over (name, value) pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v.as_str())))
    }

    /// Number of fields set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no field is set. An empty record still serializes to a
    /// structurally valid `<EOR>` line.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Serializes the record as one ADIF line: `<NAME:LEN>value ` per
    /// field followed by the end-of-record tag. `LEN` is the character
    /// count of the value, not counting the separating space.
    pub fn to_adif(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.fields() {
            let _ = write!(out, "<{}:{}>{} ", name, value.chars().count(), value);
        }
        out.push_str(EOR);
        out
    }
}
