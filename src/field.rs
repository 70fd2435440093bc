//! Entry-field definitions: the fixed QSO field set and user-defined
//! extensions.

use crate::types::FieldKind;

/// Default entry width in characters.
pub const DEFAULT_FIELD_WIDTH: u16 = 12;

/// Maximum number of user-defined fields persisted in configuration.
pub const NUM_USER_FIELDS: usize = 4;

/// Static shape of one entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Title shown next to the field in the UI.
    pub title: String,
    /// ADIF field name, always uppercase.
    pub name: String,
    /// Semantic kind selecting the keystroke validator.
    pub kind: FieldKind,
    /// Entry width in characters, a UI hint only.
    pub width: u16,
    /// Uppercase the value as it is entered.
    pub to_upper: bool,
}

impl FieldSpec {
    /// A new spec with default width; the ADIF name is uppercased.
    pub fn new(title: &str, name: &str, kind: FieldKind) -> Self {
        Self {
            title: title.to_string(),
            name: name.trim().to_ascii_uppercase(),
            kind,
            width: DEFAULT_FIELD_WIDTH,
            to_upper: false,
        }
    }

    /// Overrides the entry width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Uppercases entered text.
    pub fn to_upper(mut self) -> Self {
        self.to_upper = true;
        self
    }
}

/// The fixed entry-field set in its stable record order.
pub fn fixed_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("Band", "BAND", FieldKind::Choice).width(10),
        FieldSpec::new("Callsign", "CALL", FieldKind::Callsign).to_upper(),
        FieldSpec::new("Comment", "COMMENT", FieldKind::FreeText).width(74),
        FieldSpec::new("Frequency (KHz)", "FREQ", FieldKind::Frequency).width(14),
        FieldSpec::new("Mode", "MODE", FieldKind::Choice).width(10),
        FieldSpec::new("Date", "QSO_DATE", FieldKind::Date),
        FieldSpec::new("RST Rcvd", "RST_RCVD", FieldKind::SignalReport),
        FieldSpec::new("RST Sent", "RST_SENT", FieldKind::SignalReport),
        FieldSpec::new("Time", "TIME_ON", FieldKind::Time),
    ]
}

/// A user-defined entry field persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFieldDef {
    /// Title shown in the UI.
    pub title: String,
    /// ADIF field name.
    pub field: String,
    /// Validator kind; user fields default to free text.
    pub kind: FieldKind,
    /// Entry width in characters.
    pub width: u16,
    /// Uppercase entered text.
    pub to_upper: bool,
}

impl UserFieldDef {
    /// A free-text user field with default width.
    pub fn new(title: &str, field: &str) -> Self {
        Self {
            title: title.to_string(),
            field: field.to_string(),
            kind: FieldKind::FreeText,
            width: DEFAULT_FIELD_WIDTH,
            to_upper: false,
        }
    }

    /// Converts the definition to an entry-field spec.
    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec {
            title: self.title.clone(),
            name: self.field.trim().to_ascii_uppercase(),
            kind: self.kind,
            width: self.width,
            to_upper: self.to_upper,
        }
    }
}
