//! In-memory QSO entry form.
//!
//! [`QsoForm`] is the headless model a UI layer binds its widgets to: it
//! owns the current field values, gates edits through the per-kind
//! validators, and on a "log" action formats, assembles, and appends one
//! ADIF record.

use chrono::Utc;
use hashbrown::HashMap;
use tracing::debug;

use crate::{
    adif::{AdifRecord, format_field},
    band::{NO_BAND, freq2band},
    field::{FieldSpec, UserFieldDef, fixed_fields},
    logfile::{LogFile, LogResult},
    validate::{self, Edit, Validator},
};

/// One entry field bound to its validator, owning the in-progress value.
#[derive(Debug, Clone)]
pub struct FormField {
    spec: FieldSpec,
    value: String,
    validator: Validator,
}

impl FormField {
    /// A new empty field for `spec`.
    pub fn new(spec: FieldSpec) -> Self {
        let validator = validate::dispatch(spec.kind);
        Self {
            spec,
            value: String::new(),
            validator,
        }
    }

    /// The field's static shape.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The ADIF field name.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// The current in-progress value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Attempts to insert `text` at character position `at`, running the
    /// field's validator on the resulting value. Returns whether the
    /// edit was applied; a rejected edit leaves the value untouched.
    pub fn insert(&mut self, at: usize, text: &str) -> bool {
        let at = at.min(self.value.chars().count());
        let mut resulting = self.value.clone();
        resulting.insert_str(char_to_byte(&self.value, at), text);

        let edit = Edit::insert(at, text, &resulting);
        if !(self.validator)(&edit) {
            return false;
        }
        self.value = if self.spec.to_upper {
            resulting.to_uppercase()
        } else {
            resulting
        };
        true
    }

    /// Deletes up to `len` characters starting at character position
    /// `at`. Deletions always pass validation.
    pub fn delete(&mut self, at: usize, len: usize) -> bool {
        let total = self.value.chars().count();
        let at = at.min(total);
        let end = at.saturating_add(len).min(total);
        let start_b = char_to_byte(&self.value, at);
        let end_b = char_to_byte(&self.value, end);

        let removed = self.value[start_b..end_b].to_string();
        let mut resulting = self.value.clone();
        resulting.replace_range(start_b..end_b, "");

        let edit = Edit::delete(at, &removed, &resulting);
        if !(self.validator)(&edit) {
            return false;
        }
        self.value = resulting;
        true
    }

    /// Sets the value directly, bypassing validation, like a
    /// programmatic widget set.
    pub fn set_value(&mut self, value: &str) {
        self.value = if self.spec.to_upper {
            value.to_uppercase()
        } else {
            value.to_string()
        };
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

fn char_to_byte(s: &str, at: usize) -> usize {
    s.char_indices().nth(at).map(|(i, _)| i).unwrap_or(s.len())
}

/// The QSO entry form: fixed fields first in their stable order, then
/// user-defined fields in configured order.
#[derive(Debug, Clone)]
pub struct QsoForm {
    fields: Vec<FormField>,
    index: HashMap<String, usize>,
}

impl QsoForm {
    /// A form with the fixed field set only.
    pub fn new() -> Self {
        Self::with_user_fields(&[])
    }

    /// A form with the fixed field set followed by `user` fields.
    /// Definitions without an ADIF field name are skipped, as are
    /// duplicates of an existing name.
    pub fn with_user_fields(user: &[UserFieldDef]) -> Self {
        let mut form = Self {
            fields: Vec::new(),
            index: HashMap::new(),
        };
        for spec in fixed_fields() {
            form.push_field(spec);
        }
        for def in user {
            form.push_field(def.to_spec());
        }
        form
    }

    fn push_field(&mut self, spec: FieldSpec) {
        if spec.name.is_empty() || self.index.contains_key(&spec.name) {
            return;
        }
        self.index.insert(spec.name.clone(), self.fields.len());
        self.fields.push(FormField::new(spec));
    }

    /// Looks up a field by ADIF name, case-insensitive.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        let idx = *self.index.get(&name.trim().to_ascii_uppercase())?;
        self.fields.get(idx)
    }

    /// Mutable field lookup by ADIF name, case-insensitive.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        let idx = *self.index.get(&name.trim().to_ascii_uppercase())?;
        self.fields.get_mut(idx)
    }

    /// Iterates over all fields in record order.
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Current value of the named field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(FormField::value)
    }

    /// Sets the named field without validation. Returns whether the
    /// field exists.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Clears every field value.
    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Stamps QSO_DATE and TIME_ON with the current UTC date and time.
    pub fn set_now(&mut self) {
        let now = Utc::now();
        self.set_value("QSO_DATE", &now.format("%Y-%m-%d").to_string());
        self.set_value("TIME_ON", &now.format("%H:%M").to_string());
    }

    /// Sets BAND from the entered frequency: the kHz value is converted
    /// to MHz and looked up; a frequency outside every band clears BAND.
    /// An empty or unparseable frequency leaves BAND untouched.
    pub fn band_from_freq(&mut self) {
        let Some(freq_khz) = self.value("FREQ") else {
            return;
        };
        let Ok(khz) = freq_khz.parse::<f64>() else {
            return;
        };

        let band = freq2band(khz / 1000.0);
        if band == NO_BAND {
            if let Some(field) = self.field_mut("BAND") {
                field.clear();
            }
        } else {
            self.set_value("BAND", band);
        }
    }

    /// Builds one record from the current values: each value is
    /// formatted, and only fields with a non-empty name and non-empty
    /// formatted value are included, in field order.
    pub fn build_record(&self) -> AdifRecord {
        let mut record = AdifRecord::new();
        for field in &self.fields {
            let value = format_field(field.name(), field.value());
            if !field.name().is_empty() && !value.is_empty() {
                record.set_field(field.name(), value);
            }
        }
        record
    }

    /// Builds the current record and appends it to `store`. An empty
    /// record is still written as a bare end-of-record line.
    pub fn log_to(&self, store: &LogFile) -> LogResult<()> {
        let record = self.build_record();
        debug!(fields = record.len(), "logging qso record");
        store.append(&record.to_adif())
    }
}

impl Default for QsoForm {
    fn default() -> Self {
        Self::new()
    }
}
