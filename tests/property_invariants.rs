use proptest::prelude::*;

use adiflog::{
    adif::{AdifRecord, format_field},
    field::FieldSpec,
    form::FormField,
    types::FieldKind,
    validate::{self, Edit},
};

const KINDS: &[FieldKind] = &[
    FieldKind::Callsign,
    FieldKind::Date,
    FieldKind::Time,
    FieldKind::Frequency,
    FieldKind::SignalReport,
    FieldKind::Power,
    FieldKind::State,
    FieldKind::SigInfo,
    FieldKind::FreeText,
    FieldKind::Choice,
];

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    (0..KINDS.len()).prop_map(|idx| KINDS[idx])
}

proptest! {
    #[test]
    fn deletions_and_sets_always_pass(kind in kind_strategy(), value in ".{0,16}") {
        let validator = validate::dispatch(kind);
        prop_assert!(validator(&Edit::delete(0, &value, "")));
        prop_assert!(validator(&Edit::other(&value)));
    }

    #[test]
    fn rejected_inserts_leave_the_field_unchanged(
        kind in kind_strategy(),
        base in "[0-9]{0,4}",
        at in 0usize..8,
        text in ".{0,4}",
    ) {
        let mut field = FormField::new(FieldSpec::new("Field", "F1", kind));
        field.set_value(&base);
        let before = field.value().to_string();

        if !field.insert(at, &text) {
            prop_assert_eq!(field.value(), before);
        }
    }

    #[test]
    fn formatting_is_idempotent_for_any_input(
        name in "[A-Z][A-Z_]{0,9}",
        value in ".{0,20}",
    ) {
        let once = format_field(&name, &value);
        let twice = format_field(&name, &once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn serialized_records_round_trip(
        pairs in prop::collection::vec(("[A-Z][A-Z_]{0,8}", "[ -~]{0,12}"), 0..6),
    ) {
        let mut record = AdifRecord::new();
        // Duplicate names keep their first position, last value.
        let mut expected: Vec<(String, String)> = Vec::new();
        for (name, value) in &pairs {
            record.set_field(name, value.clone());
            match expected.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.clone(),
                None => expected.push((name.clone(), value.clone())),
            }
        }

        let adif = record.to_adif();
        prop_assert!(adif.ends_with("<EOR>"));

        let mut rest = adif.as_str();
        let mut recovered = Vec::new();
        while rest != "<EOR>" {
            prop_assert!(rest.starts_with('<'));
            let close = rest.find('>').expect("tag close");
            let (name, len) = rest[1..close].split_once(':').expect("name:len");
            let len: usize = len.parse().expect("numeric length");
            let value: String = rest[close + 1..].chars().take(len).collect();
            recovered.push((name.to_string(), value.clone()));
            rest = &rest[close + 1 + value.len() + 1..];
        }
        prop_assert_eq!(recovered, expected);
    }
}
