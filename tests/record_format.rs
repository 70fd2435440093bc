use adiflog::adif::{AdifRecord, format_field};

/// Splits a serialized record back into (name, value) pairs using the
/// declared lengths.
fn split_record(adif: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut rest = adif;
    while rest != "<EOR>" {
        assert!(rest.starts_with('<'), "expected tag at: {rest}");
        let close = rest.find('>').expect("tag close");
        let (name, len) = rest[1..close].split_once(':').expect("name:len tag");
        let len: usize = len.parse().expect("numeric length");
        let value: String = rest[close + 1..].chars().take(len).collect();
        out.push((name.to_string(), value.clone()));
        rest = &rest[close + 1 + value.len() + 1..];
    }
    out
}

#[test]
fn dates_format_to_adif_yyyymmdd() {
    assert_eq!(format_field("QSO_DATE", "2023-09-05"), "20230905");
    assert_eq!(format_field("QSO_DATE", "2023-9-5"), "20230905");
    assert_eq!(format_field("QSO_DATE", "09/05/2023"), "20230905");
    assert_eq!(format_field("QSO_DATE", "9/5/23"), "20230905");
    assert_eq!(format_field("QSO_DATE", "20230905"), "20230905");
    // Incomplete input passes through; shape is not range-checked.
    assert_eq!(format_field("QSO_DATE", "2023-"), "2023-");
    assert_eq!(format_field("QSO_DATE", "99/99/9999"), "99999999");
}

#[test]
fn times_format_to_adif_hhmm() {
    assert_eq!(format_field("TIME_ON", "14:05"), "1405");
    assert_eq!(format_field("TIME_ON", "9:5"), "0905");
    assert_eq!(format_field("TIME_OFF", "0:00"), "0000");
    assert_eq!(format_field("TIME_ON", "1405"), "1405");
    assert_eq!(format_field("TIME_ON", "9:"), "9:");
}

#[test]
fn case_and_whitespace_normalization() {
    assert_eq!(format_field("CALL", " ab3gy/p "), "AB3GY/P");
    assert_eq!(format_field("MODE", "ft8"), "FT8");
    assert_eq!(format_field("BAND", "20M"), "20m");
    assert_eq!(format_field("FREQ", "14250."), "14250");
    assert_eq!(format_field("COMMENT", "  mixed Case kept  "), "mixed Case kept");
    assert_eq!(format_field("X_UNKNOWN", "  as-is  "), "as-is");
    assert_eq!(format_field("COMMENT", "   "), "");
}

#[test]
fn formatting_is_idempotent() {
    let cases = [
        ("CALL", " ab3gy/p "),
        ("QSO_DATE", "09/05/23"),
        ("QSO_DATE", "2023-"),
        ("TIME_ON", "9:5"),
        ("TIME_ON", "9:"),
        ("FREQ", "14250.500"),
        ("FREQ", "14250."),
        ("BAND", "20M"),
        ("MODE", "ft8"),
        ("RST_SENT", " -12 "),
        ("X_UNKNOWN", "anything"),
    ];
    for (name, raw) in cases {
        let once = format_field(name, raw);
        assert_eq!(format_field(name, &once), once, "not idempotent for {name}={raw:?}");
    }
}

#[test]
fn record_serializes_in_insertion_order() {
    let mut record = AdifRecord::new();
    record.set_field("CALL", "AB3GY");
    record.set_field("RST_SENT", "599");
    record.set_field("rst_rcvd", "479");

    assert_eq!(
        record.to_adif(),
        "<CALL:5>AB3GY <RST_SENT:3>599 <RST_RCVD:3>479 <EOR>",
    );
}

#[test]
fn reset_field_keeps_position_and_overwrites_value() {
    let mut record = AdifRecord::new();
    record.set_field("CALL", "AB3GY");
    record.set_field("COMMENT", "first try");
    record.set_field("CALL", "K3MJW");

    assert_eq!(record.get_field("call"), Some("K3MJW"));
    assert_eq!(
        record.to_adif(),
        "<CALL:5>K3MJW <COMMENT:9>first try <EOR>",
    );
}

#[test]
fn empty_record_is_a_bare_terminator() {
    let record = AdifRecord::new();
    assert!(record.is_empty());
    assert_eq!(record.to_adif(), "<EOR>");
}

#[test]
fn round_trip_recovers_fields_and_lengths() {
    let mut record = AdifRecord::new();
    record.set_field("CALL", "AB3GY");
    record.set_field("COMMENT", "worked 20m portable");
    record.set_field("RST_SENT", "599");
    record.set_field("SIG_INFO", "POTA-0001");

    let pairs = split_record(&record.to_adif());
    assert_eq!(
        pairs,
        vec![
            ("CALL".to_string(), "AB3GY".to_string()),
            ("COMMENT".to_string(), "worked 20m portable".to_string()),
            ("RST_SENT".to_string(), "599".to_string()),
            ("SIG_INFO".to_string(), "POTA-0001".to_string()),
        ],
    );
}
