use std::fs;

use tempfile::TempDir;

use adiflog::logfile::{LogError, LogFile};

#[test]
fn first_append_creates_header_then_record() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("log.adi");

    let store = LogFile::with_program(&path, "adiflog");
    store
        .append("<CALL:5>AB3GY <RST_SENT:3>599 <EOR>")
        .expect("append");

    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(
        contents,
        "ADIF log file created by adiflog\n<EOH>\n<CALL:5>AB3GY <RST_SENT:3>599 <EOR>\n",
    );
}

#[test]
fn append_twice_adds_one_line_each_and_keeps_header() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("log.adi");
    let store = LogFile::with_program(&path, "adiflog");

    store.append("<CALL:5>AB3GY <EOR>").expect("append 1");
    let after_first = fs::read_to_string(&path).expect("read log");

    store.append("<CALL:5>K3MJW <EOR>").expect("append 2");
    let after_second = fs::read_to_string(&path).expect("read log");

    assert!(after_second.starts_with(&after_first));
    assert_eq!(after_second.lines().count(), after_first.lines().count() + 1);
    assert_eq!(after_second.lines().last(), Some("<CALL:5>K3MJW <EOR>"));
}

#[test]
fn existing_store_is_never_rewritten() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("log.adi");
    // A store created by some earlier run, with its own header.
    fs::write(&path, "ADIF log file created by elsewhere\n<EOH>\n").expect("seed");

    let store = LogFile::with_program(&path, "adiflog");
    store.append("<CALL:4>W3GH <EOR>").expect("append");

    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(
        contents,
        "ADIF log file created by elsewhere\n<EOH>\n<CALL:4>W3GH <EOR>\n",
    );
}

#[test]
fn create_failure_leaves_store_absent_and_is_retryable() {
    let tmp = TempDir::new().expect("tmp");
    let dir = tmp.path().join("missing");
    let path = dir.join("log.adi");
    let store = LogFile::with_program(&path, "adiflog");

    let err = store.append("<EOR>").expect_err("no parent dir");
    assert!(matches!(err, LogError::Create { .. }), "got {err:?}");
    assert!(!path.exists());

    // The caller fixes the problem and retries with the same store.
    fs::create_dir(&dir).expect("mkdir");
    store.append("<EOR>").expect("retry succeeds");
    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn missing_path_is_a_reported_usage_error() {
    let mut store = LogFile::unconfigured();
    let err = store.append("<EOR>").expect_err("no path");
    assert!(matches!(err, LogError::MissingPath));

    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("late.adi");
    store.set_path(&path);
    store.append("<EOR>").expect("append after set_path");
    assert!(path.is_file());
}

#[test]
fn errors_render_diagnostic_detail() {
    let err = LogError::MissingPath;
    assert_eq!(err.to_string(), "no log file path specified");

    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("nodir").join("log.adi");
    let store = LogFile::with_program(&path, "adiflog");
    let err = store.append("<EOR>").expect_err("create fails");
    let rendered = err.to_string();
    assert!(rendered.contains("error creating"), "got: {rendered}");
    assert!(rendered.contains("log.adi"), "got: {rendered}");
}
