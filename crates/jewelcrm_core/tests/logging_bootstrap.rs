use jewelcrm_core::{init_logging, logging_status, LoggingError};

#[test]
fn logging_init_is_idempotent_and_rejects_reconfiguration() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let first = first_dir.path().to_str().unwrap().to_string();
    let second = second_dir.path().to_str().unwrap().to_string();

    assert_eq!(logging_status(), None);
    init_logging("info", &first).expect("first init should succeed");
    init_logging("INFO", &first).expect("same config should be idempotent");

    let err = init_logging("debug", &first).unwrap_err();
    assert!(matches!(err, LoggingError::LevelConflict { .. }));
    assert!(err.to_string().contains("refusing to switch"));

    let err = init_logging("info", &second).unwrap_err();
    assert!(matches!(err, LoggingError::DirectoryConflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first_dir.path());

    log::info!("event=test_write module=tests status=ok");
}

#[test]
fn logging_init_rejects_invalid_arguments() {
    assert!(matches!(
        init_logging("chatty", "/tmp"),
        Err(LoggingError::UnsupportedLevel(_))
    ));
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::RelativeDirectory(_))
    ));
}
