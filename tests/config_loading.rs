use std::fs;

use dispatch_clock::{BusinessTimeConfig, CalendarDate, ConfigStore, ConfigurationError};

#[test]
fn loads_a_complete_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delivery.yml");
    fs::write(
        &path,
        "timezone: America/Chicago\n\
         cutoff_hour: 15\n\
         business_start_hour: 8\n\
         blackout_dates:\n  - 2026-12-25\n  - 2026-12-25\n  - 2027-01-01\n",
    )
    .unwrap();

    let config = BusinessTimeConfig::from_file(&path).unwrap();

    assert_eq!(config.timezone().name(), "America/Chicago");
    assert_eq!(config.cutoff_hour(), 15);
    assert_eq!(config.business_start_hour(), 8);
    assert_eq!(
        config.blackout_dates().iter().copied().collect::<Vec<_>>(),
        vec![
            CalendarDate::from_ymd(2026, 12, 25).unwrap(),
            CalendarDate::from_ymd(2027, 1, 1).unwrap()
        ]
    );
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");

    let error = BusinessTimeConfig::from_file(&path).unwrap_err();

    assert!(format!("{error:#}").contains("absent.yml"));
}

#[test]
fn malformed_blackout_date_fails_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delivery.yml");
    fs::write(&path, "blackout_dates:\n  - 2026-12-25\n  - Christmas\n").unwrap();

    let error = BusinessTimeConfig::from_file(&path).unwrap_err();

    assert_eq!(
        error.downcast_ref::<ConfigurationError>(),
        Some(&ConfigurationError::InvalidBlackoutDate {
            value: "Christmas".to_string()
        })
    );
}

#[test]
fn negative_hour_is_rejected_not_wrapped() {
    let error = BusinessTimeConfig::from_yaml_str("business_start_hour: -3\n").unwrap_err();

    assert_eq!(
        error.downcast_ref::<ConfigurationError>(),
        Some(&ConfigurationError::InvalidHour {
            field: "business_start_hour",
            value: -3
        })
    );
}

#[test]
fn store_reloads_a_changed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delivery.yml");
    fs::write(&path, "cutoff_hour: 14\n").unwrap();

    let store = ConfigStore::from_file(&path).unwrap();
    assert_eq!(store.snapshot().cutoff_hour(), 14);

    fs::write(&path, "cutoff_hour: 12\nblackout_dates: ['2026-07-03']\n").unwrap();
    store.reload_from_file(&path).unwrap();

    let config = store.snapshot();
    assert_eq!(config.cutoff_hour(), 12);
    assert!(config.is_blackout_date(CalendarDate::from_ymd(2026, 7, 3).unwrap()));
}
