use rworkhours::config::Config;
use rworkhours::core::form::FormDefaults;
use rworkhours::errors::AppError;
use rworkhours::models::TimeOfDay;
use rworkhours::utils::time::{parse_hhmm, split_raw_time};
use std::path::PathBuf;

mod common;
use common::{temp_config, write_config};

#[test]
fn test_missing_file_gives_defaults() {
    let p = temp_config("cfg_missing");
    let cfg = Config::load_from(&PathBuf::from(p)).expect("load");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.form_defaults().expect("defaults"), FormDefaults::default());
}

#[test]
fn test_save_and_load() {
    let p = PathBuf::from(temp_config("cfg_save"));
    let cfg = Config {
        start: "07:30".to_string(),
        end: "16:00".to_string(),
        break_time: "00:30".to_string(),
        colored_output: false,
    };
    cfg.save_to(&p).expect("save");

    let loaded = Config::load_from(&p).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(
        loaded.form_defaults().expect("defaults").start,
        TimeOfDay::new(7, 30)
    );
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let p = write_config("cfg_partial", "start: \"08:15\"\n");
    let cfg = Config::load_from(&PathBuf::from(p)).expect("load");
    assert_eq!(cfg.start, "08:15");
    assert_eq!(cfg.end, "18:00");
    assert_eq!(cfg.break_time, "01:00");
    assert!(cfg.colored_output);
}

#[test]
fn test_invalid_time_is_config_error() {
    let p = write_config("cfg_invalid", "end: \"25:00\"\n");
    let err = Config::load_from(&PathBuf::from(p)).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_time_helpers() {
    assert_eq!(parse_hhmm("07:05"), Some(TimeOfDay::new(7, 5)));
    assert_eq!(parse_hhmm("24:00"), None);
    assert_eq!(parse_hhmm("noon"), None);

    assert_eq!(split_raw_time("9:30"), ("9", Some("30")));
    assert_eq!(split_raw_time("9"), ("9", None));
    assert_eq!(split_raw_time(":"), ("", Some("")));
}
