use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_the_landing_page_timings() {
    let settings = Settings::default();
    assert_eq!(settings.submit_delay(), Duration::from_millis(1_500));
    assert_eq!(settings.carousel_interval(), Duration::from_millis(5_000));
    assert_eq!(settings.hero_reveal_delay(), Duration::from_millis(100));
    assert!((settings.reveal_threshold - 0.1).abs() < f32::EPSILON);
    assert!((settings.nav_scroll_threshold - 10.0).abs() < f32::EPSILON);
}

#[test]
fn toml_overrides_only_the_keys_it_names() {
    let settings = Settings::from_toml_str("submit_delay_ms = 250\nreveal_threshold = 0.5\n")
        .expect("parse");
    assert_eq!(settings.submit_delay_ms, 250);
    assert!((settings.reveal_threshold - 0.5).abs() < f32::EPSILON);
    assert_eq!(settings.carousel_interval_ms, 5_000);
}

#[test]
fn unknown_toml_keys_are_rejected() {
    assert!(Settings::from_toml_str("submit_delay = 3").is_err());
}

#[test]
fn env_overrides_win_and_bad_values_are_skipped() {
    let mut settings = Settings::from_toml_str("carousel_interval_ms = 1000").expect("parse");
    settings.apply_env_overrides(lookup_from(&[
        ("QUIZMASTER__CAROUSEL_INTERVAL_MS", " 2500 "),
        ("QUIZMASTER__SUBMIT_DELAY_MS", "soon"),
        ("QUIZMASTER__NAV_SCROLL_THRESHOLD", "24"),
    ]));
    assert_eq!(settings.carousel_interval_ms, 2_500);
    assert_eq!(settings.submit_delay_ms, 1_500);
    assert!((settings.nav_scroll_threshold - 24.0).abs() < f32::EPSILON);
}

#[test]
fn explicit_settings_path_must_exist() {
    let missing = env::temp_dir().join("quizmaster_settings_that_do_not_exist.toml");
    let err = load_settings(Some(&missing)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn explicit_settings_file_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("quizmaster_settings_test_{suffix}.toml"));
    fs::write(&path, "hero_reveal_delay_ms = 0\n").expect("write settings");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.hero_reveal_delay_ms, 0);

    fs::remove_file(path).expect("cleanup");
}
