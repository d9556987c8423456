use plasmapost_core::{ConfigError, MeasurementSystem};
use plasmapost_settings::{PostConfig, PostProfile, SettingsError};
use std::io::Write;

fn write_profile(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_profile() {
    let file = write_profile(
        ".toml",
        r#"
no_comments = true
precision = 1
preamble = "G90\nG17"
units = "imperial"
"#,
    );

    let profile = PostProfile::load_from_file(file.path()).unwrap();
    let config = PostConfig::resolve(profile.into_options()).unwrap();

    assert!(!config.emit_comments());
    assert_eq!(config.precision(), 1);
    assert_eq!(config.preamble(), "G90\nG17");
    assert_eq!(config.measurement_system(), MeasurementSystem::Imperial);
}

#[test]
fn test_load_json_profile() {
    let file = write_profile(".json", r#"{"no_header": true, "pierce_delay": 1.0}"#);

    let profile = PostProfile::load_from_file(file.path()).unwrap();
    let config = PostConfig::resolve(profile.into_options()).unwrap();

    assert!(!config.emit_header());
    assert_eq!(config.pierce_delay(), 1.0);
}

#[test]
fn test_unsupported_extension() {
    let file = write_profile(".yaml", "precision: 2");
    let err = PostProfile::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
}

#[test]
fn test_malformed_toml() {
    let file = write_profile(".toml", "precision = \"two");
    let err = PostProfile::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_out_of_range_values_rejected_on_load() {
    let file = write_profile(".toml", "precision = 70000");
    let err = PostProfile::load_from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::InvalidArgument { ref option, .. }) if option == "--precision"
    ));

    let file = write_profile(".json", r#"{"pierce_delay": -2.0}"#);
    let err = PostProfile::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_option_string_overrides_profile() {
    let profile: PostProfile = toml::from_str("precision = 2").unwrap_or_default();
    let mut options = profile.into_options();
    options.extend(plasmapost_settings::parse_option_string("--precision 5").unwrap());

    let config = PostConfig::resolve(options).unwrap();
    assert_eq!(config.precision(), 5);
}

#[test]
fn test_option_string_end_to_end() {
    let config = PostConfig::from_option_string(
        "--inches --line-numbers --precision=2 --pierce-delay 0.75 --preamble 'G17\nG90'",
    )
    .unwrap();

    assert_eq!(config.measurement_system(), MeasurementSystem::Imperial);
    assert!(config.emit_line_numbers());
    assert_eq!(config.precision(), 2);
    assert_eq!(config.pierce_delay(), 0.75);
    assert_eq!(config.preamble(), "G17\nG90");
}

#[test]
fn test_option_string_failure_is_invalid_argument() {
    let err = PostConfig::from_option_string("--inches --pierce-delay soon").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidArgument { ref option, .. } if option == "--pierce-delay"
    ));
}
