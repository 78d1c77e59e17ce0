//! Configuration loading end to end

use lob_viz::config::Config;
use lob_viz::driver::{Driver, DriverSettings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;

#[test]
fn test_example_config_drives_default_dashboard() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let settings = DriverSettings::from(&config);

    assert_eq!(settings.initial_price, 100.0);
    assert_eq!(settings.refresh_interval.as_millis(), 1500);
    assert!(Driver::new(settings, ChaCha8Rng::seed_from_u64(1)).is_ok());
}

#[test]
fn test_invalid_config_fails_before_first_cycle() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[book]\nlevels = 0").unwrap();

    let config = Config::load(file.path()).unwrap();
    let err = Driver::from_config(&config, Some(1)).err().unwrap();
    assert!(err.to_string().contains("levels"));
}
