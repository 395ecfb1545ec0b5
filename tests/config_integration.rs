use collection_workbench::config::AppConfig;
use serial_test::serial;
use std::env;
use std::io::Write;

// Clear environment variables that would bleed between tests.
fn clear_env_vars() {
    unsafe {
        env::remove_var("WORKBENCH_SERVER__PORT");
        env::remove_var("WORKBENCH_API__BASE_URL");
        env::remove_var("WORKBENCH_RESILIENCE__TIMEOUT_DISABLED");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("API_BASE_URL");
        env::remove_var("TIMEOUT_DISABLED");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["workbench"]).expect("failed to load defaults");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(!config.resilience.timeout_disabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("WORKBENCH_SERVER__PORT", "9090");
        env::set_var("WORKBENCH_API__BASE_URL", "http://api.internal:9000");
    }

    let config = AppConfig::load_from_args(["workbench"]).expect("failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.api.base_url, "http://api.internal:9000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").expect("failed to create file");
    write!(
        file,
        "server:\n  port: 7070\napi:\n  timeout_secs: 5\n"
    )
    .expect("failed to write config");

    let path = file.path().to_string_lossy().into_owned();
    let config = AppConfig::load_from_args(["workbench", "--config", &path])
        .expect("failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.api.timeout_secs, 5);
    // Sections the file omits still come from defaults.
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env_vars();

    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").expect("failed to create file");
    write!(file, "server:\n  port: 7070\n").expect("failed to write config");
    unsafe {
        env::set_var("WORKBENCH_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config =
        AppConfig::load_from_args(["workbench", "--config", &path]).expect("failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flag_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("WORKBENCH_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["workbench", "--port", "4444"])
        .expect("failed to load config");
    assert_eq!(config.server.port, 4444);

    clear_env_vars();
}

#[test]
#[serial]
fn test_timeout_disabled_flag() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["workbench", "--timeout-disabled", "true"])
        .expect("failed to load config");
    assert!(config.resilience.timeout_disabled);
}
