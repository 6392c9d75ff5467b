use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_alembic_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("ALEMBIC_PORT");
        env::remove_var("ALEMBIC_BIND_ADDR");
        env::remove_var("ALEMBIC_DB_PATH");
        env::remove_var("ALEMBIC_MODEL");
        env::remove_var("ALEMBIC_CONTEXT_SIZE");
        env::remove_var("ALEMBIC_SEED");
        env::remove_var("ALEMBIC_HOT_CAPACITY");
        env::remove_var("ALEMBIC_REQUEST_TIMEOUT_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 3000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
    );
    assert_eq!(config.db_path, PathBuf::from("./cache.db"));
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.context_size, 4096);
    assert_eq!(config.seed, 0);
    assert_eq!(config.hot_capacity, 10_000);
    assert_eq!(config.request_timeout, Duration::from_secs(60));
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");

    let config = Config {
        port: 8080,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_alembic_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 3000);
    assert_eq!(config.db_path, PathBuf::from("./cache.db"));
    assert_eq!(config.model, DEFAULT_MODEL);
}

#[test]
#[serial]
fn test_from_env_with_overrides() {
    clear_alembic_env();

    let config = with_env_vars(
        &[
            ("ALEMBIC_PORT", "9090"),
            ("ALEMBIC_BIND_ADDR", "127.0.0.1"),
            ("ALEMBIC_DB_PATH", "/tmp/alembic/words.db"),
            ("ALEMBIC_MODEL", "ollama::mistral"),
            ("ALEMBIC_CONTEXT_SIZE", "2048"),
            ("ALEMBIC_SEED", "42"),
            ("ALEMBIC_HOT_CAPACITY", "64"),
            ("ALEMBIC_REQUEST_TIMEOUT_SECS", "5"),
        ],
        Config::from_env,
    )
    .expect("should parse overrides");

    assert_eq!(config.port, 9090);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.db_path, PathBuf::from("/tmp/alembic/words.db"));
    assert_eq!(config.model, "ollama::mistral");
    assert_eq!(config.context_size, 2048);
    assert_eq!(config.seed, 42);
    assert_eq!(config.hot_capacity, 64);
    assert_eq!(config.request_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_alembic_env();

    let config = with_env_vars(&[("ALEMBIC_BIND_ADDR", "::1")], Config::from_env)
        .expect("should parse IPv6");

    assert_eq!(config.bind_addr, "::1".parse::<IpAddr>().expect("ipv6"));
    assert_eq!(config.socket_addr(), "[::1]:3000");
}

#[test]
#[serial]
fn test_blank_db_path_falls_back_to_default() {
    clear_alembic_env();

    let config =
        with_env_vars(&[("ALEMBIC_DB_PATH", "   ")], Config::from_env).expect("should parse");

    assert_eq!(config.db_path, PathBuf::from("./cache.db"));
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_alembic_env();

    let result = with_env_vars(&[("ALEMBIC_PORT", "0")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_invalid_port_not_a_number() {
    clear_alembic_env();

    let result = with_env_vars(&[("ALEMBIC_PORT", "three-thousand")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_invalid_port_overflow() {
    clear_alembic_env();

    let result = with_env_vars(&[("ALEMBIC_PORT", "70000")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_alembic_env();

    let result = with_env_vars(&[("ALEMBIC_BIND_ADDR", "localhost")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
}

#[test]
#[serial]
fn test_invalid_numeric_setting_names_variable() {
    clear_alembic_env();

    let result = with_env_vars(&[("ALEMBIC_SEED", "-1")], Config::from_env);

    match result {
        Err(ConfigError::InvalidNumber { name, value, .. }) => {
            assert_eq!(name, "ALEMBIC_SEED");
            assert_eq!(value, "-1");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_validate_defaults_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = Config {
        db_path: temp.path().join("cache.db"),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_db_path_is_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = Config {
        db_path: temp.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_rejects_zero_values() {
    let zero_context = Config {
        context_size: 0,
        ..Default::default()
    };
    assert!(matches!(
        zero_context.validate(),
        Err(ConfigError::MustBePositive {
            name: "context_size"
        })
    ));

    let zero_capacity = Config {
        hot_capacity: 0,
        ..Default::default()
    };
    assert!(matches!(
        zero_capacity.validate(),
        Err(ConfigError::MustBePositive {
            name: "hot_capacity"
        })
    ));

    let zero_timeout = Config {
        request_timeout: Duration::ZERO,
        ..Default::default()
    };
    assert!(matches!(
        zero_timeout.validate(),
        Err(ConfigError::MustBePositive {
            name: "request_timeout"
        })
    ));
}

#[test]
fn test_validate_rejects_blank_model() {
    let config = Config {
        model: "  ".to_string(),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));
}

#[test]
fn test_error_messages_are_readable() {
    let err = ConfigError::MustBePositive {
        name: "context_size",
    };
    assert_eq!(err.to_string(), "context_size must be greater than zero");

    let err = ConfigError::NotAFile {
        path: PathBuf::from("/var/lib"),
    };
    assert!(err.to_string().contains("/var/lib"));
}
