//! Integration tests for the public API.
//!
//! These tests exercise the crate the way an application's startup code
//! would: resolving a handful of settings with defaults, from the process
//! environment and from a captured snapshot.

use env_defaults::{EnvReader, EnvSource, MapEnv, SystemEnv};
use serial_test::serial;

/// Settings an application might resolve at startup.
#[derive(Debug, PartialEq)]
struct ServiceSettings {
    host: String,
    port: u16,
    workers: i32,
    max_body_bytes: i64,
    debug: bool,
}

fn load_settings<S: EnvSource>(env: &EnvReader<S>) -> ServiceSettings {
    ServiceSettings {
        host: env.get_string("SVC_HOST", "127.0.0.1"),
        port: env.get_integer("SVC_PORT", 8080),
        workers: env.get_int("SVC_WORKERS", 4),
        max_body_bytes: env.get_long("SVC_MAX_BODY_BYTES", 10 * 1024 * 1024),
        debug: env.get_bool("SVC_DEBUG", false),
    }
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let settings = load_settings(&EnvReader::with_source(MapEnv::new()));

    assert_eq!(
        settings,
        ServiceSettings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
            max_body_bytes: 10 * 1024 * 1024,
            debug: false,
        }
    );
}

#[test]
fn test_mixed_valid_and_invalid_values() {
    let env = EnvReader::with_source(MapEnv::from_vars([
        ("SVC_HOST", "0.0.0.0"),
        ("SVC_PORT", "70000"),
        ("SVC_WORKERS", "16"),
        ("SVC_MAX_BODY_BYTES", ""),
        ("SVC_DEBUG", "TRUE"),
    ]));

    let settings = load_settings(&env);

    assert_eq!(settings.host, "0.0.0.0");
    assert_eq!(settings.port, 8080, "out-of-range port falls back");
    assert_eq!(settings.workers, 16);
    assert_eq!(settings.max_body_bytes, 10 * 1024 * 1024, "empty falls back");
    assert!(settings.debug);
}

#[test]
#[serial]
fn test_process_environment_and_snapshot_agree() {
    temp_env::with_vars(
        [
            ("SVC_HOST", Some("svc.internal")),
            ("SVC_PORT", Some("9000")),
            ("SVC_WORKERS", Some("not-a-number")),
            ("SVC_MAX_BODY_BYTES", Some("1048576")),
            ("SVC_DEBUG", Some("False")),
        ],
        || {
            let live = load_settings(&EnvReader::system());
            let snapshot = load_settings(&EnvReader::with_source(MapEnv::from_vars(
                std::env::vars(),
            )));

            assert_eq!(live, snapshot);
            assert_eq!(live.host, "svc.internal");
            assert_eq!(live.port, 9000);
            assert_eq!(live.workers, 4);
            assert_eq!(live.max_body_bytes, 1_048_576);
            assert!(!live.debug);
        },
    );
}

#[test]
#[serial]
fn test_default_reader_uses_process_environment() {
    temp_env::with_var("SVC_WORKERS", Some("3"), || {
        let reader: EnvReader = EnvReader::default();
        assert_eq!(reader.source(), &SystemEnv);
        assert_eq!(reader.get_int("SVC_WORKERS", 0), 3);
        assert_eq!(env_defaults::get_int("SVC_WORKERS", 0), 3);
    });
}

#[test]
fn test_reader_is_shareable_across_threads() {
    let env = EnvReader::with_source(MapEnv::new().with_var("SVC_WORKERS", "8"));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| env.get_int("SVC_WORKERS", 1)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8);
        }
    });
}
