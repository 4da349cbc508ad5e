//! Integration tests for the process-wide logger.
//!
//! All tests in this file share one instance, so each test registers levels
//! under its own names and bits.

use std::panic::catch_unwind;

use bitlog::{AlreadyInitialized, Fatal, LevelSet, RegistryError, args, global};

/// Verifies the instance can be created at most once.
#[test]
fn init_succeeds_at_most_once() {
    let first = global::init(LevelSet::ALL);
    let second = global::init(LevelSet::ALL);
    assert_eq!(second.err(), Some(AlreadyInitialized));

    if let Ok(logger) = first {
        assert!(std::ptr::eq(logger, global::logger()));
    }
}

/// Verifies registry helpers delegate to the shared instance.
#[test]
fn registry_helpers_delegate() {
    let level = LevelSet::from_bits(1 << 40);
    global::register_level(level, "GLOBAL_REGISTRY").unwrap();
    assert_eq!(
        global::logger().registry().name_of(level),
        Some("GLOBAL_REGISTRY")
    );
    assert!(global::max_registered_level().bits() >= level.bits());

    assert!(matches!(
        global::register_level(level, "GLOBAL_OTHER"),
        Err(RegistryError::DuplicateLevel { .. })
    ));
    assert_eq!(
        global::unregister_level(level).as_deref(),
        Some("GLOBAL_REGISTRY")
    );
}

/// Verifies the next free bit is above every registered level.
#[test]
fn next_level_is_above_max() {
    assert!(global::next_level_should_register().unwrap().is_single_level());

    let registry = global::logger().registry();
    let next = registry.next_level_should_register().unwrap();
    assert!(next.bit_length() > registry.max_level().bit_length());
}

/// Verifies suppressed calls succeed without output.
#[test]
fn suppressed_free_functions_succeed() {
    let unused = LevelSet::from_bits(1 << 62);
    global::at_level(unused, args!["never"]).unwrap();
    global::at_levelln(unused, args!["never"]).unwrap();
    global::at_levelf(unused, format_args!("never")).unwrap();
    global::at(unused).print(args!["never"]).unwrap();
}

/// Verifies fatal free functions unwind with the message.
#[test]
fn fatal_free_function_unwinds() {
    let payload = catch_unwind(|| global::fatalf(format_args!("global {}", "stop"))).unwrap_err();
    let fatal = Fatal::from_payload(payload.as_ref()).expect("fatal payload");
    assert_eq!(fatal.message(), "global stop");
}
