//! Integration tests for level filtering and prefix composition.
//!
//! These tests drive a logger through the registration, mask and label
//! changes a typical service performs at startup and check the exact lines
//! that reach the sink.

use bitlog::{LevelSet, Logger, RegistryError, args, infof};

const COMETS: LevelSet = LevelSet::from_bits(0x10000000);

fn greet(logger: &Logger<Vec<u8>>, level: LevelSet) -> String {
    logger
        .at_levelf(level, format_args!("Hello {:?}", "George"))
        .expect("in-memory write");
    String::from_utf8(logger.with_sink(std::mem::take)).expect("utf-8")
}

fn debug_info_logger() -> Logger<Vec<u8>> {
    Logger::new(Vec::new(), LevelSet::DEBUG | LevelSet::INFO)
}

// ============================================================================
// Single Logger Walkthrough
// ============================================================================

/// Verifies a single enabled level is tagged with its name.
#[test]
fn info_message_is_tagged() {
    let logger = debug_info_logger();
    assert_eq!(greet(&logger, LevelSet::INFO), "[INFO] Hello \"George\"\n");
}

/// Verifies a message tagged with two enabled levels lists both, sorted.
#[test]
fn multi_level_message_lists_sorted_names() {
    let logger = debug_info_logger();
    assert_eq!(
        greet(&logger, LevelSet::INFO | LevelSet::DEBUG),
        "[DEBUG|INFO] Hello \"George\"\n"
    );
}

/// Verifies the label is added in its own bracket once set.
#[test]
fn label_follows_level_names() {
    let logger = debug_info_logger();
    assert_eq!(greet(&logger, LevelSet::DEBUG), "[DEBUG] Hello \"George\"\n");

    logger.set_prefix("K8s");
    assert_eq!(
        greet(&logger, LevelSet::DEBUG),
        "[DEBUG][K8s] Hello \"George\"\n"
    );
}

/// Verifies a disabled level produces no output.
#[test]
fn disabled_level_is_suppressed() {
    let logger = debug_info_logger();
    logger.set_prefix("K8s");
    assert_eq!(greet(&logger, LevelSet::ERROR), "");
}

/// Verifies a custom level needs both registration and enabling.
#[test]
fn custom_level_requires_enabling() {
    let logger = debug_info_logger();
    logger.register_level(COMETS, "COMETS").unwrap();
    assert_eq!(greet(&logger, COMETS), "");

    logger.set_level(COMETS);
    assert_eq!(greet(&logger, COMETS), "[COMETS] Hello \"George\"\n");
}

/// Verifies an unregistered bit contributes no name even when enabled.
#[test]
fn unregistered_bit_contributes_no_name() {
    let logger = debug_info_logger();
    logger.register_level(COMETS, "COMETS").unwrap();
    logger.unregister_level(LevelSet::DEBUG);
    logger.set_level(COMETS | LevelSet::DEBUG);

    assert_eq!(
        greet(&logger, COMETS | LevelSet::DEBUG),
        "[COMETS] Hello \"George\"\n"
    );
}

/// Walks the full sequence of registry and mask changes on one logger,
/// checking that no stale prefix is ever served.
#[test]
fn full_walkthrough_never_serves_stale_prefixes() {
    let logger = debug_info_logger();
    logger.set_prefix("K8s");

    logger.register_level(COMETS, "COMETS").unwrap();
    assert_eq!(greet(&logger, COMETS), "");

    logger.set_level(COMETS);
    assert_eq!(greet(&logger, COMETS), "[COMETS][K8s] Hello \"George\"\n");

    logger.set_level(COMETS | LevelSet::DEBUG);
    assert_eq!(greet(&logger, COMETS), "[COMETS][K8s] Hello \"George\"\n");
    assert_eq!(
        greet(&logger, COMETS | LevelSet::DEBUG),
        "[COMETS|DEBUG][K8s] Hello \"George\"\n"
    );

    logger.set_level(COMETS);
    assert_eq!(
        greet(&logger, COMETS | LevelSet::DEBUG),
        "[COMETS][K8s] Hello \"George\"\n"
    );

    logger.unregister_level(COMETS);
    assert_eq!(greet(&logger, COMETS | LevelSet::DEBUG), "");

    logger.set_level(COMETS | LevelSet::DEBUG);
    assert_eq!(
        greet(&logger, COMETS | LevelSet::DEBUG),
        "[DEBUG][K8s] Hello \"George\"\n"
    );

    logger.unregister_level(LevelSet::DEBUG);
    assert_eq!(greet(&logger, COMETS | LevelSet::DEBUG), "");

    logger.register_level(COMETS, "COMETS").unwrap();
    assert_eq!(
        greet(&logger, COMETS | LevelSet::DEBUG),
        "[COMETS][K8s] Hello \"George\"\n"
    );
}

// ============================================================================
// Registration Conflicts
// ============================================================================

/// Verifies duplicate names and duplicate bits fail distinctly.
#[test]
fn duplicate_name_and_bit_fail_distinctly() {
    let logger = debug_info_logger();

    let name_err = logger
        .register_level(LevelSet::from_bits(64), "WARNING")
        .unwrap_err();
    assert!(matches!(name_err, RegistryError::DuplicateName { .. }));

    let bit_err = logger.register_level(LevelSet::WARN, "CAUTION").unwrap_err();
    assert!(matches!(bit_err, RegistryError::DuplicateLevel { .. }));

    assert_ne!(name_err, bit_err);
}

/// Verifies re-registering a removed level succeeds.
#[test]
fn removed_level_can_be_registered_again() {
    let logger = debug_info_logger();
    assert_eq!(logger.unregister_level(LevelSet::INFO).as_deref(), Some("INFO"));
    logger.register_level(LevelSet::INFO, "NOTE").unwrap();
    assert_eq!(greet(&logger, LevelSet::INFO), "[NOTE] Hello \"George\"\n");
}

// ============================================================================
// Strategies Share The Prefix
// ============================================================================

/// Verifies the three strategies agree on the prefix and differ only in body.
#[test]
fn strategies_share_prefix_logic() {
    let logger = Logger::new(Vec::new(), LevelSet::WARN);
    logger.set_prefix("db");
    logger.warn(args!["retry ", 3, 4]).unwrap();
    logger.warnln(args!["retry", 3, 4]).unwrap();
    infof!(logger, "not written").unwrap();
    logger.warnf(format_args!("retry {}", 3)).unwrap();

    let output = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(
        output,
        "[WARNING][db] retry 3 4\n[WARNING][db] retry 3 4\n\n[WARNING][db] retry 3\n"
    );
}
