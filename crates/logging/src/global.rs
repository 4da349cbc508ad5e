//! crates/logging/src/global.rs
//! Process-wide logger bound to standard output.
//!
//! The instance is created on first use with [`LevelSet::DEFAULT`] enabled, or
//! explicitly through [`init`] before anything else touches it. Every free
//! function here delegates to that instance; code that can take a
//! [`Logger`] by reference should prefer doing so and obtain this one through
//! [`logger`].

use std::fmt;
use std::io::{self, Stdout};
use std::sync::OnceLock;

use crate::adapter::LevelLogger;
use crate::error::{AlreadyInitialized, RegistryError};
use crate::format::Arg;
use crate::level::LevelSet;
use crate::logger::Logger;

static DEFAULT: OnceLock<Logger<Stdout>> = OnceLock::new();

/// Creates the process-wide logger with the given mask.
///
/// Fails when the logger already exists, either from an earlier `init` or
/// because a free function ran first.
pub fn init(level: LevelSet) -> Result<&'static Logger<Stdout>, AlreadyInitialized> {
    let mut created = false;
    let logger = DEFAULT.get_or_init(|| {
        created = true;
        Logger::new(io::stdout(), level)
    });
    if created {
        Ok(logger)
    } else {
        Err(AlreadyInitialized)
    }
}

/// Returns the process-wide logger, creating it on first use.
pub fn logger() -> &'static Logger<Stdout> {
    DEFAULT.get_or_init(|| Logger::with_defaults(io::stdout()))
}

/// See [`Logger::level`].
pub fn level() -> LevelSet {
    logger().level()
}

/// See [`Logger::set_level`].
pub fn set_level(level: LevelSet) {
    logger().set_level(level);
}

/// See [`Logger::set_prefix`].
pub fn set_prefix(prefix: impl Into<String>) {
    logger().set_prefix(prefix);
}

/// See [`Logger::register_level`].
pub fn register_level(level: LevelSet, name: &str) -> Result<(), RegistryError> {
    logger().register_level(level, name)
}

/// See [`Logger::unregister_level`].
pub fn unregister_level(level: LevelSet) -> Option<String> {
    logger().unregister_level(level)
}

/// See [`Logger::register_next_level`].
pub fn register_next_level(name: &str) -> Result<LevelSet, RegistryError> {
    logger().register_next_level(name)
}

/// See [`Logger::next_level_should_register`].
pub fn next_level_should_register() -> Result<LevelSet, RegistryError> {
    logger().next_level_should_register()
}

/// See [`Logger::max_registered_level`].
pub fn max_registered_level() -> LevelSet {
    logger().max_registered_level()
}

/// See [`Logger::print`].
pub fn print(args: &[Arg<'_>]) -> io::Result<()> {
    logger().print(args)
}

/// See [`Logger::println`].
pub fn println(args: &[Arg<'_>]) -> io::Result<()> {
    logger().println(args)
}

/// See [`Logger::printf`].
pub fn printf(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().printf(args)
}

/// See [`Logger::debug`].
pub fn debug(args: &[Arg<'_>]) -> io::Result<()> {
    logger().debug(args)
}

/// See [`Logger::info`].
pub fn info(args: &[Arg<'_>]) -> io::Result<()> {
    logger().info(args)
}

/// See [`Logger::warn`].
pub fn warn(args: &[Arg<'_>]) -> io::Result<()> {
    logger().warn(args)
}

/// See [`Logger::error`].
pub fn error(args: &[Arg<'_>]) -> io::Result<()> {
    logger().error(args)
}

/// See [`Logger::fatal`].
pub fn fatal(args: &[Arg<'_>]) -> ! {
    logger().fatal(args)
}

/// See [`Logger::debugln`].
pub fn debugln(args: &[Arg<'_>]) -> io::Result<()> {
    logger().debugln(args)
}

/// See [`Logger::infoln`].
pub fn infoln(args: &[Arg<'_>]) -> io::Result<()> {
    logger().infoln(args)
}

/// See [`Logger::warnln`].
pub fn warnln(args: &[Arg<'_>]) -> io::Result<()> {
    logger().warnln(args)
}

/// See [`Logger::errorln`].
pub fn errorln(args: &[Arg<'_>]) -> io::Result<()> {
    logger().errorln(args)
}

/// See [`Logger::fatalln`].
pub fn fatalln(args: &[Arg<'_>]) -> ! {
    logger().fatalln(args)
}

/// See [`Logger::debugf`].
pub fn debugf(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().debugf(args)
}

/// See [`Logger::infof`].
pub fn infof(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().infof(args)
}

/// See [`Logger::warnf`].
pub fn warnf(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().warnf(args)
}

/// See [`Logger::errorf`].
pub fn errorf(args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().errorf(args)
}

/// See [`Logger::fatalf`].
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    logger().fatalf(args)
}

/// See [`Logger::at_level`].
pub fn at_level(level: LevelSet, args: &[Arg<'_>]) -> io::Result<()> {
    logger().at_level(level, args)
}

/// See [`Logger::at_levelln`].
pub fn at_levelln(level: LevelSet, args: &[Arg<'_>]) -> io::Result<()> {
    logger().at_levelln(level, args)
}

/// See [`Logger::at_levelf`].
pub fn at_levelf(level: LevelSet, args: fmt::Arguments<'_>) -> io::Result<()> {
    logger().at_levelf(level, args)
}

/// See [`Logger::at`].
pub fn at(level: LevelSet) -> LevelLogger<'static, Stdout> {
    logger().at(level)
}

/// See [`Logger::custom_log_at_level`].
pub fn custom_log_at_level(level: LevelSet) -> impl Fn(&[Arg<'_>]) -> io::Result<()> {
    logger().custom_log_at_level(level)
}

/// See [`Logger::custom_log_at_levelln`].
pub fn custom_log_at_levelln(level: LevelSet) -> impl Fn(&[Arg<'_>]) -> io::Result<()> {
    logger().custom_log_at_levelln(level)
}

/// See [`Logger::custom_log_at_levelf`].
pub fn custom_log_at_levelf(level: LevelSet) -> impl Fn(fmt::Arguments<'_>) -> io::Result<()> {
    logger().custom_log_at_levelf(level)
}
