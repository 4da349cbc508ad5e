//! crates/logging/src/adapter.rs
//! Loggers bound to a fixed level.

use std::fmt;
use std::io::{self, Write};

use crate::format::Arg;
use crate::level::LevelSet;
use crate::logger::Logger;

/// A borrowed [`Logger`] paired with a fixed message level.
///
/// Handy for custom levels allocated at runtime: bind the level once and pass
/// the adapter around instead of repeating it at every call site. The three
/// methods mirror [`Logger::at_level`], [`Logger::at_levelln`] and
/// [`Logger::at_levelf`].
pub struct LevelLogger<'a, W> {
    logger: &'a Logger<W>,
    level: LevelSet,
}

impl<'a, W> LevelLogger<'a, W> {
    pub(crate) fn new(logger: &'a Logger<W>, level: LevelSet) -> Self {
        Self { logger, level }
    }

    /// The bound level.
    #[must_use]
    pub const fn level(&self) -> LevelSet {
        self.level
    }

    /// The underlying logger.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger<W> {
        self.logger
    }
}

impl<W: Write> LevelLogger<'_, W> {
    /// Writes `args` using the plain strategy.
    pub fn print(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.logger.at_level(self.level, args)
    }

    /// Writes `args` using the line strategy.
    pub fn println(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.logger.at_levelln(self.level, args)
    }

    /// Writes formatted arguments.
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.logger.at_levelf(self.level, args)
    }
}

impl<W> Clone for LevelLogger<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for LevelLogger<'_, W> {}

impl<W> fmt::Debug for LevelLogger<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
