//! crates/logging/src/error.rs
//! Error types for registry and configuration failures.

use thiserror::Error;

use crate::level::LevelSet;

/// Failure raised while mutating a [`LevelRegistry`](crate::LevelRegistry).
///
/// Every variant describes a setup bug rather than a runtime condition, so
/// callers are expected to surface it immediately.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested name is already bound to another level.
    #[error("level {name:?} already registered as {existing:b} cannot register as {requested:b}")]
    DuplicateName {
        /// The conflicting name.
        name: String,
        /// Level currently registered under `name`.
        existing: LevelSet,
        /// Level the caller tried to register.
        requested: LevelSet,
    },

    /// The requested level bit already carries a name.
    #[error("level {level:b} already registered as {existing:?} cannot register as {requested:?}")]
    DuplicateLevel {
        /// The conflicting level.
        level: LevelSet,
        /// Name currently registered for `level`.
        existing: String,
        /// Name the caller tried to register.
        requested: String,
    },

    /// No bit above the highest registered level fits in a `u64`.
    #[error("too many levels: no free bit above {highest:b}; try registering a level with more than one bit set")]
    LevelsExhausted {
        /// Highest level currently registered.
        highest: LevelSet,
    },
}

/// Failure raised while applying a [`LoggerConfig`](crate::LoggerConfig).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A level name does not match any registered level.
    #[error("unknown level name: {0:?}")]
    UnknownLevel(String),

    /// A custom level could not be registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Returned when the process-wide logger is initialised twice.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("the process-wide logger is already initialised")]
pub struct AlreadyInitialized;
