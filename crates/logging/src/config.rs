//! crates/logging/src/config.rs
//! Declarative logger configuration.

use crate::error::ConfigError;
use crate::level::LevelSet;
use crate::logger::Logger;
use crate::registry::LevelRegistry;

/// A custom level to register when a configuration is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomLevel {
    /// Display name of the level.
    pub name: String,
    /// Explicit bit, or `None` to take the next free bit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bit: Option<u64>,
}

/// Settings applied to a [`Logger`] in one step.
///
/// Custom levels are registered first, in order, so `levels` may name them.
///
/// ```
/// use bitlog::{LevelSet, Logger, LoggerConfig};
///
/// let config = LoggerConfig::default()
///     .with_custom_level("AUDIT", None)
///     .with_levels(["AUDIT", "ERROR"])
///     .with_prefix("api");
///
/// let logger = Logger::from_config(Vec::<u8>::new(), &config)?;
/// assert_eq!(logger.level(), LevelSet::from_bits(32) | LevelSet::ERROR);
/// assert_eq!(logger.full_prefix(LevelSet::from_bits(32)), "[AUDIT][api] ");
/// # Ok::<(), bitlog::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Names of the enabled levels; empty selects [`LevelSet::DEFAULT`].
    pub levels: Vec<String>,
    /// Static label written after the level names.
    pub prefix: Option<String>,
    /// Levels to register before `levels` is resolved.
    pub custom_levels: Vec<CustomLevel>,
}

impl LoggerConfig {
    /// Replaces the enabled level names.
    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = levels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the static label.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends a custom level.
    pub fn with_custom_level(mut self, name: impl Into<String>, bit: Option<u64>) -> Self {
        self.custom_levels.push(CustomLevel {
            name: name.into(),
            bit,
        });
        self
    }

    /// Applies the configuration to an existing logger.
    ///
    /// Custom levels already registered under the same name and bit are left
    /// alone, so applying a configuration twice is harmless.
    ///
    /// The new registry and mask are built on a snapshot and installed
    /// together. On error the logger is left exactly as it was. Levels
    /// registered by other threads while `apply` runs are overwritten.
    pub fn apply<W>(&self, logger: &Logger<W>) -> Result<(), ConfigError> {
        let mut registry = logger.registry();
        for custom in &self.custom_levels {
            let existing = registry.level_of(&custom.name);
            match (custom.bit, existing) {
                (Some(bit), Some(level)) if level.bits() == bit => {}
                (None, Some(_)) => {}
                (Some(bit), _) => {
                    registry.register_level(LevelSet::from_bits(bit), custom.name.as_str())?;
                }
                (None, None) => {
                    registry.register_next_level(custom.name.as_str())?;
                }
            }
        }

        let level = if self.levels.is_empty() {
            LevelSet::DEFAULT
        } else {
            resolve_names(&registry, self.levels.iter().map(String::as_str))?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "bitlog::registry",
            levels = registry.len(),
            mask = level.bits(),
            "applied logger configuration"
        );

        logger.replace_state(registry, level, self.prefix.clone().unwrap_or_default());
        Ok(())
    }
}

impl<W> Logger<W> {
    /// Creates a logger from a [`LoggerConfig`].
    pub fn from_config(sink: W, config: &LoggerConfig) -> Result<Self, ConfigError> {
        let logger = Self::with_defaults(sink);
        config.apply(&logger)?;
        Ok(logger)
    }
}

/// Parses a list of level names separated by `|` or `,` into a [`LevelSet`].
///
/// Names are matched case-sensitively against `registry`; surrounding
/// whitespace and empty tokens are ignored.
///
/// ```
/// use bitlog::{LevelRegistry, LevelSet, parse_level_set};
///
/// let registry = LevelRegistry::with_defaults();
/// assert_eq!(parse_level_set(&registry, "DEBUG | INFO")?, LevelSet::DEBUG | LevelSet::INFO);
/// assert_eq!(parse_level_set(&registry, "WARNING,ERROR")?, LevelSet::WARN | LevelSet::ERROR);
/// assert!(parse_level_set(&registry, "debug").is_err());
/// # Ok::<(), bitlog::ConfigError>(())
/// ```
pub fn parse_level_set(registry: &LevelRegistry, spec: &str) -> Result<LevelSet, ConfigError> {
    resolve_names(
        registry,
        spec.split(['|', ','])
            .map(str::trim)
            .filter(|token| !token.is_empty()),
    )
}

fn resolve_names<'a>(
    registry: &LevelRegistry,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<LevelSet, ConfigError> {
    names.into_iter().try_fold(LevelSet::NONE, |acc, name| {
        registry
            .level_of(name)
            .map(|level| acc | level)
            .ok_or_else(|| ConfigError::UnknownLevel(name.to_owned()))
    })
}
