#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `bitlog` is a leveled line logger. Each severity class owns one bit of a
//! `u64`; a [`Logger`] writes a line only when the message's level bits meet
//! its enabled mask on at least one registered level, tagging the line with
//! the names of every matching level.
//!
//! # Design
//!
//! - [`LevelSet`] is the bit-packed level type, with the well-known DEBUG,
//!   INFO, WARN, ERROR and FATAL constants.
//! - [`LevelRegistry`] binds level bits to display names at runtime and
//!   allocates free bits for custom levels.
//! - [`compose_prefix`] builds the `[NAME|NAME][label] ` prefix; the
//!   [`PrefixCache`] memoises it per message level.
//! - [`Logger`] ties the pieces to an [`io::Write`](std::io::Write) sink behind
//!   a mutex. The plain and line strategies take [`Arg`] operand lists (see
//!   [`args!`] and [`LineMode`]); the formatted strategy takes
//!   [`fmt::Arguments`](std::fmt::Arguments) (see [`infof!`] and friends).
//! - [`global`] exposes a process-wide logger bound to standard output.
//!
//! # Invariants
//!
//! - No two registered levels share a bit or a name.
//! - A message whose level set meets no enabled, registered level produces no
//!   write at all, even when a label is set.
//! - Level names in a prefix are sorted, so output does not depend on
//!   registration order.
//! - The prefix cache is cleared by every change to the registry, the mask or
//!   the label.
//!
//! # Errors
//!
//! Registry conflicts surface as [`RegistryError`]; sink failures surface as
//! [`std::io::Error`] from the write that hit them. Fatal calls never return:
//! they unwind with a [`Fatal`] payload even when the line was suppressed.
//!
//! # Examples
//!
//! ```
//! use bitlog::{LevelSet, Logger, args, infof};
//!
//! let logger = Logger::new(Vec::new(), LevelSet::DEBUG | LevelSet::INFO);
//! infof!(logger, "Hello {:?}", "George")?;
//! logger.at_level(LevelSet::INFO | LevelSet::DEBUG, args!["Hello"])?;
//! logger.error(args!["masked out"])?;
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output, "[INFO] Hello \"George\"\n[DEBUG|INFO] Hello\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`LevelSet`] and [`LoggerConfig`].
//! - `tracing`: registry diagnostics under the `bitlog::registry` target and
//!   the `BitlogLayer` bridge from `tracing` events into a [`Logger`].

mod adapter;
mod config;
mod error;
mod fatal;
mod format;
pub mod global;
mod level;
mod line_mode;
mod logger;
mod macros;
mod prefix;
mod registry;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use adapter::LevelLogger;
pub use config::{CustomLevel, LoggerConfig, parse_level_set};
pub use error::{AlreadyInitialized, ConfigError, RegistryError};
pub use fatal::Fatal;
pub use format::{Arg, render_args};
pub use level::{LevelSet, Levels};
pub use line_mode::LineMode;
pub use logger::Logger;
pub use prefix::{PrefixCache, compose_prefix};
pub use registry::LevelRegistry;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{BitlogLayer, init_tracing, init_tracing_with_filter};
