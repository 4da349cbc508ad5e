//! crates/logging/src/logger.rs
//! The leveled logger and its write pipeline.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::adapter::LevelLogger;
use crate::error::RegistryError;
use crate::fatal::Fatal;
use crate::format::{Arg, render_args};
use crate::level::LevelSet;
use crate::line_mode::LineMode;
use crate::prefix::PrefixCache;
use crate::registry::LevelRegistry;

/// Leveled logger writing one line per enabled call to a sink.
///
/// A logger owns its sink, an enabled-level mask, an optional label, a
/// [`LevelRegistry`] seeded with the well-known levels, and a [`PrefixCache`].
/// Every write composes the prefix for the message level (see
/// [`compose_prefix`](crate::compose_prefix)); an empty prefix suppresses the
/// call, which then performs no write and returns `Ok(())`. Otherwise exactly
/// one `write_all` of `<prefix><body>\n` reaches the sink.
///
/// All state sits behind one mutex, so the logger can be shared across
/// threads and lines from concurrent callers never interleave. Operands are
/// rendered while the lock is held: a `Display` implementation passed to a
/// logger must not log through the same logger.
///
/// # Examples
///
/// ```
/// use bitlog::{LevelSet, Logger, infof};
///
/// let logger = Logger::new(Vec::new(), LevelSet::DEBUG | LevelSet::INFO);
/// infof!(logger, "Hello {:?}", "George")?;
/// logger.set_prefix("K8s");
/// logger.debugf(format_args!("ready"))?;
/// logger.errorf(format_args!("not written"))?;
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[INFO] Hello \"George\"\n[DEBUG][K8s] ready\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger<W> {
    inner: Mutex<Inner<W>>,
}

struct Inner<W> {
    sink: W,
    enabled: LevelSet,
    label: String,
    registry: LevelRegistry,
    cache: PrefixCache,
}

impl<W> Inner<W> {
    fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

impl<W> Logger<W> {
    /// Creates a logger writing to `sink` with the given enabled mask.
    ///
    /// An empty mask is replaced by [`LevelSet::DEFAULT`].
    #[must_use]
    pub fn new(sink: W, level: LevelSet) -> Self {
        Self::with_registry(sink, level, LevelRegistry::with_defaults())
    }

    /// Creates a logger with [`LevelSet::DEFAULT`] enabled.
    #[must_use]
    pub fn with_defaults(sink: W) -> Self {
        Self::new(sink, LevelSet::DEFAULT)
    }

    /// Creates a logger around an explicit registry.
    #[must_use]
    pub fn with_registry(sink: W, level: LevelSet, registry: LevelRegistry) -> Self {
        let enabled = if level.is_empty() {
            LevelSet::DEFAULT
        } else {
            level
        };
        Self {
            inner: Mutex::new(Inner {
                sink,
                enabled,
                label: String::new(),
                registry,
                cache: PrefixCache::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns the enabled mask.
    #[must_use]
    pub fn level(&self) -> LevelSet {
        self.lock().enabled
    }

    /// Replaces the enabled mask.
    ///
    /// Unlike construction, an empty mask is kept as is and disables every
    /// level.
    pub fn set_level(&self, level: LevelSet) {
        let mut inner = self.lock();
        inner.enabled = level;
        inner.invalidate();
    }

    /// Returns the static label written after the level names.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().label.clone()
    }

    /// Replaces the static label; an empty label removes it.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let mut inner = self.lock();
        inner.label = prefix.into();
        inner.invalidate();
    }

    /// Binds `name` to `level`. See [`LevelRegistry::register_level`].
    pub fn register_level(&self, level: LevelSet, name: &str) -> Result<(), RegistryError> {
        let result = {
            let mut inner = self.lock();
            let result = inner.registry.register_level(level, name);
            if result.is_ok() {
                inner.invalidate();
            }
            result
        };

        #[cfg(feature = "tracing")]
        match &result {
            Ok(()) => tracing::debug!(
                target: "bitlog::registry",
                level = level.bits(),
                name,
                "registered level"
            ),
            Err(error) => tracing::warn!(
                target: "bitlog::registry",
                %error,
                "rejected level registration"
            ),
        }

        result
    }

    /// Removes the entry for `level`, returning its name when present.
    pub fn unregister_level(&self, level: LevelSet) -> Option<String> {
        let removed = {
            let mut inner = self.lock();
            let removed = inner.registry.unregister_level(level);
            inner.invalidate();
            removed
        };

        #[cfg(feature = "tracing")]
        if let Some(name) = &removed {
            tracing::debug!(
                target: "bitlog::registry",
                level = level.bits(),
                name = name.as_str(),
                "unregistered level"
            );
        }

        removed
    }

    /// Returns the bit one position above the highest registered level.
    pub fn next_level_should_register(&self) -> Result<LevelSet, RegistryError> {
        self.lock().registry.next_level_should_register()
    }

    /// Registers `name` on the next free bit and returns that bit.
    ///
    /// The bit is chosen and bound under one lock, so concurrent callers
    /// always receive distinct bits.
    pub fn register_next_level(&self, name: &str) -> Result<LevelSet, RegistryError> {
        let result = {
            let mut inner = self.lock();
            let result = inner.registry.register_next_level(name);
            if result.is_ok() {
                inner.invalidate();
            }
            result
        };

        #[cfg(feature = "tracing")]
        match &result {
            Ok(level) => tracing::debug!(
                target: "bitlog::registry",
                level = level.bits(),
                name,
                "registered level"
            ),
            Err(error) => tracing::warn!(
                target: "bitlog::registry",
                %error,
                "rejected level registration"
            ),
        }

        result
    }

    /// Replaces the registry, mask and label in one step.
    pub(crate) fn replace_state(&self, registry: LevelRegistry, level: LevelSet, prefix: String) {
        let mut inner = self.lock();
        inner.registry = registry;
        inner.enabled = level;
        inner.label = prefix;
        inner.invalidate();
    }

    /// Highest registered level, or [`LevelSet::NONE`] when none is left.
    #[must_use]
    pub fn max_registered_level(&self) -> LevelSet {
        self.lock().registry.max_level()
    }

    /// Snapshot of the registry.
    #[must_use]
    pub fn registry(&self) -> LevelRegistry {
        self.lock().registry.clone()
    }

    /// Names of the registered levels that are currently enabled, in level
    /// order.
    #[must_use]
    pub fn level_names(&self) -> Vec<String> {
        let inner = self.lock();
        inner
            .registry
            .names_matching(inner.enabled)
            .map(str::to_owned)
            .collect()
    }

    /// Returns the full prefix that a message tagged `level` would receive.
    ///
    /// An empty string means such a message is suppressed.
    #[must_use]
    pub fn full_prefix(&self, level: LevelSet) -> String {
        let mut inner = self.lock();
        let Inner {
            enabled,
            label,
            registry,
            cache,
            ..
        } = &mut *inner;
        cache.lookup(registry, *enabled, level, label).to_owned()
    }

    /// Runs `f` against the sink while holding the logger lock.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock().sink)
    }

    /// Consumes the logger and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
            .sink
    }

    /// Returns an adapter bound to `level`.
    ///
    /// ```
    /// use bitlog::{LevelSet, Logger, args};
    ///
    /// let logger = Logger::new(Vec::new(), LevelSet::ALL);
    /// let audit = logger.register_next_level("AUDIT")?;
    /// logger.at(audit).print(args!["user ", "root", " logged in"])?;
    ///
    /// assert_eq!(logger.into_inner(), b"[AUDIT] user root logged in\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn at(&self, level: LevelSet) -> LevelLogger<'_, W> {
        LevelLogger::new(self, level)
    }
}

impl<W: Write> Logger<W> {
    fn write_with(&self, level: LevelSet, render: impl FnOnce() -> String) -> io::Result<()> {
        let mut inner = self.lock();
        let Inner {
            sink,
            enabled,
            label,
            registry,
            cache,
        } = &mut *inner;

        let prefix = cache.lookup(registry, *enabled, level, label);
        if prefix.is_empty() {
            return Ok(());
        }

        let body = render();
        let mut line = String::with_capacity(prefix.len() + body.len() + 1);
        line.push_str(prefix);
        line.push_str(&body);
        line.push('\n');
        sink.write_all(line.as_bytes())
    }

    fn fatal_with(&self, body: String) -> ! {
        let message = body.strip_suffix('\n').unwrap_or(&body).to_owned();
        let result = self.write_with(LevelSet::FATAL, || body);
        Fatal::new(message, result).raise()
    }

    /// Writes `args` at `level` using the plain strategy.
    pub fn at_level(&self, level: LevelSet, args: &[Arg<'_>]) -> io::Result<()> {
        self.write_with(level, || render_args(args, LineMode::WithoutNewline))
    }

    /// Writes `args` at `level` using the line strategy.
    pub fn at_levelln(&self, level: LevelSet, args: &[Arg<'_>]) -> io::Result<()> {
        self.write_with(level, || render_args(args, LineMode::WithNewline))
    }

    /// Writes formatted arguments at `level`.
    pub fn at_levelf(&self, level: LevelSet, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_with(level, || fmt::format(args))
    }

    /// Alias for [`info`](Self::info).
    pub fn print(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.info(args)
    }

    /// Alias for [`infoln`](Self::infoln).
    pub fn println(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.infoln(args)
    }

    /// Alias for [`infof`](Self::infof).
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.infof(args)
    }

    /// Writes at DEBUG using the plain strategy.
    pub fn debug(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_level(LevelSet::DEBUG, args)
    }

    /// Writes at INFO using the plain strategy.
    pub fn info(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_level(LevelSet::INFO, args)
    }

    /// Writes at WARN using the plain strategy.
    pub fn warn(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_level(LevelSet::WARN, args)
    }

    /// Writes at ERROR using the plain strategy.
    pub fn error(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_level(LevelSet::ERROR, args)
    }

    /// Writes at FATAL using the plain strategy, then unwinds with [`Fatal`].
    ///
    /// The unwind happens even when FATAL is not enabled.
    pub fn fatal(&self, args: &[Arg<'_>]) -> ! {
        self.fatal_with(render_args(args, LineMode::WithoutNewline))
    }

    /// Writes at DEBUG using the line strategy.
    pub fn debugln(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_levelln(LevelSet::DEBUG, args)
    }

    /// Writes at INFO using the line strategy.
    pub fn infoln(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_levelln(LevelSet::INFO, args)
    }

    /// Writes at WARN using the line strategy.
    pub fn warnln(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_levelln(LevelSet::WARN, args)
    }

    /// Writes at ERROR using the line strategy.
    pub fn errorln(&self, args: &[Arg<'_>]) -> io::Result<()> {
        self.at_levelln(LevelSet::ERROR, args)
    }

    /// Writes at FATAL using the line strategy, then unwinds with [`Fatal`].
    pub fn fatalln(&self, args: &[Arg<'_>]) -> ! {
        self.fatal_with(render_args(args, LineMode::WithNewline))
    }

    /// Writes formatted arguments at DEBUG.
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.at_levelf(LevelSet::DEBUG, args)
    }

    /// Writes formatted arguments at INFO.
    pub fn infof(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.at_levelf(LevelSet::INFO, args)
    }

    /// Writes formatted arguments at WARN.
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.at_levelf(LevelSet::WARN, args)
    }

    /// Writes formatted arguments at ERROR.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.at_levelf(LevelSet::ERROR, args)
    }

    /// Writes formatted arguments at FATAL, then unwinds with [`Fatal`].
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_with(fmt::format(args))
    }

    /// Returns a reusable plain-strategy writer bound to `level`.
    pub fn custom_log_at_level(
        &self,
        level: LevelSet,
    ) -> impl Fn(&[Arg<'_>]) -> io::Result<()> + '_ {
        let bound = self.at(level);
        move |args: &[Arg<'_>]| bound.print(args)
    }

    /// Returns a reusable line-strategy writer bound to `level`.
    pub fn custom_log_at_levelln(
        &self,
        level: LevelSet,
    ) -> impl Fn(&[Arg<'_>]) -> io::Result<()> + '_ {
        let bound = self.at(level);
        move |args: &[Arg<'_>]| bound.println(args)
    }

    /// Returns a reusable formatted writer bound to `level`.
    pub fn custom_log_at_levelf(
        &self,
        level: LevelSet,
    ) -> impl Fn(fmt::Arguments<'_>) -> io::Result<()> + '_ {
        let bound = self.at(level);
        move |args: fmt::Arguments<'_>| bound.printf(args)
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Logger")
            .field("level", &inner.enabled)
            .field("prefix", &inner.label)
            .field("registry", &inner.registry)
            .finish_non_exhaustive()
    }
}
