//! crates/logging/src/registry.rs
//! Runtime table binding level bits to display names.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::level::LevelSet;

/// Mapping from level bits to display names.
///
/// Both keys and names are unique. A fresh registry built with
/// [`with_defaults`](Self::with_defaults) carries the five well-known levels;
/// further levels can be added at runtime, either on an explicit bit or on the
/// next free bit via [`register_next_level`](Self::register_next_level).
///
/// Registering a value with more than one bit set is accepted but makes the
/// composed prefixes hard to read, because such an entry matches any message
/// sharing one of its bits.
///
/// # Examples
///
/// ```
/// use bitlog::{LevelRegistry, LevelSet};
///
/// let mut registry = LevelRegistry::with_defaults();
/// let comets = registry.register_next_level("COMETS")?;
/// assert_eq!(comets, LevelSet::from_bits(32));
/// assert_eq!(registry.name_of(comets), Some("COMETS"));
/// # Ok::<(), bitlog::RegistryError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelRegistry {
    names: BTreeMap<LevelSet, String>,
}

impl LevelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with DEBUG, INFO, WARNING, ERROR and FATAL.
    #[must_use]
    pub fn with_defaults() -> Self {
        let names = LevelSet::WELL_KNOWN
            .iter()
            .map(|&(level, name)| (level, name.to_owned()))
            .collect();
        Self { names }
    }

    /// Binds `name` to `level`.
    ///
    /// Fails with [`RegistryError::DuplicateName`] when `name` is already in
    /// use and with [`RegistryError::DuplicateLevel`] when `level` already has
    /// a name. The registry is left untouched on failure.
    pub fn register_level(
        &mut self,
        level: LevelSet,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if let Some(existing) = self.level_of(&name) {
            return Err(RegistryError::DuplicateName {
                name,
                existing,
                requested: level,
            });
        }
        if let Some(existing) = self.names.get(&level) {
            return Err(RegistryError::DuplicateLevel {
                level,
                existing: existing.clone(),
                requested: name,
            });
        }
        self.names.insert(level, name);
        Ok(())
    }

    /// Removes the entry for `level`, returning its name when present.
    pub fn unregister_level(&mut self, level: LevelSet) -> Option<String> {
        self.names.remove(&level)
    }

    /// Returns the bit one position above the highest registered level.
    ///
    /// An empty registry yields `1`. Fails with
    /// [`RegistryError::LevelsExhausted`] once the highest registered level
    /// already uses the top bit of the `u64`.
    pub fn next_level_should_register(&self) -> Result<LevelSet, RegistryError> {
        let highest = self.max_level();
        let bit_length = highest.bit_length();
        if bit_length < u64::BITS {
            Ok(LevelSet::from_bits(1 << bit_length))
        } else {
            Err(RegistryError::LevelsExhausted { highest })
        }
    }

    /// Registers `name` on the next free bit and returns that bit.
    pub fn register_next_level(
        &mut self,
        name: impl Into<String>,
    ) -> Result<LevelSet, RegistryError> {
        let level = self.next_level_should_register()?;
        self.register_level(level, name)?;
        Ok(level)
    }

    /// Highest registered level, or [`LevelSet::NONE`] when empty.
    #[must_use]
    pub fn max_level(&self) -> LevelSet {
        self.names
            .keys()
            .next_back()
            .copied()
            .unwrap_or(LevelSet::NONE)
    }

    /// Name registered for `level`.
    #[must_use]
    pub fn name_of(&self, level: LevelSet) -> Option<&str> {
        self.names.get(&level).map(String::as_str)
    }

    /// Level registered under `name` (case-sensitive).
    #[must_use]
    pub fn level_of(&self, name: &str) -> Option<LevelSet> {
        self.names
            .iter()
            .find(|(_, registered)| registered.as_str() == name)
            .map(|(&level, _)| level)
    }

    /// Union of every registered level.
    #[must_use]
    pub fn registered(&self) -> LevelSet {
        self.names.keys().copied().collect()
    }

    /// Iterates over `(level, name)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (LevelSet, &str)> + '_ {
        self.names
            .iter()
            .map(|(&level, name)| (level, name.as_str()))
    }

    /// Names of registered levels with at least one bit in `filter`, in
    /// ascending level order.
    pub fn names_matching(&self, filter: LevelSet) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(move |&(level, _)| level.intersects(filter))
            .map(|(_, name)| name)
    }

    /// Number of registered levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no level is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_seeded() {
        let registry = LevelRegistry::with_defaults();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.name_of(LevelSet::DEBUG), Some("DEBUG"));
        assert_eq!(registry.name_of(LevelSet::WARN), Some("WARNING"));
        assert_eq!(registry.level_of("FATAL"), Some(LevelSet::FATAL));
        assert_eq!(registry.registered().bits(), 0b11111);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = LevelRegistry::with_defaults();
        let err = registry
            .register_level(LevelSet::from_bits(64), "INFO")
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "INFO".to_owned(),
                existing: LevelSet::INFO,
                requested: LevelSet::from_bits(64),
            }
        );
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn duplicate_level_is_rejected() {
        let mut registry = LevelRegistry::with_defaults();
        let err = registry
            .register_level(LevelSet::ERROR, "OOPS")
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateLevel {
                level: LevelSet::ERROR,
                existing: "ERROR".to_owned(),
                requested: "OOPS".to_owned(),
            }
        );
        assert_eq!(registry.name_of(LevelSet::ERROR), Some("ERROR"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut registry = LevelRegistry::with_defaults();
        registry
            .register_level(LevelSet::from_bits(32), "info")
            .expect("lowercase name is distinct");
        assert_eq!(registry.level_of("info"), Some(LevelSet::from_bits(32)));
    }

    #[test]
    fn unregister_missing_level_is_a_noop() {
        let mut registry = LevelRegistry::with_defaults();
        assert_eq!(registry.unregister_level(LevelSet::from_bits(1 << 40)), None);
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.unregister_level(LevelSet::DEBUG).as_deref(),
            Some("DEBUG")
        );
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn next_level_follows_highest_bit() {
        let mut registry = LevelRegistry::with_defaults();
        assert_eq!(
            registry.next_level_should_register(),
            Ok(LevelSet::from_bits(32))
        );

        registry
            .register_level(LevelSet::from_bits(0x10000000), "COMETS")
            .unwrap();
        assert_eq!(
            registry.next_level_should_register(),
            Ok(LevelSet::from_bits(0x20000000))
        );
    }

    #[test]
    fn next_level_on_empty_registry_is_one() {
        assert_eq!(
            LevelRegistry::new().next_level_should_register(),
            Ok(LevelSet::from_bits(1))
        );
    }

    #[test]
    fn next_level_fails_when_top_bit_is_taken() {
        let mut registry = LevelRegistry::with_defaults();
        registry
            .register_level(LevelSet::from_bits(1 << 63), "TOP")
            .unwrap();
        assert_eq!(
            registry.register_next_level("OVERFLOW"),
            Err(RegistryError::LevelsExhausted {
                highest: LevelSet::from_bits(1 << 63),
            })
        );
        assert_eq!(registry.level_of("OVERFLOW"), None);
    }

    #[test]
    fn register_next_level_fills_up_to_the_top_bit() {
        let mut registry = LevelRegistry::with_defaults();
        for i in 5..64 {
            let level = registry.register_next_level(format!("L{i}")).unwrap();
            assert_eq!(level.bits(), 1 << i);
        }
        assert!(registry.register_next_level("L64").is_err());
        assert_eq!(registry.len(), 64);
    }

    #[test]
    fn names_matching_filters_by_intersection() {
        let registry = LevelRegistry::with_defaults();
        let names: Vec<_> = registry
            .names_matching(LevelSet::DEBUG | LevelSet::ERROR)
            .collect();
        assert_eq!(names, vec!["DEBUG", "ERROR"]);
    }
}
