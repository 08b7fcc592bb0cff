//! Configuration of the process-wide symbol registry.
//!
//! The global registry can be seeded with keys that are published as soon as
//! it is first touched, and can reserve room for the number of entries a
//! program expects. The configuration is taken when the registry initializes
//! and cannot be changed afterwards.

use log::debug;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Configuration for the process-wide symbol registry.
///
/// # Examples
///
/// ```
/// use unique_symbol::RegistryConfig;
///
/// let mut config = RegistryConfig::with_keys(["iterator", "toStringTag"])
///     .with_capacity(64);
/// config.add_key("species");
///
/// assert_eq!(config.keys(), ["iterator", "toStringTag", "species"]);
/// assert_eq!(config.capacity(), 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Keys published when the registry initializes, in order.
    keys: Vec<String>,
    /// Number of entries to reserve room for up front.
    capacity: usize,
}

impl RegistryConfig {
    /// Creates a configuration with no keys and no reserved capacity.
    pub fn new() -> Self { Self::default() }

    /// Creates a configuration that publishes `keys` on initialization.
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            capacity: 0,
        }
    }

    /// Sets the number of entries to reserve room for.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the keys to publish, in order.
    pub fn keys(&self) -> &[String] { &self.keys }

    /// Returns the reserved capacity.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Appends a key to publish on initialization.
    pub fn add_key(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }
}

/// Error returned when the registry configuration cannot be modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration was attempted after the global registry was initialized.
    #[error(
        "cannot modify registry configuration after SYMBOL_REGISTRY has been accessed"
    )]
    AlreadyInitialized,
}

// Global configuration state. `CONFIG_LOCKED` is only written while
// `CUSTOM_CONFIG` is held, so a setter can never race the registry's take.
static CUSTOM_CONFIG: Mutex<Option<RegistryConfig>> = Mutex::new(None);
static CONFIG_LOCKED: AtomicBool = AtomicBool::new(false);

/// Sets the configuration for the process-wide symbol registry.
///
/// This function must be called **before** the first access to
/// `SYMBOL_REGISTRY` (including any call to [`Symbol::for_key`],
/// [`Symbol::key_for`] or related functions). Once the registry is
/// accessed, the configuration is locked and cannot be changed.
///
/// # Errors
///
/// Returns `Err(ConfigError::AlreadyInitialized)` if the registry has
/// already been accessed.
///
/// # Examples
///
/// ```
/// use unique_symbol::{RegistryConfig, Symbol, set_registry_config};
///
/// set_registry_config(RegistryConfig::with_keys(["app.main"])).unwrap();
///
/// // The configured key was published on first access
/// assert!(Symbol::symbol_for("app.main").is_some());
///
/// // Too late to change it now
/// assert!(set_registry_config(RegistryConfig::new()).is_err());
/// ```
///
/// [`Symbol::for_key`]: crate::Symbol::for_key
/// [`Symbol::key_for`]: crate::Symbol::key_for
pub fn set_registry_config(config: RegistryConfig) -> Result<(), ConfigError> {
    let mut guard = CUSTOM_CONFIG.lock();
    if CONFIG_LOCKED.load(Ordering::SeqCst) {
        return Err(ConfigError::AlreadyInitialized);
    }
    debug!(
        "symbol registry configured with {} keys, capacity {}",
        config.keys().len(),
        config.capacity()
    );
    *guard = Some(config);
    Ok(())
}

/// Adds keys to be published when the process-wide registry initializes.
///
/// Keys are appended after any already configured. If no configuration has
/// been set, a default one is created first.
///
/// # Errors
///
/// Returns `Err(ConfigError::AlreadyInitialized)` if the registry has
/// already been accessed.
pub fn add_registry_keys<I, K>(keys: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut guard = CUSTOM_CONFIG.lock();
    if CONFIG_LOCKED.load(Ordering::SeqCst) {
        return Err(ConfigError::AlreadyInitialized);
    }
    let config = guard.get_or_insert_with(RegistryConfig::default);
    for key in keys {
        config.add_key(key);
    }
    debug!("symbol registry now configured with {} keys", config.keys().len());
    Ok(())
}

/// Takes the current configuration, locking it against future
/// modification.
///
/// This is called internally while `SYMBOL_REGISTRY` initializes.
pub(crate) fn take_and_lock_config() -> RegistryConfig {
    let mut guard = CUSTOM_CONFIG.lock();
    CONFIG_LOCKED.store(true, Ordering::SeqCst);
    guard.take().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let config = RegistryConfig::with_keys(vec!["a".to_string()])
            .with_capacity(8);
        assert_eq!(config.keys(), ["a"]);
        assert_eq!(config.capacity(), 8);
        assert_eq!(RegistryConfig::new(), RegistryConfig::default());
    }

    #[test]
    fn test_add_key_preserves_order() {
        let mut config = RegistryConfig::new();
        config.add_key("z");
        config.add_key(String::from("a"));
        assert_eq!(config.keys(), ["z", "a"]);
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            ConfigError::AlreadyInitialized.to_string(),
            "cannot modify registry configuration after SYMBOL_REGISTRY has been accessed"
        );
    }
}
