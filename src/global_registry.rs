use log::debug;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use super::SymbolRegistry;

/// A lazily initialized, process-wide `SymbolRegistry`.
///
/// This type wraps the registry behind [`Symbol::for_key`] and
/// [`Symbol::key_for`]. The registry is created on first access from the
/// configuration set with [`set_registry_config`](crate::set_registry_config)
/// and lives until the process exits.
///
/// # Thread Safety
///
/// A single mutex guards both the forward and reverse mappings, and the
/// registry is initialized inside that same lock, so initialization happens
/// exactly once and a lookup-or-create is atomic with respect to every other
/// registry operation.
///
/// [`Symbol::for_key`]: crate::Symbol::for_key
/// [`Symbol::key_for`]: crate::Symbol::key_for
#[derive(Debug)]
pub struct LazySymbolRegistry {
    data: Mutex<Option<SymbolRegistry>>,
}

impl LazySymbolRegistry {
    /// Locks the global registry, initializing it if necessary.
    ///
    /// The registry stays locked until the returned guard is dropped. Keep
    /// the guard short-lived; [`Symbol::for_key`](crate::Symbol::for_key)
    /// and friends lock it internally and will block while it is held.
    pub fn lock(&self) -> MappedMutexGuard<'_, SymbolRegistry> {
        MutexGuard::map(self.data.lock(), |data| {
            data.get_or_insert_with(|| {
                let config = crate::registry_config::take_and_lock_config();
                let registry = SymbolRegistry::from_config(&config);
                debug!(
                    "initialized symbol registry with {} preset keys",
                    registry.len()
                );
                registry
            })
        })
    }

    /// Returns `true` if the registry has been initialized.
    ///
    /// Takes the registry lock, so it blocks while a guard returned by
    /// [`lock`](Self::lock) is held.
    pub fn is_initialized(&self) -> bool { self.data.lock().is_some() }
}

/// The global registry of published symbols.
///
/// This static instance backs [`Symbol::for_key`](crate::Symbol::for_key)
/// and [`Symbol::key_for`](crate::Symbol::key_for). It is lazily initialized
/// on first access and is never cleared.
///
/// # Examples
///
/// ```
/// use unique_symbol::*;
///
/// let sym = Symbol::for_key("app.ready");
///
/// // Access the global registry directly
/// let registry = SYMBOL_REGISTRY.lock();
/// assert_eq!(registry.key_for(&sym), Some("app.ready"));
/// ```
pub static SYMBOL_REGISTRY: LazySymbolRegistry =
    LazySymbolRegistry { data: Mutex::new(None) };
