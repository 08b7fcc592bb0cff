use bimap::{BiHashMap, Overwritten};
use log::trace;

use super::{RegistryConfig, Symbol};

/// A store that maps between string keys and the symbols published under
/// them.
///
/// The `SymbolRegistry` provides a bidirectional mapping between:
/// - String keys and the Symbol instances registered under them
/// - Symbol instances and the key each was registered under
///
/// Both directions live in a single [`BiHashMap`], so a key maps to at most
/// one symbol, a symbol maps back to exactly the key it was inserted with,
/// and the two directions can never disagree. Entries are only ever added.
///
/// The process-wide registry behind [`Symbol::for_key`] is one of these,
/// guarded by a lock (see [`SYMBOL_REGISTRY`](crate::SYMBOL_REGISTRY)). A
/// standalone `SymbolRegistry` is useful where a scoped, non-global set of
/// published symbols is wanted.
///
/// # Examples
///
/// ```
/// use unique_symbol::{Symbol, SymbolRegistry};
///
/// let mut registry = SymbolRegistry::new();
///
/// // Look up or create a symbol by key
/// let a = registry.for_key("iterator");
/// let b = registry.for_key("iterator");
/// assert_eq!(a, b);
///
/// // Find the key for a symbol
/// assert_eq!(registry.key_for(&a), Some("iterator"));
///
/// // Plain symbols are never registered
/// let plain = Symbol::new("iterator");
/// assert_ne!(a, plain);
/// assert_eq!(registry.key_for(&plain), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    symbols_by_key: BiHashMap<String, Symbol>,
}

impl SymbolRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self { Self::default() }

    /// Creates a new, empty registry with room for at least `capacity`
    /// entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { symbols_by_key: BiHashMap::with_capacity(capacity) }
    }

    /// Creates a registry with every key of `config` already published.
    ///
    /// Keys are published in order; repeated keys collapse to a single entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::{RegistryConfig, SymbolRegistry};
    ///
    /// let config = RegistryConfig::with_keys(["a", "b", "a"]);
    /// let registry = SymbolRegistry::from_config(&config);
    ///
    /// assert_eq!(registry.len(), 2);
    /// assert!(registry.contains_key("a"));
    /// assert!(registry.contains_key("b"));
    /// ```
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry =
            Self::with_capacity(config.capacity().max(config.keys().len()));
        for key in config.keys() {
            registry.for_key(key);
        }
        registry
    }

    /// Returns the symbol registered under `key`, creating and registering a
    /// new symbol described by `key` if none exists.
    ///
    /// A hit returns the stored symbol unchanged; nothing is allocated and
    /// the registry is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::SymbolRegistry;
    ///
    /// let mut registry = SymbolRegistry::default();
    /// let empty = registry.for_key("");
    /// assert_eq!(empty.description(), "");
    /// assert_eq!(registry.key_for(&empty), Some(""));
    /// assert_eq!(registry.for_key(""), empty);
    /// ```
    pub fn for_key(&mut self, key: &str) -> Symbol {
        if let Some(symbol) = self.symbols_by_key.get_by_left(key) {
            return symbol.clone();
        }

        let symbol = Symbol::new(key);
        let overwritten =
            self.symbols_by_key.insert(key.to_string(), symbol.clone());
        // The key was absent and the symbol is brand new.
        debug_assert!(matches!(overwritten, Overwritten::Neither));
        trace!("registered {:?} under key {:?}", symbol, key);
        symbol
    }

    /// Returns the key `symbol` was registered under, if it is present in
    /// this registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::{Symbol, SymbolRegistry};
    ///
    /// let mut registry = SymbolRegistry::new();
    /// let sym = registry.for_key("toStringTag");
    ///
    /// assert_eq!(registry.key_for(&sym), Some("toStringTag"));
    /// assert_eq!(registry.key_for(&Symbol::new("toStringTag")), None);
    /// ```
    pub fn key_for(&self, symbol: &Symbol) -> Option<&str> {
        self.symbols_by_key.get_by_right(symbol).map(String::as_str)
    }

    /// Returns the symbol registered under `key` without creating one.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::SymbolRegistry;
    ///
    /// let mut registry = SymbolRegistry::new();
    /// assert!(registry.symbol_for("species").is_none());
    ///
    /// let sym = registry.for_key("species");
    /// assert_eq!(registry.symbol_for("species"), Some(&sym));
    /// ```
    pub fn symbol_for(&self, key: &str) -> Option<&Symbol> {
        self.symbols_by_key.get_by_left(key)
    }

    /// Returns `true` if a symbol is registered under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.symbols_by_key.contains_left(key)
    }

    /// Returns `true` if `symbol` is registered in this registry.
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.symbols_by_key.contains_right(symbol)
    }

    /// Returns the number of registered symbols.
    pub fn len(&self) -> usize { self.symbols_by_key.len() }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool { self.symbols_by_key.is_empty() }

    /// Returns an iterator over the registered keys, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.symbols_by_key.iter().map(|(key, _)| key.as_str())
    }

    /// Returns an iterator over the registered `(key, symbol)` pairs, in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols_by_key
            .iter()
            .map(|(key, symbol)| (key.as_str(), symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_key_is_idempotent() {
        let mut registry = SymbolRegistry::new();
        let a = registry.for_key("k");
        let b = registry.for_key("k");
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_keys_get_distinct_symbols() {
        let mut registry = SymbolRegistry::new();
        let a = registry.for_key("a");
        let b = registry.for_key("b");
        assert_ne!(a, b);
        assert_eq!(registry.key_for(&a), Some("a"));
        assert_eq!(registry.key_for(&b), Some("b"));
    }

    #[test]
    fn test_directions_agree() {
        let mut registry = SymbolRegistry::new();
        for key in ["", "x", "y", "x", "Symbol.iterator"] {
            registry.for_key(key);
        }
        assert_eq!(registry.len(), 4);
        for (key, symbol) in registry.iter() {
            assert_eq!(registry.key_for(symbol), Some(key));
            assert_eq!(registry.symbol_for(key), Some(symbol));
            assert_eq!(symbol.description(), key);
        }
    }

    #[test]
    fn test_unregistered_symbol_is_absent() {
        let mut registry = SymbolRegistry::new();
        registry.for_key("present");
        let plain = Symbol::new("present");
        assert!(!registry.contains_symbol(&plain));
        assert_eq!(registry.key_for(&plain), None);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let registry = SymbolRegistry::new();
        assert!(registry.symbol_for("missing").is_none());
        assert!(!registry.contains_key("missing"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = SymbolRegistry::new();
        let mut second = SymbolRegistry::new();
        let a = first.for_key("k");
        let b = second.for_key("k");
        assert_ne!(a, b);
        assert_eq!(second.key_for(&a), None);
    }

    #[test]
    fn test_clone_shares_symbols() {
        let mut registry = SymbolRegistry::new();
        let a = registry.for_key("k");
        let mut copy = registry.clone();
        assert_eq!(copy.for_key("k"), a);
        copy.for_key("only-in-copy");
        assert!(!registry.contains_key("only-in-copy"));
    }

    #[test]
    fn test_keys() {
        let registry =
            SymbolRegistry::from_config(&RegistryConfig::with_keys(["b", "a"]));
        let mut keys: Vec<&str> = registry.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
