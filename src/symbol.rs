use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::Chars;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of per-instance identity tokens. Never reused within a process.
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A value that is guaranteed to be unique.
///
/// A `Symbol` carries a human-readable description, but its identity is
/// independent of that description: two symbols constructed with the same
/// description are never equal. Cloning a `Symbol` does not create a new
/// symbol; it produces another handle to the same instance, and the two
/// handles compare equal.
///
/// Symbols published in the process-wide registry via [`Symbol::for_key`]
/// can be retrieved again by key from anywhere in the program.
///
/// # Examples
///
/// ```
/// use unique_symbol::Symbol;
///
/// let a = Symbol::new("token");
/// let b = Symbol::new("token");
///
/// // Same description, different identities
/// assert_ne!(a, b);
/// assert_eq!(a.description(), b.description());
///
/// // A clone is the same symbol
/// let c = a.clone();
/// assert_eq!(a, c);
///
/// // Text and debug forms
/// assert_eq!(a.to_string(), "token");
/// assert_eq!(format!("{:?}", a), r#"Symbol("token")"#);
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

struct SymbolData {
    id: u64,
    description: Box<str>,
}

impl Symbol {
    /// Creates a new, unique symbol with the given description.
    ///
    /// Construction never consults the registry, so the result is never
    /// registered, even when its description equals a registered key.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::Symbol;
    ///
    /// let sym = Symbol::new("iterator");
    /// assert_eq!(sym.description(), "iterator");
    /// assert_eq!(Symbol::key_for(&sym), None);
    /// ```
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(SymbolData {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.into().into_boxed_str(),
        }))
    }

    /// Creates a new, unique symbol with an empty description.
    pub fn anonymous() -> Self { Self::new(String::new()) }

    /// Returns the description this symbol was created with.
    pub fn description(&self) -> &str { &self.0.description }

    /// Returns the identity token of this symbol.
    ///
    /// The token is assigned at construction and is distinct for every
    /// symbol created in the process. It is the only input to [`Hash`].
    pub fn id(&self) -> u64 { self.0.id }

    /// Returns the number of characters in the description.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::Symbol;
    ///
    /// assert_eq!(Symbol::new("héllo").len(), 5);
    /// assert_eq!(Symbol::anonymous().len(), 0);
    /// ```
    pub fn len(&self) -> usize { self.0.description.chars().count() }

    /// Returns `true` if the description is empty.
    pub fn is_empty(&self) -> bool { self.0.description.is_empty() }

    /// Returns an iterator over the characters of the description.
    ///
    /// Each call starts a fresh iteration from the first character.
    pub fn chars(&self) -> Chars<'_> { self.0.description.chars() }

    /// Returns `true` if `needle` occurs in the description.
    ///
    /// This is a view over the description only and says nothing about
    /// identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::Symbol;
    ///
    /// let sym = Symbol::new("asyncIterator");
    /// assert!(sym.contains("Iter"));
    /// assert!(sym.contains(""));
    /// assert!(!sym.contains("iterator"));
    /// ```
    pub fn contains(&self, needle: &str) -> bool {
        self.0.description.contains(needle)
    }

    /// Returns the symbol registered under `key`, creating and registering a
    /// new one if the key is not yet present.
    ///
    /// The new symbol's description is `key`. Repeated calls with the same key
    /// always return the same symbol, from any thread.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::Symbol;
    ///
    /// let a = Symbol::for_key("app.id");
    /// let b = Symbol::for_key("app.id");
    /// assert_eq!(a, b);
    /// assert_ne!(a, Symbol::new("app.id"));
    /// ```
    pub fn for_key(key: &str) -> Symbol { crate::SYMBOL_REGISTRY.lock().for_key(key) }

    /// Returns the key under which `symbol` is registered, or `None` if it
    /// was never published in the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use unique_symbol::Symbol;
    ///
    /// let shared = Symbol::for_key("app.name");
    /// assert_eq!(Symbol::key_for(&shared).as_deref(), Some("app.name"));
    ///
    /// let local = Symbol::new("app.name");
    /// assert_eq!(Symbol::key_for(&local), None);
    /// ```
    pub fn key_for(symbol: &Symbol) -> Option<String> {
        crate::SYMBOL_REGISTRY
            .lock()
            .key_for(symbol)
            .map(str::to_string)
    }

    /// Returns the symbol registered under `key` without registering a new
    /// one.
    pub fn symbol_for(key: &str) -> Option<Symbol> {
        crate::SYMBOL_REGISTRY.lock().symbol_for(key).cloned()
    }

    /// Returns `true` if this symbol is published in the global registry.
    pub fn is_registered(&self) -> bool {
        crate::SYMBOL_REGISTRY.lock().contains_symbol(self)
    }

    /// Returns `true` if this symbol is one of the predefined well-known
    /// symbols such as [`ITERATOR`](crate::ITERATOR).
    pub fn is_well_known(&self) -> bool {
        crate::well_known_symbols()
            .iter()
            .any(|well_known| well_known.is(self))
    }
}

impl Default for Symbol {
    fn default() -> Self { Self::anonymous() }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl Eq for Symbol {}

// Only the identity token is hashed. No `Borrow<str>`: lookups by content
// must never find a symbol.
impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) { self.0.id.hash(state); }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.description)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", &*self.0.description)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str { &self.0.description }
}

impl<'a> IntoIterator for &'a Symbol {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter { self.chars() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new("x");
        let b = Symbol::new("x");
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_eq!(b, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_is_same_symbol() {
        let a = Symbol::new("x");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_hash_set_uses_identity() {
        let a = Symbol::new("dup");
        let b = Symbol::new("dup");
        let set: HashSet<Symbol> = [a.clone(), b.clone(), a.clone()].into();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
        assert!(set.contains(&b));
        assert!(!set.contains(&Symbol::new("dup")));
    }

    #[test]
    fn test_display_and_debug() {
        let sym = Symbol::new("it's \"quoted\"");
        assert_eq!(sym.to_string(), "it's \"quoted\"");
        assert_eq!(format!("{:?}", sym), r#"Symbol("it's \"quoted\"")"#);
        assert_eq!(format!("{:?}", Symbol::anonymous()), r#"Symbol("")"#);
    }

    #[test]
    fn test_default_is_anonymous_and_unique() {
        let a = Symbol::default();
        let b = Symbol::default();
        assert!(a.is_empty());
        assert_eq!(a.description(), "");
        assert_ne!(a, b);
    }

    #[test]
    fn test_character_view() {
        let sym = Symbol::new("añb");
        assert_eq!(sym.len(), 3);
        assert_eq!(sym.chars().collect::<String>(), "añb");
        // Restartable
        assert_eq!(sym.chars().count(), sym.chars().count());
        let collected: Vec<char> = (&sym).into_iter().collect();
        assert_eq!(collected, vec!['a', 'ñ', 'b']);
        assert!(sym.contains("ñb"));
        assert!(!sym.contains("ba"));
    }

    #[test]
    fn test_symbol_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Symbol>();
    }
}
