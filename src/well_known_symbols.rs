use std::ops::Deref;
use std::sync::OnceLock;

use super::Symbol;

/// A predefined, process-wide symbol that is not published in the registry.
///
/// Each `WellKnownSymbol` resolves to one `Symbol` the first time it is used
/// and to that same symbol ever after. It dereferences to [`Symbol`].
#[derive(Debug)]
pub struct WellKnownSymbol {
    name: &'static str,
    description: &'static str,
    symbol: OnceLock<Symbol>,
}

impl WellKnownSymbol {
    /// Declares a well-known symbol. Prefer [`well_known_symbol!`].
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description, symbol: OnceLock::new() }
    }

    /// Returns the short name, e.g. `"iterator"`.
    pub fn name(&self) -> &'static str { self.name }

    /// Returns the symbol, creating it on first use.
    pub fn get(&self) -> &Symbol {
        self.symbol.get_or_init(|| Symbol::new(self.description))
    }

    /// Returns `true` if `symbol` is this well-known symbol.
    ///
    /// Does not create the symbol: if it was never used, nothing can equal
    /// it yet.
    pub(crate) fn is(&self, symbol: &Symbol) -> bool {
        self.symbol.get().is_some_and(|own| own == symbol)
    }
}

impl Deref for WellKnownSymbol {
    type Target = Symbol;

    fn deref(&self) -> &Symbol { self.get() }
}

/// A macro that declares a well-known symbol.
///
/// This macro creates two items:
/// - A `&str` constant with the suffix `_DESCRIPTION`, holding
///   `"Symbol.<name>"`
/// - A [`WellKnownSymbol`] static with the given name
///
/// This is used internally to define the standard well-known symbols.
///
/// # Examples
///
/// ```
/// use unique_symbol::*;
///
/// // Define a custom well-known symbol
/// well_known_symbol!(DISPOSE, "dispose");
///
/// assert_eq!(DISPOSE_DESCRIPTION, "Symbol.dispose");
/// assert_eq!(DISPOSE.name(), "dispose");
/// assert_eq!(DISPOSE.description(), "Symbol.dispose");
/// assert_eq!(*DISPOSE.get(), *DISPOSE.get());
/// assert_eq!(Symbol::key_for(&DISPOSE), None);
/// ```
#[macro_export]
macro_rules! well_known_symbol {
    ($const_name:ident, $name:literal) => {
        $crate::paste::paste! {
            pub const [<$const_name _DESCRIPTION>]: &str = concat!("Symbol.", $name);
            pub static $const_name: $crate::WellKnownSymbol =
                $crate::WellKnownSymbol::new($name, [<$const_name _DESCRIPTION>]);
        }
    };
}

// For definitions see: https://tc39.es/ecma262/#sec-well-known-symbols

well_known_symbol!(ASYNC_ITERATOR, "asyncIterator");
well_known_symbol!(HAS_INSTANCE, "hasInstance");
well_known_symbol!(IS_CONCAT_SPREADABLE, "isConcatSpreadable");
well_known_symbol!(ITERATOR, "iterator");
well_known_symbol!(MATCH, "match");
well_known_symbol!(MATCH_ALL, "matchAll");
well_known_symbol!(REPLACE, "replace");
well_known_symbol!(SEARCH, "search");
well_known_symbol!(SPECIES, "species");
well_known_symbol!(SPLIT, "split");
well_known_symbol!(TO_PRIMITIVE, "toPrimitive");
well_known_symbol!(TO_STRING_TAG, "toStringTag");
well_known_symbol!(UNSCOPABLES, "unscopables");

/// Returns every standard well-known symbol, in alphabetical order of name.
pub fn well_known_symbols() -> [&'static WellKnownSymbol; 13] {
    [
        &ASYNC_ITERATOR,
        &HAS_INSTANCE,
        &IS_CONCAT_SPREADABLE,
        &ITERATOR,
        &MATCH,
        &MATCH_ALL,
        &REPLACE,
        &SEARCH,
        &SPECIES,
        &SPLIT,
        &TO_PRIMITIVE,
        &TO_STRING_TAG,
        &UNSCOPABLES,
    ]
}

/// Looks up a standard well-known symbol by its short name.
///
/// # Examples
///
/// ```
/// use unique_symbol::*;
///
/// let iterator = well_known_symbol_named("iterator").unwrap();
/// assert_eq!(iterator, ITERATOR.get());
/// assert_eq!(iterator.description(), "Symbol.iterator");
///
/// assert!(well_known_symbol_named("Symbol.iterator").is_none());
/// ```
pub fn well_known_symbol_named(name: &str) -> Option<&'static Symbol> {
    well_known_symbols()
        .into_iter()
        .find(|well_known| well_known.name() == name)
        .map(WellKnownSymbol::get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_symbols_are_stable() {
        let first = ITERATOR.get().clone();
        assert_eq!(&first, ITERATOR.get());
        assert_eq!(first.description(), "Symbol.iterator");
        assert_eq!(ITERATOR_DESCRIPTION, "Symbol.iterator");
    }

    #[test]
    fn test_well_known_symbols_are_distinct() {
        let all = well_known_symbols();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.get(), b.get());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_is_well_known() {
        assert!(SPECIES.get().is_well_known());
        assert!(!Symbol::new("Symbol.species").is_well_known());
    }

    #[test]
    fn test_unknown_name() {
        assert!(well_known_symbol_named("nope").is_none());
        assert_eq!(
            well_known_symbol_named("toPrimitive"),
            Some(TO_PRIMITIVE.get())
        );
    }
}
