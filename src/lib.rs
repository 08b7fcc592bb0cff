//! Unique Symbols: values whose only meaning is their identity.
//!
//! This crate provides [`Symbol`], a value type modeled on the ECMAScript
//! `Symbol` primitive. Every symbol is distinct from every other symbol ever
//! created, even when two symbols carry the same description. Symbols can
//! also be published under a string key in a process-wide registry, so that
//! unrelated code can retrieve the same symbol by key instead of by
//! reference.
//!
//! # Basic Usage
//!
//! ```rust
//! use unique_symbol::{Symbol, ITERATOR};
//!
//! // Every new symbol is unique
//! let a = Symbol::new("token");
//! let b = Symbol::new("token");
//! assert_ne!(a, b);
//!
//! // Registered symbols are shared by key
//! let shared = Symbol::for_key("app.token");
//! assert_eq!(shared, Symbol::for_key("app.token"));
//! assert_eq!(Symbol::key_for(&shared).as_deref(), Some("app.token"));
//! assert_eq!(Symbol::key_for(&a), None);
//!
//! // Well-known symbols are process-wide but never registered
//! assert_eq!(ITERATOR.description(), "Symbol.iterator");
//! assert_eq!(Symbol::key_for(&ITERATOR), None);
//! ```
//!
//! # The Global Registry
//!
//! On first access to [`SYMBOL_REGISTRY`] (directly, or through
//! [`Symbol::for_key`] and related functions), the crate:
//! 1. Takes the configuration set with [`set_registry_config`] or
//!    [`add_registry_keys`], locking it against further changes
//! 2. Publishes each configured key, in order
//!
//! Entries are never removed. The registry lives in memory only and is not
//! shared between processes.
//!
//! ## Custom Configuration
//!
//! Configure the registry before first access:
//!
//! ```rust
//! use unique_symbol::{set_registry_config, RegistryConfig, Symbol};
//!
//! set_registry_config(
//!     RegistryConfig::with_keys(["app.start", "app.stop"]).with_capacity(256),
//! )
//! .unwrap();
//!
//! assert!(Symbol::symbol_for("app.start").is_some());
//! ```
//!
//! ## Scoped Registries
//!
//! A [`SymbolRegistry`] can also be used on its own when symbols should be
//! shared by key within a narrower scope than the whole process.

mod symbol;
pub use symbol::Symbol;

mod symbol_registry;
pub use symbol_registry::SymbolRegistry;

mod global_registry;
pub use global_registry::*;

mod registry_config;
pub use registry_config::{
    ConfigError, RegistryConfig, add_registry_keys, set_registry_config,
};

mod well_known_symbols;
pub use well_known_symbols::*;

#[doc(hidden)]
pub use paste;
