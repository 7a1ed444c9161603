//! Typed dependency container with named registries.
//!
//! Factories are registered per type, optional qualifier and registry name, under one of three
//! [`Scope`]s. [`Container::resolve`] returns the instance the scope allows: the cached one, or a new one.
//! [`Inject`] is a lazily resolved handle to keep as a field.
#![no_std]

extern crate alloc;

mod macros;

pub(crate) mod any;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod errors;
pub(crate) mod factory;
pub(crate) mod inject;
pub(crate) mod key;
pub(crate) mod record;
pub(crate) mod registry;
pub(crate) mod retention;
pub(crate) mod scope;
pub(crate) mod selector;

pub mod utils;

pub use any::TypeInfo;
pub use config::Config;
pub use container::{Container, DEFAULT_REGISTRY, PRIVATE_REGISTRY};
pub use errors::{FactoryResult, InstantiateErrorKind, ResolveErrorKind};
pub use factory::Factory;
pub use inject::Inject;
pub use retention::Retention;
pub use scope::Scope;
pub use selector::Selector;
