use alloc::string::String;

use crate::{scope::Scope, selector::Selector};

/// Registration options
/// ## Fields
/// - `scope`:
///   Lifetime policy of the provided instance, [`Scope::Global`] by default.
/// - `selector`:
///   Qualifier and registry the factory is registered under.
///   The same selector resolves it later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub scope: Scope,
    pub selector: Selector,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.selector = self.selector.with_qualifier(qualifier);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.selector = self.selector.with_registry(registry);
        self
    }
}

impl From<Scope> for Config {
    fn from(scope: Scope) -> Self {
        Self {
            scope,
            selector: Selector::new(),
        }
    }
}
