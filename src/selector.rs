use alloc::{borrow::ToOwned, string::String};

use crate::container::DEFAULT_REGISTRY;

/// Identifies a dependency record: optional qualifier and registry name.
///
/// Defaults to the unqualified record in the [`DEFAULT_REGISTRY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    qualifier: Option<String>,
    registry: String,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            qualifier: None,
            registry: DEFAULT_REGISTRY.to_owned(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &str {
        &self.registry
    }

    #[inline]
    pub(crate) fn set_qualifier(&mut self, qualifier: Option<&str>) {
        self.qualifier = qualifier.map(ToOwned::to_owned);
    }

    #[inline]
    pub(crate) fn set_registry(&mut self, registry: &str) {
        registry.clone_into(&mut self.registry);
    }

    #[inline]
    #[must_use]
    pub(crate) fn into_parts(self) -> (Option<String>, String) {
        (self.qualifier, self.registry)
    }
}
