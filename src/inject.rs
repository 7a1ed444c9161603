use alloc::string::String;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    container::Container,
    errors::ResolveErrorKind,
    selector::Selector,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

enum State<Dep> {
    Unresolved,
    Resolved(RcThreadSafety<Dep>),
}

/// Lazily resolved dependency, meant to be kept as a field.
///
/// The first [`Inject::get`] resolves `Dep` from the container with the current selector,
/// later calls return the same instance. Changing the qualifier or registry drops the held
/// instance, so the next [`Inject::get`] resolves again with the new selector.
/// Instances already returned to the caller aren't affected.
///
/// The proxy owns what it resolved for as long as it lives, independently of the container's cache.
/// For [`crate::Scope::Retain`] this keeps the instance shared between resolves.
pub struct Inject<Dep> {
    container: Container,
    selector: Selector,
    state: Mutex<State<Dep>>,
}

impl<Dep: SendSafety + SyncSafety + 'static> Inject<Dep> {
    #[inline]
    #[must_use]
    pub fn new(container: &Container) -> Self {
        Self {
            container: container.clone(),
            selector: Selector::new(),
            state: Mutex::new(State::Unresolved),
        }
    }

    /// Creates proxy over [`Container::shared`]
    #[inline]
    #[must_use]
    #[cfg(feature = "thread_safe")]
    pub fn shared() -> Self {
        Self::new(&Container::shared())
    }

    #[inline]
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.selector = self.selector.with_qualifier(qualifier);
        *self.state.get_mut() = State::Unresolved;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.selector = self.selector.with_registry(registry);
        *self.state.get_mut() = State::Unresolved;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        *self.state.get_mut() = State::Unresolved;
        self
    }

    /// Returns the held instance, resolving it first if the proxy is unresolved.
    ///
    /// # Errors
    /// Returns the error of [`Container::resolve_with`], the proxy stays unresolved then.
    pub fn get(&self) -> Result<RcThreadSafety<Dep>, ResolveErrorKind> {
        let mut state = self.state.lock();
        if let State::Resolved(dependency) = &*state {
            return Ok(dependency.clone());
        }

        let dependency = self.container.resolve_with::<Dep>(&self.selector)?;
        *state = State::Resolved(dependency.clone());
        debug!(qualifier = self.selector.qualifier(), registry = self.selector.registry(), "Injected");

        Ok(dependency)
    }

    /// Points the proxy to another qualifier and drops the held instance
    pub fn set_qualifier(&mut self, qualifier: Option<&str>) {
        self.selector.set_qualifier(qualifier);
        *self.state.get_mut() = State::Unresolved;
    }

    /// Points the proxy to another registry and drops the held instance
    pub fn set_registry(&mut self, registry: &str) {
        self.selector.set_registry(registry);
        *self.state.get_mut() = State::Unresolved;
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(*self.state.lock(), State::Resolved(_))
    }

    #[inline]
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }
}
