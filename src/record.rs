use parking_lot::Mutex;

use crate::{
    any::TypeInfo,
    factory::BoxCloneFactory,
    retention::{Cached, Retention},
    scope::Scope,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety},
};

/// Factory registered under one key, with its scope and cached instance.
pub(crate) struct DependencyRecord {
    pub(crate) factory: BoxCloneFactory,
    pub(crate) provides: TypeInfo,
    pub(crate) scope: Scope,
    /// Registration number, changes when the key is registered again.
    pub(crate) generation: u64,
    cached: Option<Cached>,
    /// Serializes factory calls of caching scopes, `None` for [`Scope::Property`].
    instantiation: Option<RcThreadSafety<Mutex<()>>>,
}

impl DependencyRecord {
    #[inline]
    #[must_use]
    pub(crate) fn new(factory: BoxCloneFactory, provides: TypeInfo, scope: Scope, generation: u64) -> Self {
        Self {
            factory,
            provides,
            scope,
            generation,
            cached: None,
            instantiation: scope.retention().map(|_| RcThreadSafety::new(Mutex::new(()))),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn retention(&self) -> Option<Retention> {
        self.scope.retention()
    }

    #[inline]
    #[must_use]
    pub(crate) fn instantiation_lock(&self) -> Option<RcThreadSafety<Mutex<()>>> {
        self.instantiation.clone()
    }

    /// Returns the cached instance if there is one and it's still alive.
    #[inline]
    #[must_use]
    pub(crate) fn cached(&self) -> Option<RcAnyThreadSafety> {
        self.cached.as_ref().and_then(Cached::upgrade)
    }

    /// Returns `true` if an instance was cached and its external owners dropped it since
    #[inline]
    #[must_use]
    pub(crate) fn is_expired(&self) -> bool {
        self.cached.as_ref().is_some_and(|cached| !cached.is_alive())
    }

    /// Caches the instance per the scope's retention strategy.
    /// Returns `false` if the scope doesn't cache.
    pub(crate) fn cache(&mut self, instance: &RcAnyThreadSafety) -> bool {
        match self.retention() {
            Some(retention) => {
                self.cached = Some(retention.hold(instance));
                true
            }
            None => false,
        }
    }
}
