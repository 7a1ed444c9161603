use alloc::{
    borrow::ToOwned,
    collections::BTreeMap,
    string::{String, ToString as _},
    vec::Vec,
};
use core::{
    any::type_name,
    sync::atomic::{AtomicU64, Ordering},
};
use parking_lot::RwLock;
use tracing::{debug, debug_span, error, info_span, warn};

use crate::{
    any::TypeInfo,
    config::Config,
    errors::{InstantiateErrorKind, ResolveErrorKind},
    factory::{boxed_factory, BoxCloneFactory, Factory},
    key::Key,
    record::DependencyRecord,
    registry::Registry,
    scope::Scope,
    selector::Selector,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Name of the registry that exists from container construction
pub const DEFAULT_REGISTRY: &str = "default";
/// Conventional name for a second registry, not special-cased by the container
pub const PRIVATE_REGISTRY: &str = "private";

/// Dependency container with named registries.
///
/// Clones share the same registries, so the container can be passed around freely.
/// Every [`Container::new`] is independent of others.
#[derive(Clone)]
pub struct Container {
    pub(crate) inner: RcThreadSafety<ContainerInner>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Creates container with an empty [`DEFAULT_REGISTRY`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        let mut registries = BTreeMap::new();
        registries.insert(DEFAULT_REGISTRY.to_owned(), Registry::new(DEFAULT_REGISTRY.to_owned()));

        Self {
            inner: RcThreadSafety::new(ContainerInner {
                registries: RwLock::new(registries),
                generations: AtomicU64::new(0),
            }),
        }
    }

    /// Returns the process-wide container, creating it on first access.
    ///
    /// # Warning
    /// The shared container is never torn down and is visible to the whole process.
    /// Prefer passing an explicitly created [`Container`] where possible, e.g. in tests.
    #[cfg(feature = "thread_safe")]
    #[must_use]
    pub fn shared() -> Self {
        static SHARED: parking_lot::Mutex<Option<Container>> = parking_lot::const_mutex(None);

        SHARED.lock().get_or_insert_with(Self::new).clone()
    }

    /// Registers a factory with the default [`Config`]:
    /// [`crate::Scope::Global`], no qualifier, [`DEFAULT_REGISTRY`].
    #[inline]
    pub fn register<Fact>(&self, factory: Fact)
    where
        Fact: Factory<Error = InstantiateErrorKind> + SendSafety + SyncSafety,
        Fact::Provides: SendSafety + SyncSafety,
    {
        self.register_with(factory, Config::default());
    }

    /// Registers a factory of [`Factory::Provides`] under the config's scope and selector.
    ///
    /// The registry is created if it doesn't exist yet.
    /// A previous registration under the same type, qualifier and registry is replaced,
    /// together with its cached instance.
    pub fn register_with<Fact>(&self, factory: Fact, config: Config)
    where
        Fact: Factory<Error = InstantiateErrorKind> + SendSafety + SyncSafety,
        Fact::Provides: SendSafety + SyncSafety,
    {
        let Config { scope, selector } = config;
        let provides = TypeInfo::of::<Fact::Provides>();

        let span = debug_span!(
            "register",
            dependency = provides.name,
            qualifier = selector.qualifier(),
            registry = selector.registry(),
            scope = scope.name(),
        );
        let _guard = span.enter();

        let (qualifier, registry_name) = selector.into_parts();
        let key = Key::new(provides, qualifier);
        let generation = self.inner.generations.fetch_add(1, Ordering::Relaxed);
        let record = DependencyRecord::new(boxed_factory(factory), provides, scope, generation);

        // The replaced record is dropped after the lock is released
        let replaced = {
            let mut registries = self.inner.registries.write();
            let registry = registries.entry(registry_name).or_insert_with_key(|name| {
                let registry = Registry::new(name.clone());
                debug!(registry = registry.name(), "Registry created");
                registry
            });
            registry.insert(key, record)
        };

        match replaced {
            Some(previous) => debug!(previous_scope = previous.scope.name(), "Replaced previous registration"),
            None => debug!("Registered"),
        }
    }

    /// Registers an already created value.
    /// The value is cloned once, on first resolve, and cached as [`crate::Scope::Global`].
    #[inline]
    pub fn register_instance<Dep>(&self, value: Dep, selector: Selector)
    where
        Dep: Clone + SendSafety + SyncSafety + 'static,
    {
        self.register_with(
            move || Ok(value.clone()),
            Config {
                scope: Scope::Global,
                selector,
            },
        );
    }

    /// Resolves the unqualified dependency from the [`DEFAULT_REGISTRY`]
    #[inline]
    #[allow(clippy::missing_errors_doc)]
    pub fn resolve<Dep: SendSafety + SyncSafety + 'static>(&self) -> Result<RcThreadSafety<Dep>, ResolveErrorKind> {
        self.resolve_with(&Selector::new())
    }

    /// Resolves a dependency by type and selector, applying the scope of its registration.
    ///
    /// # Notes
    /// - [`crate::Scope::Global`] returns the same instance on every call.
    /// - [`crate::Scope::Retain`] returns the same instance while a returned handle is alive.
    /// - [`crate::Scope::Property`] returns a new instance on every call.
    ///
    /// The factory is called without holding the container's lock,
    /// so it can resolve other dependencies from the same container.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::UnknownRegistry`] if nothing was ever registered into the selected registry
    /// - Returns [`ResolveErrorKind::UnregisteredDependency`] if the registry has no record for the type and qualifier
    /// - Returns [`ResolveErrorKind::TypeMismatch`] if the created or cached instance isn't a `Dep`
    /// - Returns [`ResolveErrorKind::Factory`] if the factory fails
    pub fn resolve_with<Dep: SendSafety + SyncSafety + 'static>(
        &self,
        selector: &Selector,
    ) -> Result<RcThreadSafety<Dep>, ResolveErrorKind> {
        let span = info_span!(
            "resolve",
            dependency = type_name::<Dep>(),
            qualifier = selector.qualifier(),
            registry = selector.registry(),
        );
        let _guard = span.enter();

        let key = Key::new(TypeInfo::of::<Dep>(), selector.qualifier().map(ToOwned::to_owned));
        let Lookup {
            factory,
            generation,
            instantiation,
            cached,
        } = self.inner.lookup(&key, selector.registry())?;

        if let Some(instance) = cached {
            debug!("Found in cache");
            return narrow(instance);
        }

        let Some(instantiation) = instantiation else {
            return narrow(instantiate(factory)?);
        };
        let _instantiation_guard = instantiation.lock();

        // Another caller may have created the instance while this one waited for the lock
        if let Some(instance) = self.inner.cached(&key, selector.registry(), generation) {
            debug!("Found in cache after waiting for instantiation");
            return narrow(instance);
        }
        debug!("Not found in cache");

        let instance = instantiate(factory)?;
        let dependency = narrow(instance.clone())?;
        self.inner.cache(&key, selector.registry(), generation, &instance);

        Ok(dependency)
    }

    /// Returns `true` if a factory for `Dep` is registered under the selector
    #[must_use]
    pub fn contains<Dep: 'static>(&self, selector: &Selector) -> bool {
        let key = Key::new(TypeInfo::of::<Dep>(), selector.qualifier().map(ToOwned::to_owned));
        self.inner
            .registries
            .read()
            .get(selector.registry())
            .is_some_and(|registry| registry.contains(&key))
    }

    /// Names of all registries, in lexicographic order
    #[must_use]
    pub fn registry_names(&self) -> Vec<String> {
        self.inner.registries.read().keys().cloned().collect()
    }

    /// Count of records in the registry, `None` if the registry doesn't exist
    #[must_use]
    pub fn registry_len(&self, registry: &str) -> Option<usize> {
        self.inner.registries.read().get(registry).map(Registry::len)
    }
}

/// Part of a record needed to resolve it after the container's lock is released
struct Lookup {
    factory: BoxCloneFactory,
    generation: u64,
    instantiation: Option<RcThreadSafety<parking_lot::Mutex<()>>>,
    cached: Option<RcAnyThreadSafety>,
}

pub(crate) struct ContainerInner {
    pub(crate) registries: RwLock<BTreeMap<String, Registry>>,
    generations: AtomicU64,
}

impl ContainerInner {
    fn lookup(&self, key: &Key, registry_name: &str) -> Result<Lookup, ResolveErrorKind> {
        let registries = self.registries.read();

        let Some(registry) = registries.get(registry_name) else {
            let err = ResolveErrorKind::UnknownRegistry {
                name: registry_name.to_owned(),
            };
            error!("{}", err);
            return Err(err);
        };
        let Some(record) = registry.get(key) else {
            let err = ResolveErrorKind::UnregisteredDependency {
                key: key.to_string(),
                registry: registry_name.to_owned(),
            };
            error!("{}", err);
            return Err(err);
        };

        if record.is_expired() {
            debug!("Retained instance was dropped by its owners");
        }

        Ok(Lookup {
            factory: record.factory.clone(),
            generation: record.generation,
            instantiation: record.instantiation_lock(),
            cached: record.cached(),
        })
    }

    fn cached(&self, key: &Key, registry_name: &str, generation: u64) -> Option<RcAnyThreadSafety> {
        self.registries
            .read()
            .get(registry_name)
            .and_then(|registry| registry.get(key))
            .filter(|record| record.generation == generation)
            .and_then(DependencyRecord::cached)
    }

    fn cache(&self, key: &Key, registry_name: &str, generation: u64, instance: &RcAnyThreadSafety) {
        let mut registries = self.registries.write();
        let Some(record) = registries.get_mut(registry_name).and_then(|registry| registry.get_mut(key)) else {
            warn!("Record removed during instantiation, instance isn't cached");
            return;
        };

        if record.generation != generation {
            debug!("Registration replaced during instantiation, instance isn't cached");
            return;
        }
        if record.cache(instance) {
            debug!(retention = ?record.retention(), provides = record.provides.name, "Cached");
        }
    }
}

fn instantiate(mut factory: BoxCloneFactory) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
    match factory.create() {
        Ok(instance) => {
            debug!("Instantiated");
            Ok(instance)
        }
        Err(err) => {
            error!("{}", err);
            Err(ResolveErrorKind::Factory(err))
        }
    }
}

fn narrow<Dep: SendSafety + SyncSafety + 'static>(instance: RcAnyThreadSafety) -> Result<RcThreadSafety<Dep>, ResolveErrorKind> {
    instance.downcast::<Dep>().map_err(|incorrect_type| {
        let err = ResolveErrorKind::TypeMismatch {
            expected: TypeInfo::of::<Dep>(),
            actual: (*incorrect_type).type_id(),
        };
        error!("{}", err);
        err
    })
}
