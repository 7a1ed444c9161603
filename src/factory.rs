use alloc::boxed::Box;

use crate::{
    errors::InstantiateErrorKind,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Zero-argument producer of a dependency.
///
/// Implemented for every `FnMut() -> Result<Dep, Err> + Clone` closure,
/// so `|| Ok(Service::new())` can be registered directly.
pub trait Factory: Clone + 'static {
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    #[allow(clippy::missing_errors_doc)]
    fn create(&mut self) -> Result<Self::Provides, Self::Error>;
}

impl<F, Response, Err> Factory for F
where
    F: FnMut() -> Result<Response, Err> + Clone + 'static,
    Response: 'static,
    Err: Into<InstantiateErrorKind>,
{
    type Provides = Response;
    type Error = Err;

    #[inline]
    fn create(&mut self) -> Result<Self::Provides, Self::Error> {
        self()
    }
}

/// Factory with the provided type erased, so records of different types share one map.
pub(crate) trait CloneFactory: SendSafety + SyncSafety {
    fn create(&mut self) -> Result<RcAnyThreadSafety, InstantiateErrorKind>;

    #[must_use]
    fn clone_box(&self) -> Box<dyn CloneFactory>;
}

#[derive(Clone)]
struct ErasedFactory<Fact>(Fact);

impl<Fact> CloneFactory for ErasedFactory<Fact>
where
    Fact: Factory + SendSafety + SyncSafety,
    Fact::Provides: SendSafety + SyncSafety,
{
    #[inline]
    fn create(&mut self) -> Result<RcAnyThreadSafety, InstantiateErrorKind> {
        let dependency = self.0.create().map_err(Into::<InstantiateErrorKind>::into)?;
        let dependency: RcAnyThreadSafety = RcThreadSafety::new(dependency);
        Ok(dependency)
    }

    #[inline]
    fn clone_box(&self) -> Box<dyn CloneFactory> {
        Box::new(self.clone())
    }
}

pub(crate) struct BoxCloneFactory(Box<dyn CloneFactory>);

impl Clone for BoxCloneFactory {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl BoxCloneFactory {
    #[inline]
    pub(crate) fn create(&mut self) -> Result<RcAnyThreadSafety, InstantiateErrorKind> {
        self.0.create()
    }
}

#[must_use]
pub(crate) fn boxed_factory<Fact>(factory: Fact) -> BoxCloneFactory
where
    Fact: Factory + SendSafety + SyncSafety,
    Fact::Provides: SendSafety + SyncSafety,
{
    BoxCloneFactory(Box::new(ErasedFactory(factory)))
}
