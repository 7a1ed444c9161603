use crate::utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, WeakAnyThreadSafety};

/// How a dependency record keeps its cached instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Owning reference, the instance lives as long as the record.
    Strong,
    /// Non-owning reference, the instance lives as long as its external owners.
    Weak,
}

impl Retention {
    #[inline]
    #[must_use]
    pub(crate) fn hold(self, instance: &RcAnyThreadSafety) -> Cached {
        match self {
            Retention::Strong => Cached::Strong(instance.clone()),
            Retention::Weak => Cached::Weak(RcThreadSafety::downgrade(instance)),
        }
    }
}

/// Cached instance of a dependency record.
///
/// A weak instance may be reclaimed at any time without notice,
/// so it's checked with [`Cached::upgrade`] before every use.
#[derive(Clone)]
pub(crate) enum Cached {
    Strong(RcAnyThreadSafety),
    Weak(WeakAnyThreadSafety),
}

impl Cached {
    #[inline]
    #[must_use]
    pub(crate) fn upgrade(&self) -> Option<RcAnyThreadSafety> {
        match self {
            Cached::Strong(instance) => Some(instance.clone()),
            Cached::Weak(instance) => instance.upgrade(),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_alive(&self) -> bool {
        match self {
            Cached::Strong(_) => true,
            Cached::Weak(instance) => instance.strong_count() > 0,
        }
    }
}
