use crate::retention::Retention;

/// Lifetime policy of a registered factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Created on first resolve and kept by the container for its whole lifetime.
    #[default]
    Global,
    /// Created on first resolve and shared while somebody else keeps it alive.
    ///
    /// The container holds only a weak handle. The owners are the handles returned by
    /// [`crate::Container::resolve`] (and their clones, including those held by [`crate::Inject`]).
    /// Once the last of them is dropped, the next resolve creates a new instance.
    Retain,
    /// Never cached, every resolve creates a new instance.
    Property,
}

impl Scope {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Retain => "retain",
            Scope::Property => "property",
        }
    }

    /// Retention strategy of the cached instance, `None` if the scope doesn't cache.
    #[inline]
    #[must_use]
    pub const fn retention(&self) -> Option<Retention> {
        match self {
            Scope::Global => Some(Retention::Strong),
            Scope::Retain => Some(Retention::Weak),
            Scope::Property => None,
        }
    }
}
