//! Reference counting primitives used for shared and cached instances.
//!
//! With the `thread_safe` feature instances are shared through [`alloc::sync::Arc`]
//! and must be `Send + Sync`, otherwise [`alloc::rc::Rc`] is used without extra bounds.

#[cfg(feature = "thread_safe")]
mod thread_safe {
    use alloc::sync::{Arc, Weak};
    use core::any::Any;

    pub trait SendSafety: Send {}
    pub trait SyncSafety: Sync {}

    impl<T: Send> SendSafety for T {}
    impl<T: Sync> SyncSafety for T {}

    pub type RcThreadSafety<T> = Arc<T>;
    pub type WeakThreadSafety<T> = Weak<T>;
    pub type RcAnyThreadSafety = RcThreadSafety<dyn Any + Send + Sync>;
    pub type WeakAnyThreadSafety = WeakThreadSafety<dyn Any + Send + Sync>;
}

#[cfg(not(feature = "thread_safe"))]
mod thread_unsafe {
    use alloc::rc::{Rc, Weak};
    use core::any::Any;

    pub trait SendSafety {}
    pub trait SyncSafety {}

    impl<T> SendSafety for T {}
    impl<T> SyncSafety for T {}

    pub type RcThreadSafety<T> = Rc<T>;
    pub type WeakThreadSafety<T> = Weak<T>;
    pub type RcAnyThreadSafety = RcThreadSafety<dyn Any>;
    pub type WeakAnyThreadSafety = WeakThreadSafety<dyn Any>;
}

#[cfg(feature = "thread_safe")]
pub use thread_safe::{RcThreadSafety, SendSafety, SyncSafety, WeakThreadSafety};
#[cfg(feature = "thread_safe")]
pub(crate) use thread_safe::{RcAnyThreadSafety, WeakAnyThreadSafety};

#[cfg(not(feature = "thread_safe"))]
pub use thread_unsafe::{RcThreadSafety, SendSafety, SyncSafety, WeakThreadSafety};
#[cfg(not(feature = "thread_safe"))]
pub(crate) use thread_unsafe::{RcAnyThreadSafety, WeakAnyThreadSafety};
