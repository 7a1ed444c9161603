mod instantiate;
mod resolve;

pub use instantiate::InstantiateErrorKind;
pub use resolve::ResolveErrorKind;

/// Result of a user factory.
pub type FactoryResult<Dep> = Result<Dep, InstantiateErrorKind>;
