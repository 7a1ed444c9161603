use alloc::string::String;
use core::any::TypeId;

use super::instantiate::InstantiateErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Registry `{name}` not found in container")]
    UnknownRegistry { name: String },
    #[error("Dependency `{key}` not registered in `{registry}` registry")]
    UnregisteredDependency { key: String, registry: String },
    #[error("Incorrect dependency type. Actual: {actual:?}, expected: {expected}")]
    TypeMismatch { expected: TypeInfo, actual: TypeId },
    #[error(transparent)]
    Factory(InstantiateErrorKind),
}
