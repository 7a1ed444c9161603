use alloc::string::String;
use core::fmt::{self, Display, Formatter};

use crate::any::TypeInfo;

/// Composite key of a dependency record inside one registry.
///
/// The qualifier is kept apart from the type identity, so `None`, `Some("")`
/// and any other qualifier of the same type are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Key {
    pub(crate) type_info: TypeInfo,
    pub(crate) qualifier: Option<String>,
}

impl Key {
    #[inline]
    #[must_use]
    pub(crate) const fn new(type_info: TypeInfo, qualifier: Option<String>) -> Self {
        Self { type_info, qualifier }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}_{qualifier}", self.type_info.short_name()),
            None => f.write_str(self.type_info.short_name()),
        }
    }
}
