use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type HeaderMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type HeaderMap<K, V> = BTreeMap<K, V>;

/// Identity of a logical header group.
///
/// With `feature = "std"` keys are hashed; without it they are ordered. `Debug` is required so
/// keys can be logged.
#[cfg(feature = "std")]
pub trait HeaderKey: core::hash::Hash + Eq + Clone + fmt::Debug {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone + fmt::Debug> HeaderKey for K {}

/// Identity of a logical header group.
///
/// With `feature = "std"` keys are hashed; without it they are ordered. `Debug` is required so
/// keys can be logged.
#[cfg(not(feature = "std"))]
pub trait HeaderKey: Ord + Clone + fmt::Debug {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone + fmt::Debug> HeaderKey for K {}
