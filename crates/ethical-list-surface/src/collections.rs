#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashSet;

    pub type IndexMap<K, V> = indexmap::IndexMap<K, V>;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashSet as HashSet;

    pub type IndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
}
