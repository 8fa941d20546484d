use crate::hex::Hex;
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};

// All of these key on Hex, which hashes and compares only (q, r). Any other
// coordinate-keyed collection should do the same, or two copies of the same
// tile could end up as separate keys.

/// A set of hexes
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hexes to some `T`
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;
/// An ORDERED set of hexes. This has some extra memory overhead, so we should
/// only use it when we actually need the ordering.
pub type HexIndexSet = IndexSet<Hex, FnvBuildHasher>;
/// An ORDERED map of hexes to some `T`. Same caveat as [HexIndexSet].
pub type HexIndexMap<T> = IndexMap<Hex, T, FnvBuildHasher>;
