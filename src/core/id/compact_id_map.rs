use std::cmp::min;

use crate::core::id::IdType;

/// Mapping from graph IDs to a contiguous sequence of dense indices `0..len`
/// that can be used in algorithms for indexing into arrays.
///
/// For compact storages (e.g., [`AdjList`](crate::storage::AdjList)) that do
/// not have any holes in ID sequences, the mapping is a noop and doesn't take
/// any memory. Use [`CompactIdMap::isomorphic`] constructor in these cases.
///
/// For other storages (including those with non-integer IDs, such as string
/// labels) and _N_ vertices or edges, the time and space properties are:
///
/// * memory used: _O(N)_
/// * dense to real mapping: _O(1)_
/// * real to dense mapping: _O(log(N))_
#[derive(Debug)]
pub struct CompactIdMap<I> {
    map: Vec<I>,
    len: usize,
}

impl<I: IdType> CompactIdMap<I> {
    /// Constructs the map from the iterator of IDs.
    pub fn new<A>(iter: A) -> Self
    where
        A: Iterator<Item = I>,
    {
        let mut map = iter.collect::<Vec<_>>();
        map.sort_unstable();
        let len = map.len();

        Self { map, len }
    }

    /// Constructs a noop map where real IDs are already in contiguous sequence.
    ///
    /// Must be used only with [integer](IdType::is_integer) IDs.
    pub fn isomorphic(len: usize) -> Self {
        debug_assert!(I::is_integer(), "isomorphic map requires integer ids");

        Self {
            map: Vec::new(),
            len,
        }
    }

    /// Returns the number of IDs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no IDs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the mapping is noop.
    pub fn is_isomorphic(&self) -> bool {
        self.map.len() != self.len
    }

    /// Maps given dense index to the corresponding real ID in the original
    /// graph.
    pub fn to_real(&self, index: usize) -> Option<I> {
        if self.is_isomorphic() {
            (index < self.len()).then(|| I::from_usize(index))
        } else {
            self.map.get(index).cloned()
        }
    }

    /// Maps given real ID from the original graph to a dense index in the
    /// contiguous sequence.
    pub fn to_virt(&self, id: &I) -> Option<usize> {
        if self.is_isomorphic() {
            let index = id.as_usize();
            return (index < self.len()).then_some(index);
        }

        if I::is_integer() {
            // Using `wrapping_sub` not to panic on overflow.
            let direct = min(id.as_usize(), self.len().wrapping_sub(1));

            // This will always be true for integer IDs without holes, and
            // sometimes for IDs with holes.
            if self.map.get(direct) == Some(id) {
                return Some(direct);
            }
        }

        // Fallback to binary search otherwise.
        self.map.binary_search(id).ok()
    }
}
