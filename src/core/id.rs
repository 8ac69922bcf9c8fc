//! Traits and types used for identifying vertices and edges in graphs.
//!
//! All types that are supposed to be used as vertex/edge identifiers must
//! implement [`IdType`] trait. For better performance and more functionality,
//! they should also implement [`IntegerIdType`] if possible.
//!
//! The default ID types are [`VertexId`] and [`EdgeId`]. They are of size `u64`
//! by default, but this can be changed via their generic parameter `N`.

mod compact_id_map;

pub use compact_id_map::CompactIdMap;

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

/// A unique identification of a vertex or edge in a graph.
///
/// In standard graph representations, the ID type is an integer. Conceptually,
/// such an integer ID is of type `usize`, but one can choose a smaller integer
/// type (such as u8 or u16) to lower the memory footprint.
///
/// Vertices can also be identified by arbitrary labels (names, coordinates,
/// ...). Such IDs can't be treated as integers and the algorithms map them to
/// a contiguous integer sequence using [`CompactIdMap`] before doing any work.
pub trait IdType: Clone + Ord + Hash + Debug {
    /// Determines if the ID type is representable by an integer. See
    /// [IntegerIdType] for more details.
    fn is_integer() -> bool;

    /// Converts an ID into the corresponding `u64`.
    ///
    /// # Panics
    ///
    /// Types for which [`Self::is_integer`](IdType::is_integer) returns `false`
    /// should panic.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding ID.
    ///
    /// # Panics
    ///
    /// Types for which [`Self::is_integer`](IdType::is_integer) returns `false`
    /// should panic.
    fn from_bits(bits: u64) -> Self;

    /// Converts an ID into the corresponding `usize`.
    ///
    /// # Panics
    ///
    /// Types for which [`Self::is_integer`](IdType::is_integer) returns `false`
    /// should panic.
    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    /// Converts an `usize` into the corresponding ID.
    ///
    /// # Panics
    ///
    /// Types for which [`Self::is_integer`](IdType::is_integer) returns `false`
    /// should panic.
    fn from_usize(id: usize) -> Self {
        Self::from_bits(id as u64)
    }
}

/// Type-level specification that an ID type is representable by integer.
///
/// Types that implement this trait must return `true` in [`IdType::is_integer`]
/// and support all integer-related conversions. All integer values up to some
/// upper bound should be valid IDs and there should be no discontinuity.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {}

/// The default representation of an integer index for vertices. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<N = u64>(pub N);

/// The default representation of an integer index for edges. Generic type `N`
/// can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId<N = u64>(pub N);

/// Specification of vertex and edge ID types pair.
///
/// The main purpose is a reduction of the number of generic parameters from two
/// to one (accepting the increase of associated types).
pub trait IdPair {
    /// ID type for vertices.
    type VertexId: IdType;

    /// ID type for edges.
    type EdgeId: IdType;
}

/// Default indexing using [`VertexId`] and [`EdgeId`] as the ID pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefaultId {}

impl IdPair for DefaultId {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
}

/// Custom indexing using `VI` and `EI` generic types as the ID pair.
pub struct CustomId<VI, EI> {
    ty: PhantomData<fn() -> (VI, EI)>,
}

impl<VI: IdType, EI: IdType> IdPair for CustomId<VI, EI> {
    type VertexId = VI;
    type EdgeId = EI;
}

macro_rules! impl_int_id {
    ($id_ty:ident, $int_ty:ty) => {
        impl IdType for $id_ty<$int_ty> {
            fn is_integer() -> bool {
                true
            }

            fn as_bits(&self) -> u64 {
                self.0 as u64
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits as $int_ty)
            }

            fn as_usize(&self) -> usize {
                self.0.try_into().expect("id type overflow")
            }

            fn from_usize(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }
        }

        impl From<usize> for $id_ty<$int_ty> {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty<$int_ty>> for usize {
            fn from(id: $id_ty<$int_ty>) -> Self {
                id.as_usize()
            }
        }

        impl IntegerIdType for $id_ty<$int_ty> {}
    };
}

impl_int_id!(VertexId, usize);
impl_int_id!(VertexId, u64);
impl_int_id!(VertexId, u32);
impl_int_id!(VertexId, u16);
impl_int_id!(VertexId, u8);

impl_int_id!(EdgeId, usize);
impl_int_id!(EdgeId, u64);
impl_int_id!(EdgeId, u32);
impl_int_id!(EdgeId, u16);
impl_int_id!(EdgeId, u8);

macro_rules! impl_label_id {
    ($($label_ty:ty),*) => {
        $(
            impl IdType for $label_ty {
                fn is_integer() -> bool {
                    false
                }

                fn as_bits(&self) -> u64 {
                    panic!("unsupported")
                }

                fn from_bits(_: u64) -> Self {
                    panic!("unsupported")
                }
            }
        )*
    };
}

impl_label_id!(char, String, &'static str);
