//! Loop algorithms over slices
//!
//! Every algorithm here follows the same three-phase skeleton:
//!
//! 1. [`partition`] the primary input for the element's native vector
//! 2. scalar prologue up to the first aligned address
//! 3. SIMD body in whole vectors, using aligned loads for the primary input
//! 4. scalar epilogue for the remainder
//!
//! Secondary inputs and outputs are not partitioned. Whether they can use
//! aligned loads/stores in the body is decided once per call, from their
//! address after the prologue.
//!
//! Reductions (`reduce*`, `transform_reduce*`, `min*`, `max*`) combine the body
//! lanes in a different order than a strict left-to-right fold. The result is
//! exact for associative and commutative operations (integer arithmetic,
//! min/max) and may differ in rounding for floating-point sums.

pub mod equal;
pub mod find;
pub mod lexicographical_compare;
pub mod minmax;
pub mod partition;
pub mod reduce;
pub mod transform;
pub mod transform_reduce;

pub use equal::{equal, equal_by};
pub use find::{find, find_if};
pub use lexicographical_compare::{lexicographical_compare, lexicographical_compare_by};
pub use minmax::{max, max_by, min, min_by};
pub use partition::{partition, Partition};
pub use reduce::{reduce, reduce_with};
pub use transform::{transform, transform2};
pub use transform_reduce::{transform_reduce, transform_reduce2, transform_reduce_with};

use crate::traits::SimdVector;

/// Load one vector from the start of `slice`
#[inline(always)]
pub(crate) fn load<V: SimdVector>(slice: &[V::Scalar], aligned: bool) -> V {
    if aligned {
        V::from_aligned_slice(slice)
    } else {
        V::from_slice(slice)
    }
}

/// Store one vector to the start of `slice`
#[inline(always)]
pub(crate) fn store<V: SimdVector>(value: V, slice: &mut [V::Scalar], aligned: bool) {
    if aligned {
        value.to_aligned_slice(slice)
    } else {
        value.to_slice(slice)
    }
}
