//! Comparison functors
//!
//! `EqualTo` is the default predicate of `equal`, `Less` the default ordering
//! of `lexicographical_compare`, `min_by` and `max_by`. `Greater` reverses the
//! ordering.

use super::BinaryPredicate;
use crate::traits::SimdVector;

/// Equality, `a == b`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EqualTo;

/// Strict less-than ordering, `a < b`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

/// Strict greater-than ordering, `a > b`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<V: SimdVector> BinaryPredicate<V> for EqualTo {
    #[inline(always)]
    fn test_scalar(&self, a: V::Scalar, b: V::Scalar) -> bool {
        a == b
    }

    #[inline(always)]
    fn test_vector(&self, a: V, b: V) -> V::Mask {
        a.eq(b)
    }
}

impl<V: SimdVector> BinaryPredicate<V> for Less {
    #[inline(always)]
    fn test_scalar(&self, a: V::Scalar, b: V::Scalar) -> bool {
        a < b
    }

    #[inline(always)]
    fn test_vector(&self, a: V, b: V) -> V::Mask {
        a.lt(b)
    }
}

impl<V: SimdVector> BinaryPredicate<V> for Greater {
    #[inline(always)]
    fn test_scalar(&self, a: V::Scalar, b: V::Scalar) -> bool {
        a > b
    }

    #[inline(always)]
    fn test_vector(&self, a: V, b: V) -> V::Mask {
        a.gt(b)
    }
}
