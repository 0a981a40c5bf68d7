//! Scalar backend implementation
//!
//! This backend provides a scalar (non-SIMD) fallback that always works on any platform.
//! With one lane per vector, the partitioner never produces a prologue and every
//! algorithm runs its SIMD body one element at a time. It serves as the reference
//! backend when checking the others for consistency.

use crate::traits::{Lane, SimdMask, SimdVector};

/// Scalar vector wrapper (single-lane SIMD)
///
/// This wraps a single scalar value to implement the SimdVector trait,
/// providing a fallback when SIMD is not available or desired.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarVector<T>(pub T);

/// Scalar mask wrapper (single boolean)
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

impl<T: Lane> SimdVector for ScalarVector<T> {
    type Scalar = T;
    type Mask = ScalarMask;

    const LANES: usize = 1;
    const ALIGN: usize = core::mem::align_of::<T>();

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        // Every reference to T is already aligned to align_of::<T>()
        Self::from_slice(slice)
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        self.to_slice(slice)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0.lane_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0.lane_sub(rhs.0))
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0.lane_mul(rhs.0))
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(self.0.lane_neg())
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        ScalarVector(self.0.lane_min(rhs.0))
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        ScalarVector(self.0.lane_max(rhs.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn for_each_lane<F: FnMut(Self::Scalar)>(self, mut f: F) {
        f(self.0)
    }
}

impl SimdMask for ScalarMask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask(self.0 && rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarMask(self.0 || rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        ScalarMask(!self.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarMask(self.0 ^ rhs.0)
    }
}
