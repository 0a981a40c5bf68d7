//! Portable lane-array backend
//!
//! Represents a vector as a plain `[T; N]` and implements every operation as a
//! fixed-length loop over the lanes. The loops have no cross-lane dependencies,
//! so LLVM lowers them to the target's native vector instructions (SSE2/AVX2 on
//! x86, NEON on ARM, ALTIVEC on POWER) without any per-ISA code here.
//!
//! The vector width in bytes (`N * size_of::<T>()`) doubles as the alignment the
//! algorithms partition their input on.

use crate::traits::{Lane, SimdMask, SimdVector};

/// Vector of `N` lanes of `T` stored as an array
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct LaneVector<T, const N: usize>(pub [T; N]);

/// Per-lane boolean mask for [`LaneVector`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct LaneMask<const N: usize>(pub [bool; N]);

impl<T: Lane, const N: usize> LaneVector<T, N> {
    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        LaneVector(core::array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        LaneVector(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn compare(self, rhs: Self, f: impl Fn(&T, &T) -> bool) -> LaneMask<N> {
        LaneMask(core::array::from_fn(|i| f(&self.0[i], &rhs.0[i])))
    }

    #[inline(always)]
    fn fold(self, f: impl Fn(T, T) -> T) -> T {
        let mut acc = self.0[0];
        for &lane in &self.0[1..] {
            acc = f(acc, lane);
        }
        acc
    }

    #[inline(always)]
    fn is_aligned(ptr: *const T) -> bool {
        (ptr as usize) % <Self as SimdVector>::ALIGN == 0
    }
}

impl<T: Lane, const N: usize> SimdVector for LaneVector<T, N> {
    type Scalar = T;
    type Mask = LaneMask<N>;

    const LANES: usize = N;
    const ALIGN: usize = N * core::mem::size_of::<T>();

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        LaneVector([value; N])
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= N, "Slice too short for lane-array load");
        LaneVector(core::array::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        assert!(
            Self::is_aligned(slice.as_ptr()),
            "Misaligned slice for aligned lane-array load"
        );
        Self::from_slice(slice)
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= N, "Slice too short for lane-array store");
        slice[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            Self::is_aligned(slice.as_ptr()),
            "Misaligned slice for aligned lane-array store"
        );
        self.to_slice(slice)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_add)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_sub)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_mul)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(T::lane_neg)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, T::lane_max)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        LaneVector(core::array::from_fn(|i| {
            if mask.0[i] {
                true_val.0[i]
            } else {
                false_val.0[i]
            }
        }))
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        self.fold(T::lane_add)
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        self.fold(T::lane_max)
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        self.fold(T::lane_min)
    }

    #[inline(always)]
    fn for_each_lane<F: FnMut(Self::Scalar)>(self, f: F) {
        self.0.into_iter().for_each(f)
    }
}

impl<const N: usize> SimdMask for LaneMask<N> {
    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|&lane| lane)
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        LaneMask(core::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        LaneMask(core::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }

    #[inline(always)]
    fn not(self) -> Self {
        LaneMask(self.0.map(|lane| !lane))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        LaneMask(core::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}
