//! AVX2 backend implementation (x86-64)
//!
//! This backend provides 8-lane (256-bit) `f32` vectors using AVX2 instructions.
//! Requires x86-64 CPU with AVX2 support (Intel Haswell 2013+, AMD Excavator 2015+).
//!
//! **Note**: This implementation assumes AVX2 is available when the `avx2` feature is enabled.
//! Runtime CPU detection is not performed - build with `-C target-feature=+avx2`.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::{SimdMask, SimdVector};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

/// AVX2 vector wrapper (8 lanes of f32)
///
/// Wraps __m256 intrinsic type to provide SimdVector trait implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Vector(__m256);

/// AVX2 mask wrapper (8-lane mask)
///
/// Uses __m256 to represent per-lane boolean values.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Mask(__m256);

impl Avx2Vector {
    #[inline(always)]
    fn to_array(self) -> [f32; 8] {
        let mut lanes = [0.0f32; 8];
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.0) };
        lanes
    }
}

/// Lane-wise minimum that returns the other operand when one lane is NaN
#[inline(always)]
unsafe fn min_ignore_nan(a: __m256, b: __m256) -> __m256 {
    // _mm256_min_ps yields `b` when either lane is NaN; take `a` back where `b` is NaN
    let min = _mm256_min_ps(a, b);
    _mm256_blendv_ps(min, a, _mm256_cmp_ps::<_CMP_UNORD_Q>(b, b))
}

/// Lane-wise maximum that returns the other operand when one lane is NaN
#[inline(always)]
unsafe fn max_ignore_nan(a: __m256, b: __m256) -> __m256 {
    let max = _mm256_max_ps(a, b);
    _mm256_blendv_ps(max, a, _mm256_cmp_ps::<_CMP_UNORD_Q>(b, b))
}

/// Fold all eight lanes with `op`, leaving the result in lane 0
#[inline(always)]
unsafe fn fold_lanes(v: __m256, op: unsafe fn(__m256, __m256) -> __m256) -> f32 {
    let v = op(v, _mm256_permute2f128_ps::<0x01>(v, v));
    let v = op(v, _mm256_permute_ps::<0x4E>(v));
    let v = op(v, _mm256_permute_ps::<0xB1>(v));
    _mm256_cvtss_f32(v)
}

impl core::fmt::Debug for Avx2Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Avx2Vector").field(&self.to_array()).finish()
    }
}

impl SimdVector for Avx2Vector {
    type Scalar = f32;
    type Mask = Avx2Mask;

    const LANES: usize = 8;
    const ALIGN: usize = 32;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx2Vector(_mm256_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        unsafe { Avx2Vector(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        assert!(
            (slice.as_ptr() as usize) % Self::ALIGN == 0,
            "Misaligned slice for aligned AVX2 load"
        );
        unsafe { Avx2Vector(_mm256_load_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        unsafe { _mm256_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        assert!(
            (slice.as_ptr() as usize) % Self::ALIGN == 0,
            "Misaligned slice for aligned AVX2 store"
        );
        unsafe { _mm256_store_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            // Flip the sign bit so that -(0.0) is -0.0, matching scalar negation
            let sign = _mm256_set1_ps(-0.0);
            Avx2Vector(_mm256_xor_ps(self.0, sign))
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(min_ignore_nan(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(max_ignore_nan(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx2Vector(_mm256_blendv_ps(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            // Extract high and low 128-bit halves
            let high = _mm256_extractf128_ps::<1>(self.0);
            let low = _mm256_castps256_ps128(self.0);
            let sum128 = _mm_add_ps(high, low);

            // Horizontal add within 128-bit
            let shuf = _mm_movehdup_ps(sum128);
            let sums = _mm_add_ps(sum128, shuf);
            let shuf = _mm_movehl_ps(shuf, sums);
            let result = _mm_add_ss(sums, shuf);

            _mm_cvtss_f32(result)
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe { fold_lanes(self.0, max_ignore_nan) }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe { fold_lanes(self.0, min_ignore_nan) }
    }

    #[inline(always)]
    fn for_each_lane<F: FnMut(Self::Scalar)>(self, f: F) {
        self.to_array().into_iter().for_each(f)
    }
}

impl SimdMask for Avx2Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0xff }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2Mask(_mm256_and_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2Mask(_mm256_or_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm256_castsi256_ps(_mm256_set1_epi32(-1));
            Avx2Mask(_mm256_xor_ps(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Avx2Mask(_mm256_xor_ps(self.0, rhs.0)) }
    }
}
