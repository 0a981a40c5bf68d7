//! NEON backend implementation (ARM64)
//!
//! This backend provides 4-lane (128-bit) `f32` vectors using ARM NEON instructions.
//! Available on all ARM64 CPUs (Apple Silicon, AWS Graviton, Raspberry Pi 4+, etc.).
//!
//! **Note**: NEON is mandatory for ARM64, so no runtime detection is needed.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use crate::traits::{SimdMask, SimdVector};
use core::arch::aarch64::*;

/// NEON vector wrapper (4 lanes of f32)
///
/// Wraps float32x4_t intrinsic type to provide SimdVector trait implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonVector(float32x4_t);

/// NEON mask wrapper (4-lane mask)
///
/// Uses uint32x4_t to represent per-lane boolean values.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask(uint32x4_t);

impl NeonVector {
    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut lanes = [0.0f32; 4];
        unsafe { vst1q_f32(lanes.as_mut_ptr(), self.0) };
        lanes
    }
}

impl core::fmt::Debug for NeonVector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NeonVector").field(&self.to_array()).finish()
    }
}

impl SimdVector for NeonVector {
    type Scalar = f32;
    type Mask = NeonMask;

    const LANES: usize = 4;
    const ALIGN: usize = 16;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { NeonVector(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonVector(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        // vld1q has no alignment requirement; check the contract anyway
        debug_assert!((slice.as_ptr() as usize) % Self::ALIGN == 0);
        Self::from_slice(slice)
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_f32(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        debug_assert!((slice.as_ptr() as usize) % Self::ALIGN == 0);
        self.to_slice(slice)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonVector(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonVector(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonVector(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonVector(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { NeonVector(vminnmq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { NeonVector(vmaxnmq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonVector(vbslq_f32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe { vaddvq_f32(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe { vmaxnmvq_f32(self.0) }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe { vminnmvq_f32(self.0) }
    }

    #[inline(always)]
    fn for_each_lane<F: FnMut(Self::Scalar)>(self, f: F) {
        self.to_array().into_iter().for_each(f)
    }
}

impl SimdMask for NeonMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(self.0) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { NeonMask(vmvnq_u32(self.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonMask(veorq_u32(self.0, rhs.0)) }
    }
}
