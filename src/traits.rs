//! Core SIMD abstraction traits
//!
//! This module defines the traits every backend implements and the algorithms
//! are written against. An algorithm never names a concrete backend: it asks
//! the element type for its native vector (`SimdElement::Vector`) and talks to
//! it through `SimdVector` and `SimdMask`.

use core::fmt::Debug;
use num_traits::{Bounded, One, Zero};

/// Scalar element stored in a SIMD lane
///
/// Provides the scalar counterparts of the lane-wise vector operations, with
/// the same semantics the vector backends use: integer arithmetic wraps,
/// float arithmetic follows IEEE 754.
///
/// `Bounded::max_value()` / `Bounded::min_value()` give the extremes used as
/// the result of `min`/`max` on an empty range (`min_value()` is the lowest
/// finite value for floats, not the smallest positive one).
pub trait Lane: Copy + PartialEq + PartialOrd + Debug + Default + Bounded + Zero + One + 'static {
    /// Lane-wise addition (wrapping for integers)
    fn lane_add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction (wrapping for integers)
    fn lane_sub(self, rhs: Self) -> Self;

    /// Lane-wise multiplication (wrapping for integers)
    fn lane_mul(self, rhs: Self) -> Self;

    /// Lane-wise negation (two's complement wrap for integers)
    fn lane_neg(self) -> Self;

    /// Smaller of two values
    fn lane_min(self, rhs: Self) -> Self;

    /// Larger of two values
    fn lane_max(self, rhs: Self) -> Self;
}

/// Element type with a native vector representation on the active backend
///
/// The mapping is fixed at compile time by cargo features; see
/// [`crate::backends`].
pub trait SimdElement: Lane {
    /// Native vector type holding `Vector::LANES` elements of `Self`
    type Vector: SimdVector<Scalar = Self>;
}

/// Core SIMD vector abstraction trait
///
/// All backends (scalar, portable, AVX2, NEON) implement this trait.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::{SimdElement, SimdVector};
///
/// type V = <f32 as SimdElement>::Vector;
///
/// let a = V::splat(2.0);
/// let b = V::splat(3.0);
/// assert_eq!(a.add(b).horizontal_sum(), 5.0 * V::LANES as f32);
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The scalar type held in each lane
    type Scalar: Lane;

    /// Associated mask type for comparison results
    type Mask: SimdMask;

    /// Number of lanes
    const LANES: usize;

    /// Byte alignment required by `from_aligned_slice` / `to_aligned_slice`
    const ALIGN: usize;

    // Construction

    /// Broadcast a scalar value to all lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice with no alignment requirement
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Load from a slice whose first element sits on an `ALIGN`-byte boundary
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements or is misaligned
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice with no alignment requirement
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// Store to a slice whose first element sits on an `ALIGN`-byte boundary
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than `LANES` elements or is misaligned
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]);

    // Arithmetic

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise negation
    fn neg(self) -> Self;

    /// Element-wise minimum
    fn min(self, rhs: Self) -> Self;

    /// Element-wise maximum
    fn max(self, rhs: Self) -> Self;

    // Comparison

    /// Mask of lanes where `self[i] < rhs[i]`
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Mask of lanes where `self[i] > rhs[i]`
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Mask of lanes where `self[i] == rhs[i]`
    fn eq(self, rhs: Self) -> Self::Mask;

    // Blending

    /// For each lane: `mask[i] ? true_val[i] : false_val[i]`
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    // Horizontal operations

    /// Sum of all lanes (wrapping for integers)
    fn horizontal_sum(self) -> Self::Scalar;

    /// Largest lane
    fn horizontal_max(self) -> Self::Scalar;

    /// Smallest lane
    fn horizontal_min(self) -> Self::Scalar;

    /// Visit every lane in order, lane 0 first
    fn for_each_lane<F: FnMut(Self::Scalar)>(self, f: F);
}

/// Mask type for conditional SIMD operations
///
/// Masks represent per-lane boolean values, enabling branchless conditional logic.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::{SimdElement, SimdMask, SimdVector};
///
/// type V = <f32 as SimdElement>::Vector;
///
/// let mask = V::splat(1.0).lt(V::splat(2.0));
/// assert!(mask.all());
/// ```
pub trait SimdMask: Copy + Clone + Sized {
    /// Returns true if all lanes are set
    fn all(self) -> bool;

    /// Returns true if any lane is set
    fn any(self) -> bool;

    /// Returns true if no lanes are set
    fn none(self) -> bool;

    /// Bitwise AND of two masks
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR of two masks
    fn or(self, rhs: Self) -> Self;

    /// Bitwise NOT of mask
    fn not(self) -> Self;

    /// Bitwise XOR of two masks
    fn xor(self, rhs: Self) -> Self;
}

macro_rules! impl_lane_int {
    ($($t:ty),* $(,)?) => {$(
        impl Lane for $t {
            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }
        }
    )*};
}

impl_lane_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Lane for f32 {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        libm::fminf(self, rhs)
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        libm::fmaxf(self, rhs)
    }
}

impl Lane for f64 {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        libm::fmin(self, rhs)
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        libm::fmax(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_lanes_wrap() {
        assert_eq!(u8::MAX.lane_add(1), 0);
        assert_eq!(0u32.lane_sub(1), u32::MAX);
        assert_eq!(i32::MIN.lane_neg(), i32::MIN);
        assert_eq!(200u8.lane_mul(2), 144);
    }

    #[test]
    fn test_float_lanes() {
        assert_eq!(2.0f32.lane_add(3.0), 5.0);
        assert_eq!(2.0f64.lane_min(-1.0), -1.0);
        assert_eq!(2.0f32.lane_max(7.5), 7.5);
        assert_eq!(1.5f64.lane_neg(), -1.5);
    }

    #[test]
    fn test_bounds_are_lowest_and_highest() {
        assert_eq!(<f32 as Bounded>::min_value(), f32::MIN);
        assert_eq!(<i32 as Bounded>::min_value(), i32::MIN);
        assert_eq!(<u16 as Bounded>::max_value(), u16::MAX);
    }
}
