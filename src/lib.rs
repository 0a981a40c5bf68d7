#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! rigel-algorithm: SIMD loop algorithms over slices
//!
//! Generic `transform`, `reduce`, `transform_reduce`, `find`, `equal`,
//! `lexicographical_compare`, `min` and `max` that split their input into a
//! scalar prologue, an aligned vector body and a scalar epilogue, on top of a
//! small trait-based vector abstraction with compile-time backend selection.
//!
//! # Features
//!
//! - **Trait-based SIMD abstraction**: algorithms are written once against `SimdVector`
//! - **Compile-time backend selection**: portable lane arrays (default), scalar, AVX2 or NEON
//! - **Alignment-aware loops**: the vector body always runs on aligned loads
//! - **Dual scalar/vector functors**: built-in arithmetic and comparison ops, or closure pairs
//! - **No allocations**: everything works on caller-owned slices
//!
//! # Quick Start
//!
//! ```rust
//! use rigel_algorithm::ops::{Multiplies, Plus};
//! use rigel_algorithm::{find, max, reduce, transform_reduce2};
//!
//! let samples = [0.5f32, -1.25, 3.0, 0.75, -2.0];
//!
//! assert_eq!(reduce(&samples, 0.0), 1.0);
//! assert_eq!(max(&samples), 3.0);
//! assert_eq!(find(&samples, 0.75), Some(3));
//!
//! let energy = transform_reduce2(&samples, &samples, 0.0f32, &Plus, &Multiplies);
//! assert_eq!(energy, 15.375);
//! ```

#[cfg(test)]
extern crate std;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Scalar/vector functors
pub mod ops;

// Debug-build argument checks
mod precondition;

// Prologue/body/epilogue algorithms
pub mod algorithm;

// Public re-exports for convenience
pub use traits::{Lane, SimdElement, SimdMask, SimdVector};

// Re-export backend types
pub use backends::portable::{LaneMask, LaneVector};
pub use backends::scalar::{ScalarMask, ScalarVector};
pub use backends::{BackendType, NativeVector};

// Only re-export AVX2 types when both feature is enabled AND we're targeting x86/x86_64
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{Avx2Mask, Avx2Vector};

// Only re-export NEON types when both feature is enabled AND we're targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonMask, NeonVector};

// Re-export the algorithms at the crate root
pub use algorithm::{
    equal, equal_by, find, find_if, lexicographical_compare, lexicographical_compare_by, max,
    max_by, min, min_by, partition, reduce, reduce_with, transform, transform2, transform_reduce,
    transform_reduce2, transform_reduce_with, Partition,
};

/// Native vector for `f32` on the active backend
///
/// - `portable` feature (default): `LaneVector<f32, 4>`
/// - `scalar` feature: `ScalarVector<f32>` (1 lane)
/// - `avx2` feature: `Avx2Vector` (8 lanes, x86-64)
/// - `neon` feature: `NeonVector` (4 lanes, ARM64)
pub type DefaultSimdVector = NativeVector<f32>;
