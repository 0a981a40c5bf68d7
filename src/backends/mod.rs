//! SIMD backend implementations
//!
//! This module contains the vector implementations and the compile-time mapping
//! from element type to native vector ([`SimdElement`]). Exactly one mapping is
//! active per build, chosen with cargo features:
//!
//! | Feature | `f32` vector | Other element types |
//! |---------|--------------|---------------------|
//! | `portable` (default) | `LaneVector<f32, 4>` | 128-bit `LaneVector` |
//! | `scalar` | `ScalarVector<f32>` | `ScalarVector<T>` |
//! | `avx2` | `Avx2Vector` | 256-bit `LaneVector` |
//! | `neon` | `NeonVector` | 128-bit `LaneVector` |
//!
//! Lane counts depend only on the element size, so element types of equal size
//! (`f32`/`i32`/`u32`, `f64`/`i64`/`u64`, ...) always share a lane count and can
//! be mixed in the binary algorithms.

use crate::traits::SimdElement;

// Scalar backend (always available as fallback)
pub mod scalar;

// Lane-array backend (always available, used for every type without a hand-written backend)
pub mod portable;

// Platform-specific backends (feature-gated)
#[cfg(feature = "avx2")]
pub mod avx2;

#[cfg(feature = "neon")]
pub mod neon;

#[cfg(all(feature = "scalar", any(feature = "avx2", feature = "neon")))]
compile_error!(
    "The scalar feature cannot be combined with a hardware backend. Choose one backend."
);

#[cfg(all(
    feature = "avx2",
    feature = "neon",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
compile_error!("Cannot enable both avx2 and neon features simultaneously. Choose one backend.");

#[cfg(not(feature = "scalar"))]
use portable::LaneVector;

#[cfg(feature = "scalar")]
use scalar::ScalarVector;

/// Width in bytes of one native vector for the lane-array backend
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub const VECTOR_BYTES: usize = 32;

/// Width in bytes of one native vector for the lane-array backend
#[cfg(not(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64"))))]
pub const VECTOR_BYTES: usize = 16;

/// Native vector type for element type `T` on the active backend
pub type NativeVector<T> = <T as SimdElement>::Vector;

/// Backend Type Enumeration
///
/// Identifies the backend the element-to-vector mapping was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// One lane per vector, no SIMD
    Scalar,

    /// Lane arrays lowered by the compiler
    Portable,

    /// AVX2 backend (x86_64, 256-bit SIMD)
    Avx2,

    /// NEON backend (aarch64, 128-bit SIMD)
    Neon,
}

impl BackendType {
    /// Backend selected by the enabled cargo features
    pub const fn active() -> Self {
        if cfg!(feature = "scalar") {
            BackendType::Scalar
        } else if cfg!(all(
            feature = "avx2",
            any(target_arch = "x86", target_arch = "x86_64")
        )) {
            BackendType::Avx2
        } else if cfg!(all(feature = "neon", target_arch = "aarch64")) {
            BackendType::Neon
        } else {
            BackendType::Portable
        }
    }

    /// Short lowercase name of the backend
    pub const fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::Portable => "portable",
            BackendType::Avx2 => "avx2",
            BackendType::Neon => "neon",
        }
    }
}

macro_rules! impl_simd_element {
    ($($t:ty),* $(,)?) => {$(
        impl SimdElement for $t {
            #[cfg(feature = "scalar")]
            type Vector = ScalarVector<$t>;

            #[cfg(not(feature = "scalar"))]
            type Vector = LaneVector<$t, { VECTOR_BYTES / core::mem::size_of::<$t>() }>;
        }
    )*};
}

impl_simd_element!(i8, i16, i32, i64, u8, u16, u32, u64, f64);

impl SimdElement for f32 {
    #[cfg(feature = "scalar")]
    type Vector = ScalarVector<f32>;

    #[cfg(all(
        not(feature = "scalar"),
        feature = "avx2",
        any(target_arch = "x86", target_arch = "x86_64")
    ))]
    type Vector = avx2::Avx2Vector;

    #[cfg(all(not(feature = "scalar"), feature = "neon", target_arch = "aarch64"))]
    type Vector = neon::NeonVector;

    #[cfg(all(
        not(feature = "scalar"),
        not(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64"))),
        not(all(feature = "neon", target_arch = "aarch64"))
    ))]
    type Vector = LaneVector<f32, { VECTOR_BYTES / core::mem::size_of::<f32>() }>;
}
