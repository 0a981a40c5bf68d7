//! Scalar/vector functors
//!
//! The algorithms run the same user operation on single elements (prologue and
//! epilogue) and on whole vectors (aligned body). A functor therefore provides
//! both forms through one of the traits below. The built-in functors in
//! [`arithmetic`] and [`compare`] implement them for every vector type, and
//! [`lanewise`] builds one from a pair of closures.
//!
//! # Example
//!
//! ```rust
//! use rigel_algorithm::ops::{lanewise, Negate, UnaryOp};
//! use rigel_algorithm::{NativeVector, SimdVector};
//!
//! type V = NativeVector<i32>;
//!
//! assert_eq!(UnaryOp::<V, V>::apply_scalar(&Negate, 4), -4);
//!
//! let double = lanewise(|x: i32| x * 2, |v: V| v.add(v));
//! assert_eq!(UnaryOp::<V, V>::apply_scalar(&double, 21), 42);
//! ```

use crate::traits::SimdVector;

pub mod arithmetic;
pub mod compare;
pub mod lanewise;

pub use arithmetic::{Maximum, Minimum, Minus, Multiplies, Negate, Plus};
pub use compare::{EqualTo, Greater, Less};
pub use lanewise::{lanewise, Lanewise};

/// Operation of one argument with a scalar and a vector form
///
/// Both forms must compute the same function lane by lane.
pub trait UnaryOp<In: SimdVector, Out: SimdVector> {
    /// Apply to a single element
    fn apply_scalar(&self, x: In::Scalar) -> Out::Scalar;

    /// Apply to every lane of a vector
    fn apply_vector(&self, x: In) -> Out;
}

/// Operation of two arguments with a scalar and a vector form
pub trait BinaryOp<A: SimdVector, B: SimdVector, Out: SimdVector> {
    /// Apply to a pair of elements
    fn apply_scalar(&self, a: A::Scalar, b: B::Scalar) -> Out::Scalar;

    /// Apply to a pair of vectors, lane by lane
    fn apply_vector(&self, a: A, b: B) -> Out;
}

/// Test on one element, with a vector form producing a lane mask
pub trait UnaryPredicate<V: SimdVector> {
    /// Test a single element
    fn test_scalar(&self, x: V::Scalar) -> bool;

    /// Test every lane of a vector
    fn test_vector(&self, x: V) -> V::Mask;
}

/// Test on a pair of elements, with a vector form producing a lane mask
///
/// Used both for equality-like predicates (`equal_by`) and for strict
/// orderings (`lexicographical_compare_by`, `min_by`, `max_by`).
pub trait BinaryPredicate<V: SimdVector> {
    /// Test a pair of elements
    fn test_scalar(&self, a: V::Scalar, b: V::Scalar) -> bool;

    /// Test a pair of vectors, lane by lane
    fn test_vector(&self, a: V, b: V) -> V::Mask;
}
