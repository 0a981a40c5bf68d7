//! Functors built from a scalar closure and a vector closure

use super::{BinaryOp, BinaryPredicate, UnaryOp, UnaryPredicate};
use crate::traits::SimdVector;

/// Pair of closures acting as one scalar/vector functor
///
/// Depending on the closures' signatures this implements [`UnaryOp`],
/// [`BinaryOp`], [`UnaryPredicate`] or [`BinaryPredicate`]. The two closures
/// must agree lane by lane; the algorithms call either one depending on the
/// processing phase.
#[derive(Debug, Clone, Copy)]
pub struct Lanewise<S, W> {
    scalar: S,
    vector: W,
}

/// Build a [`Lanewise`] functor
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::lanewise;
/// use rigel_algorithm::{transform, NativeVector, SimdVector};
///
/// type V = NativeVector<f32>;
///
/// let square = lanewise(|x: f32| x * x, |v: V| v.mul(v));
/// let input = [1.0f32, 2.0, 3.0];
/// let mut out = [0.0f32; 3];
/// transform(&input, &mut out, &square);
/// assert_eq!(out, [1.0, 4.0, 9.0]);
/// ```
pub fn lanewise<S, W>(scalar: S, vector: W) -> Lanewise<S, W> {
    Lanewise { scalar, vector }
}

impl<In, Out, S, W> UnaryOp<In, Out> for Lanewise<S, W>
where
    In: SimdVector,
    Out: SimdVector,
    S: Fn(In::Scalar) -> Out::Scalar,
    W: Fn(In) -> Out,
{
    #[inline(always)]
    fn apply_scalar(&self, x: In::Scalar) -> Out::Scalar {
        (self.scalar)(x)
    }

    #[inline(always)]
    fn apply_vector(&self, x: In) -> Out {
        (self.vector)(x)
    }
}

impl<A, B, Out, S, W> BinaryOp<A, B, Out> for Lanewise<S, W>
where
    A: SimdVector,
    B: SimdVector,
    Out: SimdVector,
    S: Fn(A::Scalar, B::Scalar) -> Out::Scalar,
    W: Fn(A, B) -> Out,
{
    #[inline(always)]
    fn apply_scalar(&self, a: A::Scalar, b: B::Scalar) -> Out::Scalar {
        (self.scalar)(a, b)
    }

    #[inline(always)]
    fn apply_vector(&self, a: A, b: B) -> Out {
        (self.vector)(a, b)
    }
}

impl<V, S, W> UnaryPredicate<V> for Lanewise<S, W>
where
    V: SimdVector,
    S: Fn(V::Scalar) -> bool,
    W: Fn(V) -> V::Mask,
{
    #[inline(always)]
    fn test_scalar(&self, x: V::Scalar) -> bool {
        (self.scalar)(x)
    }

    #[inline(always)]
    fn test_vector(&self, x: V) -> V::Mask {
        (self.vector)(x)
    }
}

impl<V, S, W> BinaryPredicate<V> for Lanewise<S, W>
where
    V: SimdVector,
    S: Fn(V::Scalar, V::Scalar) -> bool,
    W: Fn(V, V) -> V::Mask,
{
    #[inline(always)]
    fn test_scalar(&self, a: V::Scalar, b: V::Scalar) -> bool {
        (self.scalar)(a, b)
    }

    #[inline(always)]
    fn test_vector(&self, a: V, b: V) -> V::Mask {
        (self.vector)(a, b)
    }
}
