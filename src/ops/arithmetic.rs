//! Arithmetic functors
//!
//! Zero-sized functors for the common element-wise operations. Each works on
//! any vector type, so `&Plus` can be handed to `reduce_with`,
//! `transform2` or `transform_reduce` regardless of the element type.

use super::{BinaryOp, UnaryOp};
use crate::traits::{Lane, SimdVector};

/// Addition, `a + b` (wrapping for integers)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Plus;

/// Subtraction, `a - b` (wrapping for integers)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Minus;

/// Multiplication, `a * b` (wrapping for integers)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Multiplies;

/// Smaller of two values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Minimum;

/// Larger of two values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Maximum;

/// Negation, `-x`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Negate;

macro_rules! impl_binary_functor {
    ($functor:ty, $scalar:ident, $vector:ident) => {
        impl<V: SimdVector> BinaryOp<V, V, V> for $functor {
            #[inline(always)]
            fn apply_scalar(&self, a: V::Scalar, b: V::Scalar) -> V::Scalar {
                a.$scalar(b)
            }

            #[inline(always)]
            fn apply_vector(&self, a: V, b: V) -> V {
                a.$vector(b)
            }
        }
    };
}

impl_binary_functor!(Plus, lane_add, add);
impl_binary_functor!(Minus, lane_sub, sub);
impl_binary_functor!(Multiplies, lane_mul, mul);
impl_binary_functor!(Minimum, lane_min, min);
impl_binary_functor!(Maximum, lane_max, max);

impl<V: SimdVector> UnaryOp<V, V> for Negate {
    #[inline(always)]
    fn apply_scalar(&self, x: V::Scalar) -> V::Scalar {
        x.lane_neg()
    }

    #[inline(always)]
    fn apply_vector(&self, x: V) -> V {
        x.neg()
    }
}
