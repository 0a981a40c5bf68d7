//! Fused map and fold, without materialising the mapped values

use super::partition::{is_aligned, partition, Partition};
use super::load;
use crate::ops::{BinaryOp, UnaryOp};
use crate::precondition::precondition;
use crate::traits::{SimdElement, SimdVector};

/// Fold `unary_op(x)` for every `x` in `input` into `init` with `binary_op`
///
/// The vector accumulator starts at zero, so `binary_op` must treat zero as
/// its identity (sums, bitwise or, ...). Use [`transform_reduce_with`] to
/// supply a different neutral element. Like [`reduce_with`](super::reduce_with)
/// the fold regroups its operands, so floating-point results can differ in
/// rounding from a sequential loop.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{lanewise, Plus};
/// use rigel_algorithm::{transform_reduce, NativeVector, SimdVector};
///
/// type V = NativeVector<i32>;
///
/// let square = lanewise(|x: i32| x * x, |v: V| v.mul(v));
/// let data = [1i32, 2, 3, 4, 5];
/// assert_eq!(transform_reduce(&data, 0i32, &Plus, &square), 55);
/// ```
pub fn transform_reduce<T, U, B, F>(input: &[T], init: U, binary_op: &B, unary_op: &F) -> U
where
    T: SimdElement,
    U: SimdElement,
    B: BinaryOp<U::Vector, U::Vector, U::Vector>,
    F: UnaryOp<T::Vector, U::Vector>,
{
    transform_reduce_with(input, init, U::zero(), binary_op, unary_op)
}

/// [`transform_reduce`] with an explicit identity of `binary_op`
///
/// `neutral` seeds the vector accumulator, as in
/// [`reduce_with`](super::reduce_with).
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{Maximum, Negate};
/// use rigel_algorithm::transform_reduce_with;
///
/// let data = [4i64, -7, 2, -1, 9, 3];
/// let largest_negated = transform_reduce_with(&data, i64::MIN, i64::MIN, &Maximum, &Negate);
/// assert_eq!(largest_negated, 7);
/// ```
pub fn transform_reduce_with<T, U, B, F>(
    input: &[T],
    mut init: U,
    neutral: U,
    binary_op: &B,
    unary_op: &F,
) -> U
where
    T: SimdElement,
    U: SimdElement,
    B: BinaryOp<U::Vector, U::Vector, U::Vector>,
    F: UnaryOp<T::Vector, U::Vector>,
{
    const {
        assert!(
            <T::Vector as SimdVector>::LANES == <U::Vector as SimdVector>::LANES,
            "transform_reduce - mismatched lane count between input and result"
        )
    };

    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    for &x in &input[..prologue] {
        init = binary_op.apply_scalar(init, unary_op.apply_scalar(x));
    }

    if body > 0 {
        let mut acc = <U::Vector as SimdVector>::splat(neutral);
        for chunk in input[prologue..end].chunks_exact(lanes) {
            let mapped = unary_op.apply_vector(load::<T::Vector>(chunk, true));
            acc = binary_op.apply_vector(acc, mapped);
        }
        acc.for_each_lane(|x| init = binary_op.apply_scalar(init, x));
    }

    for &x in &input[end..] {
        init = binary_op.apply_scalar(init, unary_op.apply_scalar(x));
    }

    init
}

/// Fold `binary_op2(a[i], b[i])` for every index of `a` into `init` with
/// `binary_op1`
///
/// The dual-range form: `a` drives the length and the alignment partition, `b`
/// must hold at least `a.len()` elements. All three element types must map to
/// vectors of equal lane count (checked at compile time). The accumulator is
/// zero-seeded, as in [`transform_reduce`].
///
/// # Panics
///
/// If `b` is shorter than `a`.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{Multiplies, Plus};
/// use rigel_algorithm::transform_reduce2;
///
/// let a = [1.0f32, 2.0, 3.0];
/// let b = [4.0f32, 5.0, 6.0];
/// let dot = transform_reduce2(&a, &b, 0.0f32, &Plus, &Multiplies);
/// assert_eq!(dot, 32.0);
/// ```
pub fn transform_reduce2<T1, T2, U, B1, B2>(
    a: &[T1],
    b: &[T2],
    mut init: U,
    binary_op1: &B1,
    binary_op2: &B2,
) -> U
where
    T1: SimdElement,
    T2: SimdElement,
    U: SimdElement,
    B1: BinaryOp<U::Vector, U::Vector, U::Vector>,
    B2: BinaryOp<T1::Vector, T2::Vector, U::Vector>,
{
    const {
        assert!(
            <T1::Vector as SimdVector>::LANES == <T2::Vector as SimdVector>::LANES,
            "transform_reduce2 - mismatched lane count between T1 and T2"
        );
        assert!(
            <T1::Vector as SimdVector>::LANES == <U::Vector as SimdVector>::LANES,
            "transform_reduce2 - mismatched lane count between T1 and U"
        );
    };
    precondition!(b.len() >= a.len(), "transform_reduce2", "b shorter than a");

    let len = a.len();
    let b = &b[..len];
    let lanes = <T1::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T1::Vector>(a);
    let end = prologue + body;

    for (&x, &y) in a[..prologue].iter().zip(&b[..prologue]) {
        init = binary_op1.apply_scalar(init, binary_op2.apply_scalar(x, y));
    }

    if body > 0 {
        let b_aligned = is_aligned::<T2::Vector, _>(b[prologue..].as_ptr());
        let mut acc = <U::Vector as SimdVector>::splat(U::zero());
        for (x, y) in a[prologue..end]
            .chunks_exact(lanes)
            .zip(b[prologue..end].chunks_exact(lanes))
        {
            let va = load::<T1::Vector>(x, true);
            let vb = load::<T2::Vector>(y, b_aligned);
            acc = binary_op1.apply_vector(acc, binary_op2.apply_vector(va, vb));
        }
        acc.for_each_lane(|x| init = binary_op1.apply_scalar(init, x));
    }

    for (&x, &y) in a[end..].iter().zip(&b[end..]) {
        init = binary_op1.apply_scalar(init, binary_op2.apply_scalar(x, y));
    }

    init
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{lanewise, Maximum, Minus, Multiplies, Negate, Plus};
    use crate::NativeVector;

    #[repr(C, align(64))]
    struct Aligned<T, const N: usize>([T; N]);

    #[test]
    fn test_sum_of_squares() {
        type V = NativeVector<u64>;
        let square = lanewise(|x: u64| x * x, |v: V| v.mul(v));
        let data: [u64; 100] = core::array::from_fn(|i| i as u64 + 1);
        assert_eq!(transform_reduce(&data, 0u64, &Plus, &square), 338350);
    }

    #[test]
    fn test_empty_returns_init() {
        let data: [i32; 0] = [];
        assert_eq!(transform_reduce(&data, -3i32, &Plus, &Negate), -3);
        assert_eq!(transform_reduce2(&data, &data, 8i32, &Plus, &Multiplies), 8);
    }

    #[test]
    fn test_negated_sum_every_offset() {
        let data = Aligned(core::array::from_fn::<i32, 64, _>(|i| i as i32 * 3 - 50));
        for start in 0..8 {
            let src = &data.0[start..start + 45];
            let expected = src.iter().fold(10, |acc, x| acc - x);
            assert_eq!(transform_reduce(src, 10i32, &Plus, &Negate), expected);
        }
    }

    #[test]
    fn test_with_neutral_for_maximum() {
        let data: [i8; 50] = core::array::from_fn(|i| (i as i8).wrapping_mul(13));
        let expected = data.iter().map(|x| x.wrapping_neg()).fold(i8::MIN, i8::max);
        assert_eq!(
            transform_reduce_with(&data, i8::MIN, i8::MIN, &Maximum, &Negate),
            expected
        );
    }

    #[test]
    fn test_dot_product_mixed_alignment() {
        let a = Aligned(core::array::from_fn::<i64, 64, _>(|i| i as i64 - 20));
        let b = Aligned(core::array::from_fn::<i64, 64, _>(|i| 2 * i as i64 + 1));
        for a_off in 0..4 {
            for b_off in 0..4 {
                let x = &a.0[a_off..a_off + 50];
                let y = &b.0[b_off..];
                let expected = x.iter().zip(y).fold(0i64, |acc, (p, q)| acc + p * q);
                assert_eq!(transform_reduce2(x, y, 0i64, &Plus, &Multiplies), expected);
            }
        }
    }

    #[test]
    fn test_sum_of_differences_mixed_types() {
        // u32 and i32 share a lane count
        type U = NativeVector<u32>;
        type I = NativeVector<i32>;
        let diff = lanewise(
            |a: u32, b: i32| a as i32 - b,
            |a: U, b: I| {
                let mut lanes = [0i32; 64];
                let mut n = 0;
                a.for_each_lane(|x| {
                    lanes[n] = x as i32;
                    n += 1;
                });
                I::from_slice(&lanes).sub(b)
            },
        );
        let a: [u32; 27] = core::array::from_fn(|i| i as u32 * 5);
        let b: [i32; 27] = core::array::from_fn(|i| i as i32 * 2);
        let expected: i32 = (0..27).map(|i| i * 3).sum();
        assert_eq!(transform_reduce2(&a, &b, 0i32, &Plus, &diff), expected);
    }

    #[test]
    fn test_float_dot_product_close_to_sequential() {
        let a: [f32; 83] = core::array::from_fn(|i| i as f32 * 0.5);
        let b: [f32; 83] = core::array::from_fn(|i| 1.0 - i as f32 * 0.01);
        let expected: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let got = transform_reduce2(&a, &b, 0.0f32, &Plus, &Multiplies);
        assert!((got - expected).abs() <= 1e-2 * expected.abs(), "{} vs {}", got, expected);
    }

    #[test]
    #[should_panic]
    fn test_short_second_input_panics() {
        let a = [1i32, 2, 3];
        let b = [1i32, 2];
        transform_reduce2(&a, &b, 0i32, &Minus, &Multiplies);
    }
}
