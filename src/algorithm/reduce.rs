//! Folding a slice to a single value

use super::partition::{partition, Partition};
use super::load;
use crate::ops::BinaryOp;
use crate::traits::{SimdElement, SimdVector};

/// Sum of `init` and every element of `input`
///
/// Integer sums wrap on overflow. The vector body sums lane-parallel partial
/// sums, so floating-point results can differ in the last bits from a strict
/// left-to-right loop. Use an iterator fold when encounter order matters.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::reduce;
///
/// let data: Vec<u64> = (1..=1000).collect();
/// assert_eq!(reduce(&data, 0), 500500);
/// ```
pub fn reduce<T: SimdElement>(input: &[T], init: T) -> T {
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    let mut sum = input[..prologue].iter().fold(init, |acc, &x| acc.lane_add(x));

    if body > 0 {
        let mut acc = <T::Vector as SimdVector>::splat(T::zero());
        for chunk in input[prologue..end].chunks_exact(lanes) {
            acc = acc.add(load::<T::Vector>(chunk, true));
        }
        sum = sum.lane_add(acc.horizontal_sum());
    }

    input[end..].iter().fold(sum, |acc, &x| acc.lane_add(x))
}

/// Fold `input` into `init` with `f`
///
/// `neutral` must be an identity of `f` (`f(neutral, x) == x` and
/// `f(x, neutral) == x`); it seeds the vector accumulator so lanes carry no
/// bias into the final result.
///
/// The prologue folds straight into `init`. The body folds whole vectors into
/// the accumulator, whose lanes are then folded into `init` one by one before
/// the epilogue. This regroups the operands, so the result matches a
/// left-to-right fold only when `f` is associative and commutative.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{Maximum, Multiplies};
/// use rigel_algorithm::reduce_with;
///
/// let data = [3i32, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(reduce_with(&data, 1, 1, &Multiplies), 6480);
/// assert_eq!(reduce_with(&data, i32::MIN, i32::MIN, &Maximum), 9);
/// ```
pub fn reduce_with<T, F>(input: &[T], mut init: T, neutral: T, f: &F) -> T
where
    T: SimdElement,
    F: BinaryOp<T::Vector, T::Vector, T::Vector>,
{
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    for &x in &input[..prologue] {
        init = f.apply_scalar(init, x);
    }

    if body > 0 {
        let mut acc = <T::Vector as SimdVector>::splat(neutral);
        for chunk in input[prologue..end].chunks_exact(lanes) {
            acc = f.apply_vector(acc, load::<T::Vector>(chunk, true));
        }
        acc.for_each_lane(|x| init = f.apply_scalar(init, x));
    }

    for &x in &input[end..] {
        init = f.apply_scalar(init, x);
    }

    init
}
