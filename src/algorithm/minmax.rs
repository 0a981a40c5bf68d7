//! Smallest and largest element of a slice
//!
//! The default forms use the element's own ordering (`Lane::lane_min` /
//! `lane_max`, vector `min` / `max`). The `_by` forms take a strict "less"
//! ordering, like [`Iterator::min_by`] and [`Iterator::max_by`], and blend the
//! running extreme with `select` in the vector body.
//!
//! All forms return a value, not a position. With duplicate extremes any of
//! them may be the one returned.

use super::load;
use super::partition::{partition, Partition};
use crate::ops::BinaryPredicate;
use crate::traits::{SimdElement, SimdVector};

/// Smallest element of `input`, or `T::max_value()` when empty
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::min;
///
/// assert_eq!(min(&[3i32, 9, 2, 9, 1]), 1);
/// assert_eq!(min::<u8>(&[]), u8::MAX);
/// ```
pub fn min<T: SimdElement>(input: &[T]) -> T {
    let Some(&first) = input.first() else {
        return T::max_value();
    };
    fold_extreme(input, first, T::lane_min, <T::Vector as SimdVector>::min, |v| {
        v.horizontal_min()
    })
}

/// Largest element of `input`, or the lowest value of `T` when empty
///
/// For floats the lowest value is `T::MIN` (most negative finite), not
/// negative infinity.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::max;
///
/// assert_eq!(max::<i32>(&[]), i32::MIN);
/// assert_eq!(max(&[7i32]), 7);
/// assert_eq!(max(&[3i32, 9, 2, 9, 1]), 9);
/// ```
pub fn max<T: SimdElement>(input: &[T]) -> T {
    let Some(&first) = input.first() else {
        return T::min_value();
    };
    fold_extreme(input, first, T::lane_max, <T::Vector as SimdVector>::max, |v| {
        v.horizontal_max()
    })
}

/// Seed with `first`, fold the prologue and epilogue with `scalar` and the body
/// with `vector`, collapsing the vector with `horizontal`
#[inline(always)]
fn fold_extreme<T: SimdElement>(
    input: &[T],
    first: T,
    scalar: impl Fn(T, T) -> T,
    vector: impl Fn(T::Vector, T::Vector) -> T::Vector,
    horizontal: impl Fn(T::Vector) -> T,
) -> T {
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    let mut extreme = input[..prologue].iter().fold(first, |acc, &x| scalar(acc, x));

    if body > 0 {
        let mut current = <T::Vector as SimdVector>::splat(extreme);
        for chunk in input[prologue..end].chunks_exact(lanes) {
            current = vector(current, load::<T::Vector>(chunk, true));
        }
        extreme = horizontal(current);
    }

    input[end..].iter().fold(extreme, |acc, &x| scalar(acc, x))
}

/// Smallest element of `input` under the strict ordering `comp`
///
/// When empty, returns the most extreme value in the direction `comp` looks
/// for: `T::max_value()` if `comp(0, 1)` holds (an ascending ordering), else the
/// lowest value.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{Greater, Less};
/// use rigel_algorithm::min_by;
///
/// let data = [4i16, -2, 8, 5];
/// assert_eq!(min_by(&data, &Less), -2);
/// assert_eq!(min_by(&data, &Greater), 8);
/// assert_eq!(min_by::<i16, _>(&[], &Greater), i16::MIN);
/// ```
pub fn min_by<T, C>(input: &[T], comp: &C) -> T
where
    T: SimdElement,
    C: BinaryPredicate<T::Vector>,
{
    let Some(&first) = input.first() else {
        return if ascending::<T, C>(comp) {
            T::max_value()
        } else {
            T::min_value()
        };
    };
    select_extreme(input, first, comp, Extreme::Min)
}

/// Largest element of `input` under the strict ordering `comp`
///
/// When empty, returns the lowest value of `T` if `comp(0, 1)` holds (an
/// ascending ordering), else `T::max_value()`.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::{Greater, Less};
/// use rigel_algorithm::max_by;
///
/// let data = [4.5f32, -2.0, 8.25, 5.0];
/// assert_eq!(max_by(&data, &Less), 8.25);
/// assert_eq!(max_by(&data, &Greater), -2.0);
/// assert_eq!(max_by::<f32, _>(&[], &Less), f32::MIN);
/// ```
pub fn max_by<T, C>(input: &[T], comp: &C) -> T
where
    T: SimdElement,
    C: BinaryPredicate<T::Vector>,
{
    let Some(&first) = input.first() else {
        return if ascending::<T, C>(comp) {
            T::min_value()
        } else {
            T::max_value()
        };
    };
    select_extreme(input, first, comp, Extreme::Max)
}

/// Whether `comp` orders zero before one
#[inline(always)]
fn ascending<T, C>(comp: &C) -> bool
where
    T: SimdElement,
    C: BinaryPredicate<T::Vector>,
{
    comp.test_scalar(T::zero(), T::one())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Extreme {
    /// Candidate replaces the running value when `comp(candidate, current)`
    Min,
    /// Candidate replaces the running value when `comp(current, candidate)`
    Max,
}

/// Running extreme of `input` under `comp`, seeded with `first`
#[inline(always)]
fn select_extreme<T, C>(input: &[T], first: T, comp: &C, extreme_of: Extreme) -> T
where
    T: SimdElement,
    C: BinaryPredicate<T::Vector>,
{
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    let wins = |candidate: T, current: T| match extreme_of {
        Extreme::Min => comp.test_scalar(candidate, current),
        Extreme::Max => comp.test_scalar(current, candidate),
    };

    let mut extreme = first;
    for &x in &input[..prologue] {
        if wins(x, extreme) {
            extreme = x;
        }
    }

    if body > 0 {
        let mut current = <T::Vector as SimdVector>::splat(extreme);
        for chunk in input[prologue..end].chunks_exact(lanes) {
            let candidate = load::<T::Vector>(chunk, true);
            let mask = match extreme_of {
                Extreme::Min => comp.test_vector(candidate, current),
                Extreme::Max => comp.test_vector(current, candidate),
            };
            current = <T::Vector as SimdVector>::select(mask, candidate, current);
        }
        current.for_each_lane(|x| {
            if wins(x, extreme) {
                extreme = x;
            }
        });
    }

    for &x in &input[end..] {
        if wins(x, extreme) {
            extreme = x;
        }
    }

    extreme
}
