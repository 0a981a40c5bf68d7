//! Linear search
//!
//! The vector body only asks whether any lane of a group matches. When one
//! does, the exact index is located by a scalar scan of that group.

use super::load;
use super::partition::{partition, Partition};
use crate::ops::UnaryPredicate;
use crate::traits::{SimdElement, SimdMask, SimdVector};

/// Index of the first element equal to `value`, or `None`
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::find;
///
/// assert_eq!(find(&[5i32, 3, 8, 1, 9], 8), Some(2));
/// assert_eq!(find(&[5i32, 3, 8, 1, 9], 4), None);
/// ```
pub fn find<T: SimdElement>(input: &[T], value: T) -> Option<usize> {
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    if let Some(i) = input[..prologue].iter().position(|&x| x == value) {
        return Some(i);
    }

    let needle = <T::Vector as SimdVector>::splat(value);
    let mut i = prologue;
    while i < end {
        let group = &input[i..i + lanes];
        if load::<T::Vector>(group, true).eq(needle).any() {
            return group.iter().position(|&x| x == value).map(|k| i + k);
        }
        i += lanes;
    }

    input[end..]
        .iter()
        .position(|&x| x == value)
        .map(|k| end + k)
}

/// Index of the first element satisfying `pred`, or `None`
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::lanewise;
/// use rigel_algorithm::{find_if, NativeVector, SimdVector};
///
/// type V = NativeVector<f32>;
///
/// let negative = lanewise(|x: f32| x < 0.0, |v: V| v.lt(V::splat(0.0)));
/// assert_eq!(find_if(&[0.5f32, 2.0, -1.0, -3.0], &negative), Some(2));
/// ```
pub fn find_if<T, P>(input: &[T], pred: &P) -> Option<usize>
where
    T: SimdElement,
    P: UnaryPredicate<T::Vector>,
{
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    if let Some(i) = input[..prologue].iter().position(|&x| pred.test_scalar(x)) {
        return Some(i);
    }

    let mut i = prologue;
    while i < end {
        let group = &input[i..i + lanes];
        if pred.test_vector(load::<T::Vector>(group, true)).any() {
            return group
                .iter()
                .position(|&x| pred.test_scalar(x))
                .map(|k| i + k);
        }
        i += lanes;
    }

    input[end..]
        .iter()
        .position(|&x| pred.test_scalar(x))
        .map(|k| end + k)
}
