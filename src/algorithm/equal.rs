//! Element-wise equality of two slices

use super::load;
use super::partition::{is_aligned, partition, Partition};
use crate::ops::{BinaryPredicate, EqualTo};
use crate::precondition::precondition;
use crate::traits::{SimdElement, SimdMask, SimdVector};

/// True when `a[i] == b[i]` for every index of `a`
///
/// `b` may be longer than `a`; only its first `a.len()` elements are compared.
///
/// # Panics
///
/// If `b` is shorter than `a`.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::equal;
///
/// assert!(equal(&[1i32, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1i32, 2, 3], &[1, 2, 4]));
/// ```
pub fn equal<T: SimdElement>(a: &[T], b: &[T]) -> bool {
    equal_by(a, b, &EqualTo)
}

/// True when `pred(a[i], b[i])` holds for every index of `a`
///
/// Returns at the first failing element in the prologue or epilogue, or at the
/// first vector group whose mask is not all set.
///
/// # Panics
///
/// If `b` is shorter than `a`.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::Less;
/// use rigel_algorithm::equal_by;
///
/// assert!(equal_by(&[1u8, 2, 3], &[2, 3, 4], &Less));
/// assert!(!equal_by(&[1u8, 2, 3], &[2, 2, 4], &Less));
/// ```
pub fn equal_by<T, P>(a: &[T], b: &[T], pred: &P) -> bool
where
    T: SimdElement,
    P: BinaryPredicate<T::Vector>,
{
    precondition!(b.len() >= a.len(), "equal", "b shorter than a");

    let len = a.len();
    let b = &b[..len];
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(a);
    let end = prologue + body;

    if !a[..prologue]
        .iter()
        .zip(&b[..prologue])
        .all(|(&x, &y)| pred.test_scalar(x, y))
    {
        return false;
    }

    let b_aligned = is_aligned::<T::Vector, _>(b[prologue..].as_ptr());
    for (x, y) in a[prologue..end]
        .chunks_exact(lanes)
        .zip(b[prologue..end].chunks_exact(lanes))
    {
        let va = load::<T::Vector>(x, true);
        let vb = load::<T::Vector>(y, b_aligned);
        if !pred.test_vector(va, vb).all() {
            return false;
        }
    }

    a[end..]
        .iter()
        .zip(&b[end..])
        .all(|(&x, &y)| pred.test_scalar(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Greater, Less};

    #[repr(C, align(64))]
    struct Aligned<T, const N: usize>([T; N]);

    #[test]
    fn test_equal_scenario() {
        assert!(equal(&[1i32, 2, 3], &[1, 2, 3]));
        assert!(!equal(&[1i32, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn test_equal_empty() {
        let a: [f64; 0] = [];
        assert!(equal(&a, &a));
        assert!(equal(&a, &[1.0, 2.0]));
    }

    #[test]
    fn test_equal_longer_second_input() {
        assert!(equal(&[4u8, 5], &[4, 5, 6, 7]));
    }

    #[test]
    fn test_equal_mismatch_at_every_index_and_offset() {
        let a = Aligned(core::array::from_fn::<u32, 64, _>(|i| i as u32));
        for a_off in 0..4 {
            for b_off in 0..4 {
                let mut b = Aligned([0u32; 64]);
                b.0[b_off..b_off + 60].copy_from_slice(&a.0[..60]);
                let x = &a.0[a_off..a_off + 50];
                let y = &mut b.0[b_off + a_off..];
                assert!(equal(x, y));

                for k in 0..50 {
                    y[k] ^= 1;
                    assert!(!equal(x, y), "mismatch {} a {} b {}", k, a_off, b_off);
                    y[k] ^= 1;
                }
            }
        }
    }

    #[test]
    fn test_equal_nan_is_never_equal() {
        let a = [1.0f32, 2.0, f32::NAN];
        assert!(!equal(&a, &a));
    }

    #[test]
    fn test_equal_by_orderings() {
        let a: [i16; 40] = core::array::from_fn(|i| i as i16);
        let b: [i16; 40] = core::array::from_fn(|i| i as i16 + 1);
        assert!(equal_by(&a, &b, &Less));
        assert!(equal_by(&b, &a, &Greater));
        assert!(!equal_by(&a, &a, &Less));
    }

    #[test]
    #[should_panic]
    fn test_equal_short_second_input_panics() {
        equal(&[1i32, 2, 3], &[1, 2]);
    }
}
