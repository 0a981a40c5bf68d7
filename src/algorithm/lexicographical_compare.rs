//! Lexicographical ordering of two slices

use super::load;
use super::partition::{is_aligned, partition, Partition};
use crate::ops::{BinaryPredicate, Less};
use crate::traits::{SimdElement, SimdMask, SimdVector};

/// True when `a` orders before `b` element by element
///
/// Same result as `a < b` on slices of totally ordered values: the first
/// differing element decides, and when one slice is a prefix of the other the
/// shorter one orders first.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::lexicographical_compare;
///
/// assert!(lexicographical_compare(&[1i32, 2], &[1, 2, 3]));
/// assert!(!lexicographical_compare(&[1i32, 2, 3], &[1, 2]));
/// assert!(lexicographical_compare(&[1i32, 2, 3], &[1, 3]));
/// ```
pub fn lexicographical_compare<T: SimdElement>(a: &[T], b: &[T]) -> bool {
    lexicographical_compare_by(a, b, &Less)
}

/// True when `a` orders before `b` under the strict ordering `comp`
///
/// Compares up to the shorter length. Each vector group evaluates `comp` in
/// both directions; a group where either mask has a lane set is then scanned
/// scalar-wise to find the first decisive element, so the result is the same
/// as a purely scalar comparison. If the common prefix is undecided, `a`
/// orders first exactly when it is shorter.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::Greater;
/// use rigel_algorithm::lexicographical_compare_by;
///
/// assert!(lexicographical_compare_by(&[3u8, 2, 1], &[3, 1, 9], &Greater));
/// ```
pub fn lexicographical_compare_by<T, C>(a: &[T], b: &[T], comp: &C) -> bool
where
    T: SimdElement,
    C: BinaryPredicate<T::Vector>,
{
    let a_shorter = a.len() < b.len();
    let len = a.len().min(b.len());
    let a = &a[..len];
    let b = &b[..len];
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(a);
    let end = prologue + body;

    // Some(result) at the first element where one side orders before the other
    let decide = |x: T, y: T| -> Option<bool> {
        if comp.test_scalar(x, y) {
            Some(true)
        } else if comp.test_scalar(y, x) {
            Some(false)
        } else {
            None
        }
    };

    if let Some(result) = a[..prologue]
        .iter()
        .zip(&b[..prologue])
        .find_map(|(&x, &y)| decide(x, y))
    {
        return result;
    }

    let b_aligned = is_aligned::<T::Vector, _>(b[prologue..].as_ptr());
    for (ga, gb) in a[prologue..end]
        .chunks_exact(lanes)
        .zip(b[prologue..end].chunks_exact(lanes))
    {
        let va = load::<T::Vector>(ga, true);
        let vb = load::<T::Vector>(gb, b_aligned);
        if comp.test_vector(va, vb).or(comp.test_vector(vb, va)).any() {
            if let Some(result) = ga.iter().zip(gb).find_map(|(&x, &y)| decide(x, y)) {
                return result;
            }
        }
    }

    a[end..]
        .iter()
        .zip(&b[end..])
        .find_map(|(&x, &y)| decide(x, y))
        .unwrap_or(a_shorter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Greater;

    #[repr(C, align(64))]
    struct Aligned<T, const N: usize>([T; N]);

    #[test]
    fn test_prefix_is_less() {
        assert!(lexicographical_compare(&[1i32, 2], &[1, 2, 3]));
        assert!(!lexicographical_compare(&[1i32, 2, 3], &[1, 2]));
    }

    #[test]
    fn test_equal_slices_are_not_less() {
        let a: [u8; 50] = core::array::from_fn(|i| i as u8);
        assert!(!lexicographical_compare(&a, &a));
    }

    #[test]
    fn test_empty_ranges() {
        let empty: [f32; 0] = [];
        assert!(!lexicographical_compare(&empty, &empty));
        assert!(lexicographical_compare(&empty, &[0.0]));
        assert!(!lexicographical_compare(&[0.0], &empty));
    }

    #[test]
    fn test_first_difference_decides_within_group() {
        // Later lanes of the deciding group point the other way
        let mut a = Aligned([5u32; 64]);
        let mut b = Aligned([5u32; 64]);
        for k in 0..48 {
            a.0[k + 1..].iter_mut().for_each(|x| *x = 9);
            b.0[k + 1..].iter_mut().for_each(|x| *x = 1);
            a.0[k] = 2;
            b.0[k] = 3;

            assert!(lexicographical_compare(&a.0[..56], &b.0[..56]), "k {}", k);
            assert!(!lexicographical_compare(&b.0[..56], &a.0[..56]), "k {}", k);

            a.0.iter_mut().for_each(|x| *x = 5);
            b.0.iter_mut().for_each(|x| *x = 5);
        }
    }

    #[test]
    fn test_matches_slice_ordering_for_offsets() {
        let a = Aligned(core::array::from_fn::<i16, 64, _>(|i| (i as i16 * 7) % 5));
        let b = Aligned(core::array::from_fn::<i16, 64, _>(|i| (i as i16 * 7) % 5));
        for a_off in 0..8 {
            for b_off in 0..8 {
                for len in [0, 1, 7, 8, 9, 31, 40] {
                    let x = &a.0[a_off..a_off + len];
                    let y = &b.0[b_off..b_off + 40];
                    assert_eq!(lexicographical_compare(x, y), x < y);
                    assert_eq!(lexicographical_compare(y, x), y < x);
                }
            }
        }
    }

    #[test]
    fn test_reversed_ordering() {
        assert!(lexicographical_compare_by(&[3u8, 2, 1], &[3, 1, 9], &Greater));
        assert!(!lexicographical_compare_by(&[3u8, 1, 9], &[3, 2, 1], &Greater));
    }

    #[test]
    fn test_reversed_ordering_keeps_shorter_prefix_first() {
        let empty: [i16; 0] = [];
        assert!(lexicographical_compare_by(&empty, &[0i16], &Greater));
        assert!(!lexicographical_compare_by(&[0i16], &empty, &Greater));
        assert!(lexicographical_compare_by(&[4i16, 2], &[4, 2, 7], &Greater));
        assert!(!lexicographical_compare_by(&[4i16, 2, 7], &[4, 2], &Greater));
    }
}
