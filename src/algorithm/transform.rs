//! Element-wise transform into an output slice

use super::partition::{is_aligned, partition, Partition};
use super::{load, store};
use crate::ops::{BinaryOp, UnaryOp};
use crate::precondition::precondition;
use crate::traits::{SimdElement, SimdVector};

/// Write `f(input[i])` to `out[i]` for every index of `input`
///
/// Returns the number of elements written (`input.len()`). Elements of `out`
/// past that count are left untouched.
///
/// # Panics
///
/// If `out` is shorter than `input`. Debug builds report this through a
/// precondition check before any element is written.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::Negate;
/// use rigel_algorithm::transform;
///
/// let input = [1i32, 2, 3, 4];
/// let mut out = [0i32; 4];
/// assert_eq!(transform(&input, &mut out, &Negate), 4);
/// assert_eq!(out, [-1, -2, -3, -4]);
/// ```
pub fn transform<T, U, F>(input: &[T], out: &mut [U], f: &F) -> usize
where
    T: SimdElement,
    U: SimdElement,
    F: UnaryOp<T::Vector, U::Vector>,
{
    const {
        assert!(
            <T::Vector as SimdVector>::LANES == <U::Vector as SimdVector>::LANES,
            "transform - input and output element types must share a lane count"
        )
    };
    precondition!(out.len() >= input.len(), "transform", "out shorter than input");

    let len = input.len();
    let out = &mut out[..len];
    let lanes = <T::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T::Vector>(input);
    let end = prologue + body;

    for (x, y) in input[..prologue].iter().zip(&mut out[..prologue]) {
        *y = f.apply_scalar(*x);
    }

    let out_aligned = is_aligned::<U::Vector, _>(out[prologue..].as_ptr());
    for (x, y) in input[prologue..end]
        .chunks_exact(lanes)
        .zip(out[prologue..end].chunks_exact_mut(lanes))
    {
        let v = load::<T::Vector>(x, true);
        store::<U::Vector>(f.apply_vector(v), y, out_aligned);
    }

    for (x, y) in input[end..].iter().zip(&mut out[end..]) {
        *y = f.apply_scalar(*x);
    }

    len
}

/// Write `f(a[i], b[i])` to `out[i]` for every index of `a`
///
/// `a` drives the length and the alignment partition; `b` and `out` must hold
/// at least `a.len()` elements. The three element types may differ but must
/// map to vectors with the same lane count, which is checked at compile time.
///
/// Returns the number of elements written (`a.len()`).
///
/// # Panics
///
/// If `b` or `out` is shorter than `a`.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::ops::Plus;
/// use rigel_algorithm::transform2;
///
/// let a = [1.0f32, 2.0, 3.0];
/// let b = [10.0f32, 20.0, 30.0];
/// let mut out = [0.0f32; 3];
/// transform2(&a, &b, &mut out, &Plus);
/// assert_eq!(out, [11.0, 22.0, 33.0]);
/// ```
pub fn transform2<T1, T2, U, F>(a: &[T1], b: &[T2], out: &mut [U], f: &F) -> usize
where
    T1: SimdElement,
    T2: SimdElement,
    U: SimdElement,
    F: BinaryOp<T1::Vector, T2::Vector, U::Vector>,
{
    const {
        assert!(
            <T1::Vector as SimdVector>::LANES == <T2::Vector as SimdVector>::LANES,
            "transform2 - mismatched lane count between first and second input"
        );
        assert!(
            <T1::Vector as SimdVector>::LANES == <U::Vector as SimdVector>::LANES,
            "transform2 - mismatched lane count between input and output"
        );
    };
    precondition!(b.len() >= a.len(), "transform2", "b shorter than a");
    precondition!(out.len() >= a.len(), "transform2", "out shorter than a");

    let len = a.len();
    let b = &b[..len];
    let out = &mut out[..len];
    let lanes = <T1::Vector as SimdVector>::LANES;
    let Partition { prologue, body } = partition::<T1::Vector>(a);
    let end = prologue + body;

    for i in 0..prologue {
        out[i] = f.apply_scalar(a[i], b[i]);
    }

    let b_aligned = is_aligned::<T2::Vector, _>(b[prologue..].as_ptr());
    let out_aligned = is_aligned::<U::Vector, _>(out[prologue..].as_ptr());
    let mut i = prologue;
    while i < end {
        let va = load::<T1::Vector>(&a[i..], true);
        let vb = load::<T2::Vector>(&b[i..], b_aligned);
        store::<U::Vector>(f.apply_vector(va, vb), &mut out[i..], out_aligned);
        i += lanes;
    }

    for i in end..len {
        out[i] = f.apply_scalar(a[i], b[i]);
    }

    len
}
