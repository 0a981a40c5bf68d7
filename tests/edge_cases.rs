//! Edge case tests for all element types
//!
//! Covers every alignment offset within one vector, lengths just below, at and
//! above one and two vector widths, empty inputs, and special float values.

use rigel_algorithm::ops::{Greater, Less, Negate, Plus};
use rigel_algorithm::{
    equal, find, lexicographical_compare, max, max_by, min, min_by, partition, reduce, transform,
    transform2, Lane, NativeVector, SimdVector,
};


#[cfg(test)]
use test_utils::*;

/// Lengths around the vector width `n`
fn boundary_lengths(n: usize) -> Vec<usize> {
    let mut lens = vec![0, 1, 2, 3];
    for k in 1..=3 {
        lens.extend([k * n - 1, k * n, k * n + 1]);
    }
    lens.sort_unstable();
    lens.dedup();
    lens
}

macro_rules! boundary_suite {
    ($($name:ident: $t:ty => $make:expr),* $(,)?) => {$(
        #[test]
        fn $name() {
            let n = lanes::<$t>();
            let make = $make;
            for len in boundary_lengths(n) {
                // every offset of the widest vector, plus one vector of slack
                for off in 0..64 / core::mem::size_of::<$t>() {
                    let data: Vec<$t> = (0..len).map(make).collect();
                    let buf = OffsetBuffer::new(&data, off);
                    let slice = buf.slice(len);
                    let ctx = format!("{} len {} offset {}", stringify!($t), len, off);

                    let p = partition::<NativeVector<$t>>(slice);
                    assert_eq!(p.prologue + p.body + p.epilogue(len), len, "{}", ctx);

                    assert_eq!(reduce(slice, <$t>::default()), ref_sum(&data, <$t>::default()), "{}", ctx);

                    let mut out = OffsetBuffer::<$t>::zeroed(len, (off + 1) % 7);
                    transform(slice, out.slice_mut(len), &Negate);
                    for i in 0..len {
                        assert_eq!(out.slice(len)[i], data[i].lane_neg(), "{} index {}", ctx, i);
                    }

                    transform2(slice, &data, out.slice_mut(len), &Plus);
                    for i in 0..len {
                        assert_eq!(out.slice(len)[i], data[i].lane_add(data[i]), "{} index {}", ctx, i);
                    }

                    for (i, &x) in data.iter().enumerate() {
                        assert_eq!(find(slice, x), ref_find(&data, x), "{} index {}", ctx, i);
                    }

                    assert!(equal(slice, &data), "{}", ctx);
                    assert!(!lexicographical_compare(slice, &data), "{}", ctx);

                    assert_eq!(min(slice), ref_min(&data), "{}", ctx);
                    assert_eq!(max(slice), ref_max(&data), "{}", ctx);
                    assert_eq!(min_by(slice, &Less), ref_min(&data), "{}", ctx);
                    assert_eq!(max_by(slice, &Less), ref_max(&data), "{}", ctx);
                }
            }
        }
    )*};
}

boundary_suite! {
    test_boundaries_i8: i8 => |i: usize| (i as i8).wrapping_mul(37),
    test_boundaries_u8: u8 => |i: usize| (i as u8).wrapping_mul(101),
    test_boundaries_i16: i16 => |i: usize| (i as i16).wrapping_mul(-311),
    test_boundaries_u16: u16 => |i: usize| (i as u16).wrapping_mul(7919),
    test_boundaries_i32: i32 => |i: usize| (i as i32).wrapping_mul(-104_729),
    test_boundaries_u32: u32 => |i: usize| (i as u32).wrapping_mul(2_654_435_761),
    test_boundaries_i64: i64 => |i: usize| (i as i64).wrapping_mul(-0x1E37_79B9_7F4A_7C15),
    test_boundaries_u64: u64 => |i: usize| (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15),
    test_boundaries_f32: f32 => |i: usize| ((i * 37) % 23) as f32 - 11.0,
    test_boundaries_f64: f64 => |i: usize| ((i * 53) % 29) as f64 * 0.5 - 7.0,
}

/// Match in the last lane of the last body group and in the first epilogue
/// element
#[test]
fn test_find_at_group_edges() {
    let n = lanes::<u32>();
    for off in 0..16 {
        let len = 4 * n + 3;
        let buf = OffsetBuffer::<u32>::zeroed(len, off);
        let p = partition::<NativeVector<u32>>(buf.slice(len));
        let end = p.prologue + p.body;

        for target in [p.prologue.saturating_sub(1), p.prologue, end.saturating_sub(1), end] {
            if target >= len {
                continue;
            }
            let mut data = vec![0u32; len];
            data[target] = 1;
            let buf = OffsetBuffer::new(&data, off);
            assert_eq!(find(buf.slice(len), 1), Some(target), "offset {} target {}", off, target);
        }
    }
}

/// Empty inputs never touch memory and return the documented defaults
#[test]
fn test_empty_inputs() {
    let empty: [f32; 0] = [];
    let mut out: [f32; 0] = [];

    assert_eq!(reduce(&empty, 1.5), 1.5);
    assert_eq!(transform(&empty, &mut out, &Negate), 0);
    assert_eq!(find(&empty, 0.0), None);
    assert!(equal(&empty, &empty));
    assert!(!lexicographical_compare(&empty, &empty));
    assert_eq!(min(&empty), f32::MAX);
    assert_eq!(max(&empty), f32::MIN);
    assert_eq!(min_by(&empty, &Greater), f32::MIN);
    assert_eq!(max_by(&empty, &Greater), f32::MAX);
}

/// NaN never equals anything, so neither `find` nor `equal` match it
#[test]
fn test_nan_inputs() {
    let n = lanes::<f32>();
    let mut data = vec![1.0f32; 3 * n + 2];
    let last = data.len() - 1;
    data[last] = f32::NAN;

    assert_eq!(find(&data, f32::NAN), None);
    assert!(!equal(&data, &data));
    assert!(equal(&data[..last], &data[..last]));
    assert!(reduce(&data, 0.0).is_nan());
}

/// Signed zeros compare equal
#[test]
fn test_signed_zero() {
    let n = lanes::<f64>();
    let zeros = vec![0.0f64; 2 * n + 1];
    let neg_zeros = vec![-0.0f64; 2 * n + 1];

    assert!(equal(&zeros, &neg_zeros));
    assert_eq!(find(&neg_zeros, 0.0), Some(0));
    assert!(!lexicographical_compare(&zeros, &neg_zeros));
    assert!(!lexicographical_compare(&neg_zeros, &zeros));
}

/// Infinities take part in min and max like any other value
#[test]
fn test_infinities_in_min_max() {
    let n = lanes::<f32>();
    let mut data: Vec<f32> = (0..5 * n).map(|i| i as f32).collect();
    data[n + 1] = f32::INFINITY;
    data[3 * n + 1] = f32::NEG_INFINITY;

    assert_eq!(max(&data), f32::INFINITY);
    assert_eq!(min(&data), f32::NEG_INFINITY);
    assert_eq!(max_by(&data, &Less), f32::INFINITY);
    assert_eq!(min_by(&data, &Less), f32::NEG_INFINITY);
}

/// A NaN lane in the vector body never replaces the running extreme
#[test]
fn test_min_max_skip_nan_in_body() {
    let n = lanes::<f32>();
    let len = 4 * n + 4;
    let mut data = vec![1.0f32; len];
    data[1] = -5.0;
    data[n + 1] = f32::NAN;
    data[2 * n + 2] = 9.0;

    for off in 0..16 {
        let buf = OffsetBuffer::new(&data, off);
        let slice = buf.slice(len);
        assert_eq!(min(slice), -5.0, "offset {}", off);
        assert_eq!(max(slice), 9.0, "offset {}", off);
        assert_eq!(min_by(slice, &Less), -5.0, "offset {}", off);
        assert_eq!(max_by(slice, &Less), 9.0, "offset {}", off);
    }
}

/// Integer sums wrap instead of panicking, in every phase
#[test]
fn test_integer_overflow_wraps() {
    let data = vec![i8::MAX; 100];
    let expected = data.iter().fold(0i8, |acc, &x| acc.wrapping_add(x));
    assert_eq!(reduce(&data, 0), expected);

    let data = vec![u64::MAX; 17];
    assert_eq!(reduce(&data, 17), 0);
}

/// Extremes of the element range survive min/max
#[test]
fn test_extreme_integer_values() {
    let n = lanes::<i16>();
    let mut data = vec![0i16; 3 * n + 2];
    data[n] = i16::MIN;
    data[2 * n + 1] = i16::MAX;
    assert_eq!(min(&data), i16::MIN);
    assert_eq!(max(&data), i16::MAX);

    let zeros = vec![0u8; 3 * lanes::<u8>()];
    assert_eq!(max(&zeros), 0);
    assert_eq!(min(&zeros), 0);
}

/// One slice empty, the other not
#[test]
fn test_lexicographical_compare_one_empty() {
    let empty: [i32; 0] = [];
    let data = vec![0i32; 2 * lanes::<i32>()];
    assert!(lexicographical_compare(&empty, &data));
    assert!(!lexicographical_compare(&data, &empty));
}

/// Every backend exposes power-of-two alignment and at least one lane
#[test]
fn test_vector_geometry() {
    fn check<V: SimdVector>() {
        assert!(V::LANES >= 1);
        assert!(V::ALIGN.is_power_of_two());
    }
    check::<NativeVector<i8>>();
    check::<NativeVector<u16>>();
    check::<NativeVector<i32>>();
    check::<NativeVector<f32>>();
    check::<NativeVector<f64>>();
    check::<NativeVector<u64>>();
}
