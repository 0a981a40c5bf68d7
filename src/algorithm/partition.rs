//! Alignment partitioning of an input range
//!
//! Every algorithm splits its primary input into three phases:
//!
//! ```text
//! [ prologue | body (whole vectors, aligned) | epilogue ]
//!   scalar     V::LANES elements per step       scalar
//! ```
//!
//! The prologue is as short as possible while still moving the start of the
//! body onto a `V::ALIGN` boundary, so the body can use aligned loads.

use crate::traits::SimdVector;

/// Split of a range into scalar prologue, vector body and scalar epilogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Leading elements processed one at a time
    pub prologue: usize,
    /// Elements processed in whole vectors after the prologue (multiple of `LANES`)
    pub body: usize,
}

impl Partition {
    /// Trailing elements left after prologue and body
    #[inline]
    pub const fn epilogue(&self, len: usize) -> usize {
        len - self.prologue - self.body
    }

    /// Index one past the last body element
    #[inline]
    pub const fn body_end(&self) -> usize {
        self.prologue + self.body
    }

    /// True when no element goes through the vector body
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        self.body == 0
    }
}

/// Partition `input` for vector type `V`
///
/// `prologue` is the number of elements before the first `V::ALIGN`-aligned
/// address (capped at the slice length), `body` the largest multiple of
/// `V::LANES` that fits in what remains.
///
/// # Example
///
/// ```rust
/// use rigel_algorithm::algorithm::partition;
/// use rigel_algorithm::NativeVector;
///
/// let data = [0u32; 37];
/// let p = partition::<NativeVector<u32>>(&data);
/// assert!(p.prologue + p.body <= data.len());
/// assert_eq!(p.body % <NativeVector<u32> as rigel_algorithm::SimdVector>::LANES, 0);
/// ```
#[inline]
pub fn partition<V: SimdVector>(input: &[V::Scalar]) -> Partition {
    const {
        assert!(
            V::ALIGN.is_power_of_two(),
            "vector alignment must be a power of two"
        )
    };

    let size = input.len();
    // align_offset may report usize::MAX when the boundary is unreachable; the
    // cap below then turns the whole range into prologue
    let offset = input.as_ptr().align_offset(V::ALIGN);
    let prologue = size.min(offset);
    let body = V::LANES * ((size - prologue) / V::LANES);

    Partition { prologue, body }
}

/// True when `ptr` sits on a `V::ALIGN` boundary
#[inline(always)]
pub(crate) fn is_aligned<V: SimdVector, T>(ptr: *const T) -> bool {
    (ptr as usize) % V::ALIGN == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::portable::LaneVector;
    use crate::backends::scalar::ScalarVector;

    type F32x4 = LaneVector<f32, 4>;
    type U8x16 = LaneVector<u8, 16>;

    #[repr(C, align(64))]
    struct Aligned<T, const N: usize>([T; N]);

    #[test]
    fn test_empty_range() {
        let data: [f32; 0] = [];
        let p = partition::<F32x4>(&data);
        assert_eq!(p, Partition { prologue: 0, body: 0 });
        assert_eq!(p.epilogue(0), 0);
        assert!(p.is_scalar());
    }

    #[test]
    fn test_aligned_start_has_no_prologue() {
        let data = Aligned([0.0f32; 16]);
        let p = partition::<F32x4>(&data.0[..10]);
        assert_eq!(p.prologue, 0);
        assert_eq!(p.body, 8);
        assert_eq!(p.epilogue(10), 2);
    }

    #[test]
    fn test_every_offset() {
        let data = Aligned([0.0f32; 32]);
        for offset in 0..4 {
            let slice = &data.0[offset..];
            let p = partition::<F32x4>(slice);

            assert_eq!(p.prologue, (4 - offset) % 4, "offset {}", offset);
            assert!(is_aligned::<F32x4, _>(slice[p.prologue..].as_ptr()));
            assert_eq!(p.body % 4, 0);
            assert!(p.epilogue(slice.len()) < 4);
            assert_eq!(p.body_end() + p.epilogue(slice.len()), slice.len());
        }
    }

    #[test]
    fn test_prologue_capped_by_length() {
        let data = Aligned([0u8; 64]);
        // 3 elements starting one byte past a boundary: boundary is 15 away
        let p = partition::<U8x16>(&data.0[1..4]);
        assert_eq!(p.prologue, 3);
        assert_eq!(p.body, 0);
        assert_eq!(p.epilogue(3), 0);
    }

    #[test]
    fn test_exact_multiple_has_no_epilogue() {
        let data = Aligned([0u8; 64]);
        let p = partition::<U8x16>(&data.0[..48]);
        assert_eq!(p, Partition { prologue: 0, body: 48 });
        assert_eq!(p.epilogue(48), 0);
    }

    #[test]
    fn test_scalar_vector_takes_everything_in_body() {
        let data = [1i64, 2, 3, 4, 5];
        let p = partition::<ScalarVector<i64>>(&data[1..]);
        assert_eq!(p, Partition { prologue: 0, body: 4 });
    }
}
