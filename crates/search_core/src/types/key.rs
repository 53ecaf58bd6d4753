//! Numeric key abstraction for interpolation probes.
//!
//! The probe formula
//!
//! ```text
//! offset = floor(width * (target - lo) / (hi - lo))
//! ```
//!
//! overflows ordinary arithmetic for wide value ranges: `(hi - lo)` alone
//! does not fit in `i64` when `lo = i64::MIN` and `hi = i64::MAX`, and the
//! product with `width` needs up to 128 bits. [`SearchKey`] lets each key type
//! pick a representation that cannot overflow:
//!
//! - integers widen to `i128` for the differences and `u128` for the product
//! - floats divide first and floor the scaled fraction, halving both
//!   differences when `hi - lo` is not finite

use num_traits::Float;

/// A numeric type that can be searched by linear interpolation.
///
/// # Contract
///
/// For `lo < hi` and `lo <= target <= hi`, `probe_offset(lo, hi, target, width)`
/// returns `floor(width * (target - lo) / (hi - lo))`, exact for integers and
/// up to rounding for floats. The result is always within `[0, width]`, for
/// every input including ones that break the precondition, so callers can add
/// it to the window start without re-checking.
///
/// # Example
///
/// ```
/// use search_core::types::SearchKey;
///
/// // Halfway between 0 and 100 over a window of width 10
/// assert_eq!(i32::probe_offset(0, 100, 50, 10), 5);
///
/// // Full i64 range does not overflow
/// assert_eq!(i64::probe_offset(i64::MIN, i64::MAX, i64::MAX, 7), 7);
/// ```
pub trait SearchKey: Copy + PartialOrd {
    /// Interpolated offset of `target` within a window of `width + 1` slots.
    fn probe_offset(lo: Self, hi: Self, target: Self, width: usize) -> usize;
}

macro_rules! impl_integer_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl SearchKey for $t {
                #[inline]
                fn probe_offset(lo: Self, hi: Self, target: Self, width: usize) -> usize {
                    let span = hi as i128 - lo as i128;
                    let rise = target as i128 - lo as i128;
                    if span <= 0 || rise <= 0 {
                        return 0;
                    }
                    if rise >= span {
                        return width;
                    }
                    // rise < span < 2^64 and width < 2^64, so the product fits in u128
                    let offset = (width as u128) * (rise as u128) / (span as u128);
                    offset.min(width as u128) as usize
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Float probe offset shared by `f32` and `f64`.
#[inline]
fn float_probe_offset<F: Float>(lo: F, hi: F, target: F, width: usize) -> usize {
    let mut span = hi - lo;
    let mut rise = target - lo;
    if !span.is_finite() {
        let two = F::one() + F::one();
        span = hi / two - lo / two;
        rise = target / two - lo / two;
    }

    // Negated comparisons also reject NaN
    if !(span > F::zero()) {
        return 0;
    }
    let fraction = rise / span;
    if !(fraction > F::zero()) {
        return 0;
    }
    if fraction >= F::one() {
        return width;
    }

    let scale = F::from(width).unwrap_or_else(F::max_value);
    (fraction * scale)
        .floor()
        .to_usize()
        .map_or(width, |offset| offset.min(width))
}

impl SearchKey for f32 {
    #[inline]
    fn probe_offset(lo: Self, hi: Self, target: Self, width: usize) -> usize {
        float_probe_offset(lo, hi, target, width)
    }
}

impl SearchKey for f64 {
    #[inline]
    fn probe_offset(lo: Self, hi: Self, target: Self, width: usize) -> usize {
        float_probe_offset(lo, hi, target, width)
    }
}
