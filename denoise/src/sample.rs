use std::fmt::Debug;

use num_traits::{NumCast, PrimInt, Unsigned};

/// Unsigned integer intensity sample a [`Grid`](crate::Grid) can hold.
pub trait Sample: PrimInt + Unsigned + Default + Debug + Send + Sync + 'static {
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::MAX)
    }

    /// Narrow a real-valued filter result to this sample type.
    ///
    /// NaN maps to zero, everything else is clamped to `[0, MAX]` first and
    /// then rounded half away from zero, so out-of-range sums saturate
    /// instead of wrapping.
    #[inline]
    fn from_f64_clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::zero();
        }
        let max = Self::max_value().as_f64();
        let rounded = value.clamp(0.0, max).round();
        <Self as NumCast>::from(rounded).unwrap_or_else(Self::max_value)
    }
}

impl Sample for u8 {}
impl Sample for u16 {}
impl Sample for u32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_above_max() {
        assert_eq!(u8::from_f64_clamped(255.4), 255);
        assert_eq!(u8::from_f64_clamped(300.0), 255);
        assert_eq!(u8::from_f64_clamped(f64::INFINITY), 255);
        assert_eq!(u16::from_f64_clamped(70_000.0), u16::MAX);
    }

    #[test]
    fn clamps_below_zero() {
        assert_eq!(u8::from_f64_clamped(-0.4), 0);
        assert_eq!(u8::from_f64_clamped(-12.0), 0);
        assert_eq!(u8::from_f64_clamped(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(u8::from_f64_clamped(2.5), 3);
        assert_eq!(u8::from_f64_clamped(2.4999), 2);
        assert_eq!(u8::from_f64_clamped(254.9999999), 255);
        assert_eq!(u16::from_f64_clamped(1000.5), 1001);
    }

    #[test]
    fn nan_maps_to_zero() {
        assert_eq!(u8::from_f64_clamped(f64::NAN), 0);
        assert_eq!(u32::from_f64_clamped(f64::NAN), 0);
    }

    #[test]
    fn widens_exactly() {
        assert_eq!(255u8.as_f64(), 255.0);
        assert_eq!(u16::MAX.as_f64(), 65535.0);
        assert_eq!(u32::MAX.as_f64(), 4_294_967_295.0);
    }
}
