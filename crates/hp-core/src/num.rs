//! Numeric type abstractions for table computations.
//!
//! This module defines the [`HpFloat`] trait which abstracts over `f32` and `f64`
//! so tables and transforms can be written once for both widths.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bounds, active only with the `serde` feature.
#[cfg(feature = "serde")]
pub trait SerdeBounds: Serialize + DeserializeOwned {}

/// Serialization bounds, empty without the `serde` feature.
#[cfg(not(feature = "serde"))]
pub trait SerdeBounds {}

#[cfg(feature = "serde")]
impl<T> SerdeBounds for T where T: Serialize + DeserializeOwned {}

#[cfg(not(feature = "serde"))]
impl<T> SerdeBounds for T {}

/// Trait for floating-point types stored in a [`Series`](crate::Series).
///
/// # Associated Constants
///
/// - `NAN` - Not-a-number value, used for missing cells
/// - `HALF` - One half (half-bath weighting)
///
/// # Example
///
/// ```rust
/// use hp_core::HpFloat;
///
/// fn weighted<T: HpFloat>(full: T, half: T) -> T {
///     full + T::HALF * half
/// }
///
/// assert_eq!(weighted(2.0f64, 1.0), 2.5);
/// ```
pub trait HpFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + SerdeBounds + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// One half.
    const HALF: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `i32`. Exact for every calendar year.
    #[must_use]
    fn from_i32_lossy(value: i32) -> Self;

    /// Map a boolean onto the `1`/`0` indicator encoding.
    #[must_use]
    fn from_bool(flag: bool) -> Self {
        if flag {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl HpFloat for f32 {
    const NAN: Self = f32::NAN;
    const HALF: Self = 0.5;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_i32_lossy(value: i32) -> Self {
        value as f32
    }
}

impl HpFloat for f64 {
    const NAN: Self = f64::NAN;
    const HALF: Self = 0.5;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_i32_lossy(value: i32) -> Self {
        f64::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(<f64 as HpFloat>::NAN.is_nan());
        assert!(<f32 as HpFloat>::NAN.is_nan());
        assert_eq!(<f64 as HpFloat>::HALF, 0.5);
        assert_eq!(<f32 as HpFloat>::HALF, 0.5f32);
    }

    #[test]
    fn test_lossy_conversions() {
        assert_eq!(f64::from_f64_lossy(42.5), 42.5);
        assert_eq!(f32::from_f64_lossy(42.5), 42.5f32);
        assert_eq!(42.5f32.to_f64_lossy(), 42.5);
        assert_eq!(f64::from_i32_lossy(2023), 2023.0);
        assert_eq!(f32::from_i32_lossy(2023), 2023.0f32);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(f64::from_bool(true), 1.0);
        assert_eq!(f64::from_bool(false), 0.0);
        assert_eq!(f32::from_bool(true), 1.0f32);
    }
}
