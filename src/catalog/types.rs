//! Numeric value types accepted by the solvers.

use std::fmt;
use std::ops::Add;

/// Marker trait for item values and solution totals.
///
/// Values must support ordering and addition and be cheaply copyable.
/// Higher values are better (maximization).
///
/// Built-in implementations exist for `i32`, `i64`, `u32`, `u64`, `f32`
/// and `f64`. Integer values are exact; float values are accepted as long
/// as they are finite.
pub trait Value:
    PartialOrd + Add<Output = Self> + Copy + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// The additive identity, used for empty selections and base cases.
    fn zero() -> Self;

    /// Converts the value to `f64` for ratios and reporting.
    fn to_f64(self) -> f64;

    /// Whether this value can take part in a solve.
    ///
    /// Always true for integers; floats must be finite.
    fn is_valid(self) -> bool {
        true
    }

    /// Returns the larger of `self` and `other`, preferring `self` on ties.
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                fn zero() -> Self {
                    0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_value!(i32, i64, u32, u64);

impl Value for f64 {
    fn zero() -> Self {
        0.0
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn is_valid(self) -> bool {
        self.is_finite()
    }
}

impl Value for f32 {
    fn zero() -> Self {
        0.0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn is_valid(self) -> bool {
        self.is_finite()
    }
}
