// Copyright 2024 the Bezsect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezsect requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sqrt(self) -> Self => sqrt;
}

/// Check whether `value` lies in the closed interval `[start, end]`.
#[inline]
pub fn in_interval(value: f64, start: f64, end: f64) -> bool {
    start <= value && value <= end
}

/// Snap a parameter that is just outside of `[0, 1]` back onto the boundary.
///
/// Values within `slack` of the unit interval are clamped into it, values
/// inside are returned unchanged. `None` means the value is genuinely
/// outside of the interval.
#[inline]
pub fn wiggle_interval(value: f64, slack: f64) -> Option<f64> {
    if in_interval(value, 0.0, 1.0) {
        Some(value)
    } else if in_interval(value, -slack, 0.0) {
        Some(0.0)
    } else if in_interval(value, 1.0, 1.0 + slack) {
        Some(1.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiggle() {
        let slack = 0.5f64.powi(45);
        assert_eq!(wiggle_interval(0.25, slack), Some(0.25));
        assert_eq!(wiggle_interval(-slack / 2.0, slack), Some(0.0));
        assert_eq!(wiggle_interval(1.0 + slack / 2.0, slack), Some(1.0));
        assert_eq!(wiggle_interval(-1e-6, slack), None);
        assert_eq!(wiggle_interval(1.5, slack), None);
        assert_eq!(wiggle_interval(f64::NAN, slack), None);
    }

    #[test]
    fn interval_is_closed() {
        assert!(in_interval(0.0, 0.0, 1.0));
        assert!(in_interval(1.0, 0.0, 1.0));
        assert!(!in_interval(1.0 + f64::EPSILON, 0.0, 1.0));
    }
}
