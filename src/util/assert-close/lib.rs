/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality for floats and nested containers of them.
//!
//! ```ignore
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-8, actual_vec, expected_vec);
//! assert_close!(rel=1e-6, abs=1e-10, a, b, "at step {}", step);
//! ```

#[macro_use]
extern crate failure;
use std::fmt;

/// Relative tolerance used when the caller does not supply one.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    // (internal) tolerances have been collected
    (@tol [$rel:expr, $abs:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__check_or_panic(&$a, &$b, $crate::Tolerances { rel: $rel, abs: $abs }, || {
            String::from("not nearly equal!")
        })
    };
    (@tol [$rel:expr, $abs:expr] $a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::__check_or_panic(&$a, &$b, $crate::Tolerances { rel: $rel, abs: $abs }, || {
            format!($($fmt)+)
        })
    };

    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => { $crate::assert_close!(@tol [$rel, $abs] $($rest)+) };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => { $crate::assert_close!(@tol [$rel, $abs] $($rest)+) };
    (rel=$rel:expr, $($rest:tt)+) => { $crate::assert_close!(@tol [$rel, 0.0] $($rest)+) };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::assert_close!(@tol [$crate::DEFAULT_NONZERO_TOL, $abs] $($rest)+)
    };
    ($($rest:tt)+) => { $crate::assert_close!(@tol [$crate::DEFAULT_NONZERO_TOL, 0.0] $($rest)+) };
}

#[doc(hidden)]
pub fn __check_or_panic<A, B, F>(a: &A, b: &B, tol: Tolerances, msg: F)
where
    A: ?Sized + CheckClose<B> + fmt::Debug,
    B: ?Sized + fmt::Debug,
    F: FnOnce() -> String,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!(
            "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
            msg(), tol.rel, tol.abs, a, b, e,
        );
    }
}

/// Same comparison as Python's `math.isclose`.
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // also equal infinities
    if a == b { return true; }
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN fails here
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

/// The first pair of scalars that were not close.
#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:\n  left: {:?}\n right: {:?}\n   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    ///
    /// Containers of differing lengths are a bug in the caller, and panic.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        self.iter().zip(other).map(|(a, b)| a.check_close(b, tol)).collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

macro_rules! impl_for_arrays {
    ($($n:tt)*) => {$(
        impl<T: CheckClose> CheckClose for [T; $n] {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            { self[..].check_close(&other[..], tol) }
        }
    )*};
}

impl_for_arrays! { 0 1 2 3 4 5 6 7 8 }
