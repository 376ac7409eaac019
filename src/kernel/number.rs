/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub, Mul, Div, Neg};
use std::str::FromStr;
use matkit_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// A matrix entry: either an exact integer or a float.
///
/// Integer arithmetic stays exact as long as it fits in an `i64`, and silently
/// becomes float arithmetic when it does not.  Division always produces a float.
///
/// Equality is numeric, so `Int(2) == Float(2.0)`.  Use [`Number::is_exact`]
/// to inspect the representation.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(x) => x as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(x) => x == 0,
            Number::Float(x) => x == 0.0,
        }
    }

    /// Whether this is stored as an integer.
    pub fn is_exact(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(_) => false,
        }
    }

    /// Store a whole-valued float as an integer.
    ///
    /// Non-finite floats, fractional floats, and floats outside of the `i64`
    /// range are returned as-is.
    pub fn canonicalize(self) -> Number {
        match self {
            Number::Float(x) if is_whole_i64(x) => Number::Int(x as i64),
            other => other,
        }
    }

    /// `1 / self`, as a float.
    pub fn recip(self) -> Number { Number::Float(self.to_f64().recip()) }

    pub fn zero() -> Number { Number::Int(0) }
    pub fn one() -> Number { Number::Int(1) }
}

fn is_whole_i64(x: f64) -> bool {
    // 2^63 itself is not representable as i64, hence the half-open range.
    x.is_finite()
        && x.fract() == 0.0
        && x >= i64::min_value() as f64
        && x < i64::max_value() as f64
}

impl Default for Number {
    fn default() -> Number { Number::zero() }
}

impl From<i64> for Number {
    fn from(x: i64) -> Number { Number::Int(x) }
}

impl From<i32> for Number {
    fn from(x: i32) -> Number { Number::Int(x.into()) }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number { Number::Float(x) }
}

impl From<Number> for f64 {
    fn from(x: Number) -> f64 { x.to_f64() }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool { *self == Number::Int(*other) }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool { *self == Number::Float(*other) }
}

macro_rules! impl_checked_binop {
    ($Op:ident::$op:ident, $checked:ident) => {
        impl $Op for Number {
            type Output = Number;

            fn $op(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => match a.$checked(b) {
                        Some(x) => Number::Int(x),
                        None => Number::Float((a as f64).$op(b as f64)),
                    },
                    (a, b) => Number::Float(a.to_f64().$op(b.to_f64())),
                }
            }
        }
    };
}

impl_checked_binop!(Add::add, checked_add);
impl_checked_binop!(Sub::sub, checked_sub);
impl_checked_binop!(Mul::mul, checked_mul);

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number { Number::Float(self.to_f64() / rhs.to_f64()) }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(x) => match x.checked_neg() {
                Some(x) => Number::Int(x),
                None => Number::Float(-(x as f64)),
            },
            Number::Float(x) => Number::Float(-x),
        }
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Number {
        iter.cloned().sum()
    }
}

/// Integers print bare, floats always carry a decimal point (`2.0`, `-1.5`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Int(x) => write!(f, "{}", x),
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            },
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Fail)]
#[fail(display = "cannot parse '{}' as a number", _0)]
pub struct ParseNumberError(pub String);

/// Accepts integers (`-3`), floats (`0.25`, `1e-3`), and fractions (`1/2`).
///
/// A fraction whose value is whole parses as an integer.
impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Number, ParseNumberError> {
        let s = s.trim();
        let err = || ParseNumberError(s.to_string());

        if let Some(slash) = s.find('/') {
            let (num, den) = (&s[..slash], &s[slash + 1..]);
            let num: Number = num.parse().map_err(|_| err())?;
            let den: Number = den.parse().map_err(|_| err())?;
            if den.is_zero() {
                return Err(err());
            }
            return Ok((num / den).canonicalize());
        }

        if let Ok(x) = s.parse::<i64>() {
            return Ok(Number::Int(x));
        }
        match s.parse::<f64>() {
            Ok(x) => Ok(Number::Float(x)),
            Err(_) => Err(err()),
        }
    }
}

impl CheckClose for Number {
    fn check_close(&self, other: &Number, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.to_f64().check_close(&other.to_f64(), tol) }
}
