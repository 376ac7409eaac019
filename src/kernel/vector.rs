/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


//! Math on variable length vectors of [`Number`]s.
//!
//! A vector has no orientation; whether it acts as a row or a column is
//! decided by the operation it is passed to.
//!
//! [`Number`]: enum.Number.html

use crate::{Number, Result, Error};
use crate::dims::check_same_len;

pub type Vector = Vec<Number>;

/// Squared magnitude.  Exact for integer vectors.
pub fn vsqnorm(u: &[Number]) -> Number { u.iter().map(|&x| x * x).sum() }

/// Euclidean magnitude.
pub fn vnorm(u: &[Number]) -> f64 { vsqnorm(u).to_f64().sqrt() }

/// Scale `u` to unit length.
pub fn vnormalize(u: &[Number]) -> Result<Vector> {
    let norm = vnorm(u);
    if norm == 0.0 {
        return Err(Error::DegenerateVector);
    }
    let norm = Number::Float(norm);
    Ok(u.iter().map(|&x| x / norm).collect())
}

pub fn vdot(u: &[Number], v: &[Number]) -> Result<Number> {
    check_same_len(u, v)?;
    Ok(u.iter().zip(v).map(|(&a, &b)| a * b).sum())
}

pub fn vadd(u: &[Number], v: &[Number]) -> Result<Vector> {
    check_same_len(u, v)?;
    Ok(u.iter().zip(v).map(|(&a, &b)| a + b).collect())
}

pub fn vsub(u: &[Number], v: &[Number]) -> Result<Vector> {
    check_same_len(u, v)?;
    Ok(u.iter().zip(v).map(|(&a, &b)| a - b).collect())
}

pub fn vscale<K: Into<Number>>(u: &[Number], k: K) -> Vector {
    let k = k.into();
    u.iter().map(|&x| x * k).collect()
}

/// Orthogonal projection of `u` onto `v`: `v * <u, v> / ||v||^2`.
pub fn vproject(u: &[Number], v: &[Number]) -> Result<Vector> {
    let dot = vdot(u, v)?;
    let sqnorm = vsqnorm(v);
    if sqnorm.is_zero() {
        return Err(Error::DegenerateVector);
    }
    Ok(vscale(v, dot / sqnorm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DimensionError, Dims};

    #[test]
    fn norms() {
        assert_eq!(vnorm(&vector![1, 0]), 1.0);
        assert_close!(vnorm(&vector![1, 1]), 2f64.sqrt());
        assert_eq!(vnorm(&vector![3, 4]), 5.0);

        let sq = vsqnorm(&vector![3, -4]);
        assert!(sq.is_exact());
        assert_eq!(sq, Number::Int(25));
    }

    #[test]
    fn normalize() {
        assert_eq!(vnormalize(&vector![1, 0, 0]).unwrap(), vector![1.0, 0.0, 0.0]);
        assert_close!(vnormalize(&vector![3, 4, 0]).unwrap(), vector![0.6, 0.8, 0.0]);
        assert_eq!(vnormalize(&vector![0, 0, 0]), Err(Error::DegenerateVector));
        assert_eq!(vnormalize(&vector![]), Err(Error::DegenerateVector));
    }

    #[test]
    fn normalize_gives_unit_length() {
        for u in vec![vector![1, 2, 3], vector![-0.5, 7], vector![1e-3]] {
            assert_close!(vnorm(&vnormalize(&u).unwrap()), 1.0);
        }
    }

    #[test]
    fn elementwise() {
        let u = vector![1, 2, 3];
        let w = vector![4, 1, 1];
        assert_eq!(vadd(&u, &w).unwrap(), vector![5, 3, 4]);
        assert_eq!(vsub(&u, &w).unwrap(), vector![-3, 1, 2]);
        assert_eq!(vscale(&u, -2), vector![-2, -4, -6]);
        assert_eq!(vscale(&u, 0.5), vector![0.5, 1.0, 1.5]);
        assert_eq!(vdot(&vector![4, 2, 1], &vector![2, -1, 1]).unwrap(), Number::Int(7));
    }

    #[test]
    fn length_mismatch() {
        let u = vector![1, 2, 3];
        let w = vector![1, 2];
        let expected = Error::Dimension(DimensionError::Incompatible {
            a: Dims::new(1, 3),
            b: Dims::new(1, 2),
        });
        assert_eq!(vadd(&u, &w), Err(expected.clone()));
        assert_eq!(vsub(&u, &w), Err(expected.clone()));
        assert_eq!(vdot(&u, &w), Err(expected));
    }

    #[test]
    fn project() {
        let p = vproject(&vector![3, -5], &vector![1, 0]).unwrap();
        assert_eq!(p, vector![3, 0]);
        assert!(p.iter().all(|x| !x.is_exact()));

        // residual is orthogonal to v
        let u = vector![2, 7, -1];
        let v = vector![1, 1, 1];
        let r = vsub(&u, &vproject(&u, &v).unwrap()).unwrap();
        assert_close!(abs=1e-12, vdot(&r, &v).unwrap().to_f64(), 0.0);

        assert_eq!(vproject(&u, &vector![0, 0, 0]), Err(Error::DegenerateVector));
    }
}
