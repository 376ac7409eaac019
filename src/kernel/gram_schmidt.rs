/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


use crate::{Error, Result, Vector};
use crate::vector::{vproject, vsub};

/// Produce an orthogonal (not orthonormal) basis for the span of `basis`.
///
/// The vectors are taken from the back: the last input vector is output first
/// unchanged, and each earlier input vector has its projections onto every vector
/// produced so far subtracted from it before being appended.  The output is thus
/// in reverse order relative to the input:
///
/// ```text
/// [u1, u2, u3]  ->  [u3, u2 - p(u2, u3), u1 - p(u1, u3) - p(u1, u2')]
/// ```
///
/// Projections are all taken of the *original* input vector (classical Gram-Schmidt).
///
/// Linearly dependent input fails with `DegenerateVector` once a zero vector would
/// have to be projected onto.  Use `vnormalize` on the output for unit vectors.
pub fn gram_schmidt(basis: &[Vector]) -> Result<Vec<Vector>> {
    let (last, rest) = basis.split_last().ok_or(Error::EmptyBasis)?;

    let mut ortho = Vec::with_capacity(basis.len());
    ortho.push(last.clone());
    for u in rest.iter().rev() {
        let projections = {
            ortho.iter()
                .map(|v| vproject(u, v))
                .collect::<Result<Vec<_>>>()?
        };

        let mut w = u.clone();
        for p in &projections {
            w = vsub(&w, p)?;
        }
        trace!("gram-schmidt: {} vectors done", ortho.len() + 1);
        ortho.push(w);
    }
    Ok(ortho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdot;
    use crate::test_util::random_float_vec;
    use rand::Rng;

    #[test]
    fn single_vector_is_unchanged() {
        let out = gram_schmidt(&[vector![1, 0, 1]]).unwrap();
        assert_eq!(out, vec![vector![1, 0, 1]]);
        assert!(out[0].iter().all(|x| x.is_exact()));
    }

    #[test]
    fn two_vectors() {
        let out = gram_schmidt(&[vector![3, -5], vector![1, 0]]).unwrap();
        assert_eq!(out, vec![vector![1, 0], vector![0.0, -5.0]]);
        assert!(out[0].iter().all(|x| x.is_exact()));
        assert!(out[1].iter().all(|x| !x.is_exact()));
    }

    #[test]
    fn three_vectors_order() {
        let out = gram_schmidt(&[vector![1, 1, 1], vector![1, 1, 0], vector![1, 0, 0]]).unwrap();
        assert_eq!(out[0], vector![1, 0, 0]);
        assert_eq!(out[1], vector![0, 1, 0]);
        assert_eq!(out[2], vector![0, 0, 1]);
    }

    #[test]
    fn empty_basis() {
        assert_eq!(gram_schmidt(&[]), Err(Error::EmptyBasis));
    }

    #[test]
    fn dependent_basis_is_degenerate() {
        let out = gram_schmidt(&[vector![5, 5], vector![2, 2], vector![1, 1]]);
        assert_eq!(out, Err(Error::DegenerateVector));
    }

    #[test]
    fn output_is_orthogonal() {
        let mut rng = ::rand::thread_rng();
        for _ in 0..50 {
            let dim = rng.gen_range(2, 4);
            let count = rng.gen_range(1, dim + 1);
            let basis: Vec<Vector> = (0..count).map(|_| random_float_vec(&mut rng, dim)).collect();
            let out = gram_schmidt(&basis).unwrap();
            assert_eq!(out.len(), basis.len());

            for i in 0..out.len() {
                for j in 0..i {
                    let dot = vdot(&out[i], &out[j]).unwrap().to_f64();
                    let scale = crate::vnorm(&out[i]) * crate::vnorm(&out[j]);
                    assert_close!(abs=1e-6, dot / scale, 0.0, "{:?}", basis);
                }
            }
        }
    }

    #[test]
    fn mismatched_lengths() {
        let err = gram_schmidt(&[vector![1, 2, 3], vector![1, 0]]).unwrap_err();
        match err {
            Error::Dimension(_) => {},
            e => panic!("{:?}", e),
        }
    }
}
