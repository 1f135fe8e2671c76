use derive_more::{Constructor, Error};
use lapack::dsyev;
use log::{info, trace};
use std::fmt;

use crate::hamiltonian::HamiltonianMatrix;

/// Relative tolerance used to merge degenerate eigenvalues.
pub const CONDENSE_TOLERANCE: f64 = 1e-4;

/// Computes the eigenvalues of the Hamiltonian matrix.
/// # Arguments
/// * __`h`__ - The symmetric Hamiltonian matrix. Only the upper triangle is
/// read.
/// # Returns
/// * __`w`__ - The eigenvalues in ascending order.
/// # Errors
/// LAPACK `dsyev` reporting an illegal argument or a failure to converge.
pub fn diagonalize(h: &HamiltonianMatrix) -> Result<Vec<f64>, DiagonalizationError> {
    let n = h.dim as i32;
    if n == 0 {
        return Ok(Vec::new());
    }
    let jobz = b"N"[0];
    let uplo = b"U"[0];
    // dsyev overwrites the matrix.
    let mut a = h.data.clone();
    let mut w: Vec<f64> = vec![0.0; h.dim];
    let mut info: i32 = 0;

    // Workspace query
    let mut work: Vec<f64> = vec![0.0; 1];
    unsafe {
        dsyev(jobz, uplo, n, &mut a, n, &mut w, &mut work, -1, &mut info);
    }
    if info != 0 {
        return Err(DiagonalizationError::new(info));
    }
    let lwork: i32 = work[0] as i32;
    trace!("dsyev optimal workspace lwork = {}", lwork);
    let mut work: Vec<f64> = vec![0.0; lwork as usize];
    unsafe {
        dsyev(jobz, uplo, n, &mut a, n, &mut w, &mut work, lwork, &mut info);
    }
    if info != 0 {
        return Err(DiagonalizationError::new(info));
    }
    info!("Computed {} eigenvalues, lowest is {:.6}.", w.len(), w[0]);
    Ok(w)
}

/// Removes near degenerate eigenvalues.
/// # Arguments
/// * __`eigenvalues`__ - Sorted eigenvalues.
/// * __`rel_tol`__ - Relative tolerance, usually [CONDENSE_TOLERANCE].
/// # Returns
/// The first eigenvalue, then every eigenvalue $E_i$ with
/// $\lvert E_i-E_{i-1}\rvert>\epsilon\lvert E_{i-1}\rvert$. The comparison is
/// always against the previous eigenvalue of the input, kept or not.
/// The tolerance scales with $\lvert E_{i-1}\rvert$, so degenerate negative
/// eigenvalues are merged too. A threshold on the signed $E_{i-1}$ would
/// keep every eigenvalue following a negative one.
/// # Example
/// ```rust
/// use pairing::eigen::{condense_eigenvalues, CONDENSE_TOLERANCE};
/// let w = vec![-1.0, -0.99999999, 0.5, 0.50000001, 2.0];
/// assert_eq!(condense_eigenvalues(&w, CONDENSE_TOLERANCE), vec![-1.0, 0.5, 2.0]);
/// ```
pub fn condense_eigenvalues(eigenvalues: &[f64], rel_tol: f64) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(eigenvalues.len());
    let Some(first) = eigenvalues.first() else {
        return out;
    };
    out.push(*first);
    for w in eigenvalues.windows(2) {
        if <f64>::abs(w[1] - w[0]) > rel_tol * <f64>::abs(w[0]) {
            out.push(w[1]);
        }
    }
    out
}

/// LAPACK failure, holds the `info` return value.
#[derive(Debug, Clone, Error, Constructor)]
pub struct DiagonalizationError {
    pub info: i32,
}

impl fmt::Display for DiagonalizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.info < 0 {
            write!(f, "dsyev: argument {} had an illegal value.", -self.info)
        } else {
            write!(f, "dsyev: failed to converge, {} off-diagonal elements did not converge to zero.", self.info)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert::close;

    #[test]
    fn test_diagonalize_2x2() {
        let h = HamiltonianMatrix {
            dim: 2,
            data: vec![-0.5, -0.5, -0.5, 1.5],
        };
        let w = diagonalize(&h).unwrap();
        let s5 = <f64>::sqrt(5.0);
        close(w[0], (1.0 - s5) / 2.0, 1e-12);
        close(w[1], (1.0 + s5) / 2.0, 1e-12);
    }

    #[test]
    fn test_diagonalize_sorted() {
        let h = HamiltonianMatrix {
            dim: 3,
            data: vec![
                3.0, 0.0, 0.0,
                0.0, -1.0, 0.0,
                0.0, 0.0, 2.0,
            ],
        };
        let w = diagonalize(&h).unwrap();
        close(w[0], -1.0, 1e-12);
        close(w[1], 2.0, 1e-12);
        close(w[2], 3.0, 1e-12);
    }

    #[test]
    fn test_diagonalize_empty() {
        let h = HamiltonianMatrix { dim: 0, data: Vec::new() };
        assert!(diagonalize(&h).unwrap().is_empty());
    }

    #[test]
    fn test_condense() {
        assert!(condense_eigenvalues(&[], CONDENSE_TOLERANCE).is_empty());
        assert_eq!(condense_eigenvalues(&[1.0], CONDENSE_TOLERANCE), vec![1.0]);
        // Comparison is against the previous value, not the last kept one.
        let w = [1.0, 1.00005, 1.0001, 1.00015];
        assert_eq!(condense_eigenvalues(&w, CONDENSE_TOLERANCE), vec![1.0]);
        // Zero previous eigenvalue keeps anything different.
        assert_eq!(condense_eigenvalues(&[0.0, 0.0, 1e-9], CONDENSE_TOLERANCE), vec![0.0, 1e-9]);
    }

    #[test]
    fn test_condense_negative() {
        let w = [-2.0, -2.0, -1.99999, 0.5];
        assert_eq!(condense_eigenvalues(&w, CONDENSE_TOLERANCE), vec![-2.0, 0.5]);
    }

    #[test]
    fn test_error_display() {
        assert!(format!("{}", DiagonalizationError::new(-3)).contains("argument 3"));
        assert!(format!("{}", DiagonalizationError::new(2)).contains("converge"));
    }
}
