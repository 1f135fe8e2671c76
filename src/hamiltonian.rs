use indicatif::ProgressBar;
use log::{info, trace};
use std::fmt;

use crate::enumerate::Basis;
use crate::slater::annihilate;
use crate::{Determinant, SingleParticleState, SysParams};

/// Lists the index pairs $(i,j)$ the pair operator $P^-_p=c_jc_i$ acts on.
/// # Definition
/// $i$ and $j$ share the orbital label $p$, with $\sigma_i\leq0$ and
/// $\sigma_j\geq0$. The order follows $i$ then $j$ increasing.
pub fn pair_indices(singles: &[SingleParticleState]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, si) in singles.iter().enumerate() {
        // skip positive i
        if si.sigma > 0 {
            continue;
        }
        for (j, sj) in singles.iter().enumerate() {
            // j shares p, skip negative j
            if si.p != sj.p || sj.sigma < 0 {
                continue;
            }
            pairs.push((i, j));
        }
    }
    pairs
}

/// Computes the one-body term of the Hamiltonian.
/// # Definition
/// $$
/// \langle a\rvert\sum_p(p-1)N_p\lvert b\rangle
/// $$
/// Diagonal in the occupation basis.
pub fn one_body(a: &Determinant, b: &Determinant, singles: &[SingleParticleState]) -> f64 {
    if a != b {
        return 0.0;
    }
    b.occupation
        .iter_ones()
        .map(|i| (singles[i].p - 1) as f64)
        .sum()
}

/// Computes the pairing term of the Hamiltonian.
/// # Arguments
/// * __`a`__ - The bra determinant.
/// * __`b`__ - The ket determinant.
/// * __`pairs`__ - The output of [pair_indices].
/// * __`g`__ - The pairing strength.
/// # Definition
/// $$
/// -\frac{g}{2}\sum_{p,p'}\langle a\rvert P^+_{p'}P^-_p\lvert b\rangle
/// $$
/// Evaluated by annihilating a pair in both $\lvert a\rangle$ and
/// $\lvert b\rangle$ and comparing the remaining determinants. Pairs that are
/// not fully occupied are skipped, their contribution is $0$.
pub fn pairing(a: &Determinant, b: &Determinant, pairs: &[(usize, usize)], g: f64) -> f64 {
    let mut e = 0.0;
    for &(i, j) in pairs.iter() {
        if !(a.is_occupied(i) && a.is_occupied(j)) {
            continue;
        }
        let s1 = annihilate(j, &annihilate(i, a));
        for &(k, l) in pairs.iter() {
            // Don't do the work if it's going to be zero
            if !(b.is_occupied(k) && b.is_occupied(l)) {
                continue;
            }
            let s2 = annihilate(l, &annihilate(k, b));
            if s1 == s2 {
                trace!(
                    "Pair transfer ({}, {}) <- ({}, {}) between {} and {}: {}",
                    i, j, k, l, a, b, s1.coefficient * s2.coefficient
                );
                e -= s1.coefficient * s2.coefficient * g / 2.0;
            }
        }
    }
    e
}

/// Computes the matrix element $\langle a\rvert H\lvert b\rangle$.
/// # Arguments
/// * __`a`__ - The bra determinant.
/// * __`b`__ - The ket determinant.
/// * __`sys`__ - The system parameters. Uses `singles` and `g`.
/// # Returns
/// * __`e`__ - The matrix element. Determinants of different lengths give $0$.
/// # Definition
/// The pairing Hamiltonian is defined
/// $$
/// H=\sum_p(p-1)N_p-\frac{g}{2}\sum_{p,p'}P^+_{p'}P^-_p
/// $$
/// # Example
/// ```rust
/// use pairing::{Determinant, SingleParticleState, SysParams};
/// use pairing::hamiltonian::matrix_element;
/// let singles: Vec<SingleParticleState> = [(1, 1), (1, -1), (2, 1), (2, -1)]
///     .iter().map(|s| SingleParticleState::from(*s)).collect();
/// let sys = SysParams::new(&singles, 2, 0, 1.0);
/// let a = Determinant::from_indices(4, &[0, 1]);
/// let b = Determinant::from_indices(4, &[2, 3]);
/// assert_eq!(matrix_element(&a, &b, &sys), -0.5);
/// assert_eq!(matrix_element(&b, &b, &sys), 1.5);
/// ```
pub fn matrix_element(a: &Determinant, b: &Determinant, sys: &SysParams) -> f64 {
    let pairs = pair_indices(sys.singles);
    matrix_element_with_pairs(a, b, sys, &pairs)
}

fn matrix_element_with_pairs(
    a: &Determinant,
    b: &Determinant,
    sys: &SysParams,
    pairs: &[(usize, usize)],
) -> f64 {
    // Check to make sure this is even possible
    if a.len() != b.len() {
        return 0.0;
    }
    let e = one_body(a, b, sys.singles) + pairing(a, b, pairs, sys.g);
    trace!("<{}|H|{}> = {}", a.occupation, b.occupation, e);
    e
}

/// Dense Hamiltonian matrix in the basis order.
/// # Definition
/// Stored column major, element $(i,j)$ at `data[i + j * dim]`, so it can be
/// handed to LAPACK directly.
#[derive(Debug, Clone, PartialEq)]
pub struct HamiltonianMatrix {
    pub dim: usize,
    pub data: Vec<f64>,
}

impl HamiltonianMatrix {
    /// Evaluates every element $\langle a_i\rvert H\lvert a_j\rangle$ of the
    /// basis.
    pub fn from_basis(basis: &Basis, sys: &SysParams) -> Self {
        Self::from_basis_with_progress(basis, sys, &ProgressBar::hidden())
    }

    /// Same as [HamiltonianMatrix::from_basis], advancing `progress` once per
    /// row.
    pub fn from_basis_with_progress(basis: &Basis, sys: &SysParams, progress: &ProgressBar) -> Self {
        let dim = basis.len();
        let pairs = pair_indices(sys.singles);
        let mut data = vec![0.0; dim * dim];
        info!("Building the {}x{} Hamiltonian matrix.", dim, dim);
        for (i, a) in basis.iter().enumerate() {
            for (j, b) in basis.iter().enumerate() {
                data[i + j * dim] = matrix_element_with_pairs(a, b, sys, &pairs);
            }
            progress.inc(1);
        }
        HamiltonianMatrix { dim, data }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i + j * self.dim]
    }

    /// Checks $\lvert H_{ij}-H_{ji}\rvert\leq$ `tol` for all elements.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.dim {
            for j in 0..i {
                if <f64>::abs(self.get(i, j) - self.get(j, i)) > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for HamiltonianMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.dim {
            for j in 0..self.dim {
                write!(f, "{:>12.4}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
