use log::{debug, info, trace};
use num::integer::binomial;

use crate::validity::is_valid;
use crate::{ConfigurationError, Determinant, SysParams};

/// Ordered many-body basis.
/// # Definition
/// The determinants are stored in enumeration order, lexicographic on the
/// increasing occupied indices. This order is the row and column order of the
/// Hamiltonian matrix.
/// `n_candidates` is the number of $N$-particle determinants that were tested
/// against the validity criteria, $\binom{N_s}{N}$.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    pub determinants: Vec<Determinant>,
    pub n_candidates: usize,
}

impl Basis {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.determinants.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.determinants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Determinant> {
        self.determinants.iter()
    }
}

impl std::ops::Index<usize> for Basis {
    type Output = Determinant;

    fn index(&self, i: usize) -> &Determinant {
        &self.determinants[i]
    }
}

/// Generates the truncated $N$-particle basis.
/// # Arguments
/// * __`sys`__ - The system parameters. Uses `singles`, `n_particles` and
/// `max_broken_pairs`.
/// # Returns
/// * __`basis`__ - Every valid determinant, see [is_valid], in
/// lexicographic order.
/// # Definition
/// All subsets of $N$ strictly increasing indices are built by recursive
/// descent. Every level gets its own copy of the partial determinant. With
/// $N=0$ or $N>N_s$ the basis is empty.
/// # Example
/// ```rust
/// use pairing::{generate_basis, SingleParticleState, SysParams};
/// let singles: Vec<SingleParticleState> = [(1, 1), (1, -1), (2, 1), (2, -1)]
///     .iter().map(|s| SingleParticleState::from(*s)).collect();
/// let sys = SysParams::new(&singles, 2, 0, 1.0);
/// let basis = generate_basis(&sys);
/// assert_eq!(basis.n_candidates, 6);
/// assert_eq!(basis.len(), 2);
/// assert_eq!(format!("{}", basis[0]), "|1100>");
/// assert_eq!(format!("{}", basis[1]), "|0011>");
/// ```
pub fn generate_basis(sys: &SysParams) -> Basis {
    let mut basis = Basis {
        determinants: Vec::new(),
        n_candidates: 0,
    };
    if sys.n_particles == 0 || sys.n_particles > sys.n_states() {
        info!(
            "No {}-particle determinant fits in {} states.",
            sys.n_particles,
            sys.n_states()
        );
        return basis;
    }
    debug!(
        "Testing {} candidate determinants.",
        binomial(sys.n_states(), sys.n_particles)
    );
    descend(sys.n_particles, 0, Determinant::vacuum(sys.n_states()), sys, &mut basis);
    info!(
        "Kept {} of {} {}-particle determinants.",
        basis.len(),
        basis.n_candidates,
        sys.n_particles
    );
    basis
}

/// Validates the parameters and builds the basis.
/// # Errors
/// * Any [SysParams::validate] error.
/// * No determinant passes the validity criteria, there is nothing to
/// diagonalize.
pub fn build_basis(sys: &SysParams) -> Result<Basis, ConfigurationError> {
    sys.validate()?;
    let basis = generate_basis(sys);
    if basis.is_empty() {
        return Err(ConfigurationError::new(format!(
            "No valid {}-particle Slater determinant with at most {} broken pairs, nothing to diagonalize",
            sys.n_particles, sys.max_broken_pairs
        )));
    }
    Ok(basis)
}

fn descend(remaining: usize, begin: usize, s: Determinant, sys: &SysParams, basis: &mut Basis) {
    // Last index leaving room for the other remaining particles.
    let end = sys.n_states() + 1 - remaining;
    for i in begin..end {
        let mut branch = s.clone();
        branch.occupation.set(i);
        if remaining == 1 {
            basis.n_candidates += 1;
            if is_valid(&branch, sys) {
                debug!("Accepted determinant {}", branch);
                basis.determinants.push(branch);
            } else {
                trace!("Rejected determinant {}", branch);
            }
        } else {
            descend(remaining - 1, i + 1, branch, sys, basis);
        }
    }
}
