#[cfg(feature = "python-interface")]
use pyo3::prelude::*;

// Link the LAPACK implementation.
extern crate intel_mkl_src as _;

/// Input file parsing util.
/// # Subfiles
/// * __`input`__ - The run parameters. Five values, one per line: the states
/// file, $N$, the maximum number of broken pairs, $g$ and the output folder.
/// * __`states`__ - The single-particle states. Two columns, $p$ and
/// $\sigma$, one state per line.
pub mod parse;

/// Output files of a run.
pub mod output;

/// Occupation bitstrings.
pub mod bitstring;

/// Single-particle states.
pub mod single_particle;

/// Slater determinants and the second quantization operators.
/// # Definition
/// A determinant is the ordered product of creation operators on the vacuum
/// $$
/// \lvert n_0n_1\cdots\rangle=
/// \prod_{i\,\text{occ}}c^\dagger_i\lvert0\rangle
/// $$
/// with the smallest index on the left. Moving an operator on $i$ across the
/// occupied states $j<i$ gives the sign $(-1)^{n_{<i}}$.
pub mod slater;

/// System parameters.
pub mod params;

/// Basis inclusion criteria.
/// # Truth table
/// For one pair $(p,\lvert\sigma\rvert)$, the group sum is:
///
/// | $n_{p\uparrow}$ | $n_{p\downarrow}$ | sum | lone particle |
/// |-----------------|-------------------|-----|---------------|
/// | 0 | 0 | 0  | no  |
/// | 1 | 0 | 1  | yes |
/// | 0 | 1 | -1 | yes |
/// | 1 | 1 | 0  | no  |
///
/// Two lone particles make one broken pair.
pub mod validity;

/// Generation of the truncated $N$-particle basis.
pub mod enumerate;

/// Pairing model Hamiltonian.
/// # Definition
/// The pairing Hamiltonian is defined
/// $$
/// H=\sum_{p\sigma}(p-1)c^\dagger_{p\sigma}c_{p\sigma}
/// -\frac{g}{2}\sum_{p,p'}P^+_{p'}P^-_p
/// $$
/// with the pair operators $P^+_p=c^\dagger_{p-}c^\dagger_{p+}$ and
/// $P^-_p=c_{p+}c_{p-}$.
pub mod hamiltonian;

/// Dense symmetric eigensolver.
pub mod eigen;

pub use bitstring::BitString;
pub use enumerate::{build_basis, generate_basis, Basis};
pub use hamiltonian::HamiltonianMatrix;
pub use params::{ConfigurationError, SysParams};
pub use single_particle::SingleParticleState;
pub use slater::{annihilate, create, Determinant};

#[cfg(feature = "python-interface")]
fn build_hamiltonian(
    states: &[(i32, i32)],
    n_particles: usize,
    max_broken_pairs: usize,
    g: f64,
) -> PyResult<HamiltonianMatrix> {
    let singles: Vec<SingleParticleState> =
        states.iter().map(|s| SingleParticleState::from(*s)).collect();
    let sys = SysParams::new(&singles, n_particles, max_broken_pairs, g);
    let basis =
        build_basis(&sys).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok(HamiltonianMatrix::from_basis(&basis, &sys))
}

/// Hamiltonian matrix of the pairing model, column major.
#[cfg(feature = "python-interface")]
#[pyfunction]
pub fn pairing_hamiltonian(
    states: Vec<(i32, i32)>,
    n_particles: usize,
    max_broken_pairs: usize,
    g: f64,
) -> PyResult<Vec<f64>> {
    Ok(build_hamiltonian(&states, n_particles, max_broken_pairs, g)?.data)
}

/// Sorted eigenvalues of the pairing model.
#[cfg(feature = "python-interface")]
#[pyfunction]
pub fn pairing_eigenvalues(
    states: Vec<(i32, i32)>,
    n_particles: usize,
    max_broken_pairs: usize,
    g: f64,
) -> PyResult<Vec<f64>> {
    let h = build_hamiltonian(&states, n_particles, max_broken_pairs, g)?;
    eigen::diagonalize(&h).map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

#[cfg(feature = "python-interface")]
#[pymodule]
fn pairing(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use pyo3::wrap_pyfunction;

    m.add_function(wrap_pyfunction!(pairing_hamiltonian, m)?)?;
    m.add_function(wrap_pyfunction!(pairing_eigenvalues, m)?)?;
    Ok(())
}
