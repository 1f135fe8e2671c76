use derive_more::{Constructor, Error};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fmt;

use crate::SingleParticleState;

/// System parameters
/// # Definition
/// Immutable context shared by the enumerator and the Hamiltonian evaluator.
/// Built once from the input and passed by reference.
/// * __`singles`__ - The single-particle states. Their order defines the bit
/// positions of every determinant.
/// * __`n_particles`__ - The number of particles $N$.
/// * __`max_broken_pairs`__ - Truncation of the basis on the number of broken
/// pairs.
/// * __`g`__ - The pairing strength.
#[derive(Debug, Clone, Copy)]
pub struct SysParams<'a> {
    pub singles: &'a [SingleParticleState],
    pub n_particles: usize,
    pub max_broken_pairs: usize,
    pub g: f64,
}

impl<'a> SysParams<'a> {
    pub fn new(
        singles: &'a [SingleParticleState],
        n_particles: usize,
        max_broken_pairs: usize,
        g: f64,
    ) -> Self {
        SysParams {
            singles,
            n_particles,
            max_broken_pairs,
            g,
        }
    }

    /// Number of single-particle states, the length of a determinant.
    #[inline(always)]
    pub fn n_states(&self) -> usize {
        self.singles.len()
    }

    /// Checks the parameters before building the basis.
    /// # Errors
    /// * No particles.
    /// * More particles than single-particle states.
    /// * A single-particle state with $\sigma=0$. Such a state would be its
    /// own pairing partner.
    /// # Warnings
    /// A pair group $(p,\lvert\sigma\rvert)$ with more than two members makes
    /// the broken pair count meaningless. This is logged, not rejected.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n_particles == 0 {
            return Err(ConfigurationError::new(
                "The number of particles must be at least 1".to_owned(),
            ));
        }
        if self.n_states() < self.n_particles {
            return Err(ConfigurationError::new(
                "The number of single particle states is less than the number of particles".to_owned(),
            ));
        }
        if let Some(k) = self.singles.iter().position(|s| s.sigma == 0) {
            return Err(ConfigurationError::new(format!(
                "Single particle state {} {} has a zero spin projection",
                k, self.singles[k]
            )));
        }
        let mut groups: BTreeMap<(i32, i32), usize> = BTreeMap::new();
        for s in self.singles.iter() {
            *groups.entry(s.pair_key()).or_insert(0) += 1;
        }
        for (key, count) in groups.iter().filter(|(_, c)| **c > 2) {
            warn!(
                "Pair group (p = {}, |sigma| = {}) has {} members, broken pair count assumes at most 2.",
                key.0, key.1, count
            );
        }
        Ok(())
    }

    pub fn log_parameters(&self) {
        info!("System parameter NSTATES = {}", self.n_states());
        info!("System parameter N = {}", self.n_particles);
        info!("System parameter MAX_BROKEN_PAIRS = {}", self.max_broken_pairs);
        info!("System parameter G = {}", self.g);
    }
}

/// Error in the system parameters.
#[derive(Debug, Clone, Error, Constructor)]
pub struct ConfigurationError {
    pub details: String,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid configuration: {}.", self.details)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn states(v: &[(i32, i32)]) -> Vec<SingleParticleState> {
        v.iter().map(|s| SingleParticleState::from(*s)).collect()
    }

    #[test]
    fn test_validate_ok() {
        let singles = states(&[(1, 1), (1, -1), (2, 1), (2, -1)]);
        let sys = SysParams::new(&singles, 2, 0, 1.0);
        assert!(sys.validate().is_ok());
        assert_eq!(sys.n_states(), 4);
    }

    #[test]
    fn test_validate_too_many_particles() {
        let singles = states(&[(1, 1), (1, -1)]);
        let sys = SysParams::new(&singles, 3, 0, 1.0);
        assert!(sys.validate().is_err());
    }

    #[test]
    fn test_validate_no_particles() {
        let singles = states(&[(1, 1), (1, -1)]);
        let sys = SysParams::new(&singles, 0, 0, 1.0);
        assert!(sys.validate().is_err());
    }

    #[test]
    fn test_validate_zero_spin() {
        let singles = states(&[(1, 1), (1, 0)]);
        let sys = SysParams::new(&singles, 1, 0, 1.0);
        let err = sys.validate().unwrap_err();
        assert!(err.details.contains("zero spin"));
    }

    #[test]
    fn test_validate_large_group_is_only_a_warning() {
        let singles = states(&[(1, 1), (1, -1), (1, 1)]);
        let sys = SysParams::new(&singles, 2, 0, 1.0);
        assert!(sys.validate().is_ok());
    }
}
