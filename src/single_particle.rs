use std::fmt;

/// A single-particle basis state $\lvert p\;\sigma\rangle$.
/// # Definition
/// The orbital label $p$ fixes the one-body energy $p-1$ and the pairing
/// partner. The spin projection $\sigma$ is signed and nonzero. Two states
/// with the same $p$ and opposite $\sigma$ form a pair.
/// # Usage
/// The position of a state in the `singles` slice is its bit index in every
/// [Determinant](crate::Determinant). The order is fixed for a whole run.
/// ```rust
/// use pairing::SingleParticleState;
/// let up = SingleParticleState::new(1, 1);
/// let down = SingleParticleState::new(1, -1);
/// assert_eq!(up.pair_key(), down.pair_key());
/// assert_eq!(format!("{}", down), "|1 -1>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleParticleState {
    pub p: i32,
    pub sigma: i32,
}

impl SingleParticleState {
    pub fn new(p: i32, sigma: i32) -> Self {
        SingleParticleState { p, sigma }
    }

    /// Key of the spin pair this state belongs to, $(p, \lvert\sigma\rvert)$.
    #[inline(always)]
    pub fn pair_key(&self) -> (i32, i32) {
        (self.p, <i32>::abs(self.sigma))
    }
}

impl fmt::Display for SingleParticleState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|{} {}>", self.p, self.sigma)
    }
}

impl From<(i32, i32)> for SingleParticleState {
    fn from(s: (i32, i32)) -> SingleParticleState {
        SingleParticleState { p: s.0, sigma: s.1 }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pair_key_ignores_spin_sign() {
        let up = SingleParticleState::new(3, 1);
        let down = SingleParticleState::new(3, -1);
        assert_eq!(up.pair_key(), down.pair_key());
        assert_ne!(up.pair_key(), SingleParticleState::new(3, 3).pair_key());
    }
}
