use log::trace;
use std::fmt;

use crate::BitString;

/// Slater determinant in the occupation representation.
/// # Definition
/// The occupation bitstring has one bit per single-particle state, in the
/// order of the `singles` slice. The coefficient carries the fermionic sign
/// picked up by operator applications, or $0$ when an operator killed the
/// state.
/// # Usage
/// Equality only looks at the occupation. Two determinants that differ only
/// by their coefficient are the same basis state.
/// ```rust
/// use pairing::Determinant;
/// let a = Determinant::from_indices(4, &[0, 1]);
/// let mut b = a.clone();
/// b.coefficient = -1.0;
/// assert_eq!(a, b);
/// assert_eq!(format!("{}", a), "|1100>");
/// ```
#[derive(Debug, Clone)]
pub struct Determinant {
    pub occupation: BitString,
    pub coefficient: f64,
}

impl Determinant {
    /// The empty determinant, all states unoccupied, with coefficient $1$.
    pub fn vacuum(n_states: usize) -> Self {
        Determinant {
            occupation: BitString::zeros(n_states),
            coefficient: 1.0,
        }
    }

    /// Determinant with the given occupied states and coefficient $1$.
    pub fn from_indices(n_states: usize, indices: &[usize]) -> Self {
        Determinant {
            occupation: BitString::from_indices(n_states, indices),
            coefficient: 1.0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.occupation.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupation.is_empty()
    }

    #[inline(always)]
    pub fn is_occupied(&self, i: usize) -> bool {
        self.occupation.check(i)
    }

    /// Number of particles in the determinant.
    pub fn n_particles(&self) -> usize {
        self.occupation.count_ones() as usize
    }
}

impl PartialEq for Determinant {
    fn eq(&self, other: &Self) -> bool {
        self.occupation == other.occupation
    }
}

impl Eq for Determinant {}

impl fmt::Display for Determinant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|{}>", self.occupation)
    }
}

#[inline(always)]
fn parity_sign(s: &Determinant, i: usize) -> f64 {
    if s.occupation.count_ones_before(i) % 2 == 1 {
        -1.0
    } else {
        1.0
    }
}

/// Applies the creation operator $c^\dagger_i$.
/// # Arguments
/// * __`i`__ - The single-particle state index.
/// * __`s`__ - The determinant to act on. It is never modified.
/// # Returns
/// * __`s2`__ - A copy of `s` with the bit $i$ set. The coefficient is
/// multiplied by $(-1)^{n_{<i}}$, where $n_{<i}$ is the number of occupied
/// states before $i$ in `s`. If $i$ was already occupied, the coefficient is
/// $0$, but the bit is still reported set.
/// # Example
/// ```rust
/// use pairing::{create, Determinant};
/// let s = Determinant::from_indices(4, &[0]);
/// let s2 = create(2, &s);
/// assert_eq!(s2, Determinant::from_indices(4, &[0, 2]));
/// assert_eq!(s2.coefficient, -1.0);
/// assert_eq!(create(2, &s2).coefficient, 0.0);
/// ```
pub fn create(i: usize, s: &Determinant) -> Determinant {
    let mut s2 = s.clone();
    // Pauli exclusion
    if s.is_occupied(i) {
        s2.coefficient = 0.0;
    }
    s2.coefficient *= parity_sign(s, i);
    s2.occupation.set(i);
    trace!("c^+_{} {} = {} {}", i, s, s2.coefficient, s2);
    s2
}

/// Applies the annihilation operator $c_i$.
/// # Arguments
/// * __`i`__ - The single-particle state index.
/// * __`s`__ - The determinant to act on. It is never modified.
/// # Returns
/// * __`s2`__ - A copy of `s` with the bit $i$ cleared. The sign convention
/// is the same as [create]. If $i$ was empty, the coefficient is $0$.
/// # Composition
/// Operators are composed right to left, `annihilate(j, &annihilate(i, &a))`
/// is $c_j c_i\lvert a\rangle$. Each call computes its own sign from its own
/// input.
pub fn annihilate(i: usize, s: &Determinant) -> Determinant {
    let mut s2 = s.clone();
    // Nothing to remove
    if !s.is_occupied(i) {
        s2.coefficient = 0.0;
    }
    s2.coefficient *= parity_sign(s, i);
    s2.occupation.clear(i);
    trace!("c_{} {} = {} {}", i, s, s2.coefficient, s2);
    s2
}
