use std::collections::BTreeMap;

use crate::{Determinant, SingleParticleState, SysParams};

/// Counts the broken pairs of a determinant.
/// # Arguments
/// * __`s`__ - The determinant.
/// * __`singles`__ - The single-particle states, in bit order.
/// # Returns
/// * __`broken`__ - The number of broken pairs.
/// # Definition
/// Occupied states are grouped by $(p,\lvert\sigma\rvert)$. Each group sums
/// $+1$ for an occupied $\sigma>0$ state and $-1$ otherwise. A group with a
/// nonzero sum holds a lone particle. With zero total spin, lone particles
/// come two by two, so the count of such groups is divided by $2$ (integer
/// division).
/// # Assumption
/// Every group has at most two members, a spin up and a spin down state.
/// The count is not meaningful otherwise.
/// # Example
/// ```rust
/// use pairing::{Determinant, SingleParticleState};
/// use pairing::validity::broken_pairs;
/// let singles: Vec<SingleParticleState> = [(1, 1), (1, -1), (2, 1), (2, -1)]
///     .iter().map(|s| SingleParticleState::from(*s)).collect();
/// assert_eq!(broken_pairs(&Determinant::from_indices(4, &[0, 1]), &singles), 0);
/// assert_eq!(broken_pairs(&Determinant::from_indices(4, &[0, 3]), &singles), 1);
/// ```
pub fn broken_pairs(s: &Determinant, singles: &[SingleParticleState]) -> usize {
    let mut sums: BTreeMap<(i32, i32), i32> = BTreeMap::new();
    for i in s.occupation.iter_ones() {
        let single = &singles[i];
        *sums.entry(single.pair_key()).or_insert(0) += if single.sigma > 0 { 1 } else { -1 };
    }
    let broken = sums.values().filter(|v| **v != 0).count();
    // Each broken pair shows up in two groups.
    broken / 2
}

/// Total spin projection $M=\sum_{i\,\text{occ}}\sigma_i$.
pub fn total_spin(s: &Determinant, singles: &[SingleParticleState]) -> i32 {
    s.occupation.iter_ones().map(|i| singles[i].sigma).sum()
}

/// Basis inclusion criteria. A determinant is kept if it has at most
/// `max_broken_pairs` broken pairs and zero total spin projection.
pub fn is_valid(s: &Determinant, sys: &SysParams) -> bool {
    if broken_pairs(s, sys.singles) > sys.max_broken_pairs {
        return false;
    }
    total_spin(s, sys.singles) == 0
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand::rngs::SmallRng;

    fn states(v: &[(i32, i32)]) -> Vec<SingleParticleState> {
        v.iter().map(|s| SingleParticleState::from(*s)).collect()
    }

    fn four_levels() -> Vec<SingleParticleState> {
        states(&[(1, 1), (1, -1), (2, 1), (2, -1), (3, 1), (3, -1), (4, 1), (4, -1)])
    }

    #[test]
    fn test_total_spin() {
        let singles = four_levels();
        assert_eq!(total_spin(&Determinant::from_indices(8, &[0, 1]), &singles), 0);
        assert_eq!(total_spin(&Determinant::from_indices(8, &[0, 2]), &singles), 2);
        assert_eq!(total_spin(&Determinant::from_indices(8, &[1, 3, 5]), &singles), -3);
        assert_eq!(total_spin(&Determinant::vacuum(8), &singles), 0);
    }

    #[test]
    fn test_broken_pairs_counts() {
        let singles = four_levels();
        // Two full pairs
        assert_eq!(broken_pairs(&Determinant::from_indices(8, &[0, 1, 4, 5]), &singles), 0);
        // One pair broken into p=1 up and p=3 down
        assert_eq!(broken_pairs(&Determinant::from_indices(8, &[0, 5]), &singles), 1);
        // Two broken pairs
        assert_eq!(broken_pairs(&Determinant::from_indices(8, &[0, 3, 4, 7]), &singles), 2);
        // A lone particle alone rounds down
        assert_eq!(broken_pairs(&Determinant::from_indices(8, &[0]), &singles), 0);
    }

    #[test]
    fn test_is_valid() {
        let singles = four_levels();
        let sys = SysParams::new(&singles, 4, 1, 1.0);
        assert!(is_valid(&Determinant::from_indices(8, &[0, 1, 2, 3]), &sys));
        assert!(is_valid(&Determinant::from_indices(8, &[0, 1, 2, 5]), &sys));
        // Too many broken pairs
        assert!(!is_valid(&Determinant::from_indices(8, &[0, 3, 4, 7]), &sys));
        // Nonzero spin
        assert!(!is_valid(&Determinant::from_indices(8, &[0, 1, 2, 4]), &sys));
    }

    #[test]
    fn test_invariant_under_state_permutation() {
        // Relabeling the single-particle states while keeping the same
        // occupied set gives the same counts.
        let mut rng = SmallRng::seed_from_u64(42);
        let singles = four_levels();
        for _ in 0..100 {
            let occupied: Vec<usize> = (0..8).filter(|_| rng.gen::<bool>()).collect();
            let s = Determinant::from_indices(8, &occupied);
            let mut perm: Vec<usize> = (0..8).collect();
            perm.shuffle(&mut rng);
            // singles2[perm[i]] = singles[i]
            let mut singles2 = singles.clone();
            for i in 0..8 {
                singles2[perm[i]] = singles[i];
            }
            let occupied2: Vec<usize> = occupied.iter().map(|i| perm[*i]).collect();
            let s2 = Determinant::from_indices(8, &occupied2);
            assert_eq!(broken_pairs(&s, &singles), broken_pairs(&s2, &singles2));
            assert_eq!(total_spin(&s, &singles), total_spin(&s2, &singles2));
        }
    }
}
