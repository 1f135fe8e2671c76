use pairing::SingleParticleState;

pub mod diagonalize;
pub mod enumerate;
pub mod hamiltonian;

/// Doubly degenerate levels $p=1,\dots,n$.
pub fn levels(n: i32) -> Vec<SingleParticleState> {
    let mut out = Vec::with_capacity(2 * n as usize);
    for p in 1..=n {
        out.push(SingleParticleState::new(p, 1));
        out.push(SingleParticleState::new(p, -1));
    }
    out
}
