use criterion::{black_box, criterion_group, Criterion};
use pairing::eigen::diagonalize;
use pairing::{generate_basis, HamiltonianMatrix, SysParams};

use super::levels;

pub fn diagonalize_pairing(c: &mut Criterion) {
    let singles = levels(6);
    let sys = SysParams::new(&singles, 6, 1, 1.0);
    let basis = generate_basis(&sys);
    let h = HamiltonianMatrix::from_basis(&basis, &sys);
    c.bench_function("Diagonalize pairing Hamiltonian 12 states", |b| {
        b.iter(|| diagonalize(black_box(&h)))
    });
}

criterion_group!(benches, diagonalize_pairing,);
