use criterion::{black_box, criterion_group, Criterion};
use pairing::hamiltonian::matrix_element;
use pairing::{generate_basis, HamiltonianMatrix, SysParams};

use super::levels;

pub fn matrix_element_pair(c: &mut Criterion) {
    let singles = levels(8);
    let sys = SysParams::new(&singles, 8, 0, 1.0);
    let basis = generate_basis(&sys);
    let a = &basis[0];
    let b = &basis[basis.len() - 1];
    c.bench_function("Matrix element 16 states", |bench| {
        bench.iter(|| matrix_element(black_box(a), black_box(b), &sys))
    });
}

pub fn build_matrix(c: &mut Criterion) {
    let singles = levels(6);
    let sys = SysParams::new(&singles, 6, 1, 1.0);
    let basis = generate_basis(&sys);
    c.bench_function("Build Hamiltonian 12 states 6 particles", |b| {
        b.iter(|| HamiltonianMatrix::from_basis(black_box(&basis), &sys))
    });
}

criterion_group!(benches, matrix_element_pair, build_matrix,);
