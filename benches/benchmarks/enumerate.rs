use criterion::{black_box, criterion_group, Criterion};
use pairing::{generate_basis, SysParams};

use super::levels;

pub fn enumerate_8_levels(c: &mut Criterion) {
    let singles = levels(8);
    let sys = SysParams::new(&singles, 8, 2, 1.0);
    c.bench_function("Generate basis 16 states 8 particles", |b| {
        b.iter(|| generate_basis(black_box(&sys)))
    });
}

criterion_group!(benches, enumerate_8_levels,);
