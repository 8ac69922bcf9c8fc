mod common;

use common::{adj_list_long_hole, adj_list_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use holes::algo::Hole;

fn main() {
    divan::main();
}

#[divan::bench(consts = [50, 200], args = [0.05, 0.2, 0.8])]
fn adj_list_detect_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adj_list_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Hole::on(&graph).detect());
}

#[divan::bench(consts = [50, 200], args = [0.05, 0.2, 0.8])]
fn adj_list_certificate_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adj_list_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Hole::on(&graph).run());
}

#[divan::bench(consts = [50, 200], args = [0.05, 0.2, 0.8])]
fn petgraph_detect_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Hole::on(&graph).detect());
}

#[divan::bench(consts = [20, 40], args = [4, 6, 8])]
fn adj_list_bounded_random<const N: usize>(bencher: divan::Bencher, min_len: usize) {
    let graph = adj_list_random(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Hole::on(&graph).min_len(min_len).detect());
}

#[divan::bench(consts = [100, 1000])]
fn adj_list_certificate_long_hole<const N: usize>(bencher: divan::Bencher) {
    let graph = adj_list_long_hole(N);

    bencher.bench(|| Hole::on(&graph).run());
}

#[divan::bench(consts = [100, 1000])]
fn adj_list_bounded_long_hole<const N: usize>(bencher: divan::Bencher) {
    let graph = adj_list_long_hole(N);

    bencher.bench(|| Hole::on(&graph).min_len(N / 4).detect());
}
