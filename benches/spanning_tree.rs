mod common;

use common::{petgraph_random, random_sites, tourgrid_random, RANDOM_SEED};
use fastrand::Rng;
use tourgrid::algo::{routing::Algo, Routes, SpanningTree};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn tourgrid_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = tourgrid_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| SpanningTree::on(&graph).run());
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_kruskal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::min_spanning_tree(&graph).count());
}

#[divan::bench(consts = [50, 200], args = [Algo::DoubleTree, Algo::Shortcut])]
fn tourgrid_routing<const N: usize>(bencher: divan::Bencher, algo: Algo) {
    let sites = random_sites(N, 50, 0.1, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Routes::on(&sites).using(algo).run());
}
