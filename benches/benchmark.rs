use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_roster::{Id, Order, Tree};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let ids: Vec<Id> = (1..=N)
        .map(|_| Id::new(rng.gen_range(0..=Id::MAX.get())).unwrap())
        .collect();

    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            for id in &ids {
                let _ = tree.insert(*id, "name");
            }
            tree
        })
    });

    let mut tree = Tree::new();
    for id in &ids {
        let _ = tree.insert(*id, "name");
    }

    c.bench_function("tree_search", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(tree.get(*id));
            }
        })
    });

    c.bench_function("tree_search_name", |b| {
        b.iter(|| black_box(tree.search_name("missing").count()))
    });

    c.bench_function("tree_traverse", |b| {
        b.iter(|| {
            for name in tree.names(Order::Postorder) {
                black_box(name);
            }
        })
    });

    c.bench_function("tree_remove", |b| {
        b.iter(|| {
            let mut tree: Tree = ids.iter().map(|id| (*id, "name")).collect();
            for id in &ids {
                let _ = tree.remove(*id);
            }
            tree
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
