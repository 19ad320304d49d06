use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_collections::avl_tree::AvlMultiset;
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_multiset_insert(c: &mut Criterion) {
    c.bench_function("bench avl_multiset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = AvlMultiset::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_avl_multiset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlMultiset::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench avl_multiset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_multiset_remove(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        keys.push(rng.next_u32());
    }

    c.bench_function("bench avl_multiset remove", move |b| {
        b.iter(|| {
            let mut set = keys.iter().cloned().collect::<AvlMultiset<u32>>();
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_avl_multiset_insert,
    bench_avl_multiset_contains,
    bench_avl_multiset_remove,
);
criterion_main!(benches);
