use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coordinate::Coordinate;

fn parse(c: &mut Criterion) {
    let literals = ["3,4", " -120 , 7 ", "0,-1", "123456789,-987654321"];
    c.bench_function("parse_literals", |b| {
        b.iter(|| {
            black_box(&literals)
                .iter()
                .map(|l| l.parse::<Coordinate>().unwrap())
                .sum::<Coordinate>()
        })
    });
}

fn neighbors(c: &mut Criterion) {
    let start = Coordinate::new(10, -3);
    c.bench_function("neighbor_distance_sum", |b| {
        b.iter(|| {
            black_box(start)
                .neighbors(true)
                .into_iter()
                .map(|n| n.distance(Coordinate::ZERO))
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, parse, neighbors);
criterion_main!(benches);
