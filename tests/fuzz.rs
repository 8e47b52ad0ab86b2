mod common;

use common::{rand_component, rand_coordinate};
use coordinate::{Coordinate, Direction, EnumCount, EnumFrom};
use rand::{thread_rng, Rng};
use rustc_hash::FxHashSet;

const ITERATIONS: usize = 1000;

#[test]
fn fuzz_add_sub() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let (a, b, c, d) = (
            rand_component(&mut rng),
            rand_component(&mut rng),
            rand_component(&mut rng),
            rand_component(&mut rng),
        );
        let v = Coordinate::new(a, b);
        let w = Coordinate::new(c, d);
        let u = rand_coordinate(&mut rng);
        assert_eq!(v + w, Coordinate::new(a + c, b + d));
        assert_eq!(v - w, Coordinate::new(a - c, b - d));
        assert_eq!(v + w, w + v);
        assert_eq!((v + w) + u, v + (w + u));
        assert_eq!(v + Coordinate::ZERO, v);
        assert_eq!(v - v, Coordinate::ZERO);
    }
}

#[test]
fn fuzz_scale_and_negate() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let v = rand_coordinate(&mut rng);
        let k = rng.gen_range(-1000..=1000);
        assert_eq!(v * k, k * v);
        assert_eq!((v * k).x, v.x * k);
        assert_eq!((v * k).y, v.y * k);
        assert_eq!(-v, Coordinate::new(-v.x, -v.y));
        assert_eq!(v.reversed(), -v);
        assert_eq!(-(-v), v);
    }
}

#[test]
fn fuzz_div_is_reciprocal_scaling() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let v = rand_coordinate(&mut rng);
        let k = loop {
            let k: i64 = rng.gen_range(-1000..=1000);
            if k.abs() > 1 {
                break k;
            }
        };
        assert_eq!(v / k, Coordinate::ZERO);
        assert_eq!(v / 1, v);
        assert_eq!(v / -1, -v);
    }
}

#[test]
fn fuzz_distance() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let v = rand_coordinate(&mut rng);
        let w = rand_coordinate(&mut rng);
        assert_eq!(v.distance(v), 0);
        assert_eq!(v.distance(w), w.distance(v));
        assert_eq!(
            v.distance(w),
            (w.x - v.x).unsigned_abs() + (w.y - v.y).unsigned_abs()
        );
        assert_eq!(v.distance(w), (v - w).distance(Coordinate::ZERO));
    }
}

#[test]
fn fuzz_row_col_aliasing() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let row = rand_component(&mut rng);
        let col = rand_component(&mut rng);
        let mut v = Coordinate::from_row_col(row, col);
        assert_eq!(v, Coordinate::new(col, row));

        let new_row = rand_component(&mut rng);
        v.set_row(new_row);
        assert_eq!((v.x, v.y), (col, new_row));

        let new_col = rand_component(&mut rng);
        v.set_col(new_col);
        assert_eq!((v.x, v.y), (new_col, new_row));
    }
}

#[test]
fn fuzz_parse() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let v = rand_coordinate(&mut rng);
        let pad = |rng: &mut rand::rngs::ThreadRng| " ".repeat(rng.gen_range(0..3));
        let literal = format!(
            "{}{}{},{}{}{}",
            pad(&mut rng),
            v.x,
            pad(&mut rng),
            pad(&mut rng),
            v.y,
            pad(&mut rng)
        );
        assert_eq!(literal.parse::<Coordinate>(), Ok(v), "{literal:?}");
    }
}

#[test]
fn fuzz_walk_returns_home() {
    let mut rng = thread_rng();
    for _ in 0..ITERATIONS {
        let start = rand_coordinate(&mut rng);
        let mut at = start;
        let mut path = Vec::new();
        for _ in 0..rng.gen_range(0..20) {
            let d = Direction::from_index(rng.gen_range(0..Direction::COUNT)).unwrap();
            at = at.step(d);
            path.push(d);
        }
        let offset: Coordinate = path.iter().map(|d| d.offset()).sum();
        assert_eq!(at, start + offset);
        for d in path.into_iter().rev() {
            at = at.step(-d);
        }
        assert_eq!(at, start);
    }
}

#[test]
fn hash_is_structural() {
    let mut rng = thread_rng();
    let mut set = FxHashSet::default();
    for _ in 0..ITERATIONS {
        let v = rand_coordinate(&mut rng);
        set.insert(v);
        assert!(set.contains(&Coordinate::new(v.x, v.y)));
        assert!(set.contains(&Coordinate::from_row_col(v.y, v.x)));
    }

    let neighbors = Coordinate::ZERO
        .neighbors(true)
        .into_iter()
        .collect::<FxHashSet<_>>();
    assert_eq!(neighbors.len(), 8);
    let expected = Coordinate::CARDINAL_AND_INTERMEDIATE_DIRECTIONS
        .into_iter()
        .collect::<FxHashSet<_>>();
    assert_eq!(neighbors, expected);
}
