use coordinate::Coordinate;
use rand::Rng;

// Keeps sums and small products of generated coordinates clear of overflow.
pub const BOUND: i64 = 1 << 30;

pub fn rand_component<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(-BOUND..=BOUND)
}

pub fn rand_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::new(rand_component(rng), rand_component(rng))
}
