use crate::coord::Coordinate;
use crate::error::ParseDirectionError;
use arrayvec::ArrayVec;
use derive_enum::{EnumCount, EnumFrom, EnumName};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

const fn sum(a: Coordinate, b: Coordinate) -> Coordinate {
    a.advancing(b.x, b.y)
}

impl Coordinate {
    pub const UP: Coordinate = Coordinate::new(0, -1);
    pub const RIGHT: Coordinate = Coordinate::new(1, 0);
    pub const DOWN: Coordinate = Coordinate::new(0, 1);
    pub const LEFT: Coordinate = Coordinate::new(-1, 0);

    pub const NORTH: Coordinate = Coordinate::UP;
    pub const EAST: Coordinate = Coordinate::RIGHT;
    pub const SOUTH: Coordinate = Coordinate::DOWN;
    pub const WEST: Coordinate = Coordinate::LEFT;

    pub const NORTH_EAST: Coordinate = sum(Coordinate::NORTH, Coordinate::EAST);
    pub const SOUTH_EAST: Coordinate = sum(Coordinate::SOUTH, Coordinate::EAST);
    pub const SOUTH_WEST: Coordinate = sum(Coordinate::SOUTH, Coordinate::WEST);
    pub const NORTH_WEST: Coordinate = sum(Coordinate::NORTH, Coordinate::WEST);

    /// Note the order: up, right, left, down.
    pub const CARDINAL_DIRECTIONS: [Coordinate; 4] = [
        Coordinate::UP,
        Coordinate::RIGHT,
        Coordinate::LEFT,
        Coordinate::DOWN,
    ];
    pub const INTERMEDIATE_DIRECTIONS: [Coordinate; 4] = [
        Coordinate::NORTH_EAST,
        Coordinate::SOUTH_EAST,
        Coordinate::SOUTH_WEST,
        Coordinate::NORTH_WEST,
    ];
    pub const CARDINAL_AND_INTERMEDIATE_DIRECTIONS: [Coordinate; 8] = {
        let c = Coordinate::CARDINAL_DIRECTIONS;
        let i = Coordinate::INTERMEDIATE_DIRECTIONS;
        [c[0], c[1], c[2], c[3], i[0], i[1], i[2], i[3]]
    };

    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Adjacent coordinates in direction-constant order, optionally including
    /// the diagonals.
    pub fn neighbors(self, include_diagonals: bool) -> ArrayVec<Coordinate, 8> {
        let offsets: &[Coordinate] = if include_diagonals {
            &Self::CARDINAL_AND_INTERMEDIATE_DIRECTIONS
        } else {
            &Self::CARDINAL_DIRECTIONS
        };
        offsets.iter().map(|&d| self + d).collect()
    }
}

/// A named unit offset. Variants are declared in the same order as
/// [`Coordinate::CARDINAL_AND_INTERMEDIATE_DIRECTIONS`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFrom, EnumName)]
pub enum Direction {
    Up,
    Right,
    Left,
    Down,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const fn offset(self) -> Coordinate {
        use Direction::*;
        match self {
            Up => Coordinate::UP,
            Right => Coordinate::RIGHT,
            Left => Coordinate::LEFT,
            Down => Coordinate::DOWN,
            NorthEast => Coordinate::NORTH_EAST,
            SouthEast => Coordinate::SOUTH_EAST,
            SouthWest => Coordinate::SOUTH_WEST,
            NorthWest => Coordinate::NORTH_WEST,
        }
    }

    pub const fn is_cardinal(self) -> bool {
        use Direction::*;
        matches!(self, Up | Right | Left | Down)
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Right => Left,
            Left => Right,
            Down => Up,
            NorthEast => SouthWest,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            NorthWest => SouthEast,
        }
    }

    pub fn cardinals() -> impl Iterator<Item = Direction> {
        Self::all().filter(|d| d.is_cardinal())
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts screen names (`up`, `left`), compass names (`north`, `west`)
    /// and diagonals with or without a separator (`north-east`, `northeast`,
    /// `north_east`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Direction::*;
        let key = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let compass = match key.as_str() {
            "north" => Some(Up),
            "east" => Some(Right),
            "south" => Some(Down),
            "west" => Some(Left),
            _ => None,
        };
        compass
            .or_else(|| Self::all().find(|d| d.name().replace('-', "") == key))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

#[test]
fn test_cardinal_constants() {
    assert_eq!(Coordinate::UP, Coordinate::new(0, -1));
    assert_eq!(Coordinate::RIGHT, Coordinate::new(1, 0));
    assert_eq!(Coordinate::DOWN, Coordinate::new(0, 1));
    assert_eq!(Coordinate::LEFT, Coordinate::new(-1, 0));
    assert_eq!(Coordinate::NORTH, Coordinate::UP);
    assert_eq!(Coordinate::EAST, Coordinate::RIGHT);
    assert_eq!(Coordinate::SOUTH, Coordinate::DOWN);
    assert_eq!(Coordinate::WEST, Coordinate::LEFT);
    assert_eq!(Coordinate::UP + Coordinate::DOWN, Coordinate::ZERO);
    assert_eq!(Coordinate::LEFT + Coordinate::RIGHT, Coordinate::ZERO);
}

#[test]
fn test_intermediate_constants() {
    assert_eq!(Coordinate::NORTH_EAST, Coordinate::new(1, -1));
    assert_eq!(Coordinate::SOUTH_EAST, Coordinate::new(1, 1));
    assert_eq!(Coordinate::SOUTH_WEST, Coordinate::new(-1, 1));
    assert_eq!(Coordinate::NORTH_WEST, Coordinate::new(-1, -1));
}

#[test]
fn test_direction_groups() {
    assert_eq!(
        Coordinate::CARDINAL_DIRECTIONS,
        [
            Coordinate::UP,
            Coordinate::RIGHT,
            Coordinate::LEFT,
            Coordinate::DOWN
        ]
    );
    assert_eq!(Coordinate::INTERMEDIATE_DIRECTIONS.len(), 4);
    assert_eq!(
        Coordinate::CARDINAL_AND_INTERMEDIATE_DIRECTIONS.to_vec(),
        [
            Coordinate::CARDINAL_DIRECTIONS,
            Coordinate::INTERMEDIATE_DIRECTIONS
        ]
        .concat()
    );
}

#[test]
fn test_direction_enum_matches_constants() {
    assert_eq!(Direction::COUNT, 8);
    let offsets = Direction::all().map(Direction::offset).collect::<Vec<_>>();
    assert_eq!(offsets, Coordinate::CARDINAL_AND_INTERMEDIATE_DIRECTIONS);
    let cardinals = Direction::cardinals()
        .map(Direction::offset)
        .collect::<Vec<_>>();
    assert_eq!(cardinals, Coordinate::CARDINAL_DIRECTIONS);
    for d in Direction::all() {
        assert_eq!(Direction::from_index(d.index()), Some(d));
        assert_eq!((-d).offset(), -d.offset());
    }
}

#[test]
fn test_step() {
    let c = Coordinate::new(3, 3);
    assert_eq!(c.step(Direction::Up), Coordinate::new(3, 2));
    assert_eq!(c.step(Direction::SouthWest), Coordinate::new(2, 4));
}

#[test]
fn test_neighbors() {
    let c = Coordinate::from_row_col(1, 1);
    assert_eq!(
        c.neighbors(false).as_slice(),
        &[
            Coordinate::new(1, 0),
            Coordinate::new(2, 1),
            Coordinate::new(0, 1),
            Coordinate::new(1, 2)
        ]
    );
    let all = c.neighbors(true);
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|&n| n != c));
    assert_eq!(all[4], Coordinate::new(2, 0));
}

#[test]
fn test_direction_names() {
    assert_eq!(Direction::Up.to_string(), "up");
    assert_eq!(Direction::NorthWest.to_string(), "north-west");
    for d in Direction::all() {
        assert_eq!(d.name().parse::<Direction>(), Ok(d));
    }
    assert_eq!("North".parse::<Direction>(), Ok(Direction::Up));
    assert_eq!("west".parse::<Direction>(), Ok(Direction::Left));
    assert_eq!("northeast".parse::<Direction>(), Ok(Direction::NorthEast));
    assert_eq!(" SOUTH_EAST ".parse::<Direction>(), Ok(Direction::SouthEast));
    assert_eq!(
        "sideways".parse::<Direction>(),
        Err(ParseDirectionError("sideways".to_string()))
    );
}
