use crate::error::ParseCoordinateError;
use log::trace;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A point or offset on an integer grid.
///
/// `x` is the column and `y` is the row, with `y` growing downwards, so
/// [`Coordinate::UP`] is `(0, -1)`.
#[must_use]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub const fn from_row_col(row: i64, col: i64) -> Self {
        Self::new(col, row)
    }

    /// Decodes a `"x,y"` literal. Whitespace anywhere in the literal is ignored.
    pub fn from_literal(literal: &str) -> Result<Self, ParseCoordinateError> {
        literal.parse()
    }

    pub const fn row(self) -> i64 {
        self.y
    }

    pub const fn col(self) -> i64 {
        self.x
    }

    pub fn set_row(&mut self, row: i64) {
        self.y = row;
    }

    pub fn set_col(&mut self, col: i64) {
        self.x = col;
    }

    pub const fn advancing(self, x: i64, y: i64) -> Self {
        Self::new(self.x + x, self.y + y)
    }

    /// Manhattan distance.
    ///
    /// Each axis difference always fits in a `u64`, but their sum overflows
    /// (and panics in debug builds) when both axes span more than half of
    /// the `i64` range.
    pub const fn distance(self, other: Coordinate) -> u64 {
        other.x.abs_diff(self.x) + other.y.abs_diff(self.y)
    }

    pub const fn reversed(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[deprecated(note = "renamed to `reversed`")]
    pub const fn flipped(self) -> Self {
        self.reversed()
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.advancing(other.x, other.y)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Coordinate {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

impl Mul<i64> for Coordinate {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Coordinate> for i64 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Coordinate {
        rhs * self
    }
}

/// Scales by the integer reciprocal `1 / rhs`.
///
/// This is not component-wise division: a divisor of `1` or `-1` gives the
/// coordinate or its reverse, any other non-zero divisor gives
/// [`Coordinate::ZERO`], and `0` panics.
impl Div<i64> for Coordinate {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: i64) -> Self {
        self * (1 / rhs)
    }
}

impl Sum for Coordinate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.x, self.y)
    }
}

fn parse_literal(s: &str) -> Result<Coordinate, ParseCoordinateError> {
    use ParseCoordinateError::*;
    let compact = s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let tokens = if compact.is_empty() {
        Vec::new()
    } else {
        compact.split(',').collect::<Vec<_>>()
    };
    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i64>().map_err(|source| InvalidComponent {
                index,
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    match values[..] {
        [x, y, ..] => Ok(Coordinate::new(x, y)),
        _ => Err(MissingComponent {
            found: values.len(),
        }),
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s).inspect_err(|e| trace!("rejected coordinate literal {s:?}: {e}"))
    }
}

#[test]
fn test_coordinate_add() {
    assert_eq!(
        Coordinate::new(3, 4) + Coordinate::new(5, 6),
        Coordinate::new(8, 10)
    );
    let mut c = Coordinate::new(1, 1);
    c += Coordinate::new(2, -3);
    assert_eq!(c, Coordinate::new(3, -2));
    assert_eq!(c + Coordinate::ZERO, c);
}

#[test]
fn test_coordinate_sub() {
    assert_eq!(
        Coordinate::new(3, 4) - Coordinate::new(5, 7),
        Coordinate::new(-2, -3)
    );
    let mut c = Coordinate::new(1, 1);
    c -= Coordinate::new(1, 1);
    assert_eq!(c, Coordinate::ZERO);
}

#[test]
fn test_scale() {
    let c = Coordinate::new(2, -3);
    assert_eq!(c * 4, Coordinate::new(8, -12));
    assert_eq!(4 * c, c * 4);
    assert_eq!(c * 0, Coordinate::ZERO);
}

#[test]
fn test_div_scales_by_integer_reciprocal() {
    let c = Coordinate::new(6, -4);
    assert_eq!(c / 1, c);
    assert_eq!(c / -1, -c);
    // not (3, -2)
    assert_eq!(c / 2, Coordinate::ZERO);
    assert_eq!(c / -7, Coordinate::ZERO);
}

#[test]
#[should_panic]
fn test_div_by_zero() {
    let _ = Coordinate::new(1, 1) / 0;
}

#[test]
#[allow(deprecated)]
fn test_reversed() {
    let c = Coordinate::new(2, -5);
    assert_eq!(c.reversed(), Coordinate::new(-2, 5));
    assert_eq!(-c, c.reversed());
    assert_eq!(c.flipped(), c.reversed());
    assert_eq!(Coordinate::ZERO.reversed(), Coordinate::ZERO);
}

#[test]
fn test_row_col() {
    let mut c = Coordinate::from_row_col(2, 5);
    assert_eq!(c.x, 5);
    assert_eq!(c.y, 2);
    assert_eq!((c.row(), c.col()), (2, 5));

    c.set_row(7);
    assert_eq!(c, Coordinate::new(5, 7));
    c.set_col(-1);
    assert_eq!(c, Coordinate::new(-1, 7));
}

#[test]
fn test_advancing() {
    let c = Coordinate::new(1, 2);
    assert_eq!(c.advancing(3, -4), Coordinate::new(4, -2));
    assert_eq!(c, Coordinate::new(1, 2));
}

#[test]
fn test_distance() {
    let a = Coordinate::new(1, 2);
    let b = Coordinate::new(-3, 7);
    assert_eq!(a.distance(b), 9);
    assert_eq!(b.distance(a), 9);
    assert_eq!(a.distance(a), 0);
    assert_eq!(
        Coordinate::new(i64::MIN, 0).distance(Coordinate::new(i64::MAX, 0)),
        u64::MAX
    );
}

#[test]
#[should_panic]
fn test_distance_overflows_across_both_axes() {
    let _ = Coordinate::new(i64::MIN, i64::MIN).distance(Coordinate::new(i64::MAX, i64::MAX));
}

#[test]
fn test_sum() {
    let total: Coordinate = [(1, 2), (3, 4), (-10, 0)]
        .into_iter()
        .map(Coordinate::from)
        .sum();
    assert_eq!(total, Coordinate::new(-6, 6));
    assert_eq!(std::iter::empty::<Coordinate>().sum::<Coordinate>(), Coordinate::ZERO);
}

#[test]
fn test_display() {
    assert_eq!(Coordinate::new(1, 2).to_string(), "{ 1, 2 }");
    assert_eq!(Coordinate::new(-1, 0).to_string(), "{ -1, 0 }");
}

#[test]
fn test_parse() {
    assert_eq!("3,4".parse::<Coordinate>(), Ok(Coordinate::new(3, 4)));
    assert_eq!(" 3 , 4 ".parse::<Coordinate>(), Ok(Coordinate::new(3, 4)));
    assert_eq!("-1,\t-20".parse::<Coordinate>(), Ok(Coordinate::new(-1, -20)));
    assert_eq!(Coordinate::from_literal("0,-1"), Ok(Coordinate::new(0, -1)));
    // whitespace is stripped before tokenizing
    assert_eq!("1 2,3".parse::<Coordinate>(), Ok(Coordinate::new(12, 3)));
    // only the first two components are used
    assert_eq!("1,2,3".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));
    assert_eq!("5, -6, 7, 8".parse::<Coordinate>(), Ok(Coordinate::new(5, -6)));
}

#[test]
fn test_parse_malformed() {
    use ParseCoordinateError::*;
    assert_eq!(
        "".parse::<Coordinate>(),
        Err(MissingComponent { found: 0 })
    );
    assert_eq!(
        "  ".parse::<Coordinate>(),
        Err(MissingComponent { found: 0 })
    );
    assert_eq!(
        "7".parse::<Coordinate>(),
        Err(MissingComponent { found: 1 })
    );
    assert!(matches!(
        "1,2,x".parse::<Coordinate>(),
        Err(InvalidComponent { index: 2, .. })
    ));
    match "1,a".parse::<Coordinate>() {
        Err(InvalidComponent { index, token, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(token, "a");
        }
        r => panic!("unexpected {r:?}"),
    }
    assert!(matches!(
        "3,".parse::<Coordinate>(),
        Err(InvalidComponent { index: 1, .. })
    ));
    assert!(matches!(
        "{ 1, 2 }".parse::<Coordinate>(),
        Err(InvalidComponent { index: 0, .. })
    ));
}
