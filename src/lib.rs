pub mod coord;
pub mod direction;
pub mod error;

pub use coord::Coordinate;
pub use derive_enum::{EnumCount, EnumFrom, EnumName};
pub use direction::Direction;
pub use error::{ParseCoordinateError, ParseDirectionError};

use static_assertions::{assert_eq_size, assert_impl_all};

assert_eq_size!(Coordinate, [i64; 2]);
assert_impl_all!(Coordinate: Copy, Send, Sync, std::hash::Hash, Eq, Default);
assert_impl_all!(Direction: Copy, Send, Sync, std::hash::Hash, Eq);
