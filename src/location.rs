use std::fmt::{Display, Formatter};
use std::num::NonZero;

/// The scalar type of board coordinates.
pub type Coord = usize;
/// A nonzero board dimension, in cells.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    // (row, column) for ndarray-backed builders
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location by a signed `(dx, dy)` delta.
    ///
    /// Stepping off the top or left of the grid wraps the coordinate around `usize`; the resulting location names no cell on any board, which is exactly what out-of-grid probes rely on.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
