use std::fmt::{Display, Formatter};

use crate::location::Location;
use crate::step::Step;

/// A candidate jump: a marble at `origin` leaping in `direction` over the adjacent cell into the cell two steps away.
///
/// The crossed and landing cells are derived, not stored; see [`middle`](Jump::middle) and [`destination`](Jump::destination).
/// A `Jump` is only meaningful relative to the board it was enumerated from.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Jump<St: Step> {
    /// Coordinates of the jumping marble.
    pub origin: Location,
    /// The direction jumped in.
    pub direction: St,
}

impl<St: Step> Jump<St> {
    /// The cell being jumped over, one step from the origin.
    pub fn middle(&self) -> Location {
        self.direction.attempt_from(self.origin)
    }

    /// The cell the marble lands in, two steps from the origin.
    pub fn destination(&self) -> Location {
        self.direction.attempt_from(self.middle())
    }
}

impl<St: Step> Display for Jump<St> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination())
    }
}
