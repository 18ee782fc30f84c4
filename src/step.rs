//! Jump direction sets.
//!
//! A board is generic over the directions a marble may jump in.
//! [`OrthogonalStep`] implements the classic game; a variant with diagonal or longer-range jumps only needs another [`Step`] impl.

use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// Functionality that must be implemented on a case-by-case basis for any jump direction set.
///
/// The order of `VARIANTS` is the order directions are probed in during jump enumeration, so it is part of the search's deterministic tie-breaking.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may name no cell on the board; callers are expected to check.
    fn attempt_from(&self, location: Location) -> Location;
}

/// The four orthogonal unit directions of the classic game.
///
/// Declaration order (left, up, right, down) is the probe order for every marble in the row-major scan.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum OrthogonalStep {
    /// `(-1, 0)`
    Left,
    /// `(0, -1)`
    Up,
    /// `(1, 0)`
    Right,
    /// `(0, 1)`
    Down,
}

impl Step for OrthogonalStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Left => location.offset_by((-1, 0)),
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Down => location.offset_by((0, 1)),
        }
    }
}
