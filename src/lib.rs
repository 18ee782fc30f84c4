#![warn(missing_docs)]

//! # `pegmatite`
//!
//! A solver for [peg solitaire](https://en.wikipedia.org/wiki/Peg_solitaire) (also sold as "marble solitaire") boards.
//! Begin by building a board object using a builder such as [`SquareBoardBuilder`](builder::SquareBoardBuilder) or, for ragged grids, directly via [`Board::from_rows`].
//! Then call [`solve()`](crate::Board::solve), consuming the board and yielding a [`Solution`]: the ordered sequence of jumps that leaves exactly one marble.
//!
//! `pegmatite` can operate on generic jump direction sets, as encoded by the `St` type parameter.
//! Directions must implement [`Step`](crate::step::Step); the built-in [`OrthogonalStep`](crate::step::OrthogonalStep) covers the classic orthogonal game, and a diagonal or longer-range variant only needs its own `Step` impl.
//!
//! # Internals
//! This crate runs an exhaustive depth-first search over board states.
//! From each board, legal jumps are enumerated in a fixed scan order (marbles row-major, directions in declaration order) and tried one at a time; a subtree is abandoned only once every jump below it has failed.
//! Boards proven unsolvable are memoized in a digest-bucketed dead-end index, so re-reaching the same state through a different jump order prunes immediately.
//! The bucket key is a decimal truncation of a CRC32 of the grid; its width is configurable via [`DepthFirstSolver::with_bucket_digits`] and trades index memory against bucket-scan length, never correctness, because digest-colliding boards are disambiguated by a structural equality check.
//! Since both the enumeration order and the pruning are deterministic, a solvable board always yields the identical jump sequence.

pub use board::Board;
pub use builder::Builder;
pub use cell::Cell;
pub use index::DeadEndIndex;
pub use jump::Jump;
pub use location::Location;
pub use solver::{DepthFirstSolver, Solution, SolverFailure, SolverStatistics};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub mod index;
pub(crate) mod jump;
pub(crate) mod location;
pub(crate) mod solver;
pub mod step;
pub mod builder;
