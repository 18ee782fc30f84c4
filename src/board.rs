use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

use crate::cell::Cell;
use crate::jump::Jump;
use crate::location::Location;
use crate::solver::{DepthFirstSolver, Solution, SolverFailure};
use crate::step::Step;

/// A peg solitaire board: a grid of [`Cell`]s plus a cached marble count and a dedup digest.
///
/// Rows may have different widths; a location outside every row names no cell at all, which is distinct from a [`Blocked`](Cell::Blocked) cell.
/// A `Board` is never mutated once constructed: [`apply`](Board::apply) derives a fresh board from a jump.
///
/// Rectangular boards should be built using a [`Builder`](crate::builder::Builder) such as [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder); ragged ones via [`Board::from_rows`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board<St: Step> {
    // cheap fields first so derived equality rejects most mismatches before touching the grid
    marble_count: usize,
    digest: u32,
    rows: Vec<Vec<Cell>>,
    _step: PhantomData<St>,
}

impl<St: Step> Board<St> {
    /// Construct a board from its rows, which need not share a width.
    ///
    /// The marble count and digest are computed eagerly by a full scan; every board derived by [`apply`](Board::apply) maintains them without rescanning.
    ///
    /// # Panics
    /// Panics if the grid contains no cells or no marbles, both contract violations of the board configuration source.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert!(
            rows.iter().any(|row| !row.is_empty()),
            "a board must have at least one cell"
        );
        let marble_count = rows.iter().flatten().filter(|cell| **cell == Cell::Marble).count();
        assert!(marble_count > 0, "a board must start with at least one marble");

        Self {
            marble_count,
            digest: Self::digest_rows(&rows),
            rows,
            _step: PhantomData,
        }
    }

    /// The number of marbles currently on the board.
    pub fn marble_count(&self) -> usize {
        self.marble_count
    }

    /// The CRC32 digest of the grid, used by the dead-end index as a bucket key.
    ///
    /// Two boards with identical grids always share a digest; distinct grids may collide, so the digest is a filter, never an equality proxy.
    pub fn digest(&self) -> u32 {
        self.digest
    }

    /// The grid itself, row by row.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The cell at `location`, or [`None`] if no such cell exists on the grid.
    pub fn cell_at(&self, location: Location) -> Option<Cell> {
        self.rows.get(location.1).and_then(|row| row.get(location.0)).copied()
    }

    /// Enumerate every legal jump on this board.
    ///
    /// A jump is legal when its origin and crossed cell each hold a marble and its landing cell exists and is empty.
    /// Enumeration order is fixed: marbles in row-major scan order, and for each marble the directions in `St::VARIANTS` order.
    /// The search engine breaks ties by this order, so it must never change silently.
    pub fn available_jumps(&self) -> Vec<Jump<St>> {
        let mut jumps = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell != Cell::Marble {
                    continue;
                }

                for direction in St::VARIANTS {
                    let jump = Jump { origin: Location(x, y), direction: *direction };
                    if self.cell_at(jump.middle()) == Some(Cell::Marble)
                        && self.cell_at(jump.destination()) == Some(Cell::Empty)
                    {
                        jumps.push(jump);
                    }
                }
            }
        }

        jumps
    }

    /// Derive the board resulting from `jump`: the origin and crossed cells become empty, the landing cell gains the marble.
    ///
    /// The derived board's marble count is this board's minus one, and its digest is recomputed from the new grid, never inherited.
    ///
    /// # Panics
    /// Panics if `jump` is not currently legal on this board.
    /// Callers must only apply jumps obtained from [`available_jumps`](Board::available_jumps) on this same board.
    pub fn apply(&self, jump: Jump<St>) -> Self {
        let middle = jump.middle();
        let destination = jump.destination();
        assert_eq!(
            self.cell_at(jump.origin),
            Some(Cell::Marble),
            "jump origin must hold a marble"
        );
        assert_eq!(
            self.cell_at(middle),
            Some(Cell::Marble),
            "jumped cell must hold a marble"
        );
        assert_eq!(
            self.cell_at(destination),
            Some(Cell::Empty),
            "jump destination must be an empty cell"
        );

        let mut rows = self.rows.clone();
        rows[jump.origin.1][jump.origin.0] = Cell::Empty;
        rows[middle.1][middle.0] = Cell::Empty;
        rows[destination.1][destination.0] = Cell::Marble;

        Self {
            marble_count: self.marble_count - 1,
            digest: Self::digest_rows(&rows),
            rows,
            _step: PhantomData,
        }
    }

    /// Solves this board, deferring to a default-configured [`DepthFirstSolver`].
    ///
    /// Returns according to the result of [`DepthFirstSolver::solve`].
    pub fn solve(self) -> Result<Solution<St>, SolverFailure> {
        DepthFirstSolver::new().solve(self)
    }

    // the digest is over tag bytes with a row terminator, so ragged grids that
    // merely flatten identically still digest apart
    fn digest_rows(rows: &[Vec<Cell>]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for row in rows {
            for cell in row {
                hasher.update(&[cell.tag_byte()]);
            }
            hasher.update(&[b'\n']);
        }
        hasher.finalize()
    }
}

impl<St: Step> Display for Board<St> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.rows.iter().map(|row| row.len() + 1).sum());
        for row in &self.rows {
            for cell in row {
                out.push(cell.glyph());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
