//! Builders for rectangular boards.

use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::step::{OrthogonalStep, Step};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A cell tag was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// The finished grid holds no marble, so there is nothing to solve.
    NoMarbles,
}

/// Functionality all builders must implement, parametrised over the jump direction set `St` of the resulting board.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder<St: Step>: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order. Every cell starts [`Empty`](Cell::Empty).
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Mark the cell at `location` as [`Blocked`](Cell::Blocked).
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    fn block(&mut self, location: Location) -> &mut Self;
    /// Place a marble at `location`, with the same conditions as [`block`](Builder::block).
    fn marble(&mut self, location: Location) -> &mut Self;
    /// Mark the cell at `location` as an empty depression, with the same conditions as [`block`](Builder::block).
    fn empty(&mut self, location: Location) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid so far, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// [`NoMarbles`](BuilderInvalidReason::NoMarbles) is only detectable at [`build`](Builder::build) time and is not reported here.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Board<St>, Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular boards with orthogonal jumps, i.e. the classic game and its variants.
#[derive(Clone)]
pub struct SquareBoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for SquareBoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(7).unwrap(), NonZero::new(7).unwrap()))
    }
}

impl Builder<OrthogonalStep> for SquareBoardBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    fn block(&mut self, location: Location) -> &mut Self {
        self.set_cell(location, Cell::Blocked)
    }

    fn marble(&mut self, location: Location) -> &mut Self {
        self.set_cell(location, Cell::Marble)
    }

    fn empty(&mut self, location: Location) -> &mut Self {
        self.set_cell(location, Cell::Empty)
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Board<OrthogonalStep>, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();
        if !self.cells.iter().any(|cell| *cell == Cell::Marble) {
            reasons.push(BuilderInvalidReason::NoMarbles);
        }
        if !reasons.is_empty() {
            return Err(reasons);
        }

        let rows = self
            .cells
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect_vec())
            .collect_vec();

        Ok(Board::from_rows(rows))
    }
}

impl SquareBoardBuilder {
    fn set_cell(&mut self, location: Location, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(cell);
        self
    }

    /// Place a marble on every cell, overwriting whatever was there.
    ///
    /// If the builder is in an invalid state, this function does nothing.
    pub fn fill_marbles(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.cells.map_inplace(|cell| cell.assign_elem(Cell::Marble));
        self
    }

    /// The reference 7×7 cross board: a plus shape of 32 marbles, 2×2 blocked corners, and a single empty centre cell.
    pub fn english_cross() -> Self {
        let mut builder = Self::with_dims((NonZero::new(7).unwrap(), NonZero::new(7).unwrap()));
        builder.fill_marbles();
        for x in [0, 1, 5, 6] {
            for y in [0, 1, 5, 6] {
                builder.block(Location(x, y));
            }
        }
        builder.empty(Location(3, 3));

        builder
    }
}
