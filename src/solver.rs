use crate::board::Board;
use crate::index::{DeadEndIndex, DEFAULT_BUCKET_DIGITS};
use crate::jump::Jump;
use crate::step::Step;

/// Reasons a [`DepthFirstSolver`] may fail.
#[derive(Debug)]
pub enum SolverFailure {
    /// The search exhausted every board reachable from the initial one without finding a single-marble state.
    /// This is an expected outcome for genuinely unsolvable boards, not an error in the solver.
    NoSolution {
        /// Search counters at the point of exhaustion.
        statistics: SolverStatistics,
    },
}

/// Counters collected during one solve call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SolverStatistics {
    /// Boards expanded by the search, the initial board included.
    pub nodes_explored: u64,
    /// Child boards skipped because the dead-end index already held them.
    pub index_hits: u64,
    /// Boards recorded in the dead-end index after all their jumps failed.
    pub dead_ends_recorded: u64,
}

/// A winning jump sequence, paired with the board it starts from and the search counters that produced it.
pub struct Solution<St: Step> {
    initial: Board<St>,
    jumps: Vec<Jump<St>>,
    statistics: SolverStatistics,
}

impl<St: Step> Solution<St> {
    /// The board the solve started from.
    pub fn initial_board(&self) -> &Board<St> {
        &self.initial
    }

    /// The winning jumps, in playing order. Always exactly `initial marble count - 1` long.
    pub fn jumps(&self) -> &[Jump<St>] {
        &self.jumps
    }

    /// Search counters for the solve that found this solution.
    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Replay the solution: every board from the initial one through the single-marble end state, in order.
    pub fn boards(&self) -> Vec<Board<St>> {
        let mut boards = Vec::with_capacity(self.jumps.len() + 1);
        boards.push(self.initial.clone());
        for jump in &self.jumps {
            let next = boards.last().unwrap().apply(*jump);
            boards.push(next);
        }

        boards
    }
}

/// The search engine: exhaustive depth-first exploration of the jump tree, pruned by a [`DeadEndIndex`].
///
/// One solver instance performs one solve call; the dead-end index is owned by the instance, so independent solves never interfere.
pub struct DepthFirstSolver<St: Step> {
    dead_ends: DeadEndIndex<St>,
    statistics: SolverStatistics,
}

impl<St: Step> DepthFirstSolver<St> {
    /// Construct a solver with the default bucket-key width.
    pub fn new() -> Self {
        Self::with_bucket_digits(DEFAULT_BUCKET_DIGITS)
    }

    /// Construct a solver whose dead-end index buckets by `digits` decimal digits of the board digest.
    ///
    /// This is the processor/memory balance knob: a wider key means more buckets and shorter scans, a narrower one the opposite.
    /// The width never changes which solution is found, only how fast.
    pub fn with_bucket_digits(digits: u32) -> Self {
        Self {
            dead_ends: DeadEndIndex::with_digits(digits),
            statistics: SolverStatistics::default(),
        }
    }

    /// Search for a jump sequence reducing `initial` to a single marble.
    ///
    /// # Search order
    /// At every board, jumps are tried in [`available_jumps`](Board::available_jumps) order, each subtree explored to exhaustion before its sibling.
    /// The first single-marble board wins; the search makes no attempt to be shortest or to continue past it.
    ///
    /// # Pruning
    /// A child board already recorded as a dead end is skipped.
    /// A board is recorded only after every jump from it has failed, so recorded boards are genuinely unsolvable and the pruning never changes the outcome, only the work.
    ///
    /// Both orders are fixed, so solving the same board twice yields the identical jump sequence.
    pub fn solve(mut self, initial: Board<St>) -> Result<Solution<St>, SolverFailure> {
        let mut jumps = Vec::with_capacity(initial.marble_count() - 1);
        if self.explore(&initial, &mut jumps) {
            Ok(Solution {
                initial,
                jumps,
                statistics: self.statistics,
            })
        } else {
            Err(SolverFailure::NoSolution {
                statistics: self.statistics,
            })
        }
    }

    // depth-first recursion; `path` holds the jumps leading to `board` and is
    // unwound on failure
    fn explore(&mut self, board: &Board<St>, path: &mut Vec<Jump<St>>) -> bool {
        self.statistics.nodes_explored += 1;

        if board.marble_count() == 1 {
            return true;
        }

        for jump in board.available_jumps() {
            let child = board.apply(jump);
            if self.dead_ends.contains(&child) {
                self.statistics.index_hits += 1;
                continue;
            }

            path.push(jump);
            if self.explore(&child, path) {
                return true;
            }
            path.pop();
        }

        self.dead_ends.record(board.clone());
        self.statistics.dead_ends_recorded += 1;
        if self.statistics.dead_ends_recorded % 100_000 == 0 {
            log::debug!(
                "{} dead ends recorded, {} nodes explored, {} index hits",
                self.statistics.dead_ends_recorded,
                self.statistics.nodes_explored,
                self.statistics.index_hits,
            );
        }

        false
    }
}

impl<St: Step> Default for DepthFirstSolver<St> {
    fn default() -> Self {
        Self::new()
    }
}
