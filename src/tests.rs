#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::board::Board;
    use crate::builder::{Builder, BuilderInvalidReason, SquareBoardBuilder};
    use crate::cell::Cell;
    use crate::index::DeadEndIndex;
    use crate::jump::Jump;
    use crate::location::Location;
    use crate::solver::{DepthFirstSolver, SolverFailure};
    use crate::step::OrthogonalStep;

    fn single_row(cells: Vec<Cell>) -> Board<OrthogonalStep> {
        Board::from_rows(vec![cells])
    }

    #[test]
    fn render_english_cross() {
        let board = SquareBoardBuilder::english_cross().build().unwrap();
        assert_eq!(
            format!("{}", board),
            "  ooo  \n  ooo  \nooooooo\nooo.ooo\nooooooo\n  ooo  \n  ooo  \n"
        );
        assert_eq!(board.marble_count(), 32);
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let mut builder =
            SquareBoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()));
        builder.marble(Location(0, 0)).marble(Location(3, 0));
        assert_eq!(
            builder.is_valid(),
            Some(&vec![BuilderInvalidReason::FeatureOutOfBounds])
        );
        assert_eq!(
            builder.build().unwrap_err(),
            vec![BuilderInvalidReason::FeatureOutOfBounds]
        );
    }

    #[test]
    fn builder_rejects_marbleless_board() {
        let builder =
            SquareBoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()));
        assert!(builder.is_valid().is_none());
        assert_eq!(builder.build().unwrap_err(), vec![BuilderInvalidReason::NoMarbles]);
    }

    #[test]
    fn jumps_enumerate_in_scan_order() {
        // marbles row-major, then directions left before right
        let board = single_row(vec![
            Cell::Empty,
            Cell::Marble,
            Cell::Marble,
            Cell::Marble,
            Cell::Empty,
        ]);
        assert_eq!(
            board.available_jumps(),
            vec![
                Jump { origin: Location(2, 0), direction: OrthogonalStep::Left },
                Jump { origin: Location(2, 0), direction: OrthogonalStep::Right },
            ]
        );
    }

    #[test]
    fn jumps_work_on_ragged_columns() {
        let board: Board<OrthogonalStep> =
            Board::from_rows(vec![vec![Cell::Marble], vec![Cell::Marble], vec![Cell::Empty]]);
        assert_eq!(
            board.available_jumps(),
            vec![Jump { origin: Location(0, 0), direction: OrthogonalStep::Down }]
        );

        let solution = board.solve().unwrap();
        assert_eq!(format!("{}", solution.boards().last().unwrap()), ".\n.\no\n");
    }

    #[test]
    fn missing_cell_is_not_blocked() {
        let ragged = single_row(vec![Cell::Marble]);
        let walled = single_row(vec![Cell::Marble, Cell::Blocked]);
        assert_ne!(ragged, walled);
        assert_eq!(ragged.rows(), vec![vec![Cell::Marble]]);
        assert_eq!(ragged.cell_at(Location(1, 0)), None);
        assert_eq!(walled.cell_at(Location(1, 0)), Some(Cell::Blocked));
    }

    #[test]
    fn apply_decrements_marble_count() {
        let board = SquareBoardBuilder::english_cross().build().unwrap();
        for jump in board.available_jumps() {
            let child = board.apply(jump);
            assert_eq!(child.marble_count(), board.marble_count() - 1);
        }
    }

    #[test]
    #[should_panic(expected = "jumped cell must hold a marble")]
    fn apply_rejects_illegal_jump() {
        let board = single_row(vec![Cell::Marble, Cell::Empty, Cell::Empty]);
        board.apply(Jump { origin: Location(0, 0), direction: OrthogonalStep::Right });
    }

    #[test]
    fn identical_grids_digest_identically() {
        let rows = vec![vec![Cell::Marble, Cell::Marble, Cell::Empty]];
        let a: Board<OrthogonalStep> = Board::from_rows(rows.clone());
        let b: Board<OrthogonalStep> = Board::from_rows(rows);
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a, b);

        let child = a.apply(a.available_jumps()[0]);
        assert_ne!(child, b);
    }

    #[test]
    fn index_disambiguates_colliding_digests() {
        // single decimal digit: ten buckets for twelve boards, so some bucket
        // must hold structurally different boards
        let mut index: DeadEndIndex<OrthogonalStep> = DeadEndIndex::with_digits(1);
        assert!(index.is_empty());
        let boards = (1..=12)
            .map(|width| {
                let mut cells = vec![Cell::Empty; width];
                cells[0] = Cell::Marble;
                single_row(cells)
            })
            .collect_vec();

        for board in &boards {
            assert!(!index.contains(board));
            index.record(board.clone());
            assert!(index.contains(board));
        }
        assert!(!index.is_empty());
        assert_eq!(index.len(), boards.len());
    }

    #[test]
    fn bucket_width_never_changes_the_solution() {
        // one decimal digit forces bucket collisions; the equality scan must
        // keep the search identical to the default width
        let rows = vec![
            vec![Cell::Marble, Cell::Marble, Cell::Empty],
            vec![Cell::Empty, Cell::Marble, Cell::Empty],
            vec![Cell::Empty, Cell::Marble, Cell::Empty],
        ];
        let narrow = DepthFirstSolver::with_bucket_digits(1)
            .solve(Board::<OrthogonalStep>::from_rows(rows.clone()))
            .unwrap();
        let default = DepthFirstSolver::new()
            .solve(Board::<OrthogonalStep>::from_rows(rows))
            .unwrap();
        assert_eq!(narrow.jumps(), default.jumps());
        assert_eq!(narrow.jumps().len(), 3);

        // an unsolvable board must fail identically too, with the exact same
        // amount of work: the width changes bucketing, never pruning
        let rows = vec![vec![Cell::Marble, Cell::Marble, Cell::Marble, Cell::Empty]];
        let narrow = DepthFirstSolver::with_bucket_digits(1)
            .solve(Board::<OrthogonalStep>::from_rows(rows.clone()));
        let default = DepthFirstSolver::new().solve(Board::<OrthogonalStep>::from_rows(rows));
        match (narrow, default) {
            (
                Err(SolverFailure::NoSolution { statistics: narrow }),
                Err(SolverFailure::NoSolution { statistics: default }),
            ) => assert_eq!(narrow, default),
            _ => panic!("the board is unsolvable at any bucket width"),
        }
    }

    #[test]
    fn solve_trivial_single_jump() {
        let board = single_row(vec![Cell::Marble, Cell::Marble, Cell::Empty]);
        let solution = board.solve().unwrap();
        assert_eq!(
            solution.jumps(),
            &[Jump { origin: Location(0, 0), direction: OrthogonalStep::Right }]
        );

        let boards = solution.boards();
        assert_eq!(boards.len(), 2);
        assert_eq!(format!("{}", boards.last().unwrap()), "..o\n");
        assert_eq!(boards.last().unwrap().marble_count(), 1);
    }

    #[test]
    fn solve_board_without_moves() {
        // the middle cell is blocked, so neither marble can jump
        let board = single_row(vec![Cell::Marble, Cell::Blocked, Cell::Marble]);
        match board.solve() {
            Err(SolverFailure::NoSolution { statistics }) => {
                assert_eq!(statistics.nodes_explored, 1);
                assert_eq!(statistics.dead_ends_recorded, 1);
                assert_eq!(statistics.index_hits, 0);
            }
            Ok(_) => panic!("board has no legal jump and must not solve"),
        }
    }

    #[test]
    fn recorded_dead_ends_are_genuinely_unsolvable() {
        // one legal first jump leads to a dead end; a fresh solve with an
        // empty index must agree with the recorded verdict
        let rows = vec![vec![Cell::Marble, Cell::Marble, Cell::Marble, Cell::Empty]];
        for _ in 0..2 {
            let board: Board<OrthogonalStep> = Board::from_rows(rows.clone());
            assert!(matches!(board.solve(), Err(SolverFailure::NoSolution { .. })));
        }
    }

    #[test]
    fn solving_twice_yields_identical_jumps() {
        let rows = vec![vec![Cell::Empty, Cell::Marble, Cell::Marble, Cell::Empty]];
        let first = Board::<OrthogonalStep>::from_rows(rows.clone()).solve().unwrap();
        let second = Board::<OrthogonalStep>::from_rows(rows).solve().unwrap();
        assert_eq!(first.jumps(), second.jumps());
        assert_eq!(
            first.jumps(),
            &[Jump { origin: Location(1, 0), direction: OrthogonalStep::Right }]
        );
    }

    #[test]
    fn solve_english_cross() {
        let board = SquareBoardBuilder::english_cross().build().unwrap();
        let solution = board.solve().unwrap();
        assert_eq!(solution.jumps().len(), 31);

        // every jump must be legal at the point it is played
        let mut current = solution.initial_board().clone();
        for jump in solution.jumps() {
            assert!(current.available_jumps().contains(jump));
            current = current.apply(*jump);
        }
        assert_eq!(current.marble_count(), 1);
    }
}
