use std::time::Instant;

use pegmatite::builder::{Builder, SquareBoardBuilder};
use pegmatite::SolverFailure;

fn main() {
    env_logger::init();

    let board = SquareBoardBuilder::english_cross().build().unwrap();
    println!("{board}");

    let started = Instant::now();
    match board.solve() {
        Ok(solution) => {
            let elapsed = started.elapsed();
            for (n, jump) in solution.jumps().iter().enumerate() {
                println!("{:2}. {jump}", n + 1);
            }

            let statistics = solution.statistics();
            println!();
            println!("{}", solution.boards().last().unwrap());
            println!(
                "solved in {elapsed:.2?}: {} nodes explored, {} dead ends recorded, {} index hits",
                statistics.nodes_explored,
                statistics.dead_ends_recorded,
                statistics.index_hits,
            );
        }
        Err(SolverFailure::NoSolution { statistics }) => {
            println!(
                "no solution found after exploring {} boards",
                statistics.nodes_explored
            );
        }
    }
}
