use std::{process::ExitCode, time::Duration};

use mazepath::{
    generators::{Generator, generate_perfect_maze},
    maze::Maze,
    solvers::Solver,
};

fn main() -> ExitCode {
    let _guard = mazepath::logging::init("mazepath-profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let size = Maze::MAX_SIZE;
    for generator in Generator::ALL {
        let mut totals = [(Duration::ZERO, 0usize); Solver::ALL.len()];
        for seed in 0..num_iters as u64 {
            let mut maze = match generate_perfect_maze(size, size, generator, Some(seed)) {
                Ok(maze) => maze,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            for (solver, total) in Solver::ALL.iter().zip(totals.iter_mut()) {
                maze.reset();
                if let Ok((_, stats)) = solver.solve(&mut maze) {
                    total.0 += stats.execution_time;
                    total.1 += stats.nodes_explored;
                }
            }
        }

        println!("{generator} ({size}x{size}, {num_iters} mazes)");
        for (solver, (time, explored)) in Solver::ALL.iter().zip(totals) {
            tracing::info!("[profile] {} / {}: {:?}, {} nodes", generator, solver, time, explored);
            println!(
                "  {:<28} {:>12?} {:>10} nodes explored",
                solver.to_string(),
                time,
                explored
            );
        }
    }
    ExitCode::SUCCESS
}
