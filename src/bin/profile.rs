use std::time::Duration;

use mazelab::{generators::build_maze, solvers::SearchParams, stats::compare_algorithms};
use tracing_subscriber::EnvFilter;

/// Usage: profile [rows] [cols] [iterations]
fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MAZELAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let mut next_number = |default: usize| {
        args.next()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(default)
    };
    let rows = next_number(50);
    let cols = next_number(50);
    let num_iters = next_number(10);

    let mut totals: Vec<(String, usize, usize, Duration)> = Vec::new();
    for i in 0..num_iters {
        let seed = i as u64;
        let maze = build_maze(rows, cols, Some(seed)).map_err(std::io::Error::other)?;
        let params = SearchParams {
            seed: Some(seed),
            ..SearchParams::default()
        };
        let all = compare_algorithms(&maze, params).map_err(std::io::Error::other)?;
        if totals.is_empty() {
            totals = all
                .iter()
                .map(|s| (s.solver.to_string(), 0, 0, Duration::ZERO))
                .collect();
        }
        for (total, stats) in totals.iter_mut().zip(&all) {
            total.1 += stats.cells_explored;
            total.2 += stats.path_length;
            total.3 += stats.execution_time;
        }
    }

    println!("{num_iters} mazes of {rows}x{cols}, averages:");
    let n = num_iters.max(1);
    for (name, explored, path_length, time) in totals {
        println!(
            "{:<26} explored {:>8} path length {:>6} time {:.6}s",
            name,
            explored / n,
            path_length / n,
            time.as_secs_f64() / n as f64
        );
    }
    Ok(())
}
