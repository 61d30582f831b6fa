use std::time::{Duration, Instant};

use crate::{
    error::Result,
    maze::Maze,
    solvers::{SearchParams, SearchRun, Solver},
};

/// Counters of one search run, written once when the run terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStatistics {
    pub solver: Solver,
    pub found: bool,
    /// Cells popped from the frontier and expanded (ant moves for the colony)
    pub cells_explored: usize,
    /// Peak number of cells held at once
    pub max_frontier_size: usize,
    /// Edges on the solution path, 0 when no path was found
    pub path_length: usize,
    pub execution_time: Duration,
    started_at: Option<Instant>,
}

impl RunStatistics {
    pub fn new(solver: Solver) -> Self {
        RunStatistics {
            solver,
            found: false,
            cells_explored: 0,
            max_frontier_size: 0,
            path_length: 0,
            execution_time: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn start_timer(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn stop_timer(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.execution_time = started_at.elapsed();
        }
    }
}

impl std::fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: explored {} cells, max frontier {}, path length {}, {:.4}s",
            self.solver,
            self.cells_explored,
            self.max_frontier_size,
            self.path_length,
            self.execution_time.as_secs_f64()
        )
    }
}

/// Run every solver to completion on `maze`, each on its own fresh exploration.
pub fn compare_algorithms(maze: &Maze, params: SearchParams) -> Result<Vec<RunStatistics>> {
    Solver::ALL
        .iter()
        .map(|&solver| {
            let stats = SearchRun::new(maze, solver, params).run_to_completion()?;
            tracing::info!("[compare] {}", stats);
            Ok(stats)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::build_maze;

    #[test]
    fn test_timer() {
        let mut stats = RunStatistics::new(Solver::Bfs);
        stats.stop_timer();
        assert_eq!(stats.execution_time, Duration::ZERO);
        stats.start_timer();
        std::thread::sleep(Duration::from_millis(2));
        stats.stop_timer();
        assert!(stats.execution_time >= Duration::from_millis(2));
    }

    #[test]
    fn test_compare_algorithms() {
        let maze = build_maze(12, 15, Some(10)).unwrap();
        let params = SearchParams {
            seed: Some(2),
            ..SearchParams::default()
        };
        let all = compare_algorithms(&maze, params).unwrap();
        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|stats| stats.found));
        let bfs = all[1].path_length;
        assert_eq!(all[2].path_length, bfs);
        assert!(all.iter().all(|stats| stats.path_length >= bfs));
        assert_eq!(
            all.iter().map(|stats| stats.solver).collect::<Vec<_>>(),
            Solver::ALL.to_vec()
        );
    }

    #[test]
    fn test_display() {
        let mut stats = RunStatistics::new(Solver::Dfs);
        stats.cells_explored = 12;
        stats.path_length = 7;
        assert_eq!(
            stats.to_string(),
            "Depth-First Search: explored 12 cells, max frontier 0, path length 7, 0.0000s"
        );
    }
}
