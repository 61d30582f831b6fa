mod aco;
mod astar;
mod bfs;
mod dfs;
mod frontier;
mod manual;
mod ucs;

pub use aco::AcoParams;
pub use manual::{ManualOutcome, ManualRun};

use crate::{
    error::{MazeError, Result},
    maze::{Maze, START_CELL},
    stats::RunStatistics,
};
use aco::AntColony;
use astar::AStarFrontier;
use bfs::BfsFrontier;
use dfs::DfsFrontier;
use frontier::Expander;
use ucs::UcsFrontier;

/// How A* ranks the cells of its open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostPolicy {
    /// `f = g + h`, the classic admissible A*.
    PathPlusHeuristic,
    /// `f = h`, a greedy best-first search. Finds a path but not necessarily the shortest.
    HeuristicOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    Ucs,
    AStar(CostPolicy),
    Aco,
}

impl Solver {
    /// Every solver, in comparison order.
    pub const ALL: [Solver; 6] = [
        Solver::Dfs,
        Solver::Bfs,
        Solver::Ucs,
        Solver::AStar(CostPolicy::PathPlusHeuristic),
        Solver::AStar(CostPolicy::HeuristicOnly),
        Solver::Aco,
    ];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search"),
            Solver::Bfs => write!(f, "Breadth-First Search"),
            Solver::Ucs => write!(f, "Uniform-Cost Search"),
            Solver::AStar(CostPolicy::PathPlusHeuristic) => write!(f, "A* Search (f = g + h)"),
            Solver::AStar(CostPolicy::HeuristicOnly) => write!(f, "A* Search (f = h)"),
            Solver::Aco => write!(f, "Ant Colony Optimization"),
        }
    }
}

/// Per-cell flags of a search run.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMark {
    /// The cell has been reached (pushed, enqueued or walked on).
    pub searched: bool,
    /// The cell lies on the reconstructed solution path.
    pub in_solution: bool,
}

/// A discovery: `to` was first reached from `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEdge {
    pub from: usize,
    pub to: usize,
}

/// Everything a single run produces: cell marks, discovery trace and counters.
/// Owned by exactly one run and replaced, never reused, by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    marks: Vec<CellMark>,
    trace: Vec<TraceEdge>,
    cells_explored: usize,
    max_frontier_size: usize,
}

impl Exploration {
    pub fn new(num_cells: usize) -> Self {
        Exploration {
            marks: vec![CellMark::default(); num_cells],
            trace: Vec::new(),
            cells_explored: 0,
            max_frontier_size: 0,
        }
    }

    pub fn is_searched(&self, idx: usize) -> bool {
        self.marks[idx].searched
    }

    pub fn is_in_solution(&self, idx: usize) -> bool {
        self.marks[idx].in_solution
    }

    pub fn marks(&self) -> &[CellMark] {
        &self.marks
    }

    /// Discovered edges in discovery order.
    pub fn trace(&self) -> &[TraceEdge] {
        &self.trace
    }

    pub fn cells_explored(&self) -> usize {
        self.cells_explored
    }

    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    /// Number of cells marked as part of the solution.
    pub fn solution_len(&self) -> usize {
        self.marks.iter().filter(|mark| mark.in_solution).count()
    }

    pub(crate) fn mark_searched(&mut self, idx: usize) {
        self.marks[idx].searched = true;
    }

    /// Records that `to` was reached for the first time from `from`.
    pub(crate) fn discover(&mut self, from: usize, to: usize) {
        debug_assert!(
            !self.marks[to].searched,
            "Cell {to} must only be discovered once"
        );
        self.marks[to].searched = true;
        self.trace.push(TraceEdge { from, to });
    }

    pub(crate) fn set_in_solution(&mut self, idx: usize, in_solution: bool) {
        self.marks[idx].in_solution = in_solution;
    }

    pub(crate) fn count_explored(&mut self) {
        self.cells_explored += 1;
    }

    pub(crate) fn sample_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }
}

/// Mark the route from the start cell to `goal` by walking the discovery trace backwards.
///
/// For each cell, the most recent trace entry leading into it wins.
/// Returns the path length in edges.
pub fn backtrack(exploration: &mut Exploration, goal: usize) -> Result<usize> {
    exploration.set_in_solution(goal, true);
    let mut current = goal;
    let mut length = 0;
    while current != START_CELL {
        let predecessor = exploration
            .trace
            .iter()
            .rev()
            .find(|edge| edge.to == current)
            .map(|edge| edge.from);
        // A chain longer than the trace can only come from a cycle
        let Some(from) = predecessor.filter(|_| length < exploration.trace.len()) else {
            tracing::error!(
                "[backtrack] no predecessor for cell {} after {} steps",
                current,
                length
            );
            return Err(MazeError::BrokenTrace { cell: current });
        };
        exploration.set_in_solution(from, true);
        current = from;
        length += 1;
    }
    Ok(length)
}

/// Outcome of advancing a search by one discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// A new cell was discovered, the search can resume.
    Discovered,
    /// The goal was reached and the solution is marked.
    Found { path_length: usize },
    /// Nothing is left to explore and the goal was not reached.
    Exhausted,
}

/// A resumable search over a maze.
pub(crate) trait Search {
    /// Run until the next newly discovered cell, or until the search terminates.
    fn advance(&mut self, maze: &Maze, exploration: &mut Exploration) -> Result<Advance>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Found,
    NotFound,
    /// An internal invariant was violated, see the returned [`MazeError`].
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SearchParams {
    pub aco: AcoParams,
    /// Seed for stochastic solvers. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// A single search run over a borrowed maze.
///
/// Use [`SearchRun::step_once`] to drive it one discovery at a time, or
/// [`SearchRun::run_to_completion`] to get the statistics directly. Both visit
/// cells in the same order.
pub struct SearchRun<'m> {
    maze: &'m Maze,
    search: Box<dyn Search>,
    exploration: Exploration,
    status: RunStatus,
    stats: RunStatistics,
}

impl<'m> SearchRun<'m> {
    pub fn new(maze: &'m Maze, solver: Solver, params: SearchParams) -> Self {
        let start = maze.start();
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(start);

        let search: Box<dyn Search> = match solver {
            Solver::Dfs => Box::new(Expander::new(DfsFrontier::new(start))),
            Solver::Bfs => Box::new(Expander::new(BfsFrontier::new(start))),
            Solver::Ucs => Box::new(Expander::new(UcsFrontier::new(maze))),
            Solver::AStar(policy) => Box::new(Expander::new(AStarFrontier::new(maze, policy))),
            Solver::Aco => Box::new(AntColony::new(maze, params.aco, params.seed)),
        };

        tracing::debug!(
            "[search] starting {} on a {}x{} maze",
            solver,
            maze.rows(),
            maze.cols()
        );
        let mut stats = RunStatistics::new(solver);
        stats.start_timer();
        SearchRun {
            maze,
            search,
            exploration,
            status: RunStatus::Running,
            stats,
        }
    }

    /// Advance to the next discovered cell.
    /// Returns whether the run is still going. A finished run is left untouched.
    pub fn step_once(&mut self) -> Result<bool> {
        if self.status != RunStatus::Running {
            return Ok(false);
        }
        match self.search.advance(self.maze, &mut self.exploration) {
            Ok(Advance::Discovered) => Ok(true),
            Ok(Advance::Found { path_length }) => {
                self.finish(RunStatus::Found, path_length);
                Ok(false)
            }
            Ok(Advance::Exhausted) => {
                self.finish(RunStatus::NotFound, 0);
                Ok(false)
            }
            Err(e) => {
                self.finish(RunStatus::Failed, 0);
                tracing::error!("[search] {} failed: {}", self.stats.solver, e);
                Err(e)
            }
        }
    }

    /// Run without suspending and return the final statistics.
    pub fn run_to_completion(&mut self) -> Result<RunStatistics> {
        while self.step_once()? {}
        Ok(self.stats)
    }

    fn finish(&mut self, status: RunStatus, path_length: usize) {
        self.status = status;
        self.stats.stop_timer();
        self.stats.found = status == RunStatus::Found;
        self.stats.path_length = path_length;
        self.stats.cells_explored = self.exploration.cells_explored();
        self.stats.max_frontier_size = self.exploration.max_frontier_size();
        tracing::debug!("[search] finished with {:?}: {}", status, self.stats);
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn solver(&self) -> Solver {
        self.stats.solver
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn exploration(&self) -> &Exploration {
        &self.exploration
    }

    /// Statistics so far. Counters are filled in once the run terminates.
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn is_searched(&self, idx: usize) -> bool {
        self.exploration.is_searched(idx)
    }

    pub fn is_in_solution(&self, idx: usize) -> bool {
        self.exploration.is_in_solution(idx)
    }
}
