use crate::{
    error::{MazeError, Result},
    solvers::Solver,
};

/// User-selected settings of a visualization session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub solver: Solver,
    /// Number of search steps per rendered frame
    pub step_rate: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            solver: Solver::Dfs,
            step_rate: 10,
        }
    }
}

impl Config {
    /// Maze heights the user can pick from
    pub const ROW_OPTIONS: [usize; 6] = [5, 10, 20, 30, 40, 50];
    /// Maze widths the user can pick from
    pub const COL_OPTIONS: [usize; 6] = [5, 10, 20, 30, 40, 50];
    pub const MIN_STEP_RATE: usize = 1;
    pub const MAX_STEP_RATE: usize = 60;

    pub fn new(rows: usize, cols: usize, solver: Solver, step_rate: usize) -> Result<Self> {
        if !Config::ROW_OPTIONS.contains(&rows) {
            return Err(MazeError::UnsupportedDimension(rows));
        }
        if !Config::COL_OPTIONS.contains(&cols) {
            return Err(MazeError::UnsupportedDimension(cols));
        }
        if !(Config::MIN_STEP_RATE..=Config::MAX_STEP_RATE).contains(&step_rate) {
            return Err(MazeError::InvalidStepRate(step_rate));
        }
        Ok(Config {
            rows,
            cols,
            solver,
            step_rate,
        })
    }

    /// Double the step rate, capped at the maximum.
    pub fn speed_up(&mut self) {
        self.step_rate = (self.step_rate * 2).min(Config::MAX_STEP_RATE);
    }

    /// Halve the step rate, never below the minimum.
    pub fn slow_down(&mut self) {
        self.step_rate = (self.step_rate / 2).max(Config::MIN_STEP_RATE);
    }
}
