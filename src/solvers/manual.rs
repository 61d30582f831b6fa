use super::{Exploration, backtrack};
use crate::{
    error::Result,
    maze::{Direction, Maze},
};

/// Result of a single manual move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualOutcome {
    /// Moved forward into a new cell
    Advanced(usize),
    /// Stepped back to the previous cell of the current path
    Retreated(usize),
    /// The goal was reached and the solution is marked
    Reached { path_length: usize },
    /// Wall, boundary, already visited cell or finished run. Nothing changed.
    Rejected,
}

/// A run where the user walks the maze by hand.
pub struct ManualRun<'m> {
    maze: &'m Maze,
    exploration: Exploration,
    /// Cells from the start to the current position
    path: Vec<usize>,
    finished: bool,
}

impl<'m> ManualRun<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(maze.start());
        ManualRun {
            maze,
            exploration,
            path: vec![maze.start()],
            finished: false,
        }
    }

    /// Attempt to move from the current position in `direction`.
    ///
    /// Moving onto an unvisited cell advances, moving onto the previous cell
    /// of the path retreats. Anything else is rejected.
    pub fn step(&mut self, direction: Direction) -> Result<ManualOutcome> {
        if self.finished {
            return Ok(ManualOutcome::Rejected);
        }
        let current = self.position();
        let Some(next) = self.maze.cell(current).link(direction).passable() else {
            tracing::trace!("[manual] blocked moving {} from {}", direction, current);
            return Ok(ManualOutcome::Rejected);
        };

        let previous = self.path.len().checked_sub(2).map(|i| self.path[i]);
        if previous == Some(next) {
            tracing::debug!("[manual] retreating from {} to {}", current, next);
            self.path.pop();
            self.exploration.set_in_solution(current, false);
            return Ok(ManualOutcome::Retreated(next));
        }
        if self.exploration.is_searched(next) {
            return Ok(ManualOutcome::Rejected);
        }

        tracing::debug!("[manual] advancing from {} to {}", current, next);
        self.exploration.discover(current, next);
        self.exploration.count_explored();
        self.path.push(next);

        if next == self.maze.goal() {
            let path_length = backtrack(&mut self.exploration, next)?;
            self.finished = true;
            tracing::info!("[manual] goal reached in {} steps", path_length);
            return Ok(ManualOutcome::Reached { path_length });
        }
        Ok(ManualOutcome::Advanced(next))
    }

    /// The cell the user is standing on.
    pub fn position(&self) -> usize {
        self.path.last().copied().unwrap_or(self.maze.start())
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn exploration(&self) -> &Exploration {
        &self.exploration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 - 1   2
    ///     |   |
    /// 3 - 4 - 5
    fn small_maze() -> Maze {
        let mut maze = Maze::new(2, 3).unwrap();
        maze.open_link(0, 1);
        maze.open_link(1, 4);
        maze.open_link(3, 4);
        maze.open_link(4, 5);
        maze.open_link(2, 5);
        maze
    }

    #[test]
    fn test_closed_direction_is_noop() {
        let maze = small_maze();
        let mut run = ManualRun::new(&maze);
        let before = run.exploration().clone();
        assert_eq!(run.step(Direction::Bottom).unwrap(), ManualOutcome::Rejected);
        assert_eq!(run.step(Direction::Left).unwrap(), ManualOutcome::Rejected);
        assert_eq!(run.exploration(), &before);
        assert_eq!(run.position(), 0);
    }

    #[test]
    fn test_advance_retreat_and_reach() {
        let maze = small_maze();
        let mut run = ManualRun::new(&maze);
        assert_eq!(run.step(Direction::Right).unwrap(), ManualOutcome::Advanced(1));
        assert_eq!(run.step(Direction::Bottom).unwrap(), ManualOutcome::Advanced(4));
        assert_eq!(run.step(Direction::Left).unwrap(), ManualOutcome::Advanced(3));
        // Dead end, go back
        assert_eq!(run.step(Direction::Right).unwrap(), ManualOutcome::Retreated(4));
        assert_eq!(run.path(), &[0, 1, 4]);
        // The dead end stays visited and cannot be re-entered
        assert_eq!(run.step(Direction::Left).unwrap(), ManualOutcome::Rejected);
        assert_eq!(
            run.step(Direction::Right).unwrap(),
            ManualOutcome::Reached { path_length: 3 }
        );
        assert!(run.is_finished());
        for idx in [0, 1, 4, 5] {
            assert!(run.exploration().is_in_solution(idx));
        }
        assert!(!run.exploration().is_in_solution(3));
        assert_eq!(run.step(Direction::Top).unwrap(), ManualOutcome::Rejected);
    }

    #[test]
    fn test_retreat_to_start() {
        let maze = small_maze();
        let mut run = ManualRun::new(&maze);
        run.step(Direction::Right).unwrap();
        assert_eq!(run.step(Direction::Left).unwrap(), ManualOutcome::Retreated(0));
        assert_eq!(run.position(), 0);
        // 1 is visited and not the previous cell anymore
        assert_eq!(run.step(Direction::Right).unwrap(), ManualOutcome::Rejected);
    }
}
