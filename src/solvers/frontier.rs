use crate::{
    error::Result,
    maze::{Direction, Maze},
    solvers::{Advance, Exploration, Search, backtrack},
};

/// The container a goal-seeking search keeps its known-but-unexpanded cells in.
pub(crate) trait Frontier {
    /// Order in which the neighbors of an expanded cell are considered.
    const ORDER: [Direction; 4];

    fn len(&self) -> usize;

    /// Remove the next cell to expand.
    fn pop(&mut self) -> Option<usize>;

    /// Consider the open link `from -> to` while expanding `from`.
    /// Returns `true` if `to` was discovered for the first time.
    fn relax(&mut self, from: usize, to: usize, exploration: &mut Exploration) -> bool;
}

/// Drives a [`Frontier`] one discovery at a time.
///
/// The cell being expanded and the position in its neighbor order are kept
/// between calls, so a search suspended right after a discovery resumes with
/// the next neighbor.
pub(crate) struct Expander<F> {
    frontier: F,
    /// Cell being expanded and the index of the next direction to consider
    pending: Option<(usize, usize)>,
}

impl<F: Frontier> Expander<F> {
    pub(crate) fn new(frontier: F) -> Self {
        Expander {
            frontier,
            pending: None,
        }
    }
}

impl<F: Frontier> Search for Expander<F> {
    fn advance(&mut self, maze: &Maze, exploration: &mut Exploration) -> Result<Advance> {
        loop {
            if let Some((current, next_direction)) = self.pending.take() {
                for (i, &direction) in F::ORDER.iter().enumerate().skip(next_direction) {
                    let Some(neighbor) = maze.cell(current).link(direction).passable() else {
                        continue;
                    };
                    if self.frontier.relax(current, neighbor, exploration) {
                        self.pending = Some((current, i + 1));
                        return Ok(Advance::Discovered);
                    }
                }
            }

            exploration.sample_frontier(self.frontier.len());
            let Some(current) = self.frontier.pop() else {
                return Ok(Advance::Exhausted);
            };
            exploration.count_explored();

            if current == maze.goal() {
                let path_length = backtrack(exploration, current)?;
                return Ok(Advance::Found { path_length });
            }
            self.pending = Some((current, 0));
        }
    }
}
