use std::collections::VecDeque;

use super::{Exploration, frontier::Frontier};
use crate::maze::Direction;

/// FIFO queue, marked at enqueue time.
pub(crate) struct BfsFrontier {
    queue: VecDeque<usize>,
}

impl BfsFrontier {
    pub(crate) fn new(start: usize) -> Self {
        BfsFrontier {
            queue: VecDeque::from([start]),
        }
    }
}

impl Frontier for BfsFrontier {
    const ORDER: [Direction; 4] = Direction::ALL;

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn relax(&mut self, from: usize, to: usize, exploration: &mut Exploration) -> bool {
        if exploration.is_searched(to) {
            return false;
        }
        exploration.discover(from, to);
        self.queue.push_back(to);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        maze::Maze,
        solvers::{SearchParams, SearchRun, Solver, TraceEdge},
    };

    #[test]
    fn test_bfs_discovers_level_by_level() {
        // 0 - 1 - 2
        // |
        // 3 - 4 - 5
        let mut maze = Maze::new(2, 3).unwrap();
        maze.open_link(0, 1);
        maze.open_link(1, 2);
        maze.open_link(0, 3);
        maze.open_link(3, 4);
        maze.open_link(4, 5);
        let mut run = SearchRun::new(&maze, Solver::Bfs, SearchParams::default());

        let mut discovered = Vec::new();
        while run.step_once().unwrap() {
            discovered.push(run.exploration().trace().last().unwrap().to);
        }
        assert_eq!(discovered, vec![1, 3, 2, 4, 5]);
        assert_eq!(
            run.exploration().trace()[4],
            TraceEdge { from: 4, to: 5 }
        );
        assert_eq!(run.statistics().path_length, 3);
        assert_eq!(run.statistics().cells_explored, 6);
        assert!(run.is_in_solution(3) && run.is_in_solution(4));
        assert!(!run.is_in_solution(1));
    }
}
