use std::{cmp::Reverse, collections::BinaryHeap};

use super::{Exploration, frontier::Frontier};
use crate::maze::{Direction, Maze};

/// Cost of a cell that has not been reached yet
const UNREACHABLE: usize = usize::MAX;

/// Min-priority queue keyed by accumulated path cost.
///
/// Every passage costs 1. Equal costs pop in insertion order thanks to a
/// monotonic sequence number.
pub(crate) struct UcsFrontier {
    // Using Reverse to turn the max-heap into a min-heap
    heap: BinaryHeap<Reverse<(usize, u64, usize)>>,
    cost_so_far: Vec<usize>,
    next_seq: u64,
}

impl UcsFrontier {
    pub(crate) fn new(maze: &Maze) -> Self {
        let mut cost_so_far = vec![UNREACHABLE; maze.len()];
        cost_so_far[maze.start()] = 0;
        let mut frontier = UcsFrontier {
            heap: BinaryHeap::new(),
            cost_so_far,
            next_seq: 0,
        };
        frontier.push(0, maze.start());
        frontier
    }

    fn push(&mut self, cost: usize, cell: usize) {
        self.heap.push(Reverse((cost, self.next_seq, cell)));
        self.next_seq += 1;
    }
}

impl Frontier for UcsFrontier {
    const ORDER: [Direction; 4] = Direction::ALL;

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse((cost, _, cell))) = self.heap.pop() {
            // Skip entries superseded by a cheaper relaxation
            if cost > self.cost_so_far[cell] {
                continue;
            }
            return Some(cell);
        }
        None
    }

    fn relax(&mut self, from: usize, to: usize, exploration: &mut Exploration) -> bool {
        let new_cost = self.cost_so_far[from] + 1;
        if new_cost >= self.cost_so_far[to] {
            return false;
        }
        self.cost_so_far[to] = new_cost;
        self.push(new_cost, to);
        if exploration.is_searched(to) {
            return false;
        }
        exploration.discover(from, to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_costs_pop_in_insertion_order() {
        let maze = Maze::new(3, 3).unwrap();
        let mut frontier = UcsFrontier::new(&maze);
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(0);
        assert_eq!(frontier.pop(), Some(0));
        // Discovered in this order with the same cost
        assert!(frontier.relax(0, 3, &mut exploration));
        assert!(frontier.relax(0, 1, &mut exploration));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_relaxation_only_improves() {
        let maze = Maze::new(1, 3).unwrap();
        let mut frontier = UcsFrontier::new(&maze);
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(0);
        frontier.pop();
        assert!(frontier.relax(0, 1, &mut exploration));
        // Going back to the start is never cheaper
        assert!(!frontier.relax(1, 0, &mut exploration));
        assert!(!frontier.relax(0, 1, &mut exploration));
        assert_eq!(frontier.len(), 1);
        assert_eq!(exploration.trace().len(), 1);
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        let maze = Maze::new(2, 2).unwrap();
        let mut frontier = UcsFrontier::new(&maze);
        frontier.pop();
        frontier.cost_so_far[3] = 5;
        frontier.push(5, 3);
        // A cheaper route found later supersedes the queued entry
        frontier.cost_so_far[3] = 2;
        frontier.push(2, 3);
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), None);
    }
}
