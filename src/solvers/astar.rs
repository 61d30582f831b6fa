use super::{CostPolicy, Exploration, frontier::Frontier};
use crate::maze::{Direction, Maze};

/// Open list scanned linearly for the cheapest cell.
/// Ties go to the earliest inserted cell.
pub(crate) struct AStarFrontier {
    open: Vec<usize>,
    /// Cost to arrive (g), `None` while unknown
    cost_to_arrive: Vec<Option<usize>>,
    /// Manhattan distance to the goal (h)
    cost_to_exit: Vec<usize>,
    policy: CostPolicy,
}

impl AStarFrontier {
    pub(crate) fn new(maze: &Maze, policy: CostPolicy) -> Self {
        let mut cost_to_arrive = vec![None; maze.len()];
        cost_to_arrive[maze.start()] = Some(0);
        AStarFrontier {
            open: vec![maze.start()],
            cost_to_arrive,
            cost_to_exit: (0..maze.len())
                .map(|idx| maze.manhattan_to_goal(idx))
                .collect(),
            policy,
        }
    }

    fn priority(&self, cell: usize) -> usize {
        let h = self.cost_to_exit[cell];
        match self.policy {
            CostPolicy::PathPlusHeuristic => {
                self.cost_to_arrive[cell].map_or(usize::MAX, |g| g + h)
            }
            CostPolicy::HeuristicOnly => h,
        }
    }
}

impl Frontier for AStarFrontier {
    const ORDER: [Direction; 4] = Direction::ALL;

    fn len(&self) -> usize {
        self.open.len()
    }

    fn pop(&mut self) -> Option<usize> {
        // min_by_key keeps the first of equal minimums
        let (position, _) = self
            .open
            .iter()
            .enumerate()
            .min_by_key(|&(_, &cell)| self.priority(cell))?;
        Some(self.open.remove(position))
    }

    fn relax(&mut self, from: usize, to: usize, exploration: &mut Exploration) -> bool {
        let Some(current_cost) = self.cost_to_arrive[from] else {
            return false;
        };
        if self.cost_to_arrive[to].is_some_and(|cost| cost <= current_cost + 1) {
            return false;
        }
        self.cost_to_arrive[to] = Some(current_cost + 1);
        // Cells already reached get the cheaper cost but are not queued again
        if exploration.is_searched(to) {
            return false;
        }
        self.open.push(to);
        exploration.discover(from, to);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{SearchParams, SearchRun, Solver};

    #[test]
    fn test_heuristic_and_ties() {
        let maze = Maze::new(3, 3).unwrap();
        let mut frontier = AStarFrontier::new(&maze, CostPolicy::PathPlusHeuristic);
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(0);
        assert_eq!(frontier.cost_to_exit, vec![4, 3, 2, 3, 2, 1, 2, 1, 0]);
        assert_eq!(frontier.pop(), Some(0));
        assert!(frontier.relax(0, 1, &mut exploration));
        assert!(frontier.relax(0, 3, &mut exploration));
        // Both have f = 1 + 3, the first inserted wins
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(3));
    }

    #[test]
    fn test_greedy_ignores_path_cost() {
        let maze = Maze::new(3, 3).unwrap();
        let mut frontier = AStarFrontier::new(&maze, CostPolicy::HeuristicOnly);
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(0);
        frontier.pop();
        frontier.open = vec![1, 7, 4];
        frontier.cost_to_arrive[1] = Some(1);
        frontier.cost_to_arrive[7] = Some(40);
        frontier.cost_to_arrive[4] = Some(2);
        assert_eq!(frontier.pop(), Some(7));

        frontier.policy = CostPolicy::PathPlusHeuristic;
        assert_eq!(frontier.pop(), Some(1));
    }

    #[test]
    fn test_searched_cells_are_not_requeued() {
        let maze = Maze::new(1, 3).unwrap();
        let mut frontier = AStarFrontier::new(&maze, CostPolicy::PathPlusHeuristic);
        let mut exploration = Exploration::new(maze.len());
        exploration.mark_searched(0);
        frontier.pop();
        assert!(frontier.relax(0, 1, &mut exploration));
        assert!(!frontier.relax(1, 0, &mut exploration));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_greedy_explores_towards_goal() {
        // Fully open 3x3 room carved as a comb: every column open top to bottom,
        // connected along the top row
        let mut maze = Maze::new(3, 3).unwrap();
        for col in 0..3 {
            maze.open_link(col, col + 3);
            maze.open_link(col + 3, col + 6);
        }
        maze.open_link(0, 1);
        maze.open_link(1, 2);
        let mut run = SearchRun::new(
            &maze,
            Solver::AStar(CostPolicy::HeuristicOnly),
            SearchParams::default(),
        );
        let stats = run.run_to_completion().unwrap();
        assert!(stats.found);
        assert_eq!(stats.path_length, 4);
        assert!(stats.cells_explored <= maze.len());
    }
}
