use rand::{SeedableRng, rngs::StdRng};

mod kruskal;

use crate::{error::Result, maze::Maze};
use kruskal::randomized_kruskal;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carve a perfect maze into a grid whose links are all closed.
pub fn generate_maze(maze: &mut Maze, seed: Option<u64>) {
    randomized_kruskal(maze, seed);
}

/// Build a new `rows` x `cols` perfect maze.
/// The shape is deterministic, the passages are random unless `seed` is given.
pub fn build_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze> {
    let mut maze = Maze::new(rows, cols)?;
    generate_maze(&mut maze, seed);
    tracing::debug!(
        "[generator] built {}x{} maze with {} passages",
        rows,
        cols,
        maze.open_link_count()
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use std::collections::VecDeque;

    /// Count the cells reachable from the start through open links.
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![false; maze.len()];
        let mut queue = VecDeque::from([maze.start()]);
        seen[maze.start()] = true;
        let mut count = 0;
        while let Some(idx) = queue.pop_front() {
            count += 1;
            for next in maze.open_neighbors(idx, Direction::ALL) {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        for (rows, cols) in [(1, 1), (1, 7), (6, 1), (2, 2), (5, 5), (10, 20), (30, 17)] {
            for seed in 0..5 {
                let maze = build_maze(rows, cols, Some(seed)).unwrap();
                // Spanning tree: n - 1 edges and connected implies no cycle
                assert_eq!(maze.open_link_count(), rows * cols - 1);
                assert_eq!(reachable_cells(&maze), rows * cols);
            }
        }
    }

    #[test]
    fn test_links_stay_symmetric() {
        let maze = build_maze(8, 9, Some(42)).unwrap();
        for idx in 0..maze.len() {
            for direction in Direction::ALL {
                if let Some(next) = maze.cell(idx).link(direction).passable() {
                    assert!(maze.is_open(next, direction.opposite()));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = build_maze(20, 20, Some(7)).unwrap();
        let second = build_maze(20, 20, Some(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = build_maze(20, 20, Some(1)).unwrap();
        let second = build_maze(20, 20, Some(2)).unwrap();
        assert_ne!(first, second);
        let unseeded = build_maze(20, 20, None).unwrap();
        let reseeded = build_maze(20, 20, None).unwrap();
        assert_ne!(unseeded, reseeded);
    }

    #[test]
    fn test_two_by_two_has_three_passages() {
        for seed in 0..10 {
            let maze = build_maze(2, 2, Some(seed)).unwrap();
            assert_eq!(maze.open_link_count(), 3);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(build_maze(0, 3, Some(0)).is_err());
    }
}
