use std::collections::HashMap;

use rand::{Rng, rngs::StdRng};

use super::{Advance, Exploration, Search};
use crate::{
    error::Result,
    generators::get_rng,
    maze::{Direction, Maze},
};

/// Tuning knobs of the ant colony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcoParams {
    pub num_ants: usize,
    pub num_iterations: usize,
    /// Exponent applied to the pheromone level
    pub alpha: f64,
    /// Exponent applied to the distance heuristic
    pub beta: f64,
    /// Fraction of pheromone lost after each iteration
    pub evaporation_rate: f64,
    /// Pheromone laid on every passage before the first iteration
    pub initial_pheromone: f64,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 5,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            initial_pheromone: 0.1,
        }
    }
}

/// A single random walk from the start cell.
struct Ant {
    /// Current walk, backtracked cells are popped off
    path: Vec<usize>,
    /// Cells this ant has stepped on
    visited: Vec<bool>,
    num_visited: usize,
}

impl Ant {
    fn new(start: usize, num_cells: usize) -> Self {
        let mut visited = vec![false; num_cells];
        visited[start] = true;
        Ant {
            path: vec![start],
            visited,
            num_visited: 1,
        }
    }
}

enum Walk {
    /// The ant moved forward or backtracked one cell
    Moved { discovered: bool },
    Arrived,
    Stuck,
}

/// Ant colony search with pheromone keyed by directed passage.
///
/// Unlike the frontier searches, the solution is not reconstructed from the
/// discovery trace. The colony remembers the shortest successful walk and
/// marks it directly at the end of the last iteration.
pub(crate) struct AntColony {
    params: AcoParams,
    rng: StdRng,
    pheromone: HashMap<(usize, usize), f64>,
    iteration: usize,
    /// Index of the ant currently walking within the iteration
    ant_index: usize,
    ant: Option<Ant>,
    /// Walks that reached the goal during the current iteration
    successful: Vec<Vec<usize>>,
    best: Option<Vec<usize>>,
}

impl AntColony {
    const ORDER: [Direction; 4] = Direction::ALL;

    pub(crate) fn new(maze: &Maze, params: AcoParams, seed: Option<u64>) -> Self {
        let pheromone = (0..maze.len())
            .flat_map(|idx| {
                maze.open_neighbors(idx, Self::ORDER)
                    .map(move |next| (idx, next))
            })
            .map(|edge| (edge, params.initial_pheromone))
            .collect();
        AntColony {
            params,
            rng: get_rng(seed),
            pheromone,
            iteration: 0,
            ant_index: 0,
            ant: None,
            successful: Vec::new(),
            best: None,
        }
    }

    /// Pick the next cell among `moves` with probability proportional to
    /// `pheromone^alpha * (1 / (h + 1))^beta`.
    fn choose(&mut self, maze: &Maze, current: usize, moves: &[usize]) -> usize {
        let weights = moves
            .iter()
            .map(|&next| {
                let pheromone = self.pheromone.get(&(current, next)).copied().unwrap_or(0.0);
                let desirability = 1.0 / (maze.manhattan_to_goal(next) as f64 + 1.0);
                pheromone.powf(self.params.alpha) * desirability.powf(self.params.beta)
            })
            .collect::<Vec<_>>();
        let total: f64 = weights.iter().sum();
        let draw: f64 = self.rng.random();

        if total <= 0.0 || !total.is_finite() {
            // Uniform fallback
            let i = (draw * moves.len() as f64) as usize;
            return moves[i.min(moves.len() - 1)];
        }

        let mut cumulative = 0.0;
        for (i, weight) in weights.iter().enumerate() {
            cumulative += weight / total;
            if draw <= cumulative {
                return moves[i];
            }
        }
        moves[moves.len() - 1]
    }

    fn walk(&mut self, ant: &mut Ant, maze: &Maze, exploration: &mut Exploration) -> Walk {
        let Some(&current) = ant.path.last() else {
            return Walk::Stuck;
        };
        if current == maze.goal() {
            return Walk::Arrived;
        }
        exploration.count_explored();

        let moves = maze
            .open_neighbors(current, Self::ORDER)
            .filter(|&next| !ant.visited[next])
            .collect::<Vec<_>>();
        if moves.is_empty() {
            if ant.path.len() > 1 {
                ant.path.pop();
                return Walk::Moved { discovered: false };
            }
            return Walk::Stuck;
        }

        let next = self.choose(maze, current, &moves);
        ant.path.push(next);
        ant.visited[next] = true;
        ant.num_visited += 1;

        let discovered = !exploration.is_searched(next);
        if discovered {
            exploration.discover(current, next);
        }
        Walk::Moved { discovered }
    }

    /// Record the outcome of the current ant and move on to the next one.
    fn retire(&mut self, ant: Ant, arrived: bool, exploration: &mut Exploration) {
        exploration.sample_frontier(ant.num_visited);
        if arrived {
            let length = ant.path.len() - 1;
            tracing::trace!(
                "[aco] ant {} of iteration {} arrived in {} steps",
                self.ant_index,
                self.iteration,
                length
            );
            if self.best.as_ref().is_none_or(|best| length < best.len() - 1) {
                self.best = Some(ant.path.clone());
            }
            self.successful.push(ant.path);
        }
        self.ant_index += 1;
    }

    /// Evaporate everywhere, then reinforce the passages of this iteration's successful walks.
    fn update_pheromone(&mut self) {
        let retained = 1.0 - self.params.evaporation_rate;
        self.pheromone
            .values_mut()
            .for_each(|level| *level *= retained);

        for path in self.successful.drain(..) {
            let length = path.len() - 1;
            if length == 0 {
                continue;
            }
            let deposit = 1.0 / length as f64;
            for step in path.windows(2) {
                *self.pheromone.entry((step[0], step[1])).or_insert(0.0) += deposit;
            }
        }
    }

    fn finish(&self, exploration: &mut Exploration) -> Advance {
        match &self.best {
            Some(best) => {
                best.iter()
                    .for_each(|&cell| exploration.set_in_solution(cell, true));
                Advance::Found {
                    path_length: best.len() - 1,
                }
            }
            None => Advance::Exhausted,
        }
    }
}

impl Search for AntColony {
    fn advance(&mut self, maze: &Maze, exploration: &mut Exploration) -> Result<Advance> {
        loop {
            if self.iteration >= self.params.num_iterations {
                return Ok(self.finish(exploration));
            }
            if self.ant_index >= self.params.num_ants {
                self.update_pheromone();
                self.iteration += 1;
                self.ant_index = 0;
                continue;
            }

            let mut ant = self
                .ant
                .take()
                .unwrap_or_else(|| Ant::new(maze.start(), maze.len()));
            match self.walk(&mut ant, maze, exploration) {
                Walk::Moved { discovered } => {
                    self.ant = Some(ant);
                    if discovered {
                        return Ok(Advance::Discovered);
                    }
                }
                Walk::Arrived => self.retire(ant, true, exploration),
                Walk::Stuck => self.retire(ant, false, exploration),
            }
        }
    }
}
