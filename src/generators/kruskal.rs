use crate::{generators::get_rng, maze::Maze};
use rand::Rng;

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Number of disjoint sets left
    components: usize,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    fn find(&mut self, x: usize) -> usize {
        // Iterative with path compression, deep chains must not overflow the stack
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.components -= 1;
        true
    }
}

/// Potential passage between a cell and its right or bottom neighbor
#[derive(Clone, Copy)]
struct Edge {
    cell1: usize,
    cell2: usize,
    weight: u32,
}

pub fn randomized_kruskal(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    // Collect every potential edge once: right and bottom neighbors only
    let mut edges: Vec<Edge> = (0..maze.len())
        .flat_map(|idx| {
            let cell = maze.cell(idx);
            [cell.right.neighbor, cell.bottom.neighbor]
                .into_iter()
                .flatten()
                .map(move |neighbor| (idx, neighbor))
        })
        .map(|(cell1, cell2)| Edge {
            cell1,
            cell2,
            weight: rng.random(),
        })
        .collect();

    // Stable sort so equal weights keep enumeration order
    edges.sort_by_key(|edge| edge.weight);

    let mut uf = UnionFind::new(maze.len());
    for edge in edges {
        if uf.components == 1 {
            break;
        }
        // If cells are not yet connected, carve the passage between them
        if uf.unite(edge.cell1, edge.cell2) {
            maze.open_link(edge.cell1, edge.cell2);
            tracing::trace!(
                "[kruskal] opened {} <-> {} (weight {})",
                edge.cell1,
                edge.cell2,
                edge.weight
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(5);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(3, 4));
        assert!(!uf.unite(1, 0));
        assert_eq!(uf.components, 3);
        assert!(uf.unite(1, 4));
        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(2), uf.find(0));
        assert_eq!(uf.components, 2);
    }

    #[test]
    fn test_single_cell_stays_closed() {
        let mut maze = Maze::new(1, 1).unwrap();
        randomized_kruskal(&mut maze, Some(3));
        assert_eq!(maze.open_link_count(), 0);
    }
}
