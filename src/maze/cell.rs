/// One of the four cardinal directions a cell can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// The direction pointing back from the neighbor.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Top => write!(f, "top"),
            Direction::Bottom => write!(f, "bottom"),
        }
    }
}

/// A directed link from a cell towards one of its geometric neighbors.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Linear index of the neighbor, `None` on the grid boundary.
    pub neighbor: Option<usize>,
    /// Whether a passage has been carved through this link.
    pub open: bool,
}

impl Link {
    fn towards(neighbor: usize) -> Self {
        Link {
            neighbor: Some(neighbor),
            open: false,
        }
    }

    /// The neighbor index if the link is carved open.
    pub fn passable(&self) -> Option<usize> {
        self.neighbor.filter(|_| self.open)
    }
}

/// A cell of the grid graph with its four neighbor links.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub left: Link,
    pub right: Link,
    pub top: Link,
    pub bottom: Link,
}

impl Cell {
    /// Builds the closed links of the cell at `idx` in a `rows` x `cols` grid.
    pub(super) fn at(idx: usize, rows: usize, cols: usize) -> Self {
        let (row, col) = (idx / cols, idx % cols);
        let mut cell = Cell::default();
        if col > 0 {
            cell.left = Link::towards(idx - 1);
        }
        if col + 1 < cols {
            cell.right = Link::towards(idx + 1);
        }
        if row > 0 {
            cell.top = Link::towards(idx - cols);
        }
        if row + 1 < rows {
            cell.bottom = Link::towards(idx + cols);
        }
        cell
    }

    pub fn link(&self, direction: Direction) -> &Link {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Top => &self.top,
            Direction::Bottom => &self.bottom,
        }
    }

    pub(super) fn link_mut(&mut self, direction: Direction) -> &mut Link {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Top => &mut self.top,
            Direction::Bottom => &mut self.bottom,
        }
    }
}
