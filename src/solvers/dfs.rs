use super::{Exploration, frontier::Frontier};
use crate::maze::Direction;

/// LIFO stack. Cells are marked when pushed so none is pushed twice.
pub(crate) struct DfsFrontier {
    stack: Vec<usize>,
}

impl DfsFrontier {
    pub(crate) fn new(start: usize) -> Self {
        DfsFrontier { stack: vec![start] }
    }
}

impl Frontier for DfsFrontier {
    const ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::Top,
    ];

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    fn relax(&mut self, from: usize, to: usize, exploration: &mut Exploration) -> bool {
        if exploration.is_searched(to) {
            return false;
        }
        exploration.discover(from, to);
        self.stack.push(to);
        true
    }
}
