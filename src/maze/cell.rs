/// Index of a cell in the maze's row-major cell vector.
pub type CellIx = usize;
/// Index of an edge in the maze's edge arena.
pub type EdgeIx = usize;

/// A cardinal move direction, from the walker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A node of the maze graph. Each directional slot holds the arena index of
/// the passage to that neighbor, or `None` when a wall stands there.
///
/// Two adjacent cells always agree on their shared slot: cell `i`'s `right`
/// and cell `i + 1`'s `left` hold the same edge index, and removing the edge
/// clears both sides in one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Grid coordinate (column, row), 0-indexed.
    pub coord: (u8, u8),
    pub left: Option<EdgeIx>,
    pub right: Option<EdgeIx>,
    pub top: Option<EdgeIx>,
    pub bottom: Option<EdgeIx>,
}

impl Cell {
    pub fn new(coord: (u8, u8)) -> Self {
        Cell {
            coord,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// The edge slot facing the given direction.
    pub fn slot(&self, direction: Direction) -> Option<EdgeIx> {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// An undirected passage between two grid-adjacent cells. By construction
/// `cell1` is always the left or top endpoint. The weight is a hook for
/// weighted variants and is always zero here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub cell1: CellIx,
    pub cell2: CellIx,
    pub weight: u32,
}
