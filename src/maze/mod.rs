pub mod cell;

pub use cell::{Cell, CellIx, Direction, Edge, EdgeIx};

/// The maze graph: cells in row-major order plus a dense edge arena.
///
/// `dense` builds the full 4-connected grid; a generator then removes every
/// edge outside its spanning tree, leaving exactly one passage route between
/// any two cells. Cells reference edges by arena index so that both endpoints
/// of a passage always see the same edge.
pub struct Maze {
    cells: Vec<Cell>,
    edges: Vec<Edge>,
    width: u8,
    height: u8,
}

impl Maze {
    /// Builds the fully-connected grid graph: every grid-adjacent pair of
    /// cells gets an edge. The result has
    /// `width*(height-1) + height*(width-1)` edges.
    ///
    /// Panics if either dimension is zero.
    pub fn dense(width: u8, height: u8) -> Self {
        assert!(width >= 1 && height >= 1, "maze dimensions must be >= 1");
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new((x, y))))
            .collect();
        let mut maze = Maze {
            cells,
            edges: Vec::new(),
            width,
            height,
        };
        maze.connect_horizontal();
        maze.connect_vertical();
        maze
    }

    /// Wire every cell to its right-hand neighbor, skipping the last column.
    fn connect_horizontal(&mut self) {
        for i in 0..self.cells.len() {
            if (i + 1) % self.width as usize != 0 {
                let edge = self.edges.len();
                self.edges.push(Edge {
                    cell1: i,
                    cell2: i + 1,
                    weight: 0,
                });
                self.cells[i].right = Some(edge);
                self.cells[i + 1].left = Some(edge);
            }
        }
    }

    /// Wire every cell to the cell one row below, skipping the last row.
    fn connect_vertical(&mut self) {
        let width = self.width as usize;
        for i in 0..self.cells.len().saturating_sub(width) {
            let edge = self.edges.len();
            self.edges.push(Edge {
                cell1: i,
                cell2: i + width,
                weight: 0,
            });
            self.cells[i].bottom = Some(edge);
            self.cells[i + width].top = Some(edge);
        }
    }

    /// Removes an edge from the graph, clearing the directional slots on
    /// both endpoints in one operation so the two cells never disagree.
    pub fn remove_edge(&mut self, edge: EdgeIx) {
        let Edge { cell1, cell2, .. } = self.edges[edge];
        if self.cells[cell1].coord.0 == self.cells[cell2].coord.0 {
            // Same column: cell1 sits above cell2.
            debug_assert_eq!(self.cells[cell1].bottom, Some(edge));
            self.cells[cell1].bottom = None;
            self.cells[cell2].top = None;
        } else {
            // Same row: cell1 sits left of cell2.
            debug_assert_eq!(self.cells[cell1].right, Some(edge));
            self.cells[cell1].right = None;
            self.cells[cell2].left = None;
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The designated start cell: top-left.
    pub fn start(&self) -> CellIx {
        0
    }

    /// The designated target cell: bottom-right.
    pub fn target(&self) -> CellIx {
        self.cells.len() - 1
    }

    pub fn cell(&self, ix: CellIx) -> &Cell {
        &self.cells[ix]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Row-major index of the cell at (column, row).
    pub fn index_of(&self, coord: (u8, u8)) -> CellIx {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Whether the passage in the given direction is open (no wall).
    pub fn is_open(&self, ix: CellIx, direction: Direction) -> bool {
        self.cells[ix].slot(direction).is_some()
    }

    /// The neighbor reachable from `ix` through an open passage in the given
    /// direction, or `None` if a wall (or the grid boundary) stands there.
    pub fn neighbor_through(&self, ix: CellIx, direction: Direction) -> Option<CellIx> {
        let edge = self.cells[ix].slot(direction)?;
        let Edge { cell1, cell2, .. } = self.edges[edge];
        Some(if cell1 == ix { cell2 } else { cell1 })
    }

    /// Number of edges still wired into cells. Counts each passage once via
    /// its left/top endpoint.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.right.iter().count() + c.bottom.iter().count())
            .sum()
    }
}
