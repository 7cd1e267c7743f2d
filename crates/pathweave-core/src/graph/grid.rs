//! Dense labelled grid graph
//!
//! Cells are addressed as `(x, y)` and connect to their in-bounds 4-neighbours
//! at unit cost. Blocked cells still appear in `connections`; masking them is
//! the job of the admission predicate (see [`GridGraph::is_open`]).

use crate::error::Result;
use crate::{bail_invalid, bail_not_found};
use crate::graph::traversal::{Graph, LabeledGraph, WeightedGraph};
use crate::graph::types::Connection;
use std::cmp::Ordering;

/// Grid coordinate `(x, y)`
pub type Cell = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot<L> {
    open: bool,
    label: L,
}

#[derive(Debug, Clone)]
pub struct GridGraph<L = u32> {
    width: usize,
    height: usize,
    slots: Vec<Slot<L>>,
}

impl<L: Clone + Default> GridGraph<L> {
    /// Create a fully open grid with default labels
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            bail_invalid!("width", "must be positive");
        }
        if height == 0 {
            bail_invalid!("height", "must be positive");
        }
        let slot = Slot {
            open: true,
            label: L::default(),
        };
        Ok(GridGraph {
            width,
            height,
            slots: vec![slot; width * height],
        })
    }

    /// Build a grid from rows where `#` marks a blocked cell
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                bail_invalid!("rows", format!("row {y} is not {width} cells wide"));
            }
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.block((x, y))?;
                }
            }
        }
        Ok(grid)
    }
}

impl<L> GridGraph<L> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: &Cell) -> Result<usize> {
        let (x, y) = *cell;
        if x >= self.width || y >= self.height {
            bail_not_found!(cell);
        }
        Ok(y * self.width + x)
    }

    /// Mark a cell as a wall
    pub fn block(&mut self, cell: Cell) -> Result<()> {
        let idx = self.index(&cell)?;
        self.slots[idx].open = false;
        Ok(())
    }

    /// False for walls and for coordinates outside the grid
    pub fn is_open(&self, cell: &Cell) -> bool {
        self.index(cell).is_ok_and(|idx| self.slots[idx].open)
    }
}

impl<L> Graph for GridGraph<L> {
    type Vertex = Cell;
    type Cost = u32;

    fn connections(&self, cell: &Cell) -> Result<Vec<Connection<Cell, u32>>> {
        self.index(cell)?;
        let (x, y) = *cell;
        let mut out = Vec::with_capacity(4);
        if x > 0 {
            out.push(Connection::new(*cell, (x - 1, y), 1));
        }
        if x + 1 < self.width {
            out.push(Connection::new(*cell, (x + 1, y), 1));
        }
        if y > 0 {
            out.push(Connection::new(*cell, (x, y - 1), 1));
        }
        if y + 1 < self.height {
            out.push(Connection::new(*cell, (x, y + 1), 1));
        }
        Ok(out)
    }

    fn vertices(&self) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .collect()
    }

    fn contains(&self, cell: &Cell) -> bool {
        self.index(cell).is_ok()
    }

    fn is_directed(&self) -> bool {
        false
    }
}

impl<L> WeightedGraph for GridGraph<L> {
    fn zero(&self) -> u32 {
        0
    }

    fn add(&self, a: &u32, b: &u32) -> u32 {
        a.saturating_add(*b)
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    /// Manhattan distance, exact on an open grid
    fn potential(&self, from: &Cell, to: &Cell) -> u32 {
        let dist = from.0.abs_diff(to.0) + from.1.abs_diff(to.1);
        u32::try_from(dist).unwrap_or(u32::MAX)
    }
}

impl<L: Clone> LabeledGraph for GridGraph<L> {
    type Label = L;

    fn label(&self, cell: &Cell) -> Result<L> {
        let idx = self.index(cell)?;
        Ok(self.slots[idx].label.clone())
    }

    fn set_label(&mut self, cell: &Cell, label: L) -> Result<()> {
        let idx = self.index(cell)?;
        self.slots[idx].label = label;
        Ok(())
    }
}
