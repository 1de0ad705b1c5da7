use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::field::check_dimensions;
use crate::*;

/// Everything needed to generate one field. Constraint positions outside the grid are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub rows: Coord,
    pub cols: Coord,
    pub mine_count: CellCount,
    /// Cells that must stay safe, unless also listed in `included_mines`.
    #[serde(default)]
    pub exclude_positions: Vec<Position>,
    /// Cells that must hold a mine.
    #[serde(default)]
    pub included_mines: Vec<Position>,
}

/// Constraint sets after bounds filtering, de-duplication and overlap resolution.
#[derive(Clone, Debug, Default)]
pub(crate) struct Constraints {
    pub forced_mines: HashSet<Position>,
    pub excluded: HashSet<Position>,
}

impl Constraints {
    pub fn is_free(&self, coords: Position) -> bool {
        !self.forced_mines.contains(&coords) && !self.excluded.contains(&coords)
    }
}

impl GenerationRequest {
    pub fn new(rows: Coord, cols: Coord, mine_count: CellCount) -> Self {
        Self {
            rows,
            cols,
            mine_count,
            exclude_positions: Vec::new(),
            included_mines: Vec::new(),
        }
    }

    pub fn exclude(mut self, coords: Position) -> Self {
        self.exclude_positions.push(coords);
        self
    }

    pub fn include_mine(mut self, coords: Position) -> Self {
        self.included_mines.push(coords);
        self
    }

    /// Excludes `coords` and all of its neighbors, so that revealing it first always opens a zero.
    pub fn exclude_around(mut self, coords: Position) -> Self {
        let size = self.size();
        if in_bounds(coords, size) {
            self.exclude_positions.push(coords);
            self.exclude_positions.extend(NeighborIter::new(coords, size));
        }
        self
    }

    pub const fn size(&self) -> Position {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Number of cells that may hold a mine: everything except cells excluded without also being forced.
    pub fn capacity(&self) -> CellCount {
        let excluded = self.constraints().excluded.len() as CellCount;
        self.total_cells().saturating_sub(excluded)
    }

    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> Result<Constraints> {
        check_dimensions(self.size())?;

        let constraints = self.constraints();
        let capacity = self.total_cells() - constraints.excluded.len() as CellCount;
        if self.mine_count > capacity {
            return Err(GenerationError::CapacityExceeded {
                requested: self.mine_count,
                capacity,
            });
        }

        Ok(constraints)
    }

    fn constraints(&self) -> Constraints {
        let size = self.size();
        let forced_mines: HashSet<Position> = self
            .included_mines
            .iter()
            .copied()
            .filter(|&coords| in_bounds(coords, size))
            .collect();
        let excluded = self
            .exclude_positions
            .iter()
            .copied()
            .filter(|&coords| in_bounds(coords, size))
            .filter(|coords| !forced_mines.contains(coords))
            .collect();

        Constraints {
            forced_mines,
            excluded,
        }
    }
}

/// Classic board presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl Difficulty {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        check_dimensions((rows, cols))?;
        let capacity = mult(rows, cols);
        if mines > capacity {
            return Err(GenerationError::CapacityExceeded {
                requested: mines,
                capacity,
            });
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn beginner() -> Self {
        Self {
            rows: 9,
            cols: 9,
            mines: 10,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            rows: 16,
            cols: 16,
            mines: 40,
        }
    }

    pub const fn expert() -> Self {
        Self {
            rows: 16,
            cols: 30,
            mines: 99,
        }
    }

    pub fn request(self) -> GenerationRequest {
        GenerationRequest::new(self.rows, self.cols, self.mines)
    }
}

impl From<Difficulty> for GenerationRequest {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.request()
    }
}
