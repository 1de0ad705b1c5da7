use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Raw integer used for mine cells in the row-major integer encoding.
pub const MINE_SENTINEL: i8 = -1;

/// Hidden content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldCell {
    Mine,
    /// Number of mines among the up-to-8 neighbors, `0..=8`.
    Count(u8),
}

impl FieldCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }

    pub const fn to_raw(self) -> i8 {
        match self {
            Self::Mine => MINE_SENTINEL,
            Self::Count(count) => count as i8,
        }
    }
}

impl Default for FieldCell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Fully computed minefield: every cell is a mine or its adjacent-mine count.
///
/// Deserialized fields are rebuilt from their mine layout and rejected if the stored counts disagree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    cells: Array2<FieldCell>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct RawField {
    cells: Array2<FieldCell>,
    mine_count: CellCount,
}

impl TryFrom<RawField> for Field {
    type Error = GenerationError;

    fn try_from(raw: RawField) -> Result<Self> {
        let field = Self::from_mine_mask(&raw.cells.map(|cell| cell.is_mine()))?;
        if field.cells != raw.cells || field.mine_count != raw.mine_count {
            return Err(GenerationError::InconsistentField);
        }
        Ok(field)
    }
}

impl Field {
    /// Builds the field for a mine mask, filling in neighbor counts for every safe cell.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => return Err(GenerationError::InvalidDimensions { rows, cols }),
        };
        check_dimensions(size)?;

        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                mine_count += 1;
                return FieldCell::Mine;
            }
            // both indices are below `size`, which fits in `Coord`
            let count = NeighborIter::new((row as Coord, col as Coord), size)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            FieldCell::Count(count as u8)
        });

        Ok(Self { cells, mine_count })
    }

    /// Builds a field from an explicit mine list. Unlike generation constraints, positions outside the grid are
    /// rejected here.
    pub fn from_mine_coords(size: Position, mine_coords: &[Position]) -> Result<Self> {
        check_dimensions(size)?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GenerationError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn rows(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cols(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn size(&self) -> Position {
        (self.rows(), self.cols())
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn cell(&self, coords: Position) -> Option<FieldCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn is_mine(&self, coords: Position) -> bool {
        self.cell(coords).is_some_and(FieldCell::is_mine)
    }

    pub fn cells(&self) -> ArrayView2<'_, FieldCell> {
        self.cells.view()
    }

    /// Positions of every mine, in row-major order.
    pub fn mines(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn iter_neighbors(&self, coords: Position) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Row-major integer grid using [`MINE_SENTINEL`] for mines.
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells
            .outer_iter()
            .map(|row| row.iter().map(|cell| cell.to_raw()).collect())
            .collect()
    }
}

impl Index<Position> for Field {
    type Output = FieldCell;

    fn index(&self, coords: Position) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

pub(crate) fn check_dimensions((rows, cols): Position) -> Result<()> {
    if rows == 0 || cols == 0 {
        Err(GenerationError::InvalidDimensions {
            rows: rows.into(),
            cols: cols.into(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn center_mine_surrounded_by_ones() {
        let field = Field::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(field[(1, 1)], FieldCell::Mine);
        assert_eq!(field.mine_count(), 1);
        assert_eq!(
            field.to_rows(),
            vec![vec![1, 1, 1], vec![1, -1, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn counts_clip_at_edges() {
        let field = Field::from_mine_coords((2, 4), &[(0, 0), (1, 3)]).unwrap();

        assert_eq!(field.to_rows(), vec![vec![-1, 1, 1, 1], vec![1, 1, 1, -1]]);
        assert_eq!(field.safe_cell_count(), 6);
    }

    #[test]
    fn duplicate_mines_count_once() {
        let field = Field::from_mine_coords((2, 2), &[(0, 1), (0, 1)]).unwrap();

        assert_eq!(field.mine_count(), 1);
        assert_eq!(field.mines().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn rejects_out_of_bounds_and_empty_shapes() {
        assert_eq!(
            Field::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GenerationError::InvalidCoords)
        );
        assert_eq!(
            Field::from_mine_coords((0, 3), &[]),
            Err(GenerationError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn lookups_outside_grid_are_none() {
        let field = Field::from_mine_coords((1, 2), &[(0, 0)]).unwrap();

        assert_eq!(field.cell((0, 1)), Some(FieldCell::Count(1)));
        assert_eq!(field.cell((1, 0)), None);
        assert!(!field.is_mine((5, 5)));
        assert_eq!(field.size(), (1, 2));
    }

    #[test]
    fn oversized_mask_is_rejected() {
        let mut mask: Array2<bool> = Array2::default([1, 65537]);
        mask[[0, 0]] = true;

        assert_eq!(
            Field::from_mine_mask(&mask),
            Err(GenerationError::InvalidDimensions {
                rows: 1,
                cols: 65537
            })
        );
    }

    #[test]
    fn widest_mask_keeps_its_shape() {
        let mut mask: Array2<bool> = Array2::default([1, 65535]);
        mask[[0, 0]] = true;

        let field = Field::from_mine_mask(&mask).unwrap();

        assert_eq!(field.size(), (1, 65535));
        assert_eq!(field[(0, 1)], FieldCell::Count(1));
        assert_eq!(field[(0, 65534)], FieldCell::Count(0));
    }

    #[test]
    fn empty_mask_is_rejected() {
        let mask: Array2<bool> = Array2::default([0, 3]);

        assert_eq!(
            Field::from_mine_mask(&mask),
            Err(GenerationError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn deserializing_mismatched_mine_count_fails() {
        let field = Field::from_mine_coords((1, 2), &[]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        let tampered = json.replace(r#""mine_count":0"#, r#""mine_count":9"#);
        assert_ne!(json, tampered);

        assert!(serde_json::from_str::<Field>(&tampered).is_err());
    }

    #[test]
    fn deserializing_wrong_neighbor_count_fails() {
        let field = Field::from_mine_coords((1, 3), &[(0, 0)]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        let tampered = json.replacen(r#"{"Count":0}"#, r#"{"Count":7}"#, 1);
        assert_ne!(json, tampered);

        assert!(serde_json::from_str::<Field>(&tampered).is_err());
    }

    #[test]
    fn serializes_through_serde() {
        let field = Field::from_mine_coords((2, 2), &[(1, 0)]).unwrap();

        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();

        assert_eq!(back, field);
    }
}
