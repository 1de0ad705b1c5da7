/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Zero-based `(row, col)` coordinates.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a `rows x cols` grid. Never overflows, both axes fit in `u16`.
pub const fn mult(rows: Coord, cols: Coord) -> CellCount {
    rows as CellCount * cols as CellCount
}

pub const fn in_bounds((row, col): Position, (rows, cols): Position) -> bool {
    row < rows && col < cols
}

/// Iterates the up-to-8 in-bounds neighbors of a cell in row-major order, never the cell itself.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Position,
    first_col: Coord,
    last: Position,
    next: Option<Position>,
}

impl NeighborIter {
    pub fn new(center: Position, (rows, cols): Position) -> Self {
        let (row, col) = center;
        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let next = match (rows.checked_sub(1), cols.checked_sub(1)) {
            (Some(max_row), Some(max_col)) => {
                let last = (
                    row.saturating_add(1).min(max_row),
                    col.saturating_add(1).min(max_col),
                );
                (first.0 <= last.0 && first.1 <= last.1).then_some((first, last))
            }
            _ => None,
        };

        Self {
            center,
            first_col: first.1,
            last: next.map_or(first, |(_, last)| last),
            next: next.map(|(first, _)| first),
        }
    }

    fn advance(&self, (row, col): Position) -> Option<Position> {
        if col < self.last.1 {
            Some((row, col + 1))
        } else if row < self.last.0 {
            Some((row + 1, self.first_col))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            self.next = self.advance(current);
            if current != self.center {
                return Some(current);
            }
        }
    }
}
