use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid dimensions {rows}x{cols}, both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Too many mines, requested {requested} but only {capacity} cells are available")]
    CapacityExceeded {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Field contents do not match their mine layout")]
    InconsistentField,
}

pub type Result<T> = core::result::Result<T, GenerationError>;
