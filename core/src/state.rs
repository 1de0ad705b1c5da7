use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell, tracked by the game layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Hidden = 0,
    Revealed = 1,
    Flagged = 2,
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hidden),
            1 => Ok(Self::Revealed),
            2 => Ok(Self::Flagged),
            other => Err(other),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameState {
    #[default]
    Ready = 0,
    Playing = 1,
    Won = 2,
    Lost = 3,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl TryFrom<u8> for GameState {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ready),
            1 => Ok(Self::Playing),
            2 => Ok(Self::Won),
            3 => Ok(Self::Lost),
            other => Err(other),
        }
    }
}
