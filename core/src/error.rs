use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be square, got {width}x{height}")]
    NonSquareBoard { width: Coord, height: Coord },
    #[error("Board dimensions must be non-zero")]
    EmptyBoard,
    #[error("Too many mines, requested {requested} but only {cells} cells")]
    TooManyMines {
        requested: CellCount,
        cells: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
