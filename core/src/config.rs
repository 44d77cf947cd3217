use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

/// How mines are scattered over a fresh board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Single row-major pass, each cell becomes a mine with probability
    /// `mines_remaining / total_cells`. May place fewer mines than requested.
    #[default]
    Scan,
    /// Exactly the requested number of mines, uniformly placed.
    Exact,
}

/// Which reveals advance the win counter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealCounting {
    /// Only empty cells count. Number cells are revealed but never counted,
    /// so the win condition is only reachable on boards without numbers.
    #[default]
    EmptyOnly,
    /// Every revealed safe cell counts.
    AllSafe,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardParams {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardParams {
    pub const fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    /// Rejects non-square, empty and overfull boards.
    pub fn validate(&self) -> Result<Self> {
        if self.width != self.height {
            return Err(GameError::NonSquareBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.width == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines {
                requested: self.mines,
                cells: self.total_cells(),
            });
        }
        Ok(*self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    pub beginner: BoardParams,
    pub intermediate: BoardParams,
    pub expert: BoardParams,
}

impl Presets {
    pub const fn get(&self, difficulty: Difficulty) -> BoardParams {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Expert => self.expert,
        }
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            beginner: BoardParams::new(9, 9, 10),
            intermediate: BoardParams::new(16, 16, 40),
            expert: BoardParams::new(24, 24, 99),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub presets: Presets,
    pub placement: Placement,
    pub counting: RevealCounting,
}

impl GameConfig {
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    /// Parameters of the selected difficulty.
    pub const fn params(&self) -> BoardParams {
        self.presets.get(self.difficulty)
    }
}
