use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from start to finish: a board plus the win/loss state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameManager {
    board: Board,
    mines: CellCount,
    state: GameState,
}

impl GameManager {
    /// Starts a game for the selected difficulty with an OS-provided seed.
    #[cfg(feature = "std")]
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self> {
        let params = config.params().validate()?;
        log::debug!(
            "New {:?} game {:?}, placement {:?}, counting {:?}, seed {}",
            config.difficulty,
            params,
            config.placement,
            config.counting,
            seed
        );
        let generator = |params: BoardParams| config.placement.generate(params, seed);
        let board = Board::generate(params, generator)?.with_counting(config.counting);

        Ok(Self {
            board,
            mines: params.mines,
            state: GameState::Playing,
        })
    }

    /// Wraps a prebuilt board, winning once every safe cell is counted.
    pub fn from_board(board: Board) -> Self {
        let mines = board.mine_count();
        Self {
            board,
            mines,
            state: GameState::Playing,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mine count the win condition is computed against.
    pub fn total_mines(&self) -> CellCount {
        self.mines
    }

    pub fn mines_left(&self) -> isize {
        (self.mines as isize) - (self.board.flagged_count() as isize)
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.state.is_playing() {
            return Ok(MarkOutcome::NoChange);
        }

        self.board.toggle_flag(coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.state.is_playing() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = self.board.reveal(coords)?;
        match outcome {
            RevealOutcome::HitMine => self.end_game(false),
            RevealOutcome::Revealed | RevealOutcome::NoChange => {
                if self.board.revealed_cells() == self.total_revealable() {
                    self.end_game(true);
                }
            }
        }

        Ok(outcome)
    }

    /// Counter value that wins the game.
    ///
    /// Counting only empty cells measures against the configured mine count.
    /// Counting every safe cell measures against the mines actually placed,
    /// since a scan placement can leave fewer mines than configured.
    pub fn total_revealable(&self) -> CellCount {
        let mines = match self.board.counting() {
            RevealCounting::EmptyOnly => self.mines,
            RevealCounting::AllSafe => self.board.mine_count(),
        };
        self.board.total_cells().saturating_sub(mines)
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::info!("Game ended: {:?}", self.state);
    }
}
