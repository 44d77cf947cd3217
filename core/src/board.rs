use alloc::vec::Vec;
use core::num::Saturating;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of revealing a cell. Hitting a mine is an ordinary outcome, not an
/// error.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

/// Square grid of cells with its mine layout fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    counting: RevealCounting,
}

impl Board {
    /// Builds a board with an OS-seeded [`ScanGenerator`].
    #[cfg(feature = "std")]
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::with_seed(width, height, mines, rand::random())
    }

    pub fn with_seed(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Self::generate(
            BoardParams::new(width, height, mines),
            ScanGenerator::new(seed),
        )
    }

    pub fn generate(params: BoardParams, generator: impl MineGenerator) -> Result<Self> {
        let params = params.validate()?;
        Ok(Self::from_mine_mask(generator.generate(params)))
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let params = BoardParams::new(size.0, size.1, 0).validate()?;
        let mut mine_mask: Array2<bool> = Array2::default(params.size().to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Computes adjacency for every safe cell of `mine_mask`.
    fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[[row, col]] {
                return Cell::new(CellKind::Mine);
            }
            let coords = (col as Coord, row as Coord);
            let adjacent = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::new(CellKind::from_adjacent(adjacent as u8))
        });
        let mine_count = mine_mask.iter().filter(|&&mine| mine).count() as CellCount;
        log::debug!(
            "Board {:?} built with {} mines",
            mine_mask.dim(),
            mine_count
        );

        Self {
            cells,
            mine_count,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            counting: RevealCounting::default(),
        }
    }

    pub fn with_counting(self, counting: RevealCounting) -> Self {
        Self { counting, ..self }
    }

    pub fn counting(&self) -> RevealCounting {
        self.counting
    }

    /// Read-only live grid indexed `[row, col]`.
    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// Player-visible copy of the grid, indexed `[row, col]`.
    pub fn view(&self) -> Array2<VisibleCell> {
        self.cells.map(Cell::visible)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    /// Mines actually placed, which can be fewer than requested.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_cells(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match cell.state {
            Hidden => {
                cell.state = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                cell.state = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Reveals a hidden cell, flooding through connected empty cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if !self[coords].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        let mut hit_mine = false;
        let mut to_visit = Vec::from([coords]);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            // already processed, or flagged
            if !cell.is_hidden() {
                continue;
            }

            cell.state = CellState::Revealed;
            match cell.kind() {
                CellKind::Mine => {
                    log::debug!("Mine hit at {:?}", visit_coords);
                    hit_mine = true;
                }
                CellKind::Number(count) => {
                    if self.counting == RevealCounting::AllSafe {
                        self.revealed_count += 1;
                    }
                    log::trace!("Revealed number {} at {:?}", count, visit_coords);
                }
                CellKind::Empty => {
                    self.revealed_count += 1;
                    log::trace!("Flood opened cell at {:?}", visit_coords);
                    let cells = &self.cells;
                    to_visit.extend(
                        cells
                            .iter_neighbors(visit_coords)
                            .filter(|&pos| cells[pos.to_nd_index()].is_hidden()),
                    );
                }
            }
        }

        if hit_mine {
            self.reveal_all_mines();
            Ok(RevealOutcome::HitMine)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Reveals every mine on the board. Idempotent.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.kind().is_mine() {
                cell.state = CellState::Revealed;
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords((size, size), mines).unwrap()
    }

    #[test]
    fn adjacency_counts_clamped_neighbors() {
        let board = board(3, &[(0, 0), (2, 0)]);

        assert_eq!(board[(0, 0)].kind(), CellKind::Mine);
        assert_eq!(board[(1, 0)].kind(), CellKind::Number(2));
        assert_eq!(board[(1, 1)].kind(), CellKind::Number(2));
        assert_eq!(board[(0, 1)].kind(), CellKind::Number(1));
        assert_eq!(board[(1, 2)].kind(), CellKind::Empty);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_range() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn number_reveal_does_not_cascade_or_count() {
        let mut board = board(3, &[(0, 0)]);

        assert_eq!(board.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(board[(1, 1)].state(), CellState::Revealed);
        assert_eq!(board[(2, 2)].state(), CellState::Hidden);
        assert_eq!(board.revealed_cells(), 0);
    }

    #[test]
    fn all_safe_counting_counts_numbers() {
        let mut board = board(3, &[(0, 0)]).with_counting(RevealCounting::AllSafe);

        board.reveal((1, 1)).unwrap();

        assert_eq!(board.revealed_cells(), 1);
    }

    #[test]
    fn mine_hit_reveals_every_mine() {
        let mut board = board(3, &[(0, 0), (2, 2)]);

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(board[(2, 2)].state(), CellState::Revealed);
        assert_eq!(board[(1, 1)].state(), CellState::Hidden);
        assert_eq!(board.revealed_cells(), 0);
    }

    #[test]
    fn flag_toggle_is_its_own_inverse() {
        let mut board = board(2, &[]);

        assert_eq!(board.toggle_flag((1, 0)).unwrap(), MarkOutcome::Changed);
        assert_eq!(board[(1, 0)].state(), CellState::Flagged);
        assert_eq!(board.flagged_count(), 1);
        assert_eq!(board.toggle_flag((1, 0)).unwrap(), MarkOutcome::Changed);
        assert_eq!(board[(1, 0)].state(), CellState::Hidden);
        assert_eq!(board.flagged_count(), 0);
    }

    #[test]
    fn cascade_stops_at_flags() {
        let mut board = board(3, &[]);
        board.toggle_flag((2, 2)).unwrap();

        board.reveal((0, 0)).unwrap();

        assert_eq!(board[(2, 2)].state(), CellState::Flagged);
        assert_eq!(board.revealed_cells(), 8);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut board = board(2, &[]);

        assert_eq!(board.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.toggle_flag((0, 5)), Err(GameError::InvalidCoords));
        assert_eq!(board.cell_at((9, 9)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn non_square_board_fails() {
        assert_eq!(
            Board::with_seed(3, 4, 1, 0),
            Err(GameError::NonSquareBoard {
                width: 3,
                height: 4
            })
        );
    }
}
