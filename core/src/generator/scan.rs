use super::*;

/// Single forward pass over the board in row-major order.
///
/// Each cell becomes a mine with probability `mines_remaining / total_cells`.
/// The denominator never shrinks, so the pass usually ends with fewer mines
/// than requested; callers that need an exact count use [`ExactGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScanGenerator {
    seed: u64,
}

impl ScanGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ScanGenerator {
    fn generate(self, params: BoardParams) -> Array2<bool> {
        use rand::prelude::*;

        let total_cells = params.total_cells();
        let mut mines: Array2<bool> = Array2::default(params.size().to_nd_index());
        if total_cells == 0 {
            return mines;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_remaining = params.mines.min(total_cells);
        for cell in mines.iter_mut() {
            if mines_remaining == 0 {
                break;
            }
            if rng.random_ratio(mines_remaining.into(), total_cells.into()) {
                *cell = true;
                mines_remaining -= 1;
            }
        }

        let placed = mines.iter().filter(|&&mine| mine).count();
        warn_on_mismatch(placed, params.mines);
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let params = BoardParams::new(9, 9, 10);
        assert_eq!(
            ScanGenerator::new(7).generate(params),
            ScanGenerator::new(7).generate(params)
        );
    }

    #[test]
    fn never_places_more_than_requested() {
        let params = BoardParams::new(8, 8, 20);
        for seed in 0..50 {
            let placed = ScanGenerator::new(seed)
                .generate(params)
                .iter()
                .filter(|&&mine| mine)
                .count();
            assert!(placed <= 20);
        }
    }

    #[test]
    fn zero_mines_places_nothing() {
        let mines = ScanGenerator::new(1).generate(BoardParams::new(4, 4, 0));
        assert_eq!(mines.dim(), (4, 4));
        assert!(mines.iter().all(|&mine| !mine));
    }

    #[test]
    fn first_cell_is_certain_on_full_board() {
        // the first cell always fires while mines_remaining == total_cells
        let mines = ScanGenerator::new(3).generate(BoardParams::new(3, 3, 9));
        assert!(mines[[0, 0]]);
    }
}
