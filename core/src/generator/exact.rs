use super::*;

/// Uniform placement of exactly the requested number of mines.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactGenerator {
    seed: u64,
}

impl ExactGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for ExactGenerator {
    fn generate(self, params: BoardParams) -> Array2<bool> {
        use rand::prelude::*;

        let total_cells = params.total_cells();

        // optimize for full boards
        if params.mines >= total_cells {
            if params.mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    params.mines,
                    total_cells
                );
            }
            return Array2::from_elem(params.size().to_nd_index(), true);
        }

        let mut mines: Array2<bool> = Array2::default(params.size().to_nd_index());
        let mut free_cells = total_cells;
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines_placed < params.mines {
            if free_cells == 0 {
                break;
            }
            // pick the n-th free cell, skipping the ones already mined
            let mut place = usize::from(rng.random_range(0..free_cells));
            for (i, cell) in mines.iter_mut().enumerate() {
                if *cell {
                    place += 1;
                }
                if i == place {
                    *cell = true;
                    mines_placed += 1;
                    free_cells -= 1;
                    break;
                }
            }
        }

        // double check mine count
        let placed = mines.iter().filter(|&&mine| mine).count();
        warn_on_mismatch(placed, params.mines);
        mines
    }
}
