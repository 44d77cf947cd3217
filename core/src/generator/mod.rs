use ndarray::Array2;

use crate::*;
pub use exact::*;
pub use scan::*;

mod exact;
mod scan;

/// Produces a mine mask of shape `(height, width)`, `true` marking a mine.
pub trait MineGenerator {
    fn generate(self, params: BoardParams) -> Array2<bool>;
}

impl<F> MineGenerator for F
where
    F: FnOnce(BoardParams) -> Array2<bool>,
{
    fn generate(self, params: BoardParams) -> Array2<bool> {
        self(params)
    }
}

impl Placement {
    /// Runs the generator matching this placement policy.
    pub fn generate(self, params: BoardParams, seed: u64) -> Array2<bool> {
        match self {
            Placement::Scan => ScanGenerator::new(seed).generate(params),
            Placement::Exact => ExactGenerator::new(seed).generate(params),
        }
    }
}

fn warn_on_mismatch(placed: usize, requested: CellCount) {
    if placed != usize::from(requested) {
        log::warn!(
            "Generated minefield count mismatch, actual: {}, requested: {}",
            placed,
            requested
        );
    }
}
