use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Converts `(x, y)` coordinates into an ndarray `[row, col]` index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Cell count of a `width` by `height` grid. Fits, since `255 * 255 < u16::MAX`.
pub const fn mult(width: Coord, height: Coord) -> CellCount {
    width as CellCount * height as CellCount
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(cols).unwrap_or(Coord::MAX),
            Coord::try_from(rows).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(coords, bounds)
    }
}

/// Walks the up-to-3x3 block around a cell row by row, clamped to the grid,
/// skipping the cell itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    min_x: Coord,
    max: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let (width, height) = bounds;
        let min = (x.saturating_sub(1), y.saturating_sub(1));
        let max = (
            x.saturating_add(1).min(width.saturating_sub(1)),
            y.saturating_add(1).min(height.saturating_sub(1)),
        );
        let in_grid = width > 0 && height > 0 && min.0 <= max.0 && min.1 <= max.1;

        Self {
            center,
            min_x: min.0,
            max,
            cursor: in_grid.then_some(min),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((x, y)) = self.cursor {
            self.cursor = if x < self.max.0 {
                Some((x + 1, y))
            } else if y < self.max.1 {
                Some((self.min_x, y + 1))
            } else {
                None
            };

            if (x, y) != self.center {
                return Some((x, y));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (3, 3)).count(), 3);
        assert_eq!(NeighborIter::new((2, 2), (3, 3)).count(), 3);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(NeighborIter::new((1, 0), (3, 3)).count(), 5);
        assert_eq!(NeighborIter::new((0, 1), (3, 3)).count(), 5);
    }

    #[test]
    fn interior_skips_center() {
        let mut count = 0;
        for pos in NeighborIter::new((1, 1), (3, 3)) {
            assert_ne!(pos, (1, 1));
            count += 1;
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn neighbors_come_row_by_row() {
        let all: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(
            all,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn empty_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (0, 0)).next(), None);
    }

    #[test]
    fn largest_grid_cell_count() {
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((2, 5).to_nd_index(), [5, 2]);
    }
}
