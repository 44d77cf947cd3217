use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed once the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell touching `1..=8` mines.
    Number(u8),
    Empty,
}

impl CellKind {
    /// Classifies a safe cell by its adjacent mine count.
    pub const fn from_adjacent(adjacent: u8) -> Self {
        match adjacent {
            0 => Self::Empty,
            n => Self::Number(n),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count for safe cells, `None` for mines.
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Number(n) => Some(n),
            Self::Empty => Some(0),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    pub(crate) state: CellState,
}

impl Cell {
    pub(crate) const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            state: CellState::Hidden,
        }
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.state, CellState::Hidden)
    }

    /// Player-visible projection: the kind only shows once revealed.
    pub const fn visible(&self) -> VisibleCell {
        match (self.state, self.kind) {
            (CellState::Hidden, _) => VisibleCell::Hidden,
            (CellState::Flagged, _) => VisibleCell::Flagged,
            (CellState::Revealed, CellKind::Mine) => VisibleCell::Mine,
            (CellState::Revealed, CellKind::Number(n)) => VisibleCell::Number(n),
            (CellState::Revealed, CellKind::Empty) => VisibleCell::Empty,
        }
    }
}

/// Canonical player-visible state, safe to hand to renderers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Hidden,
    Flagged,
    Mine,
    Number(u8),
    Empty,
}

impl VisibleCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_hidden() {
        assert_eq!(CellState::default(), CellState::Hidden);
        assert_eq!(VisibleCell::default(), VisibleCell::Hidden);
    }

    #[test]
    fn hidden_and_flagged_cells_hide_their_kind() {
        let mut cell = Cell::new(CellKind::Mine);
        assert_eq!(cell.visible(), VisibleCell::Hidden);

        cell.state = CellState::Flagged;
        assert_eq!(cell.visible(), VisibleCell::Flagged);

        cell.state = CellState::Revealed;
        assert_eq!(cell.visible(), VisibleCell::Mine);
    }

    #[test]
    fn zero_adjacent_is_empty() {
        assert_eq!(CellKind::from_adjacent(0), CellKind::Empty);
        assert_eq!(CellKind::from_adjacent(3), CellKind::Number(3));
        assert_eq!(CellKind::Empty.value(), Some(0));
        assert_eq!(CellKind::Mine.value(), None);
    }
}
