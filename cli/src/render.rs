use sweeper_core::{Board, VisibleCell};

fn glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Hidden => '.',
        VisibleCell::Flagged => 'F',
        VisibleCell::Mine => '*',
        VisibleCell::Number(n) => char::from_digit(n.into(), 10).unwrap_or('?'),
        VisibleCell::Empty => ' ',
    }
}

/// Text grid with `x` labels across the top and `y` labels down the side.
pub(crate) fn render(board: &Board) -> String {
    let view = board.view();
    let (width, _) = board.size();

    let header: String = (0..width).map(|x| format!("{x:>3}")).collect();
    let mut out = format!("    {header}\n");

    for (y, row) in view.rows().into_iter().enumerate() {
        let cells: String = row.iter().map(|&cell| format!("{:>3}", glyph(cell))).collect();
        out.push_str(&format!("{y:>3} {cells}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_visible_state_only() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        board.toggle_flag((0, 0)).unwrap();
        board.reveal((1, 1)).unwrap();

        let text = render(&board);

        assert_eq!(text, "      0  1\n  0   F  .\n  1   .  1\n");
    }

    #[test]
    fn revealed_mine_and_empty_cells() {
        let mut board = Board::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        board.reveal((0, 0)).unwrap();
        board.reveal_all_mines();

        let text = render(&board);
        let last = text.lines().last().unwrap();

        assert_eq!(last, "  2      1  *");
    }

    #[test]
    fn wide_boards_keep_columns_aligned() {
        let board = Board::from_mine_coords((11, 11), &[]).unwrap();

        let text = render(&board);
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.ends_with("  9 10"));
        for line in lines {
            assert_eq!(line.len(), header.len());
        }
    }
}
