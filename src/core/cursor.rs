//! Cursor position reported by focused components.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub row: usize,
    pub col: usize,
}

impl CursorPos {
    /// Shifts a position reported by a child into its parent's coordinates.
    pub fn offset(self, rows: usize, cols: usize) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CursorPos;

    #[test]
    fn offset_moves_both_axes() {
        let pos = CursorPos { row: 0, col: 3 }.offset(2, 4);
        assert_eq!(pos, CursorPos { row: 2, col: 7 });
    }
}
