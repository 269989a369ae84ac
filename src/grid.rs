// Copyright (c) 2026 rezky_nightky

/// Marker stored in cells that hold no glyph.
pub const BLANK: char = ' ';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u16,
    pub cols: u16,
}

impl Dimensions {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    pub fn area(self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Row-major character matrix sized to the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            rows: dims.rows,
            cols: dims.cols,
            cells: vec![BLANK; dims.area()],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [char] {
        &mut self.cells
    }

    /// Replaces the grid with a blank one when `dims` differs from the current
    /// size. Content is not carried over. Returns whether a reallocation
    /// happened.
    pub fn resize_if_changed(&mut self, dims: Dimensions) -> bool {
        if dims == self.dimensions() {
            return false;
        }
        *self = Grid::new(dims);
        true
    }
}

#[cfg(test)]
impl Grid {
    pub fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, row: u16, col: u16) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: u16, col: u16, ch: char) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = ch;
        }
    }

    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK)
    }
}
