use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const EMPTY_CELL: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Direction {
    /// Cell covered by the `offset`-th letter of a word starting at `(row, col)`.
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + offset),
            Direction::Vertical => (row + offset, col),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

// Square grid of letters. Words are stored upper-cased, one char per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<char>>,
    placed: Vec<PlacedWord>,
    skipped: Vec<String>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            placed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }

        self.cells[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    pub fn skipped_words(&self) -> &[String] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Renders every row as a string, using `empty` for unoccupied cells.
    pub fn to_grid(&self, empty: char) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or(empty)).collect())
            .collect()
    }

    pub(crate) fn occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    pub(crate) fn write(&mut self, placement: PlacedWord) {
        for (offset, letter) in placement.word.chars().enumerate() {
            let (row, col) = placement.direction.step(placement.row, placement.col, offset);
            self.cells[row * self.size + col] = Some(letter);
        }

        self.placed.push(placement);
    }

    pub(crate) fn skip(&mut self, word: &str) {
        self.skipped.push(word.to_owned());
    }

    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.placed.clear();
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|c| c.unwrap_or(EMPTY_CELL).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
