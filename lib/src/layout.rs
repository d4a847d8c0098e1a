use thiserror::Error;

use crate::models::{Board, Direction, PlacedWord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("board size must be a positive integer, got {0}")]
    InvalidBoardSize(usize),
}

/// Lays out a list of words on a square board, crossword style.
///
/// The first word goes in the middle of the board. Every following word must
/// share at least one letter with what is already placed and may not run
/// side by side with an existing word.
#[derive(Clone, Debug)]
pub struct BoardLayouter {
    board: Board,
}

impl BoardLayouter {
    pub fn new(board_size: usize) -> Result<Self, LayoutError> {
        if board_size == 0 {
            return Err(LayoutError::InvalidBoardSize(board_size));
        }

        Ok(Self {
            board: Board::new(board_size),
        })
    }

    /// Places as many of `words` as possible and returns the resulting board.
    ///
    /// Words are upper-cased and empty strings ignored. Words that cannot be
    /// placed are reported through [`Board::skipped_words`].
    pub fn layout_words<S: AsRef<str>>(mut self, words: &[S]) -> Board {
        let words: Vec<Vec<char>> = words
            .iter()
            .map(|w| w.as_ref().to_uppercase())
            .filter(|w| !w.is_empty())
            .map(|w| w.chars().collect())
            .collect();

        // A first word that does not fit anywhere is dropped and the next one
        // takes its place on a fresh board.
        let mut start = 0;
        while start < words.len() && !self.place_first_word(&words[start]) {
            self.board.skip(&to_string(&words[start]));
            self.board.clear();
            start += 1;
        }

        for word in words.iter().skip(start + 1) {
            if !self.place_connected_word(word) {
                self.board.skip(&to_string(word));
            }
        }

        self.board
    }

    fn place_first_word(&mut self, word: &[char]) -> bool {
        let size = self.board.size() as i64;
        let len = word.len() as i64;
        let center = size / 2;
        let offset = (size - len).div_euclid(2);

        let candidates = [
            (center, offset, Direction::Horizontal),
            (offset, center, Direction::Vertical),
            (0, 0, Direction::Horizontal),
            (0, 0, Direction::Vertical),
        ];

        for (row, col, direction) in candidates {
            if self.can_place(word, row, col, direction, true).is_some() {
                self.place(word, row, col, direction);
                return true;
            }
        }

        false
    }

    fn place_connected_word(&mut self, word: &[char]) -> bool {
        let size = self.board.size();

        for (index, letter) in word.iter().enumerate() {
            for row in 0..size {
                for col in 0..size {
                    if self.board.cell(row, col) != Some(*letter) {
                        continue;
                    }

                    let (r, c, i) = (row as i64, col as i64, index as i64);
                    let candidates = [
                        (r, c - i, Direction::Horizontal),
                        (r - i, c, Direction::Vertical),
                    ];

                    for (start_row, start_col, direction) in candidates {
                        if let Some(true) =
                            self.can_place(word, start_row, start_col, direction, false)
                        {
                            self.place(word, start_row, start_col, direction);
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Returns `None` when the word cannot go at `(row, col)`, otherwise
    /// whether the placement crosses at least one existing letter.
    fn can_place(
        &self,
        word: &[char],
        row: i64,
        col: i64,
        direction: Direction,
        first_word: bool,
    ) -> Option<bool> {
        if word.is_empty() {
            return None;
        }

        let last = word.len() as i64 - 1;
        let (end_row, end_col) = match direction {
            Direction::Horizontal => (row, col + last),
            Direction::Vertical => (row + last, col),
        };
        if !self.board.in_bounds(row, col) || !self.board.in_bounds(end_row, end_col) {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        let size = self.board.size();
        let mut connected = false;

        for (offset, letter) in word.iter().enumerate() {
            let (r, c) = direction.step(row, col, offset);

            match self.board.cell(r, c) {
                Some(existing) if existing == *letter => connected = true,
                Some(_) => return None,
                None if first_word => {}
                None => {
                    let touches_side = match direction {
                        Direction::Horizontal => {
                            (r > 0 && self.board.occupied(r - 1, c))
                                || (r + 1 < size && self.board.occupied(r + 1, c))
                        }
                        Direction::Vertical => {
                            (c > 0 && self.board.occupied(r, c - 1))
                                || (c + 1 < size && self.board.occupied(r, c + 1))
                        }
                    };
                    if touches_side {
                        return None;
                    }
                }
            }
        }

        if first_word {
            return Some(false);
        }

        connected.then_some(true)
    }

    fn place(&mut self, word: &[char], row: i64, col: i64, direction: Direction) {
        self.board.write(PlacedWord {
            word: to_string(word),
            row: row as usize,
            col: col as usize,
            direction,
        });
    }
}

/// Convenience wrapper: builds a layouter of `board_size` and lays out `words`.
pub fn create_layout<S: AsRef<str>>(words: &[S], board_size: usize) -> Result<Board, LayoutError> {
    Ok(BoardLayouter::new(board_size)?.layout_words(words))
}

fn to_string(word: &[char]) -> String {
    word.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(board: &Board) -> Vec<String> {
        board.to_grid('.')
    }

    #[test]
    fn zero_board_size_is_rejected() {
        // Act
        let result = BoardLayouter::new(0);

        // Assert
        assert_eq!(result.unwrap_err(), LayoutError::InvalidBoardSize(0));
    }

    #[test]
    fn no_words_returns_empty_board() {
        // Arrange
        let words: Vec<String> = vec![];

        // Act
        let board = create_layout(&words, 15).unwrap();

        // Assert
        assert!(board.is_empty());
        assert_eq!(board.size(), 15);
        assert!(board.placed_words().is_empty());
    }

    #[test]
    fn empty_strings_are_ignored() {
        // Act
        let board = create_layout(&["", ""], 5).unwrap();

        // Assert
        assert!(board.is_empty());
        assert!(board.skipped_words().is_empty());
    }

    #[test]
    fn first_word_is_centered_horizontally() {
        // Act
        let board = create_layout(&["hello"], 15).unwrap();

        // Assert
        let placed = &board.placed_words()[0];
        assert_eq!(placed.word, "HELLO");
        assert_eq!((placed.row, placed.col), (7, 5));
        assert_eq!(placed.direction, Direction::Horizontal);
        assert_eq!(grid(&board)[7], ".....HELLO.....");
    }

    #[test]
    fn first_word_filling_the_row_starts_at_column_zero() {
        // Act
        let board = create_layout(&["abcde"], 5).unwrap();

        // Assert
        assert_eq!(grid(&board)[2], "ABCDE");
    }

    #[test]
    fn first_word_longer_than_board_is_skipped() {
        // Act
        let board = create_layout(&["toolongword", "cat"], 5).unwrap();

        // Assert
        assert_eq!(board.skipped_words(), &["TOOLONGWORD".to_string()]);
        let placed = &board.placed_words()[0];
        assert_eq!(placed.word, "CAT");
        assert_eq!((placed.row, placed.col), (2, 1));
    }

    #[test]
    fn only_word_too_long_leaves_board_empty() {
        // Act
        let board = create_layout(&["longestwordpossibleforthisboardsize"], 15).unwrap();

        // Assert
        assert!(board.is_empty());
        assert_eq!(board.skipped_words().len(), 1);
    }

    #[test]
    fn second_word_crosses_first_vertically() {
        // Arrange
        let words = ["hello", "world"];

        // Act
        let board = create_layout(&words, 15).unwrap();

        // Assert
        // "WORLD" has no W on the board, so its first anchor is the O of HELLO.
        let placed = &board.placed_words()[1];
        assert_eq!(placed.word, "WORLD");
        assert_eq!(placed.direction, Direction::Vertical);
        assert_eq!((placed.row, placed.col), (6, 9));
        assert_eq!(board.cell(7, 9), Some('O'));
        assert_eq!(board.cell(6, 9), Some('W'));
        assert_eq!(board.cell(10, 9), Some('D'));
    }

    #[test]
    fn unconnected_word_is_skipped() {
        // Act
        let board = create_layout(&["abc", "xyz"], 7).unwrap();

        // Assert
        assert_eq!(board.placed_words().len(), 1);
        assert_eq!(board.skipped_words(), &["XYZ".to_string()]);
    }

    #[test]
    fn parallel_touching_placement_is_rejected() {
        // Arrange
        // CAT on row 2, ARE hangs down from its A. TEA cannot hang from the T
        // because its E would sit right next to the R.
        let words = ["cat", "are", "tea"];

        // Act
        let board = create_layout(&words, 5).unwrap();

        // Assert
        let tea = &board.placed_words()[2];
        assert_eq!(tea.direction, Direction::Horizontal);
        assert_eq!((tea.row, tea.col), (4, 1));
        assert_eq!(grid(&board), vec![".....", ".....", ".CAT.", "..R..", ".TEA."]);
    }

    #[test]
    fn single_letters_do_not_connect() {
        // Act
        let board = create_layout(&["A", "B", "C"], 5).unwrap();

        // Assert
        assert_eq!(grid(&board)[2], "..A..");
        assert_eq!(
            board.skipped_words(),
            &["B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn repeated_word_overlaps_itself() {
        // Act
        let board = create_layout(&["cat", "cat"], 5).unwrap();

        // Assert
        assert_eq!(board.placed_words().len(), 2);
        assert_eq!(board.placed_words()[0], board.placed_words()[1]);
        assert_eq!(grid(&board)[2], ".CAT.");
    }

    #[test]
    fn placed_words_always_match_the_board() {
        // Arrange
        let words = ["scrabble", "letter", "tile", "board", "score", "word", "play"];

        // Act
        let board = create_layout(&words, 25).unwrap();

        // Assert
        assert!(board.placed_words().len() > 1);
        for placed in board.placed_words() {
            for (offset, letter) in placed.word.chars().enumerate() {
                let (r, c) = placed.direction.step(placed.row, placed.col, offset);
                assert_eq!(board.cell(r, c), Some(letter));
            }
        }
    }

    #[test]
    fn display_uses_dots_for_empty_cells() {
        // Act
        let board = create_layout(&["hi"], 3).unwrap();

        // Assert
        assert_eq!(board.to_string(), ". . .\nH I .\n. . .\n");
    }
}
