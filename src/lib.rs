#![warn(missing_docs)]

//! # Word search puzzles
//!
//! A crate that generates word search puzzle grids. Each word is written into
//! the grid along a randomly chosen allowed direction, leftover cells are
//! filled with random letters, and the start/end coordinates of every placed
//! word are recorded so that an answer key can be rendered later.

pub mod export;

use std::{fmt::Display, ops::Index, str::FromStr};

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many random anchor cells are tried for a word before it is dropped
/// from the puzzle.
///
/// A word that fails every attempt is silently omitted: it gets no
/// [Placement] record and none of its letters are written to the grid.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// A concrete orientation a word is written in inside the grid.
///
/// A reversed variant spans the same cells as its base orientation; only the
/// writing order differs, so the word reads from the end of its span back to
/// the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right.
    Horizontal,

    /// Top to bottom.
    Vertical,

    /// Top-left to bottom-right.
    Diagonal,

    /// Right to left, spanning the same cells as [Direction::Horizontal].
    ReverseHorizontal,

    /// Bottom to top, spanning the same cells as [Direction::Vertical].
    ReverseVertical,

    /// Bottom-right to top-left, spanning the same cells as [Direction::Diagonal].
    ReverseDiagonal,
}

impl Direction {
    /// The per-letter step `(dx, dy)` of this orientation.
    ///
    /// Reversed variants step the same way as their base orientation; the
    /// reversal only affects the order the letters are written in.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Horizontal | Direction::ReverseHorizontal => (1, 0),
            Direction::Vertical | Direction::ReverseVertical => (0, 1),
            Direction::Diagonal | Direction::ReverseDiagonal => (1, 1),
        }
    }

    /// Whether the word is written back to front along its span.
    pub fn is_reversed(&self) -> bool {
        matches!(
            self,
            Direction::ReverseHorizontal
                | Direction::ReverseVertical
                | Direction::ReverseDiagonal
        )
    }
}

/// A direction label as it appears in a puzzle configuration.
///
/// Most labels name a single orientation. [DirectionLabel::Reverse] is a
/// shorthand that enables all three reversed orientations at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionLabel {
    /// Enables [Direction::Horizontal].
    Horizontal,

    /// Enables [Direction::Vertical].
    Vertical,

    /// Enables [Direction::Diagonal].
    Diagonal,

    /// Enables [Direction::ReverseHorizontal].
    ReverseHorizontal,

    /// Enables [Direction::ReverseVertical].
    ReverseVertical,

    /// Enables [Direction::ReverseDiagonal].
    ReverseDiagonal,

    /// Shorthand that enables all three reversed orientations.
    Reverse,
}

impl DirectionLabel {
    /// Expands a configured label list into the concrete list of orientations
    /// a word may be placed in.
    ///
    /// [DirectionLabel::Reverse] contributes all three reversed orientations;
    /// every other label contributes its one orientation. Duplicate labels
    /// contribute duplicate entries, which weights the random choice.
    pub fn expand(labels: &[DirectionLabel]) -> Vec<Direction> {
        let mut directions = Vec::with_capacity(labels.len());

        for label in labels {
            match label {
                DirectionLabel::Horizontal => directions.push(Direction::Horizontal),
                DirectionLabel::Vertical => directions.push(Direction::Vertical),
                DirectionLabel::Diagonal => directions.push(Direction::Diagonal),
                DirectionLabel::ReverseHorizontal => {
                    directions.push(Direction::ReverseHorizontal)
                }
                DirectionLabel::ReverseVertical => directions.push(Direction::ReverseVertical),
                DirectionLabel::ReverseDiagonal => directions.push(Direction::ReverseDiagonal),
                DirectionLabel::Reverse => directions.extend([
                    Direction::ReverseHorizontal,
                    Direction::ReverseVertical,
                    Direction::ReverseDiagonal,
                ]),
            }
        }

        directions
    }

    /// The canonical string form of the label, as accepted by the [FromStr] impl.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionLabel::Horizontal => "horizontal",
            DirectionLabel::Vertical => "vertical",
            DirectionLabel::Diagonal => "diagonal",
            DirectionLabel::ReverseHorizontal => "reverse-horizontal",
            DirectionLabel::ReverseVertical => "reverse-vertical",
            DirectionLabel::ReverseDiagonal => "reverse-diagonal",
            DirectionLabel::Reverse => "reverse",
        }
    }
}

impl Display for DirectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when a string is not a recognized direction label.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction label `{0}`")]
pub struct ParseDirectionError(String);

impl FromStr for DirectionLabel {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(DirectionLabel::Horizontal),
            "vertical" => Ok(DirectionLabel::Vertical),
            "diagonal" => Ok(DirectionLabel::Diagonal),
            "reverse-horizontal" => Ok(DirectionLabel::ReverseHorizontal),
            "reverse-vertical" => Ok(DirectionLabel::ReverseVertical),
            "reverse-diagonal" => Ok(DirectionLabel::ReverseDiagonal),
            "reverse" => Ok(DirectionLabel::Reverse),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// The configuration for a word search puzzle. See [`WordSearch::new`] for details.
///
/// [`WordSearch::new`]: struct.WordSearch.html#method.new
#[derive(Debug)]
pub struct WordSearchConfig<'a> {
    /// The grid width, in cells.
    pub width: usize,

    /// The grid height, in cells.
    pub height: usize,

    /// The words to hide in the grid, attempted in order. Blank or
    /// whitespace-only entries should be filtered out by the caller.
    pub words: &'a [String],

    /// The direction labels words may be placed in.
    pub directions: &'a [DirectionLabel],
}

/// Records where a placed word sits in the grid.
///
/// Coordinates are `(x, y)` pairs where `x` is the column and `y` the row,
/// both zero-based. `start` is the first cell of the span and `end` the last;
/// a word placed in a reversed orientation occupies the same span as its base
/// orientation and reads from `end` back to `start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed word, uppercased.
    pub word: String,

    /// The first cell of the word's span.
    pub start: (usize, usize),

    /// The last cell of the word's span.
    pub end: (usize, usize),
}

impl Placement {
    /// Returns every cell of the word's span in grid order, from `start` to
    /// `end`. The step vector is recovered from the two endpoints.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let dx = usize::from(self.end.0 > self.start.0);
        let dy = usize::from(self.end.1 > self.start.1);
        let len = (self.end.0 - self.start.0).max(self.end.1 - self.start.1) + 1;

        (0..len)
            .map(|i| (self.start.0 + i * dx, self.start.1 + i * dy))
            .collect()
    }
}

/// A generated word search: a fully filled letter grid and a list of
/// placements recording where each word ended up.
#[derive(Clone, Debug)]
pub struct WordSearch {
    grid: Array2D<char>,
    placements: Vec<Placement>,
}

impl WordSearch {
    /// Generates a new word search from the given configuration, drawing
    /// randomness from the thread-local generator.
    ///
    /// Words are attempted in input order. Each word is uppercased, assigned
    /// one orientation picked uniformly from the expanded direction list, and
    /// then tried at up to [PLACEMENT_ATTEMPTS] random anchor cells. An
    /// anchor is accepted when the word's whole span stays in bounds and
    /// every span cell is either still empty or already holds the exact
    /// letter the word would write there, so crossing words must agree at
    /// shared cells. A word that exhausts its attempts is silently omitted
    /// from both the grid and [WordSearch::placements].
    ///
    /// After all words are attempted, every remaining empty cell is filled
    /// with a random uppercase letter. Generation never fails: degenerate
    /// configurations (a word longer than both dimensions, an empty direction
    /// set, a zero-area grid) degrade to words being omitted.
    pub fn new(config: &WordSearchConfig) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Like [WordSearch::new], but drawing randomness from `rng`. Passing a
    /// seeded generator makes the output reproducible.
    pub fn with_rng<R: Rng>(config: &WordSearchConfig, rng: &mut R) -> Self {
        let mut cells: Array2D<Option<char>> =
            Array2D::filled_with(None, config.height, config.width);

        let directions = DirectionLabel::expand(config.directions);

        let mut placements = Vec::new();
        for word in config.words {
            let direction = match directions.choose(rng) {
                Some(&direction) => direction,
                None => break,
            };

            if let Some(placement) = Self::place_word(&mut cells, rng, word, direction) {
                placements.push(placement);
            }
        }

        let grid = Self::fill_gaps(&cells, rng);

        Self { grid, placements }
    }

    fn place_word<R: Rng>(
        cells: &mut Array2D<Option<char>>,
        rng: &mut R,
        word: &str,
        direction: Direction,
    ) -> Option<Placement> {
        let word = word.to_uppercase();

        let letters: Vec<char> = if direction.is_reversed() {
            word.chars().rev().collect()
        } else {
            word.chars().collect()
        };

        let width = cells.num_columns();
        let height = cells.num_rows();

        if letters.is_empty() || width == 0 || height == 0 {
            return None;
        }

        let (dx, dy) = direction.step();
        let len = letters.len();

        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);

            // The whole span has to stay inside the grid
            if x + len * dx > width || y + len * dy > height {
                continue;
            }

            let fits = letters
                .iter()
                .enumerate()
                .all(|(i, &letter)| match cells[(y + i * dy, x + i * dx)] {
                    None => true,
                    Some(existing) => existing == letter,
                });

            if fits {
                for (i, &letter) in letters.iter().enumerate() {
                    cells[(y + i * dy, x + i * dx)] = Some(letter);
                }

                return Some(Placement {
                    word,
                    start: (x, y),
                    end: (x + (len - 1) * dx, y + (len - 1) * dy),
                });
            }
        }

        None
    }

    fn fill_gaps<R: Rng>(cells: &Array2D<Option<char>>, rng: &mut R) -> Array2D<char> {
        let mut placed = cells.elements_row_major_iter();

        Array2D::filled_by_row_major(
            || match placed.next() {
                Some(Some(letter)) => *letter,
                _ => rng.gen_range('A'..='Z'),
            },
            cells.num_rows(),
            cells.num_columns(),
        )
    }

    /// The number of rows in the grid, i.e. the configured height.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the grid, i.e. the configured width.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Provides a reference to the letter grid. The grid is row major and is
    /// indexed by `(row, column)`.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the letter at column `x`, row `y`, returning [`Option::None`] if
    /// the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(y, x).copied()
    }

    /// The placement record of every word that made it into the grid, in word
    /// input order. Words that could not be placed have no record.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

impl Index<(usize, usize)> for WordSearch {
    type Output = char;

    /// Indexes the grid by `(x, y)`, i.e. `(column, row)`.
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.grid[(y, x)]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.placements.iter().map(|placement| placement.word.as_str());

        for row in self.grid.rows_iter() {
            for &ch in row {
                f.write_fmt(format_args!("{} ", ch))?;
            }

            f.write_fmt(format_args!("| {}\n", words_iter.next().unwrap_or("")))?;
        }

        Ok(())
    }
}
