//! Sliding tile puzzle
//!
//! An R x C grid with one empty slot. A tile slides into the empty slot when
//! it is orthogonally adjacent. Shuffling is a random walk of legal slides
//! that never undoes the previous step, so the board always stays solvable.

use rand::Rng;
use smallvec::SmallVec;

use crate::maze::Direction;

/// Slides performed by [`SlidingPuzzle::shuffle`].
const SHUFFLE_STEPS: usize = 100;

#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    rows: usize,
    cols: usize,
    /// `tiles[slot]` is the tile id whose home is slot `tiles[slot]`.
    tiles: Vec<usize>,
    empty: usize,
    moves: u32,
}

impl SlidingPuzzle {
    /// A solved board; the empty slot sits in the bottom-right corner.
    pub fn new(rows: usize, cols: usize) -> Self {
        let total = rows * cols;
        Self {
            rows,
            cols,
            tiles: (0..total).collect(),
            empty: total - 1,
            moves: 0,
        }
    }

    /// Whether the tile at `slot` is adjacent to the empty slot.
    pub fn can_move(&self, slot: usize) -> bool {
        if slot >= self.tiles.len() || slot == self.empty {
            return false;
        }
        let (row, col) = (slot / self.cols, slot % self.cols);
        let (empty_row, empty_col) = (self.empty / self.cols, self.empty % self.cols);
        let row_diff = row.abs_diff(empty_row);
        let col_diff = col.abs_diff(empty_col);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }

    /// Slide the tile at `slot` into the empty slot. Counts the move only
    /// when it is legal.
    pub fn slide(&mut self, slot: usize) -> bool {
        if !self.can_move(slot) {
            return false;
        }
        self.tiles.swap(slot, self.empty);
        self.empty = slot;
        self.moves += 1;
        true
    }

    /// Keyboard semantics: an arrow key slides the tile on the opposite side
    /// of the empty slot in the pressed direction (up slides the tile below
    /// the empty slot upward).
    pub fn slide_toward(&mut self, direction: Direction) -> bool {
        let (empty_row, empty_col) = (self.empty / self.cols, self.empty % self.cols);
        let slot = match direction {
            Direction::Up if empty_row < self.rows - 1 => self.empty + self.cols,
            Direction::Down if empty_row > 0 => self.empty - self.cols,
            Direction::Left if empty_col < self.cols - 1 => self.empty + 1,
            Direction::Right if empty_col > 0 => self.empty - 1,
            _ => return false,
        };
        self.slide(slot)
    }

    /// Random-walk shuffle that keeps the board solvable. Resets the move
    /// counter.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        let mut last_filled = usize::MAX;
        for _ in 0..SHUFFLE_STEPS {
            let candidates: SmallVec<[usize; 4]> = (0..self.tiles.len())
                .filter(|&slot| self.can_move(slot) && slot != last_filled)
                .collect();
            if candidates.is_empty() {
                continue;
            }
            let slot = candidates[rng.gen_range(0..candidates.len())];
            // The slid tile lands where the empty slot was; moving it back
            // would undo this step.
            last_filled = self.empty;
            self.tiles.swap(slot, self.empty);
            self.empty = slot;
        }
        self.moves = 0;
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(slot, &tile)| slot == tile)
    }

    /// Tile ids by slot; the id equal to `rows * cols - 1` is the empty slot.
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    pub fn empty_slot(&self) -> usize {
        self.empty
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_board_is_solved() {
        let puzzle = SlidingPuzzle::new(3, 3);
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.empty_slot(), 8);
    }

    #[test]
    fn only_adjacent_tiles_move() {
        let puzzle = SlidingPuzzle::new(3, 3);
        // Empty is slot 8; its neighbors are 5 (above) and 7 (left).
        assert!(puzzle.can_move(5));
        assert!(puzzle.can_move(7));
        assert!(!puzzle.can_move(4));
        assert!(!puzzle.can_move(0));
        assert!(!puzzle.can_move(8));
    }

    #[test]
    fn sliding_swaps_and_counts() {
        let mut puzzle = SlidingPuzzle::new(3, 3);
        assert!(puzzle.slide(5));
        assert_eq!(puzzle.empty_slot(), 5);
        assert_eq!(puzzle.tiles()[8], 5);
        assert_eq!(puzzle.moves(), 1);

        assert!(!puzzle.slide(0));
        assert_eq!(puzzle.moves(), 1);
    }

    #[test]
    fn arrow_keys_slide_the_opposite_tile() {
        let mut puzzle = SlidingPuzzle::new(3, 3);
        // Empty at 8 (bottom-right): only down (tile 5) and right (tile 7)
        // have a tile on the opposite side.
        assert!(!puzzle.slide_toward(Direction::Up));
        assert!(!puzzle.slide_toward(Direction::Left));

        assert!(puzzle.slide_toward(Direction::Down));
        assert_eq!(puzzle.empty_slot(), 5);

        assert!(puzzle.slide_toward(Direction::Up));
        assert_eq!(puzzle.empty_slot(), 8);
    }

    #[test]
    fn shuffle_scrambles_and_stays_solvable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut puzzle = SlidingPuzzle::new(3, 3);
        puzzle.shuffle(&mut rng);

        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.moves(), 0);

        // Solvability invariant for odd-width boards: the tile permutation
        // (blank excluded) keeps an even inversion count.
        let tiles = puzzle.tiles();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] != 8 && tiles[j] != 8 && tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        assert_eq!(inversions % 2, 0);
    }

    #[test]
    fn shuffled_board_can_be_solved_by_replaying_backwards() {
        // Record a short scramble manually, then undo it in reverse.
        let mut puzzle = SlidingPuzzle::new(3, 3);
        let scramble = [5, 4, 7, 8];
        let mut undo = Vec::new();
        for &slot in &scramble {
            let from = puzzle.empty_slot();
            assert!(puzzle.slide(slot));
            undo.push(from);
        }
        for &slot in undo.iter().rev() {
            assert!(puzzle.slide(slot));
        }
        assert!(puzzle.is_solved());
    }
}
