//! Grid maze with a single goal cell
//!
//! Boards parse from a text template: `#` wall, `.` path, `S` start, `G`
//! goal. Movement is four-directional; walls and bounds block, reaching the
//! goal wins. The default board is the 13x11 layout the experience ships
//! with.

use thiserror::Error;

/// Cardinal movement direction. Shared with the sliding puzzle's keyboard
/// handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of one movement attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Bounds or a wall stopped the move; position unchanged.
    Blocked,
    Moved,
    ReachedGoal,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze template is empty")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized cell {found:?} at ({x}, {y})")]
    UnknownCell { found: char, x: usize, y: usize },

    #[error("template must contain exactly one start (S) and one goal (G)")]
    MissingMarkers,
}

/// The default 13x11 board.
const DEFAULT_TEMPLATE: &str = "\
#############
#S..........#
#.#####.###.#
#.#...#.#.#.#
#.#.#####.###
#.......#...#
###.#######.#
#...#.......#
#.###.#####.#
#.........#G#
#############";

#[derive(Clone, Debug)]
pub struct Maze {
    walls: Vec<bool>,
    width: usize,
    height: usize,
    start: (usize, usize),
    goal: (usize, usize),
    player: (usize, usize),
}

impl Maze {
    /// Parse a board from its text template.
    pub fn parse(template: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = template.lines().filter(|l| !l.is_empty()).collect();
        if rows.is_empty() {
            return Err(MazeError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = Vec::with_capacity(width * height);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, cell) in row.chars().enumerate() {
                match cell {
                    '#' => walls.push(true),
                    '.' => walls.push(false),
                    'S' => {
                        walls.push(false);
                        start = Some((x, y));
                    }
                    'G' => {
                        walls.push(false);
                        goal = Some((x, y));
                    }
                    found => return Err(MazeError::UnknownCell { found, x, y }),
                }
            }
        }

        let (Some(start), Some(goal)) = (start, goal) else {
            return Err(MazeError::MissingMarkers);
        };

        Ok(Self {
            walls,
            width,
            height,
            start,
            goal,
            player: start,
        })
    }

    /// The board the experience ships with.
    pub fn default_board() -> Self {
        match Self::parse(DEFAULT_TEMPLATE) {
            Ok(maze) => maze,
            // The template is a compile-time constant; a parse failure is a
            // bug in this file.
            Err(error) => unreachable!("default maze template is invalid: {error}"),
        }
    }

    /// Attempt one step. Out-of-bounds and wall moves leave the player put.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        let (dx, dy) = direction.delta();
        let nx = self.player.0 as i32 + dx;
        let ny = self.player.1 as i32 + dy;

        if nx < 0 || ny < 0 || nx >= self.width as i32 || ny >= self.height as i32 {
            return StepOutcome::Blocked;
        }
        let next = (nx as usize, ny as usize);
        if self.is_wall(next.0, next.1) {
            return StepOutcome::Blocked;
        }

        self.player = next;
        if self.player == self.goal {
            tracing::debug!("maze solved");
            StepOutcome::ReachedGoal
        } else {
            StepOutcome::Moved
        }
    }

    /// Put the player back at the start.
    pub fn reset(&mut self) {
        self.player = self.start;
    }

    /// Whether the cell at `(x, y)` is a wall. Out-of-bounds coordinates
    /// are not cells and report false.
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.walls[y * self.width + x]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    pub fn goal(&self) -> (usize, usize) {
        self.goal
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::default_board()
    }
}
