//! Mini-game state machines for the keepsake experience
//!
//! Pure game logic with no rendering or input plumbing: a host maps clicks,
//! keys and swipes onto these APIs and draws from their state.
//!
//! **Games:**
//! - **Maze** — grid navigation to a goal cell, parsed from a text template
//! - **Quiz** — prize-ladder run with milestone safe prizes
//! - **Sliding puzzle** — R x C tile board with a solvability-preserving
//!   shuffle
//! - **Gift unwrap** — click-to-open box that fires a confetti celebration

pub mod maze;
pub mod puzzle;
pub mod quiz;
pub mod unwrap;

pub use maze::{Direction, Maze, MazeError, StepOutcome};
pub use puzzle::SlidingPuzzle;
pub use quiz::{GameOutcome, PrizeLevel, Question, QuizGame, Verdict};
pub use unwrap::{ClickOutcome, GiftUnwrap, REQUIRED_CLICKS};
