//! Prize-ladder quiz
//!
//! A run walks an ordered question list against a prize ladder. A correct
//! answer banks that question's reward; rewards marked as milestones also
//! raise the safe prize. A wrong answer ends the run and falls back to the
//! safe prize; clearing the last question wins the full ladder.
//!
//! Answering locks the game until [`QuizGame::advance`] moves to the next
//! question, so the dramatic-reveal phase of a host UI cannot double-answer.

use keepsake_animation::CountUp;

/// One quiz question. `correct` indexes into `options`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct: usize,
    pub reward: u32,
}

/// One rung of the prize ladder, top rung first.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PrizeLevel {
    pub amount: u32,
    pub label: String,
    pub milestone: bool,
}

/// Outcome of a single answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct { milestone: bool, won: bool },
    /// Run over; `correct` is the option the player should have picked.
    Wrong { correct: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Seconds the result screen spends counting the prize up.
const PRIZE_COUNT_DURATION: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct QuizGame {
    questions: Vec<Question>,
    levels: Vec<PrizeLevel>,
    current: usize,
    prize: u32,
    safe_prize: u32,
    resolving: bool,
    outcome: Option<GameOutcome>,
}

impl QuizGame {
    pub fn new(questions: Vec<Question>, levels: Vec<PrizeLevel>) -> Self {
        Self {
            questions,
            levels,
            current: 0,
            prize: 0,
            safe_prize: 0,
            resolving: false,
            outcome: None,
        }
    }

    /// Answer the current question. Returns `None` while the game is locked
    /// mid-resolution or already over.
    pub fn answer(&mut self, choice: usize) -> Option<Verdict> {
        if self.resolving || self.outcome.is_some() {
            return None;
        }
        let question = self.questions.get(self.current)?;

        if choice == question.correct {
            self.prize = question.reward;
            let milestone = self
                .levels
                .iter()
                .any(|level| level.amount == question.reward && level.milestone);
            if milestone {
                self.safe_prize = question.reward;
            }

            let won = self.current + 1 == self.questions.len();
            if won {
                self.outcome = Some(GameOutcome::Won);
                tracing::info!(prize = self.prize, "quiz won");
            } else {
                self.resolving = true;
            }
            Some(Verdict::Correct { milestone, won })
        } else {
            self.prize = self.safe_prize;
            self.outcome = Some(GameOutcome::Lost);
            tracing::debug!(prize = self.prize, "quiz lost");
            Some(Verdict::Wrong {
                correct: question.correct,
            })
        }
    }

    /// Move past a correct answer to the next question, releasing the
    /// answer lock. Returns false if there is nothing to advance from.
    pub fn advance(&mut self) -> bool {
        if !self.resolving {
            return false;
        }
        self.resolving = false;
        self.current += 1;
        true
    }

    /// Start the run over with the same questions and ladder.
    pub fn restart(&mut self) {
        self.current = 0;
        self.prize = 0;
        self.safe_prize = 0;
        self.resolving = false;
        self.outcome = None;
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.outcome.is_some() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn ladder(&self) -> &[PrizeLevel] {
        &self.levels
    }

    /// Ladder index of the rung currently in play (the ladder lists the top
    /// rung first).
    pub fn ladder_position(&self) -> usize {
        self.levels.len().saturating_sub(1 + self.current)
    }

    pub fn prize(&self) -> u32 {
        self.prize
    }

    pub fn safe_prize(&self) -> u32 {
        self.safe_prize
    }

    pub fn is_locked(&self) -> bool {
        self.resolving
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Eased counter for the result screen's prize figure.
    pub fn prize_counter(&self) -> CountUp {
        CountUp::new(self.prize as f32, PRIZE_COUNT_DURATION)
    }
}
