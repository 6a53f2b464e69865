//! Mode, phase and outcome of a round.

use serde::{Deserialize, Serialize};

use super::Mark;

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Two humans share the board and alternate.
    Friend,
    /// The human plays X; the computer answers as O.
    Computer,
}

impl Mode {
    /// Label of the button that starts this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Friend => "Play with a Friend",
            Mode::Computer => "Play with the Computer",
        }
    }

    /// Returns true if the computer controls `mark` in this mode.
    pub fn is_computer(self, mark: Mark) -> bool {
        self == Mode::Computer && mark == Mark::O
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Winner(Mark),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// End-of-round announcement for the given mode.
    pub fn message(&self, mode: Mode) -> String {
        match self {
            Outcome::Winner(mark) if mode.is_computer(*mark) => "Computer wins!".to_string(),
            Outcome::Winner(mark) => format!("Player {mark} wins!"),
            Outcome::Draw => "The game is a draw!".to_string(),
        }
    }
}

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No mode picked yet.
    #[default]
    AwaitingMode,
    /// Moves are accepted.
    InProgress,
    /// The round ended; only `reset` or `start` move on.
    GameOver(Outcome),
}
