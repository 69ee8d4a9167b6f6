//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the arcade.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation kernels, terminal rendering, persistence).
//!
//! # Catalog
//!
//! | Id | Name | Kind |
//! |----|------|------|
//! | `geometry-dash` | Neon Dash | continuous physics |
//! | `snake` | Neon Snake | continuous grid |
//! | `tic-tac-toe` | Tic Tac Toe | discrete turn |
//! | `memory` | Memory Master | discrete turn |
//! | `hangman` | Ninja Hangman | discrete turn |
//! | `trivia` | Ninja Trivia | timer-driven |
//! | `code-breaker` | Code Breaker | timer-driven |
//! | `typing` | Speed Typer | timer-driven |
//! | `chess-lite` | Chess Lite | discrete turn |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Display-refresh tick for the runner (~60 FPS) |
//! | `SNAKE_STEP_MS` | 200 | Grid step interval |
//! | `VIRTUAL_SECOND_MS` | 1000 | Countdown tick for timer games |
//! | `OPPONENT_DELAY_MS` | 500 | Computer "thinking" pause |
//! | `MISMATCH_DELAY_MS` | 1000 | Memory cards stay face-up after a miss |
//! | `LEVEL_ADVANCE_DELAY_MS` | 1000 | Code-breaker pause before the next level |
//! | `FEEDBACK_DELAY_MS` | 2000 | Trivia answer feedback |
//!
//! # Examples
//!
//! ```
//! use funzone_types::{Direction, GameId, SessionState};
//!
//! let game: GameId = "snake".parse().unwrap();
//! assert_eq!(game, GameId::Snake);
//! assert_eq!(game.info().name, "Neon Snake");
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert!(!Direction::Up.is_opposite(Direction::Left));
//!
//! assert!(SessionState::Draw.is_terminal());
//! assert!(!SessionState::Active.is_terminal());
//! ```

/// Display-refresh tick for continuous games (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Grid game step interval
pub const SNAKE_STEP_MS: u32 = 200;

/// One virtual second for countdown-driven games
pub const VIRTUAL_SECOND_MS: u32 = 1000;

/// Computer opponent "thinking" delay before it moves
pub const OPPONENT_DELAY_MS: u32 = 500;

/// How long two mismatched memory cards stay revealed
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Pause after a solved code-breaker level before the next one loads
pub const LEVEL_ADVANCE_DELAY_MS: u32 = 1000;

/// Pause after a trivia answer (or time-out) before the next question
pub const FEEDBACK_DELAY_MS: u32 = 2000;

/// Maximum entries kept per game leaderboard
pub const LEADERBOARD_CAPACITY: usize = 5;

/// Maximum entries kept in the recent-scores feed
pub const RECENT_SCORES_CAPACITY: usize = 10;

/// Player name used when none is configured
pub const DEFAULT_PLAYER: &str = "You";

/// Stable identifier of a catalog game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameId {
    GeometryDash,
    Snake,
    TicTacToe,
    Memory,
    Hangman,
    Trivia,
    CodeBreaker,
    Typing,
    ChessLite,
}

/// Static catalog metadata for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
}

impl GameId {
    /// Every game in catalog order
    pub const ALL: [GameId; 9] = [
        GameId::CodeBreaker,
        GameId::TicTacToe,
        GameId::Memory,
        GameId::Snake,
        GameId::Trivia,
        GameId::Typing,
        GameId::ChessLite,
        GameId::Hangman,
        GameId::GeometryDash,
    ];

    /// Stable kebab-case id (used as persistence key)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::GeometryDash => "geometry-dash",
            GameId::Snake => "snake",
            GameId::TicTacToe => "tic-tac-toe",
            GameId::Memory => "memory",
            GameId::Hangman => "hangman",
            GameId::Trivia => "trivia",
            GameId::CodeBreaker => "code-breaker",
            GameId::Typing => "typing",
            GameId::ChessLite => "chess-lite",
        }
    }

    pub fn info(&self) -> GameInfo {
        match self {
            GameId::CodeBreaker => GameInfo {
                name: "Code Breaker",
                description: "Decipher patterns and unlock levels.",
                category: "Puzzle",
                difficulty: "Medium",
            },
            GameId::TicTacToe => GameInfo {
                name: "Tic Tac Toe",
                description: "Classic X and O strategy game against AI.",
                category: "Classic",
                difficulty: "Easy",
            },
            GameId::Memory => GameInfo {
                name: "Memory Master",
                description: "Test your memory by matching card pairs.",
                category: "Puzzle",
                difficulty: "Medium",
            },
            GameId::Snake => GameInfo {
                name: "Neon Snake",
                description: "Navigate the snake to eat food and grow!",
                category: "Arcade",
                difficulty: "Hard",
            },
            GameId::Trivia => GameInfo {
                name: "Ninja Trivia",
                description: "Test your knowledge across various topics.",
                category: "Education",
                difficulty: "Medium",
            },
            GameId::Typing => GameInfo {
                name: "Speed Typer",
                description: "Race against time to type words correctly.",
                category: "Skill",
                difficulty: "Hard",
            },
            GameId::ChessLite => GameInfo {
                name: "Chess Lite",
                description: "Simplified chess against a random-move AI.",
                category: "Strategy",
                difficulty: "Expert",
            },
            GameId::Hangman => GameInfo {
                name: "Ninja Hangman",
                description: "Guess the secret word to save the ninja!",
                category: "Word",
                difficulty: "Medium",
            },
            GameId::GeometryDash => GameInfo {
                name: "Neon Dash",
                description: "Jump through obstacles in this rhythm runner!",
                category: "Arcade",
                difficulty: "Hard",
            },
        }
    }

    /// Whether the game is simulated continuously (frame/grid ticks)
    pub fn is_continuous(&self) -> bool {
        matches!(self, GameId::GeometryDash | GameId::Snake)
    }
}

/// Returned when a string names no game in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGame(pub String);

impl std::fmt::Display for UnknownGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown game id `{}`", self.0)
    }
}

impl std::error::Error for UnknownGame {}

impl std::str::FromStr for GameId {
    type Err = UnknownGame;

    /// Parse a game id (case-insensitive, `_` accepted for `-`)
    ///
    /// # Examples
    ///
    /// ```
    /// use funzone_types::GameId;
    ///
    /// assert_eq!("tic-tac-toe".parse::<GameId>(), Ok(GameId::TicTacToe));
    /// assert_eq!("Chess_Lite".parse::<GameId>(), Ok(GameId::ChessLite));
    /// assert!("pong".parse::<GameId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "geometry-dash" | "dash" => Ok(GameId::GeometryDash),
            "snake" => Ok(GameId::Snake),
            "tic-tac-toe" | "tictactoe" => Ok(GameId::TicTacToe),
            "memory" => Ok(GameId::Memory),
            "hangman" => Ok(GameId::Hangman),
            "trivia" => Ok(GameId::Trivia),
            "code-breaker" | "codebreaker" => Ok(GameId::CodeBreaker),
            "typing" => Ok(GameId::Typing),
            "chess-lite" | "chess" => Ok(GameId::ChessLite),
            _ => Err(UnknownGame(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of one play-through
///
/// `Idle → Active → {Won, Lost, Draw}`. Terminal states never transition
/// back; a new session is created instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
    Won,
    Lost,
    Draw,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost | SessionState::Draw)
    }

    pub fn is_active(&self) -> bool {
        *self == SessionState::Active
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active => "active",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
            SessionState::Draw => "draw",
        }
    }
}

/// Grid direction (screen coordinates: y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)` for this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` points exactly the other way (a 180° reversal)
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Player intents delivered to a game module
///
/// Each game reacts to the subset it understands and silently ignores the
/// rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Runner: jump (Space / Up)
    Jump,
    /// Snake: change heading
    Steer(Direction),
    /// Board slot: tic-tac-toe cell (0-8) or memory card (0-15)
    Pick(u8),
    /// Hangman letter guess (uppercase ASCII)
    Guess(char),
    /// Trivia option (0-3)
    Choose(u8),
    /// Text entry character (code-breaker, typing)
    Type(char),
    /// Text entry backspace
    Erase,
    /// Text entry submit (Enter / Space)
    Submit,
    /// Code-breaker hint request
    Hint,
    /// Chess move, squares indexed `rank * 8 + file` with a1 = 0
    Move { from: u8, to: u8 },
}

/// A deferred step a module asked the host to run later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Computer opponent takes its turn
    OpponentMove,
    /// Flip mismatched memory cards face-down again
    HideMismatch,
    /// Trivia: move on to the next question (or finish)
    NextQuestion,
    /// Code-breaker: load the next level (or finish)
    NextLevel,
}

/// Request to run `then` after `after_ms` milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    pub after_ms: u32,
    pub then: Continuation,
}

impl Delay {
    pub const fn new(after_ms: u32, then: Continuation) -> Self {
        Self { after_ms, then }
    }
}
