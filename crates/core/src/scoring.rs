//! Scoring module - point rules for every game
//!
//! All formulas are pure functions so the games, the tests, and the HUD
//! agree on the numbers.

/// Runner: points per obstacle that fully passes the player
pub const OBSTACLE_PASS_POINTS: u32 = 10;

/// Snake: points per food eaten
pub const FOOD_POINTS: u32 = 10;

/// Tic-tac-toe: points for beating the opponent
pub const TIC_TAC_TOE_WIN_POINTS: u32 = 100;

/// Chess: bonus for checkmating the computer
pub const CHESS_WIN_BONUS: u32 = 500;

/// Chess: bonus for a drawn game
pub const CHESS_DRAW_BONUS: u32 = 100;

/// Chess: points for every legal player move
pub const CHESS_MOVE_POINTS: u32 = 1;

/// Memory: `100 - moves`, never below zero
pub fn memory_score(moves: u32) -> u32 {
    100u32.saturating_sub(moves)
}

/// Hangman: `(max_mistakes - mistakes) * 10 + word_len * 5`
pub fn hangman_score(max_mistakes: u32, mistakes: u32, word_len: usize) -> u32 {
    max_mistakes.saturating_sub(mistakes) * 10 + word_len as u32 * 5
}

/// Trivia: `100 + seconds_left * 10` for a correct answer
pub fn trivia_score(seconds_left: u32) -> u32 {
    100 + seconds_left * 10
}

/// Code-breaker: `ceil(seconds_left / 2) * 10` for a solved level
pub fn code_breaker_score(seconds_left: u32) -> u32 {
    seconds_left.div_ceil(2) * 10
}

/// Typing: `10 + word length` per completed word
pub fn typing_score(word: &str) -> u32 {
    10 + word.chars().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_floors_at_zero() {
        assert_eq!(memory_score(8), 92);
        assert_eq!(memory_score(100), 0);
        assert_eq!(memory_score(140), 0);
    }

    #[test]
    fn hangman_rewards_accuracy_and_length() {
        assert_eq!(hangman_score(6, 2, 7), 75);
        assert_eq!(hangman_score(6, 0, 4), 80);
        assert_eq!(hangman_score(6, 6, 4), 20);
    }

    #[test]
    fn trivia_adds_time_bonus() {
        assert_eq!(trivia_score(15), 250);
        assert_eq!(trivia_score(0), 100);
    }

    #[test]
    fn code_breaker_rounds_half_seconds_up() {
        assert_eq!(code_breaker_score(40), 200);
        assert_eq!(code_breaker_score(41), 210);
        assert_eq!(code_breaker_score(1), 10);
        assert_eq!(code_breaker_score(0), 0);
    }

    #[test]
    fn typing_counts_characters() {
        assert_eq!(typing_score("react"), 15);
        assert_eq!(typing_score("javascript"), 20);
    }
}
