//! End-condition evaluation.
//!
//! A pure function of the session counters, re-derivable at any point
//! from state alone. Win is checked before either loss condition.

use serde::{Deserialize, Serialize};

use super::constants;
use super::entities::GameMode;

/// Result of inspecting the current counters.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    /// The session continues.
    None,
    /// All pairs found.
    Win,
    /// Timed mode and the clock ran out.
    TimedLoss,
    /// Limited mode and the move budget is spent with pairs remaining.
    LimitedLoss,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Evaluate the end conditions for the given counters.
///
/// Limits come from the fixed per-board tables; card counts outside the
/// catalog never time or move out.
#[must_use]
pub fn evaluate(
    matched_pairs: usize,
    total_pairs: usize,
    mode: GameMode,
    elapsed_seconds: u32,
    move_count: u32,
    total_cards: usize,
) -> Outcome {
    if total_pairs > 0 && matched_pairs == total_pairs {
        return Outcome::Win;
    }
    match mode {
        GameMode::Classic => {}
        GameMode::Timed => {
            if let Some(limit) = constants::time_limit(total_cards)
                && elapsed_seconds >= limit
            {
                return Outcome::TimedLoss;
            }
        }
        GameMode::Limited => {
            if let Some(limit) = constants::move_limit(total_cards)
                && move_count >= limit
                && matched_pairs < total_pairs
            {
                return Outcome::LimitedLoss;
            }
        }
    }
    Outcome::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_takes_priority_over_losses() {
        // All pairs found on the very last allowed move still wins.
        assert_eq!(
            evaluate(3, 3, GameMode::Limited, 0, 10, 6),
            Outcome::Win
        );
        assert_eq!(evaluate(3, 3, GameMode::Timed, 30, 0, 6), Outcome::Win);
    }

    #[test]
    fn test_classic_never_loses() {
        assert_eq!(evaluate(0, 3, GameMode::Classic, 9999, 9999, 6), Outcome::None);
    }

    #[test]
    fn test_timed_loss_at_limit() {
        assert_eq!(evaluate(1, 3, GameMode::Timed, 29, 0, 6), Outcome::None);
        assert_eq!(evaluate(1, 3, GameMode::Timed, 30, 0, 6), Outcome::TimedLoss);
    }

    #[test]
    fn test_limited_loss_at_limit() {
        assert_eq!(evaluate(2, 3, GameMode::Limited, 0, 9, 6), Outcome::None);
        assert_eq!(
            evaluate(2, 3, GameMode::Limited, 0, 10, 6),
            Outcome::LimitedLoss
        );
    }

    #[test]
    fn test_uncataloged_board_has_no_limits() {
        assert_eq!(evaluate(0, 4, GameMode::Timed, 100_000, 0, 8), Outcome::None);
        assert_eq!(
            evaluate(0, 4, GameMode::Limited, 0, 100_000, 8),
            Outcome::None
        );
    }

    #[test]
    fn test_empty_board_never_wins() {
        assert_eq!(evaluate(0, 0, GameMode::Classic, 0, 0, 0), Outcome::None);
    }
}
