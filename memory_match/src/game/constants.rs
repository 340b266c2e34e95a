//! Fixed tuning tables for the supported board sizes.

use std::time::Duration;

/// How long both cards of a matched pair stay on display before the
/// match is committed.
pub const MATCH_RESOLVE_DELAY: Duration = Duration::from_millis(400);

/// How long a mismatched pair stays on display before both cards flip
/// back down.
pub const MISMATCH_RESOLVE_DELAY: Duration = Duration::from_millis(800);

/// Move budgets for limited mode, keyed by total card count.
const MOVE_LIMITS: [(usize, u32); 6] = [
    (6, 10),
    (12, 24),
    (16, 36),
    (20, 50),
    (30, 80),
    (48, 140),
];

/// Time budgets in seconds for timed mode, keyed by total card count.
const TIME_LIMITS: [(usize, u32); 6] = [
    (6, 30),
    (12, 60),
    (16, 90),
    (20, 120),
    (30, 180),
    (48, 300),
];

/// Move budget for a board, if one exists. Card counts outside the
/// supported catalog have no limit.
#[must_use]
pub fn move_limit(total_cards: usize) -> Option<u32> {
    MOVE_LIMITS
        .iter()
        .find(|(cards, _)| *cards == total_cards)
        .map(|(_, limit)| *limit)
}

/// Time budget for a board, if one exists.
#[must_use]
pub fn time_limit(total_cards: usize) -> Option<u32> {
    TIME_LIMITS
        .iter()
        .find(|(cards, _)| *cards == total_cards)
        .map(|(_, limit)| *limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_limits_cover_catalog() {
        for cards in [6, 12, 16, 20, 30, 48] {
            assert!(move_limit(cards).is_some());
            assert!(time_limit(cards).is_some());
        }
    }

    #[test]
    fn test_unsupported_sizes_have_no_limit() {
        assert_eq!(move_limit(8), None);
        assert_eq!(time_limit(8), None);
        assert_eq!(move_limit(0), None);
    }

    #[test]
    fn test_beginner_board_limits() {
        assert_eq!(move_limit(6), Some(10));
        assert_eq!(time_limit(6), Some(30));
    }
}
