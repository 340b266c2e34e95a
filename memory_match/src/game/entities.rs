use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants;

/// Index of a card within the deck, assigned in deal order.
pub type CardIndex = usize;

/// An opaque card face value drawn from a theme's symbol set. Two cards
/// form a pair exactly when their symbols are equal.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Symbol(String);

impl Symbol {
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One of the two seats in a turn-based session. Solo games only ever
/// see [`Player::One`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other seat.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// A single card on the board.
///
/// Cards are created in bulk by the deck generator and live for one
/// session. `is_matched` and `matched_by` are set once, permanently,
/// when the card's pair is found.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    pub id: CardIndex,
    pub symbol: Symbol,
    pub is_revealed: bool,
    pub is_matched: bool,
    pub matched_by: Option<Player>,
}

impl Card {
    pub(crate) fn face_down(id: CardIndex, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_revealed: false,
            is_matched: false,
            matched_by: None,
        }
    }

    /// Whether the face should be shown. Matched cards stay visible
    /// through their matched flag.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_revealed || self.is_matched
    }
}

/// Win/loss rules a session is played under.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameMode {
    /// No limits.
    Classic,
    /// Beat the clock.
    Timed,
    /// Limited moves.
    Limited,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Classic => "classic",
            Self::Timed => "timed",
            Self::Limited => "limited",
        };
        write!(f, "{repr}")
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "timed" => Ok(Self::Timed),
            "limited" => Ok(Self::Limited),
            other => Err(format!("unknown game mode: '{other}'")),
        }
    }
}

/// Solo play or two players taking turns.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PlayerCount {
    Solo,
    Two,
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Solo => "solo",
            Self::Two => "2 players",
        };
        write!(f, "{repr}")
    }
}

impl std::str::FromStr for PlayerCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "solo" => Ok(Self::Solo),
            "2" | "two" => Ok(Self::Two),
            other => Err(format!("unknown player count: '{other}'")),
        }
    }
}

/// Grid geometry for a session. Immutable once a game starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BoardSize {
    pub columns: usize,
    pub rows: usize,
    pub total_cards: usize,
    pub label: &'static str,
}

impl BoardSize {
    #[must_use]
    pub const fn total_pairs(&self) -> usize {
        self.total_cards / 2
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

/// The supported board catalog, smallest first.
pub const BOARD_SIZES: [BoardSize; 6] = [
    BoardSize {
        columns: 3,
        rows: 2,
        total_cards: 6,
        label: "3x2 Beginner",
    },
    BoardSize {
        columns: 4,
        rows: 3,
        total_cards: 12,
        label: "4x3 Easy",
    },
    BoardSize {
        columns: 4,
        rows: 4,
        total_cards: 16,
        label: "4x4 Medium",
    },
    BoardSize {
        columns: 5,
        rows: 4,
        total_cards: 20,
        label: "5x4 Hard",
    },
    BoardSize {
        columns: 6,
        rows: 5,
        total_cards: 30,
        label: "6x5 Expert",
    },
    BoardSize {
        columns: 8,
        rows: 6,
        total_cards: 48,
        label: "8x6 Master",
    },
];

/// Look up a catalog board by its card count.
#[must_use]
pub fn board_size_for(total_cards: usize) -> Option<BoardSize> {
    BOARD_SIZES
        .iter()
        .find(|size| size.total_cards == total_cards)
        .copied()
}

/// A named set of card face symbols plus presentation labels. Every
/// built-in theme carries enough symbols for the largest board.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub label: &'static str,
    pub symbols: &'static [&'static str],
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "animals",
        label: "🐾 Animals",
        symbols: &[
            "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸",
            "🐵", "🐔", "🐧", "🐦", "🦅", "🦉", "🐴", "🦄", "🐝", "🐙",
        ],
    },
    Theme {
        name: "food",
        label: "🍕 Food",
        symbols: &[
            "🍎", "🍊", "🍋", "🍇", "🍓", "🍒", "🍑", "🥝", "🍕", "🍔", "🌮", "🍣", "🍩", "🍪",
            "🎂", "🍫", "🥐", "🧁", "🍿", "🥤", "🍦", "🥑", "🌽", "🍉",
        ],
    },
    Theme {
        name: "nature",
        label: "🌿 Nature",
        symbols: &[
            "🌸", "🌺", "🌻", "🌷", "🌹", "🍀", "🌲", "🌴", "🍁", "🍂", "🌊", "⛰️", "🌈", "⭐",
            "🌙", "☀️", "❄️", "🔥", "💧", "🌍", "🌵", "🍄", "🌾", "🪻",
        ],
    },
    Theme {
        name: "travel",
        label: "✈️ Travel",
        symbols: &[
            "✈️", "🚗", "🚀", "🛸", "🚂", "⛵", "🏰", "🗼", "🗽", "🎡", "🏖️", "🏔️", "🌋", "🗿",
            "⛩️", "🕌", "🎪", "🚁", "🛶", "🏕️", "🚲", "🛵", "🚃", "🎠",
        ],
    },
    Theme {
        name: "sports",
        label: "⚽ Sports",
        symbols: &[
            "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏓", "🏸", "🥊", "🏋️", "🤸", "⛷️", "🏄", "🚴",
            "🏊", "🤾", "🎯", "🏹", "🥇", "🏆", "🎿", "⛸️", "🤿", "🧗",
        ],
    },
];

/// Look up a built-in theme by its short name.
#[must_use]
pub fn theme_named(name: &str) -> Option<Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Renderable snapshot of a session handed to the presentation layer.
///
/// # Important
/// This is read-only state; all mutations go through the session's
/// event methods.
#[derive(Clone, Debug, Serialize)]
pub struct GameView {
    pub cards: Vec<Card>,
    pub columns: usize,
    pub rows: usize,
    pub mode: GameMode,
    pub player_count: PlayerCount,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    /// Pairs claimed by player 1 and player 2 respectively.
    pub player_pairs: [usize; 2],
    pub current_player: Player,
    /// Move budget, present only in limited mode.
    pub move_limit: Option<u32>,
    /// Time budget in seconds, present only in timed mode.
    pub time_limit: Option<u32>,
    pub is_input_locked: bool,
    pub is_game_over: bool,
    pub did_win: bool,
}

impl GameView {
    /// Remaining budget for the session's mode, if any.
    #[must_use]
    pub fn remaining_moves(&self) -> Option<u32> {
        self.move_limit
            .map(|limit| limit.saturating_sub(self.move_count))
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.time_limit
            .map(|limit| limit.saturating_sub(self.elapsed_seconds))
    }
}

// Limits shown in views come from the shared tables.
pub(super) fn mode_limits(mode: GameMode, total_cards: usize) -> (Option<u32>, Option<u32>) {
    match mode {
        GameMode::Classic => (None, None),
        GameMode::Timed => (None, constants::time_limit(total_cards)),
        GameMode::Limited => (constants::move_limit(total_cards), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // === Player Tests ===

    #[test]
    fn test_player_toggle() {
        assert_eq!(Player::One.toggled(), Player::Two);
        assert_eq!(Player::Two.toggled(), Player::One);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::One.to_string(), "player 1");
        assert_eq!(Player::Two.to_string(), "player 2");
    }

    // === Card Tests ===

    #[test]
    fn test_card_starts_face_down() {
        let card = Card::face_down(0, "🐶".into());
        assert!(!card.is_face_up());
        assert!(!card.is_matched);
        assert_eq!(card.matched_by, None);
    }

    #[test]
    fn test_matched_card_stays_face_up() {
        let mut card = Card::face_down(3, "🐙".into());
        card.is_revealed = true;
        card.is_matched = true;
        card.matched_by = Some(Player::Two);
        assert!(card.is_face_up());
    }

    // === Board Catalog Tests ===

    #[test]
    fn test_board_catalog_geometry() {
        for size in BOARD_SIZES {
            assert_eq!(size.columns * size.rows, size.total_cards);
            assert_eq!(size.total_cards % 2, 0);
            assert_eq!(size.total_pairs() * 2, size.total_cards);
        }
    }

    #[test]
    fn test_board_size_lookup() {
        let size = board_size_for(16).unwrap();
        assert_eq!(size.columns, 4);
        assert_eq!(size.rows, 4);
        assert!(board_size_for(14).is_none());
    }

    // === Theme Tests ===

    #[test]
    fn test_themes_cover_largest_board() {
        let largest = BOARD_SIZES.last().unwrap();
        for theme in THEMES {
            assert!(theme.symbols.len() >= largest.total_pairs());
        }
    }

    #[test]
    fn test_theme_symbols_are_unique() {
        for theme in THEMES {
            let unique: HashSet<_> = theme.symbols.iter().collect();
            assert_eq!(unique.len(), theme.symbols.len(), "{}", theme.name);
        }
    }

    #[test]
    fn test_theme_lookup_ignores_case() {
        assert_eq!(theme_named("ANIMALS").unwrap().name, "animals");
        assert!(theme_named("space").is_none());
    }

    // === Mode Parsing Tests ===

    #[test]
    fn test_game_mode_round_trip() {
        for mode in [GameMode::Classic, GameMode::Timed, GameMode::Limited] {
            let parsed: GameMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("marathon".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_player_count_parsing() {
        assert_eq!("1".parse::<PlayerCount>().unwrap(), PlayerCount::Solo);
        assert_eq!("2".parse::<PlayerCount>().unwrap(), PlayerCount::Two);
        assert!("3".parse::<PlayerCount>().is_err());
    }
}
