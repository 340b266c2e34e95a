//! Four-step game setup menu: players, theme, board size, mode.
//!
//! Steps already fixed by command-line options are skipped; once every
//! choice is made the menu yields the [`GameSettings`] for a session.

use memory_match::GameSettings;
use memory_match::game::entities::{
    BOARD_SIZES, BoardSize, GameMode, PlayerCount, THEMES, Theme,
};

const GAME_MODES: [(GameMode, &str); 3] = [
    (GameMode::Classic, "Classic - no limits"),
    (GameMode::Timed, "Timed - beat the clock"),
    (GameMode::Limited, "Limited - limited moves"),
];

const PLAYER_OPTIONS: [(PlayerCount, &str); 2] = [
    (PlayerCount::Solo, "Solo - single player"),
    (PlayerCount::Two, "2 Players - take turns"),
];

/// Choices fixed ahead of time by command-line options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Preset {
    pub players: Option<PlayerCount>,
    pub theme: Option<Theme>,
    pub board_size: Option<BoardSize>,
    pub mode: Option<GameMode>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Players,
    Theme,
    Size,
    Mode,
}

const STEP_ORDER: [Step; 4] = [Step::Players, Step::Theme, Step::Size, Step::Mode];

#[derive(Debug)]
pub struct Menu {
    step: Option<Step>,
    cursor: usize,
    players: Option<PlayerCount>,
    theme: Option<Theme>,
    board_size: Option<BoardSize>,
    mode: Option<GameMode>,
}

impl Menu {
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        let mut menu = Self {
            step: None,
            cursor: 0,
            players: preset.players,
            theme: preset.theme,
            board_size: preset.board_size,
            mode: preset.mode,
        };
        menu.step = menu.first_unset();
        menu
    }

    fn value_for(&self, step: Step) -> bool {
        match step {
            Step::Players => self.players.is_some(),
            Step::Theme => self.theme.is_some(),
            Step::Size => self.board_size.is_some(),
            Step::Mode => self.mode.is_some(),
        }
    }

    fn first_unset(&self) -> Option<Step> {
        STEP_ORDER.into_iter().find(|step| !self.value_for(*step))
    }

    /// The step currently awaiting a choice, if any.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        self.step
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.step {
            Some(Step::Players) => "Players",
            Some(Step::Theme) => "Theme",
            Some(Step::Size) => "Board Size",
            Some(Step::Mode) => "Game Mode",
            None => "Ready",
        }
    }

    /// Display labels for the current step's options.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        match self.step {
            Some(Step::Players) => PLAYER_OPTIONS
                .iter()
                .map(|(_, label)| (*label).to_string())
                .collect(),
            Some(Step::Theme) => THEMES.iter().map(|theme| theme.label.to_string()).collect(),
            Some(Step::Size) => BOARD_SIZES
                .iter()
                .map(|size| size.label.to_string())
                .collect(),
            Some(Step::Mode) => GAME_MODES
                .iter()
                .map(|(_, label)| (*label).to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.options().len();
        if count > 0 && self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Record the highlighted option and advance. Returns the session
    /// settings once every step has a choice.
    pub fn select(&mut self) -> Option<GameSettings> {
        match self.step? {
            Step::Players => self.players = Some(PLAYER_OPTIONS[self.cursor].0),
            Step::Theme => self.theme = Some(THEMES[self.cursor]),
            Step::Size => self.board_size = Some(BOARD_SIZES[self.cursor]),
            Step::Mode => self.mode = Some(GAME_MODES[self.cursor].0),
        }
        self.cursor = 0;
        self.step = self.first_unset();
        self.settings()
    }

    /// Step back to the previous choice, clearing it. Returns false
    /// when already at the first step.
    pub fn back(&mut self) -> bool {
        let current = self.step.map_or(STEP_ORDER.len(), |step| {
            STEP_ORDER.iter().position(|s| *s == step).unwrap_or(0)
        });
        let Some(previous) = STEP_ORDER[..current]
            .iter()
            .rev()
            .copied()
            .find(|step| self.value_for(*step))
        else {
            return false;
        };
        match previous {
            Step::Players => self.players = None,
            Step::Theme => self.theme = None,
            Step::Size => self.board_size = None,
            Step::Mode => self.mode = None,
        }
        self.cursor = 0;
        self.step = Some(previous);
        true
    }

    /// The completed settings, if every step has a choice.
    #[must_use]
    pub fn settings(&self) -> Option<GameSettings> {
        Some(GameSettings::new(
            self.board_size?,
            self.theme?,
            self.mode?,
            self.players?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_match::game::entities::{board_size_for, theme_named};

    #[test]
    fn test_full_walkthrough() {
        let mut menu = Menu::new(Preset::default());
        assert_eq!(menu.step(), Some(Step::Players));

        menu.move_down();
        assert!(menu.select().is_none()); // 2 players
        assert_eq!(menu.step(), Some(Step::Theme));

        assert!(menu.select().is_none()); // animals
        assert!(menu.select().is_none()); // 3x2
        let settings = menu.select().expect("all steps chosen"); // classic

        assert_eq!(settings.player_count, PlayerCount::Two);
        assert_eq!(settings.theme.name, "animals");
        assert_eq!(settings.board_size.total_cards, 6);
        assert_eq!(settings.mode, GameMode::Classic);
    }

    #[test]
    fn test_preset_steps_are_skipped() {
        let preset = Preset {
            players: Some(PlayerCount::Solo),
            theme: Some(theme_named("food").unwrap()),
            board_size: None,
            mode: Some(GameMode::Timed),
        };
        let mut menu = Menu::new(preset);
        assert_eq!(menu.step(), Some(Step::Size));
        let settings = menu.select().expect("only one step was open");
        assert_eq!(settings.board_size.total_cards, 6);
        assert_eq!(settings.mode, GameMode::Timed);
    }

    #[test]
    fn test_fully_preset_menu_is_complete() {
        let preset = Preset {
            players: Some(PlayerCount::Solo),
            theme: Some(theme_named("sports").unwrap()),
            board_size: board_size_for(16),
            mode: Some(GameMode::Classic),
        };
        let menu = Menu::new(preset);
        assert_eq!(menu.step(), None);
        assert!(menu.settings().is_some());
    }

    #[test]
    fn test_cursor_clamps_at_list_edges() {
        let mut menu = Menu::new(Preset::default());
        menu.move_up();
        assert_eq!(menu.cursor(), 0);
        for _ in 0..10 {
            menu.move_down();
        }
        assert_eq!(menu.cursor(), PLAYER_OPTIONS.len() - 1);
    }

    #[test]
    fn test_back_reopens_previous_step() {
        let mut menu = Menu::new(Preset::default());
        menu.select(); // players
        assert_eq!(menu.step(), Some(Step::Theme));
        assert!(menu.back());
        assert_eq!(menu.step(), Some(Step::Players));
        assert!(!menu.back());
    }
}
