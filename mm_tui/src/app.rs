//! TUI application for the memory game.
//!
//! Renders the setup menu and the board with ratatui, translates
//! keyboard input into session events, and drives the one-second timer
//! and the delayed pair resolutions.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use memory_match::{
    GameSettings, MemoryGame, ResolutionTicket, SoundNotifier,
    game::entities::{Card, GameView, PlayerCount},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph},
};
use std::time::{Duration, Instant};

use crate::menu::{Menu, Preset};
use crate::settings::Settings;
use crate::sounds::Sounds;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Row-major focus movement, clamped at the grid edges.
fn step_focus(focus: usize, columns: usize, total: usize, direction: Direction) -> usize {
    match direction {
        Direction::Left if focus % columns > 0 => focus - 1,
        Direction::Right if focus % columns + 1 < columns && focus + 1 < total => focus + 1,
        Direction::Up if focus >= columns => focus - columns,
        Direction::Down if focus + columns < total => focus + columns,
        _ => focus,
    }
}

/// One active session plus the scheduling state the UI owns for it:
/// the focus cursor, the pending resolution deadline, and the anchor
/// for whole-second timer ticks.
struct GameScreen {
    game: MemoryGame,
    focus: usize,
    pending: Option<(Instant, ResolutionTicket)>,
    last_tick: Instant,
}

impl GameScreen {
    fn new(settings: GameSettings) -> Result<Self> {
        Ok(Self {
            game: MemoryGame::new(settings)?,
            focus: 0,
            pending: None,
            last_tick: Instant::now(),
        })
    }

    fn move_focus(&mut self, direction: Direction) {
        let size = self.game.settings().board_size;
        self.focus = step_focus(self.focus, size.columns, size.total_cards, direction);
    }

    fn select_focused(&mut self) {
        if let Some(ticket) = self.game.select_card(self.focus) {
            self.pending = Some((Instant::now() + ticket.delay(), ticket));
        }
    }

    /// Fire a due resolution and any whole seconds that have elapsed.
    fn advance_time(&mut self) {
        if let Some((deadline, ticket)) = self.pending
            && Instant::now() >= deadline
        {
            self.pending = None;
            self.game.complete_resolution(ticket);
        }
        if self.game.data.is_timer_running {
            while self.last_tick.elapsed() >= TICK_INTERVAL {
                self.last_tick += TICK_INTERVAL;
                self.game.tick();
            }
        } else {
            self.last_tick = Instant::now();
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.game.restart()?;
        self.pending = None;
        self.focus = 0;
        self.last_tick = Instant::now();
        Ok(())
    }
}

enum Screen {
    Menu(Menu),
    Game(GameScreen),
}

/// TUI app state.
pub struct App {
    screen: Screen,
    preset: Preset,
    settings: Settings,
    sounds: Sounds,
}

impl App {
    pub fn new(preset: Preset, settings: Settings) -> Result<Self> {
        let menu = Menu::new(preset);
        let screen = match menu.settings() {
            Some(game_settings) => Screen::Game(GameScreen::new(game_settings)?),
            None => Screen::Menu(menu),
        };
        Ok(Self {
            screen,
            preset,
            settings,
            sounds: Sounds::new(settings.muted),
        })
    }

    /// Run the TUI application until the user quits.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            if let Screen::Game(screen) = &mut self.screen {
                screen.advance_time();
                for cue in screen.game.drain_cues() {
                    self.sounds.notify(cue);
                }
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_TIMEOUT)?
                && let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
                && kind == KeyEventKind::Press
                && !self.handle_key(code)?
            {
                return Ok(());
            }
        }
    }

    /// Handle one key press. Returns false when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        if let KeyCode::Char('m' | 'M') = code {
            self.toggle_mute();
            return Ok(true);
        }
        if code == KeyCode::Esc {
            if matches!(self.screen, Screen::Menu(_)) {
                return Ok(false);
            }
            self.screen = Screen::Menu(Menu::new(self.preset));
            return Ok(true);
        }
        let mut start: Option<GameSettings> = None;
        match &mut self.screen {
            Screen::Menu(menu) => match code {
                KeyCode::Up => menu.move_up(),
                KeyCode::Down => menu.move_down(),
                KeyCode::Enter | KeyCode::Char(' ') => start = menu.select(),
                KeyCode::Backspace => {
                    menu.back();
                }
                _ => {}
            },
            Screen::Game(screen) => match code {
                KeyCode::Left => screen.move_focus(Direction::Left),
                KeyCode::Right => screen.move_focus(Direction::Right),
                KeyCode::Up => screen.move_focus(Direction::Up),
                KeyCode::Down => screen.move_focus(Direction::Down),
                KeyCode::Enter | KeyCode::Char(' ') => screen.select_focused(),
                KeyCode::Char('r' | 'R') => screen.restart()?,
                _ => {}
            },
        }
        if let Some(game_settings) = start {
            self.screen = Screen::Game(GameScreen::new(game_settings)?);
        }
        Ok(true)
    }

    fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
        self.sounds.muted = self.settings.muted;
        // Persisting the preference is best effort
        self.settings.save().ok();
    }

    fn draw(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Menu(menu) => draw_menu(frame, menu, self.settings.muted),
            Screen::Game(screen) => draw_game(frame, screen, self.settings.muted),
        }
    }
}

fn mute_label(muted: bool) -> &'static str {
    if muted { "unmute" } else { "mute" }
}

fn help_line(bindings: &[(&str, &str)]) -> Paragraph<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(" | ".into());
        }
        spans.push((*key).to_string().bold().white());
        spans.push(format!(" {action}").into());
    }
    Paragraph::new(Line::from(spans))
}

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn draw_menu(frame: &mut Frame, menu: &Menu, muted: bool) {
    let [header_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header = Paragraph::new(vec![
        Line::from("Memory Game".bold()),
        Line::from("Flip cards and find all matching pairs"),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered());
    frame.render_widget(header, header_area);

    let lines: Vec<Line> = menu
        .options()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == menu.cursor() {
                Line::from(format!("→ {label}")).bold().white()
            } else {
                Line::from(format!("  {label}"))
            }
        })
        .collect();
    let list = Paragraph::new(lines).block(
        Block::bordered()
            .padding(Padding::uniform(1))
            .title(format!(" {}  ", menu.title())),
    );
    frame.render_widget(list, list_area);

    let help = help_line(&[
        ("↑/↓", "choose"),
        ("Enter", "confirm"),
        ("Backspace", "back"),
        ("M", mute_label(muted)),
        ("Esc", "quit"),
    ]);
    frame.render_widget(help, help_area);
}

fn draw_game(frame: &mut Frame, screen: &GameScreen, muted: bool) {
    let view = screen.game.view();
    let [header_area, grid_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header_area, &view);
    draw_grid(frame, grid_area, &view, screen.focus);

    let help = help_line(&[
        ("arrows", "move"),
        ("Enter/Space", "flip"),
        ("R", "restart"),
        ("M", mute_label(muted)),
        ("Esc", "menu"),
    ]);
    frame.render_widget(help, help_area);

    if view.is_game_over {
        draw_game_over(frame, &view);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, view: &GameView) {
    let mut spans: Vec<Span> = vec![format!(" moves: {}", view.move_count).into()];
    if let Some(limit) = view.move_limit {
        spans.push(format!("/{limit}").into());
    }
    spans.push(format!("  pairs: {}/{}", view.matched_pairs, view.total_pairs).into());
    spans.push(format!("  time: {}", format_time(view.elapsed_seconds)).into());
    if let Some(limit) = view.time_limit {
        spans.push(format!(" of {}", format_time(limit)).into());
    }
    if view.player_count == PlayerCount::Two {
        spans.push(
            format!(
                "  P1 {} - P2 {}  turn: ",
                view.player_pairs[0], view.player_pairs[1]
            )
            .into(),
        );
        spans.push(view.current_player.to_string().bold().white());
    }
    let header =
        Paragraph::new(Line::from(spans)).block(Block::bordered().title(format!(" {}  ", view.mode)));
    frame.render_widget(header, area);
}

fn draw_grid(frame: &mut Frame, area: Rect, view: &GameView, focus: usize) {
    let rows = Layout::vertical(vec![Constraint::Ratio(1, view.rows as u32); view.rows]).split(area);
    for (r, row_area) in rows.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, view.columns as u32); view.columns])
                .split(*row_area);
        for (c, cell_area) in cells.iter().enumerate() {
            let index = r * view.columns + c;
            if let Some(card) = view.cards.get(index) {
                draw_card(frame, *cell_area, card, index == focus, view);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &Card, focused: bool, view: &GameView) {
    let mut block = Block::bordered();
    if focused {
        block = block.border_style(Style::default().yellow().bold());
    }
    if card.is_matched
        && view.player_count == PlayerCount::Two
        && let Some(player) = card.matched_by
    {
        block = block.title_bottom(Line::from(format!("P{}", player.number())).right_aligned());
    }

    let face = if card.is_face_up() {
        card.symbol.as_str().to_string()
    } else {
        "?".to_string()
    };
    let mut face = Paragraph::new(face).alignment(Alignment::Center);
    if card.is_matched {
        face = face.dim();
    }
    frame.render_widget(face.block(block), area);
}

fn two_player_summary(p1: usize, p2: usize) -> &'static str {
    match p1.cmp(&p2) {
        std::cmp::Ordering::Greater => "player 1 takes the round",
        std::cmp::Ordering::Less => "player 2 takes the round",
        std::cmp::Ordering::Equal => "it's a tie",
    }
}

fn draw_game_over(frame: &mut Frame, view: &GameView) {
    let vertical = Layout::vertical([Constraint::Max(10)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Max(44)]).flex(Flex::Center);
    let [overlay] = vertical.areas(frame.area());
    let [overlay] = horizontal.areas(overlay);
    frame.render_widget(Clear, overlay);

    let title = if view.did_win {
        " You won!  "
    } else {
        " Game over  "
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(format!(
            "moves: {}   time: {}",
            view.move_count,
            format_time(view.elapsed_seconds)
        ))
        .centered(),
    ];
    if view.player_count == PlayerCount::Two {
        let [p1, p2] = view.player_pairs;
        lines.push(Line::from(format!("P1 {p1} pairs   P2 {p2} pairs")).centered());
        if view.did_win {
            lines.push(Line::from(two_player_summary(p1, p2)).centered());
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("R restart | Esc menu").centered());

    let modal = Paragraph::new(lines).block(
        Block::bordered()
            .title(title)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(modal, overlay);
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4x3 grid: indices 0..11, row-major
    const COLS: usize = 4;
    const TOTAL: usize = 12;

    #[test]
    fn test_focus_moves_within_row() {
        assert_eq!(step_focus(1, COLS, TOTAL, Direction::Left), 0);
        assert_eq!(step_focus(1, COLS, TOTAL, Direction::Right), 2);
    }

    #[test]
    fn test_focus_clamps_at_row_edges() {
        assert_eq!(step_focus(0, COLS, TOTAL, Direction::Left), 0);
        assert_eq!(step_focus(3, COLS, TOTAL, Direction::Right), 3);
        assert_eq!(step_focus(4, COLS, TOTAL, Direction::Left), 4);
    }

    #[test]
    fn test_focus_moves_between_rows() {
        assert_eq!(step_focus(5, COLS, TOTAL, Direction::Up), 1);
        assert_eq!(step_focus(5, COLS, TOTAL, Direction::Down), 9);
    }

    #[test]
    fn test_focus_clamps_at_grid_top_and_bottom() {
        assert_eq!(step_focus(2, COLS, TOTAL, Direction::Up), 2);
        assert_eq!(step_focus(9, COLS, TOTAL, Direction::Down), 9);
    }

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(300), "5:00");
    }
}
