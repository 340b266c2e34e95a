//! Memory game session state machine.
//!
//! A session exclusively owns its mutable state; the presentation layer
//! reads snapshots via [`MemoryGame::view`] and mutates only through the
//! event methods here. End conditions are re-evaluated synchronously
//! after every mutating event rather than through reactive side effects.

use log::debug;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

use super::constants::{MATCH_RESOLVE_DELAY, MISMATCH_RESOLVE_DELAY};
use super::deck::{self, DeckError};
use super::entities::{
    BoardSize, Card, CardIndex, GameMode, GameView, Player, PlayerCount, Theme, mode_limits,
};
use super::outcome::{self, Outcome};
use super::states::{Ended, Idle, PendingResolution, Phase, PhaseBehavior, Resolving, Running};
use crate::sound::SoundCue;

/// Immutable configuration a session is created from.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub board_size: BoardSize,
    pub theme: Theme,
    pub mode: GameMode,
    pub player_count: PlayerCount,
}

impl GameSettings {
    #[must_use]
    pub const fn new(
        board_size: BoardSize,
        theme: Theme,
        mode: GameMode,
        player_count: PlayerCount,
    ) -> Self {
        Self {
            board_size,
            theme,
            mode,
            player_count,
        }
    }
}

/// Mutable session data shared across all phases.
#[derive(Debug)]
pub struct GameData {
    /// The dealt deck. Replaced wholesale on restart, never mutated by
    /// a previous session's callbacks.
    pub deck: Vec<Card>,
    /// Indices of the cards awaiting resolution; at most two.
    pub(super) selected: Vec<CardIndex>,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub is_timer_running: bool,
    pub is_input_locked: bool,
    pub current_player: Player,
    /// Bumped on restart so in-flight resolution tickets from the
    /// previous deck become no-ops.
    pub(super) generation: u64,
    /// Queue of sound cues for the caller to drain and forward.
    pub(super) cues: VecDeque<SoundCue>,
}

impl GameData {
    fn fresh(deck: Vec<Card>, generation: u64) -> Self {
        Self {
            deck,
            selected: Vec::with_capacity(2),
            move_count: 0,
            elapsed_seconds: 0,
            is_timer_running: false,
            is_input_locked: false,
            current_player: Player::One,
            generation,
            cues: VecDeque::new(),
        }
    }
}

/// Handle for the scheduled half of a pair resolution.
///
/// Returned when a second card is selected. The caller schedules
/// [`MemoryGame::complete_resolution`] after [`delay`](Self::delay);
/// the embedded generation makes a ticket that outlives its session a
/// silent no-op. The delays are presentation tuning, not correctness:
/// completing earlier or later only changes how long the pair stays on
/// display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolutionTicket {
    generation: u64,
    delay: Duration,
}

impl ResolutionTicket {
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// A memory-matching game session.
#[derive(Debug)]
pub struct MemoryGame {
    pub data: GameData,
    pub(super) phase: Phase,
    settings: GameSettings,
}

impl MemoryGame {
    /// Deal a new session using the process-wide random source.
    pub fn new(settings: GameSettings) -> Result<Self, DeckError> {
        Self::with_rng(settings, &mut rand::rng())
    }

    /// Deal a new session from an injected random source.
    pub fn with_rng<R: Rng + ?Sized>(
        settings: GameSettings,
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        let deck = deck::generate(settings.board_size.total_cards, &settings.theme, rng)?;
        Ok(Self {
            data: GameData::fresh(deck, 0),
            phase: Idle::default().into(),
            settings,
        })
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Select the card at `index`.
    ///
    /// Ignored while input is locked, after the game has ended, or when
    /// the card is already face up. The first selection of a session
    /// starts the timer. Selecting a second card counts a move, locks
    /// input, and returns the resolution ticket the caller must
    /// schedule - unless counting the move itself ends the session, in
    /// which case the pair settles immediately and no ticket remains.
    pub fn select_card(&mut self, index: CardIndex) -> Option<ResolutionTicket> {
        if !self.phase.accepts_selection() || self.data.is_input_locked {
            return None;
        }
        let card = self.data.deck.get(index)?;
        if card.is_revealed || card.is_matched {
            return None;
        }

        if !self.data.is_timer_running {
            self.data.is_timer_running = true;
            self.phase = Running {}.into();
        }

        self.data.deck[index].is_revealed = true;
        self.data.selected.push(index);
        self.data.cues.push_back(SoundCue::Flip);

        if self.data.selected.len() < 2 {
            return None;
        }

        let (first, second) = (self.data.selected[0], self.data.selected[1]);
        self.data.move_count += 1;
        self.data.is_input_locked = true;
        let is_match = self.data.deck[first].symbol == self.data.deck[second].symbol;
        debug!(
            "move {}: cards {first} and {second} {}",
            self.data.move_count,
            if is_match { "match" } else { "differ" }
        );
        self.phase = Resolving {
            pending: PendingResolution {
                first,
                second,
                is_match,
            },
        }
        .into();

        // The move just counted can itself spend a limited-mode budget;
        // the loss is declared now, before the pair resolves.
        self.evaluate_end();
        if self.phase.is_terminal() {
            return None;
        }
        Some(ResolutionTicket {
            generation: self.data.generation,
            delay: if is_match {
                MATCH_RESOLVE_DELAY
            } else {
                MISMATCH_RESOLVE_DELAY
            },
        })
    }

    /// Apply the scheduled half of a pair resolution.
    ///
    /// Tickets from a previous session (the generation changed under
    /// them) and tickets arriving outside the resolving phase are
    /// discarded without effect.
    pub fn complete_resolution(&mut self, ticket: ResolutionTicket) {
        if ticket.generation != self.data.generation {
            debug!("discarding stale resolution ticket");
            return;
        }
        let Phase::Resolving(Resolving { pending }) = &self.phase else {
            return;
        };
        let pending = *pending;
        self.settle_pair(pending, true);
        self.phase = Running {}.into();
        self.evaluate_end();
    }

    /// Commit a resolved pair: card flags, cue, selection and lock
    /// cleanup. The turn only switches while the session continues.
    fn settle_pair(&mut self, pending: PendingResolution, switch_turn: bool) {
        let PendingResolution {
            first,
            second,
            is_match,
        } = pending;

        if is_match {
            // Matched cards keep their revealed flag; they stay on
            // display through the matched flag from here on.
            for index in [first, second] {
                let card = &mut self.data.deck[index];
                card.is_matched = true;
                card.matched_by = Some(self.data.current_player);
            }
            self.data.cues.push_back(SoundCue::Match);
        } else {
            self.data.deck[first].is_revealed = false;
            self.data.deck[second].is_revealed = false;
            self.data.cues.push_back(SoundCue::Mismatch);
            if switch_turn && self.settings.player_count == PlayerCount::Two {
                self.data.current_player = self.data.current_player.toggled();
            }
        }

        self.data.selected.clear();
        self.data.is_input_locked = false;
    }

    /// Advance the session clock by one second.
    ///
    /// Only has effect while the timer is running and the game is not
    /// over.
    pub fn tick(&mut self) {
        if !self.data.is_timer_running || self.phase.is_terminal() {
            return;
        }
        self.data.elapsed_seconds += 1;
        self.evaluate_end();
    }

    /// Replace the session with a fresh one: new deck, zeroed counters,
    /// player 1 to move. Invalidates any in-flight resolution tickets.
    pub fn restart(&mut self) -> Result<(), DeckError> {
        self.restart_with_rng(&mut rand::rng())
    }

    /// Restart from an injected random source.
    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        let deck = deck::generate(
            self.settings.board_size.total_cards,
            &self.settings.theme,
            rng,
        )?;
        self.data = GameData::fresh(deck, self.data.generation + 1);
        self.phase = Idle::default().into();
        debug!("session restarted");
        Ok(())
    }

    /// Drain queued sound cues for forwarding to a notifier.
    ///
    /// # Important
    /// This function's return value should be used - ignoring it drops
    /// the queued cues.
    #[must_use]
    pub fn drain_cues(&mut self) -> VecDeque<SoundCue> {
        std::mem::take(&mut self.data.cues)
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.data.deck.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Pairs claimed by the given player.
    #[must_use]
    pub fn pairs_for(&self, player: Player) -> usize {
        self.data
            .deck
            .iter()
            .filter(|c| c.matched_by == Some(player))
            .count()
            / 2
    }

    #[must_use]
    pub const fn total_pairs(&self) -> usize {
        self.settings.board_size.total_pairs()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn did_win(&self) -> bool {
        matches!(self.phase, Phase::Ended(Ended { won: true }))
    }

    /// Renderable snapshot of the session.
    #[must_use]
    pub fn view(&self) -> GameView {
        let (move_limit, time_limit) = mode_limits(
            self.settings.mode,
            self.settings.board_size.total_cards,
        );
        GameView {
            cards: self.data.deck.clone(),
            columns: self.settings.board_size.columns,
            rows: self.settings.board_size.rows,
            mode: self.settings.mode,
            player_count: self.settings.player_count,
            move_count: self.data.move_count,
            elapsed_seconds: self.data.elapsed_seconds,
            matched_pairs: self.matched_pairs(),
            total_pairs: self.total_pairs(),
            player_pairs: [self.pairs_for(Player::One), self.pairs_for(Player::Two)],
            current_player: self.data.current_player,
            move_limit,
            time_limit,
            is_input_locked: self.data.is_input_locked,
            is_game_over: self.is_game_over(),
            did_win: self.did_win(),
        }
    }

    // End conditions are checked after every mutating event, including
    // the move count on a second selection: a move that spends the last
    // of a limited budget loses even when its pair would have matched,
    // because the pair is still unresolved when the move is counted.
    fn evaluate_end(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        let outcome = outcome::evaluate(
            self.matched_pairs(),
            self.total_pairs(),
            self.settings.mode,
            self.data.elapsed_seconds,
            self.data.move_count,
            self.settings.board_size.total_cards,
        );
        match outcome {
            Outcome::None => {}
            Outcome::Win => self.finish(true),
            Outcome::TimedLoss | Outcome::LimitedLoss => self.finish(false),
        }
    }

    fn finish(&mut self, won: bool) {
        // A pair still awaiting its delayed resolution settles now, so
        // the terminal deck is never left with a dangling selection.
        if let Phase::Resolving(Resolving { pending }) = &self.phase {
            let pending = *pending;
            self.settle_pair(pending, false);
        }
        self.data.is_timer_running = false;
        self.data.cues.push_back(if won {
            SoundCue::Win
        } else {
            SoundCue::Lose
        });
        self.phase = Ended { won }.into();
        debug!(
            "session ended: {} after {} moves and {}s",
            if won { "win" } else { "loss" },
            self.data.move_count,
            self.data.elapsed_seconds
        );
    }
}
