//! # Memory Match
//!
//! A memory-matching card game engine using a finite state machine (FSM)
//! design with `enum_dispatch` for phase dispatch.
//!
//! Players flip pairs of cards on a grid; the engine tracks matches,
//! moves, elapsed time, turn order, and win/loss conditions across three
//! modes (classic, timed, limited-moves) and solo or two-player play.
//! The library owns the authoritative session state; presentation layers
//! read snapshots and feed events back in.
//!
//! ## Architecture
//!
//! A session moves through four phases:
//!
//! - **Idle**: deck dealt, timer not started
//! - **Running**: selections accepted, timer ticking
//! - **Resolving**: two cards face up, input locked until the scheduled
//!   resolution completes
//! - **Ended**: terminal win or loss, until an explicit restart
//!
//! ## Core Modules
//!
//! - [`game`]: entities, deck generation, state machine, end conditions
//! - [`sound`]: the fire-and-forget sound cue boundary
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameSettings, MemoryGame};
//! use memory_match::game::entities::{
//!     GameMode, PlayerCount, board_size_for, theme_named,
//! };
//!
//! let settings = GameSettings::new(
//!     board_size_for(6).unwrap(),
//!     theme_named("animals").unwrap(),
//!     GameMode::Classic,
//!     PlayerCount::Solo,
//! );
//! let mut game = MemoryGame::new(settings).unwrap();
//! if let Some(ticket) = game.select_card(0).or_else(|| game.select_card(1)) {
//!     // schedule this after ticket.delay() in a real UI
//!     game.complete_resolution(ticket);
//! }
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    DeckError, GameSettings, MemoryGame, Outcome, ResolutionTicket,
    entities::{self, BOARD_SIZES, THEMES},
};

/// Sound cue boundary.
pub mod sound;
pub use sound::{LogNotifier, NullNotifier, SoundCue, SoundNotifier};
