//! Memory game engine - entities, deck generation, and the session FSM.
//!
//! This module provides the core game implementation including:
//! - The board/theme catalogs and card entities
//! - Uniform deck generation with an injectable random source
//! - The session state machine and its phase definitions
//! - Pure end-condition evaluation

pub mod constants;
pub mod deck;
pub mod entities;
pub mod outcome;
pub mod state_machine;
pub mod states;

pub use deck::DeckError;
pub use outcome::Outcome;
pub use state_machine::{GameSettings, MemoryGame, ResolutionTicket};
