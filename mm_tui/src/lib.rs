//! Terminal client modules for the memory game.

pub mod app;
pub mod menu;
pub mod settings;
pub mod sounds;
