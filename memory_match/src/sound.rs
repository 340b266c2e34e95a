//! Sound notification boundary.
//!
//! The session queues [`SoundCue`]s on discrete events; the presentation
//! layer drains them and forwards each to a [`SoundNotifier`]. Cues are
//! fire-and-forget: a notifier that fails must never affect game state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five discrete sound events a session emits.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SoundCue {
    Flip,
    Match,
    Mismatch,
    Win,
    Lose,
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Flip => "flip",
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Win => "win",
            Self::Lose => "lose",
        };
        write!(f, "{repr}")
    }
}

/// External collaborator invoked once per drained cue.
pub trait SoundNotifier {
    fn notify(&mut self, cue: SoundCue);
}

/// Notifier that drops every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl SoundNotifier for NullNotifier {
    fn notify(&mut self, _cue: SoundCue) {}
}

/// Notifier that records cues in the debug log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl SoundNotifier for LogNotifier {
    fn notify(&mut self, cue: SoundCue) {
        log::debug!("sound cue: {cue}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_display() {
        assert_eq!(SoundCue::Flip.to_string(), "flip");
        assert_eq!(SoundCue::Mismatch.to_string(), "mismatch");
    }

    #[test]
    fn test_null_notifier_accepts_all_cues() {
        let mut notifier = NullNotifier;
        for cue in [
            SoundCue::Flip,
            SoundCue::Match,
            SoundCue::Mismatch,
            SoundCue::Win,
            SoundCue::Lose,
        ] {
            notifier.notify(cue);
        }
    }
}
