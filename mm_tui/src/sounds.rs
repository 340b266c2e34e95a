//! Terminal sound cues.
//!
//! The closest a terminal gets to the original tones is the bell
//! character. Flip cues are deliberately silent so rapid play does not
//! turn into a beep storm; write failures are swallowed since cues must
//! never affect game state.

use memory_match::{SoundCue, SoundNotifier};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default)]
pub struct Sounds {
    pub muted: bool,
}

impl Sounds {
    #[must_use]
    pub const fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl SoundNotifier for Sounds {
    fn notify(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        let rings = match cue {
            SoundCue::Flip => 0,
            SoundCue::Match | SoundCue::Mismatch => 1,
            SoundCue::Win | SoundCue::Lose => 2,
        };
        let mut stdout = io::stdout();
        for _ in 0..rings {
            let _ = stdout.write_all(b"\x07");
        }
        let _ = stdout.flush();
    }
}
