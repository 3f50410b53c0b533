//! Sound layer: fire-and-forget playback of engine cues.
//!
//! The engine only emits a [`Cue`] alongside each accepted intent; what
//! (if anything) is heard is decided here. The enabled/muted switch is
//! owned by the app, never the engine.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use lab_core::Cue;

/// Receives semantic cue events. Implementations must never block.
pub trait SoundPort {
    /// Play (or record, or drop) one cue.
    fn play(&mut self, cue: Cue);
}

/// Plays cues as terminal bells: one for clicks and navigation, two for
/// verdicts and reveals.
pub struct TerminalBell;

impl SoundPort for TerminalBell {
    fn play(&mut self, cue: Cue) {
        let bells: &[u8] = match cue {
            Cue::AnswerCorrect | Cue::AnswerIncorrect | Cue::SystemRevealed => b"\x07\x07",
            _ => b"\x07",
        };
        let mut stdout = io::stdout();
        if stdout.write_all(bells).is_ok() {
            stdout.flush().ok();
        }
    }
}

/// Discards all cues.
pub struct NullSound;

impl SoundPort for NullSound {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues for inspection; cloning shares the underlying log.
#[derive(Clone, Default)]
pub struct CueLog {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl CueLog {
    /// Snapshot of all cues played so far.
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SoundPort for CueLog {
    fn play(&mut self, cue: Cue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}
