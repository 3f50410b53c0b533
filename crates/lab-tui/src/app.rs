//! Application state: the session, cursor, and key-to-intent mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lab_core::{Intent, Phase, ScenarioDefinition, Selection, Session};

use crate::sound::SoundPort;

/// State of the running TUI: the engine session plus presentation-only
/// concerns (cursor position, sound switch, help popup).
pub struct LabApp {
    /// The engine session; all game state lives here.
    pub session: Session,
    /// Highlighted row in the list currently on screen.
    pub cursor: usize,
    /// Whether cues are forwarded to the sound port.
    pub sound_enabled: bool,
    /// Whether the help popup is shown.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    sound: Box<dyn SoundPort>,
}

impl LabApp {
    /// Create an app over a session and a sound port.
    pub fn new(session: Session, sound: Box<dyn SoundPort>, sound_enabled: bool) -> Self {
        Self {
            session,
            cursor: 0,
            sound_enabled,
            show_help: false,
            should_quit: false,
            sound,
        }
    }

    /// Number of selectable rows on the current screen.
    pub fn item_count(&self) -> usize {
        if self.session.is_home() {
            return self.session.catalog().modules().len();
        }
        match self.session.scenario() {
            Some(ScenarioDefinition::MultiSelect(def)) => def.options.len(),
            Some(ScenarioDefinition::SingleChoice(def)) => def.options.len(),
            Some(ScenarioDefinition::PairConnect(def)) => def.components.len(),
            Some(ScenarioDefinition::Pipeline(def)) => def
                .steps
                .get(self.pipeline_step())
                .map_or(0, |s| s.options.len()),
            None => 0,
        }
    }

    /// Step cursor of the pipeline scenario in view, 0 otherwise.
    pub fn pipeline_step(&self) -> usize {
        match self.session.selection() {
            Some(Selection::Steps(progress)) => progress.step,
            _ => 0,
        }
    }

    /// Apply an intent, forward any cue, and keep the cursor in range.
    pub fn apply(&mut self, intent: Intent) {
        let changes_screen = matches!(
            intent,
            Intent::StartModule { .. } | Intent::ExitToHome | Intent::Advance
        );
        let outcome = self.session.apply(intent);
        if let Some(cue) = outcome.cue()
            && self.sound_enabled
        {
            self.sound.play(cue);
        }
        if outcome.is_accepted() && changes_screen {
            self.cursor = 0;
        } else {
            self.clamp_cursor();
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('m') => self.sound_enabled = !self.sound_enabled,
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.apply(Intent::ExitToHome);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.item_count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                // Enter advances from a feedback panel, otherwise acts on
                // the highlighted row.
                if matches!(self.session.phase(), Some(Phase::Answered(_))) {
                    self.apply(Intent::Advance);
                } else {
                    self.activate_cursor();
                }
            }
            KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Char('s') => self.apply(Intent::Submit),
            KeyCode::Char('r') => self.apply(Intent::Reveal),
            KeyCode::Char('n') => self.apply(Intent::Advance),
            _ => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    fn activate_cursor(&mut self) {
        if self.session.is_home() {
            let intent = self
                .session
                .catalog()
                .modules()
                .get(self.cursor)
                .map(|m| Intent::StartModule { id: m.id.clone() });
            if let Some(intent) = intent {
                self.apply(intent);
            }
            return;
        }
        let intent = match self.session.scenario() {
            Some(ScenarioDefinition::MultiSelect(def)) => def
                .options
                .get(self.cursor)
                .map(|o| Intent::ToggleOption { id: o.id }),
            Some(ScenarioDefinition::SingleChoice(def)) => def
                .options
                .get(self.cursor)
                .map(|o| Intent::SelectOption { id: o.id }),
            Some(ScenarioDefinition::PairConnect(def)) => def
                .components
                .get(self.cursor)
                .map(|c| Intent::TapComponent { id: c.id.clone() }),
            Some(ScenarioDefinition::Pipeline(def)) => def
                .steps
                .get(self.pipeline_step())
                .and_then(|s| s.options.get(self.cursor))
                .map(|o| Intent::SelectOption { id: o.id }),
            None => None,
        };
        if let Some(intent) = intent {
            self.apply(intent);
        }
    }
}
