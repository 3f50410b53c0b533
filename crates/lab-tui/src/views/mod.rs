//! Frame rendering: header, the screen in view, status bar, help popup.

mod home;
mod multi_select;
mod pair_connect;
mod pipeline;
pub mod shared;
mod single_choice;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use lab_core::{Phase, ScenarioDefinition, ScenarioKind};

use crate::app::LabApp;

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, app: &LabApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    if app.session.is_home() {
        home::draw(frame, app, chunks[1]);
    } else {
        draw_module(frame, app, chunks[1]);
    }

    let status = Paragraph::new(status_hint(app))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        shared::draw_help_popup(frame);
    }
}

/// Title, running score, and the sound switch.
fn draw_header(frame: &mut Frame, app: &LabApp, area: Rect) {
    let sound = if app.sound_enabled { "sound on" } else { "muted" };
    let header = Line::from(vec![
        Span::styled(" The Analysis Lab ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(
            format!("Score: {}", app.session.score()),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::raw("  "),
        Span::styled(format!("[{sound}]"), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// The active module: a title row plus the kind-specific screen.
fn draw_module(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(module) = app.session.active_module() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let index = app.session.scenario_index().unwrap_or(0);
    let title = Line::from(vec![
        Span::styled(&*module.title, Style::default().fg(Color::Green).bold()),
        Span::styled(
            format!("  ({}/{})", index + 1, module.scenarios.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    match app.session.scenario() {
        Some(ScenarioDefinition::MultiSelect(_)) => multi_select::draw(frame, app, chunks[1]),
        Some(ScenarioDefinition::SingleChoice(_)) => single_choice::draw(frame, app, chunks[1]),
        Some(ScenarioDefinition::PairConnect(_)) => pair_connect::draw(frame, app, chunks[1]),
        Some(ScenarioDefinition::Pipeline(_)) => pipeline::draw(frame, app, chunks[1]),
        None => {}
    }
}

/// Key hints for the state in view.
fn status_hint(app: &LabApp) -> &'static str {
    if app.session.is_home() {
        return " \u{2191}/\u{2193}:select  Enter:start  m:sound  ?:help  q:quit";
    }
    if matches!(app.session.phase(), Some(Phase::Answered(_))) {
        return " Enter/n:continue  Esc:back  q:quit";
    }
    match app.session.active_module().map(|m| m.kind) {
        Some(ScenarioKind::MultiSelect) => {
            " \u{2191}/\u{2193}:move  Space:toggle  s:submit  Esc:back  q:quit"
        }
        Some(ScenarioKind::PairConnect) => {
            " \u{2191}/\u{2193}:move  Space:tap  r:reveal map  Esc:back  q:quit"
        }
        _ => " \u{2191}/\u{2193}:move  Space:choose  s:submit  Esc:back  q:quit",
    }
}
