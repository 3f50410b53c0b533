//! Pipeline screen: step markers, the experiment, and the step in view.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lab_core::{ScenarioDefinition, Selection};

use crate::app::LabApp;
use crate::views::shared;

/// Draw the pipeline scenario in view.
pub fn draw(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::Pipeline(def)) = app.session.scenario() else {
        return;
    };
    let Some(Selection::Steps(progress)) = app.session.selection() else {
        return;
    };
    let Some(step) = def.steps.get(progress.step) else {
        return;
    };
    let answered = app.session.feedback().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(area);

    // One marker per step: done, current, or ahead.
    let mut markers: Vec<Span<'_>> = Vec::new();
    for (i, s) in def.steps.iter().enumerate() {
        let style = if i < progress.step {
            Style::default().fg(Color::Green)
        } else if i == progress.step {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mark = if i < progress.step { "\u{2713}" } else { "" };
        markers.push(Span::styled(format!(" {}{} ", s.name, mark), style));
        if i + 1 < def.steps.len() {
            markers.push(Span::styled(" \u{2192} ", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(markers)), chunks[0]);

    let experiment = Paragraph::new(&*def.question)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", def.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(experiment, chunks[1]);

    let prompt = Paragraph::new(&*step.prompt).style(Style::default().fg(Color::White).bold());
    frame.render_widget(prompt, chunks[2]);

    let chosen = progress.current();
    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, option) in step.options.iter().enumerate() {
        let is_chosen = chosen == Some(option.id);
        let cursor = if i == app.cursor && !answered {
            "\u{25b6} "
        } else {
            "  "
        };

        let (marker, style) = if answered {
            if option.correct {
                ("(\u{2713}) ", Style::default().fg(Color::Green))
            } else if is_chosen {
                ("(\u{2717}) ", Style::default().fg(Color::Red))
            } else {
                ("( ) ", Style::default().fg(Color::DarkGray))
            }
        } else if is_chosen {
            ("(\u{2022}) ", Style::default().fg(Color::Cyan))
        } else {
            ("( ) ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(marker, style),
            Span::styled(&*option.label, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[3]);

    if let (Some(feedback), Some(module)) = (app.session.feedback(), app.session.active_module()) {
        let panel = Paragraph::new(shared::feedback_lines(&feedback, module.points))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(panel, chunks[4]);
    }
}
