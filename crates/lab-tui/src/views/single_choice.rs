//! Single-choice screen: the argument under scrutiny and its candidate answers.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lab_core::{ScenarioDefinition, Selection};

use crate::app::LabApp;
use crate::views::shared;

/// Draw the single-choice scenario in view.
pub fn draw(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::SingleChoice(def)) = app.session.scenario() else {
        return;
    };
    let Some(Selection::Single(chosen)) = app.session.selection() else {
        return;
    };
    let answered = app.session.feedback().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(area);

    let context = Paragraph::new(format!("\u{201c}{}\u{201d}", def.context))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::Gray).italic())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(context, chunks[0]);

    let prompt = Paragraph::new(&*def.prompt).style(Style::default().fg(Color::White).bold());
    frame.render_widget(prompt, chunks[1]);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, option) in def.options.iter().enumerate() {
        let is_chosen = *chosen == Some(option.id);
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
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    if let (Some(feedback), Some(module)) = (app.session.feedback(), app.session.active_module()) {
        let panel = Paragraph::new(shared::feedback_lines(&feedback, module.points))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(panel, chunks[3]);
    }
}
