//! Multi-select screen: situation, factor checklist, feedback.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lab_core::evaluate::{self, OptionClass};
use lab_core::{ScenarioDefinition, Selection};

use crate::app::LabApp;
use crate::views::shared;

/// Draw the multi-select scenario in view.
pub fn draw(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::MultiSelect(def)) = app.session.scenario() else {
        return;
    };
    let Some(Selection::Multi(selected)) = app.session.selection() else {
        return;
    };
    let answered = app.session.feedback().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(area);

    let situation = Paragraph::new(&*def.situation)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" What contributes to this? ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(situation, chunks[0]);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, option) in def.options.iter().enumerate() {
        let is_selected = selected.contains(&option.id);
        let cursor = if i == app.cursor && !answered {
            "\u{25b6} "
        } else {
            "  "
        };

        let (marker, style) = if answered {
            match evaluate::classify(option, is_selected) {
                OptionClass::TruePositive => ("[\u{2713}] ", Style::default().fg(Color::Green)),
                OptionClass::FalsePositive => ("[\u{2717}] ", Style::default().fg(Color::Red)),
                OptionClass::Missed => ("[ ] ", Style::default().fg(Color::Yellow)),
                OptionClass::TrueNegative => ("[ ] ", Style::default().fg(Color::DarkGray)),
            }
        } else if is_selected {
            ("[x] ", Style::default().fg(Color::Cyan))
        } else {
            ("[ ] ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(marker, style),
            Span::styled(&*option.label, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if let (Some(feedback), Some(module)) = (app.session.feedback(), app.session.active_module()) {
        let panel = Paragraph::new(shared::feedback_lines(&feedback, module.points))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(panel, chunks[2]);
    }
}
