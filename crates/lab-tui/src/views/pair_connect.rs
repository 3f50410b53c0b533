//! Pair-connect screen: tap components to link them, then reveal the map.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lab_core::{ScenarioDefinition, Selection};

use crate::app::LabApp;
use crate::views::shared;

/// Draw the pair-connect scenario in view.
pub fn draw(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::PairConnect(def)) = app.session.scenario() else {
        return;
    };
    let Some(Selection::Pairs(progress)) = app.session.selection() else {
        return;
    };
    let revealed = app.session.feedback().is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(10),
        ])
        .split(area);

    let description = Paragraph::new(&*def.description)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", def.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(description, chunks[0]);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, component) in def.components.iter().enumerate() {
        let is_anchor = progress.anchor.as_deref() == Some(component.id.as_str());
        let degree = progress
            .found
            .iter()
            .filter(|p| p.first() == component.id || p.second() == component.id)
            .count();

        let cursor = if i == app.cursor && !revealed {
            "\u{25b6} "
        } else {
            "  "
        };
        let style = if is_anchor {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else if degree > 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {} ", component.label), style),
        ];
        if degree > 0 {
            spans.push(Span::styled(
                format!(" \u{2014}{degree}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if revealed {
        draw_reveal(frame, app, chunks[2]);
    } else {
        draw_discovered(frame, app, chunks[2]);
    }
}

/// Pairs discovered so far, by component labels.
fn draw_discovered(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::PairConnect(def)) = app.session.scenario() else {
        return;
    };
    let Some(Selection::Pairs(progress)) = app.session.selection() else {
        return;
    };

    let mut lines: Vec<Line<'_>> = Vec::new();
    if progress.found.is_empty() {
        lines.push(Line::from(Span::styled(
            "Tap two components to connect them.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for pair in &progress.found {
        let first = match def.component(pair.first()) {
            Some(c) => c.label.as_str(),
            None => pair.first(),
        };
        let second = match def.component(pair.second()) {
            Some(c) => c.label.as_str(),
            None => pair.second(),
        };
        lines.push(Line::from(Span::styled(
            format!("{first} \u{27f7} {second}"),
            Style::default().fg(Color::Green),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Connections ({}) ", progress.found.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}

/// The revealed system map: adjacency per component plus the key insight.
fn draw_reveal(frame: &mut Frame, app: &LabApp, area: Rect) {
    let Some(ScenarioDefinition::PairConnect(def)) = app.session.scenario() else {
        return;
    };

    let mut lines: Vec<Line<'_>> = Vec::new();
    for component in &def.components {
        let targets: Vec<&str> = component
            .affects
            .iter()
            .map(|id| match def.component(id) {
                Some(c) => c.label.as_str(),
                None => id.as_str(),
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(&*component.label, Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!(" affects {}", targets.join(", ")),
                Style::default().fg(Color::White),
            ),
        ]));
    }
    if let (Some(feedback), Some(module)) = (app.session.feedback(), app.session.active_module()) {
        lines.push(Line::from(""));
        lines.extend(shared::feedback_lines(&feedback, module.points));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" System Map ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(panel, area);
}
