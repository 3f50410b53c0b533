//! Home screen: the module list.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::LabApp;

/// Draw the module list with the cursor row highlighted.
pub fn draw(frame: &mut Frame, app: &LabApp, area: Rect) {
    let block = Block::default()
        .title(" Modules ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (i, module) in app.session.catalog().modules().iter().enumerate() {
        let selected = i == app.cursor;
        let marker = if selected { "\u{25b6} " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White).bold()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(&*module.title, title_style),
            Span::styled(
                format!("  ({}, {} pts)", module.kind, module.points),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", module.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }), inner);
}
