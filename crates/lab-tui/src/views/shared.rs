//! Shared rendering helpers: layout math, feedback panels, and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use lab_core::{Feedback, Verdict};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Feedback panel lines for an answered scenario or step.
pub fn feedback_lines<'a>(feedback: &Feedback<'a>, points: u32) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    match feedback.verdict {
        Verdict::Correct => lines.push(Line::from(Span::styled(
            format!("\u{2713} Correct!  +{points} points"),
            Style::default().fg(Color::Green).bold(),
        ))),
        Verdict::Incorrect => lines.push(Line::from(Span::styled(
            "\u{2717} Not quite",
            Style::default().fg(Color::Red).bold(),
        ))),
    }
    if !feedback.explanation.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            feedback.explanation,
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  \u{2191}/k \u{2193}/j   Move the cursor"),
        Line::from("  Enter/Space Start module / act on the row"),
        Line::from("  s           Submit the current answer"),
        Line::from("  r           Reveal the system map (System Thinker)"),
        Line::from("  n / Enter   Continue after feedback"),
        Line::from("  Esc         Back to the module list"),
        Line::from("  m           Toggle sound"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
