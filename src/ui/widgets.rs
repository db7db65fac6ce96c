//! Reusable UI widget helpers

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Apply entrance-reveal to a block of lines.
///
/// Hidden items become blank lines of the same height so the layout never
/// jumps; partially revealed items are dimmed; finished items keep their
/// own styling.
pub fn apply_reveal(lines: Vec<Line<'static>>, progress: f32) -> Vec<Line<'static>> {
    if progress <= 0.0 {
        lines.iter().map(|_| Line::from("")).collect()
    } else if progress < 1.0 {
        lines.into_iter().map(dim_line).collect()
    } else {
        lines
    }
}

fn dim_line(line: Line<'static>) -> Line<'static> {
    let spans: Vec<Span> = line
        .spans
        .into_iter()
        .map(|s| Span::styled(s.content, Style::default().fg(Color::DarkGray)))
        .collect();
    Line::from(spans)
}
