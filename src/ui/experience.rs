//! Experience section rendered as a vertical timeline

use super::widgets::apply_reveal;
use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw the experience section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_timeline(frame, chunks[1], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    lines.extend(apply_reveal(
        vec![
            Line::from(Span::styled(
                "Experience",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Where I've worked and what I did there",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        app.reveal.progress(0),
    ));

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_timeline(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    for (idx, exp) in content::EXPERIENCES.iter().enumerate() {
        let marker = if exp.current { "●" } else { "○" };
        let marker_color = if exp.current {
            Color::Green
        } else {
            Color::DarkGray
        };

        let mut entry = vec![
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
                Span::styled(
                    exp.role,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  @ {}", exp.company),
                    Style::default().fg(Color::LightMagenta),
                ),
            ]),
            Line::from(vec![
                Span::raw("│ "),
                Span::styled(exp.period, Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("  ·  {}", exp.location),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        for point in exp.highlights {
            entry.push(Line::from(vec![
                Span::raw("│   "),
                Span::styled("▹ ", Style::default().fg(Color::Cyan)),
                Span::styled(*point, Style::default().fg(Color::Gray)),
            ]));
        }
        entry.push(Line::from("│"));

        lines.extend(apply_reveal(entry, app.reveal.progress(1 + idx)));
    }

    lines.extend(apply_reveal(
        vec![Line::from(Span::styled(
            "Open to internships and collaboration.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        ))],
        app.reveal.progress(1 + content::EXPERIENCES.len()),
    ));

    let timeline = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(timeline, area);
}
