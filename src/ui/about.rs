//! About section with bio and education card

use super::widgets::apply_reveal;
use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the about section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(area);

    draw_bio(frame, chunks[0], app);
    draw_education(frame, chunks[1], app);
}

/// Draw the bio paragraphs (left side)
fn draw_bio(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    lines.extend(apply_reveal(
        vec![
            Line::from(Span::styled(
                "About Me",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Get to know me better",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        app.reveal.progress(0),
    ));
    lines.push(Line::from(""));

    for (idx, paragraph) in content::ABOUT_PARAGRAPHS.iter().enumerate() {
        lines.extend(apply_reveal(
            vec![Line::from(Span::styled(
                *paragraph,
                Style::default().fg(Color::Gray),
            ))],
            app.reveal.progress(1 + idx),
        ));
        lines.push(Line::from(""));
    }

    lines.extend(apply_reveal(
        vec![
            Line::from(vec![
                Span::styled("⌂ ", Style::default().fg(Color::Cyan)),
                Span::raw(content::PROFILE.location),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                content::PROFILE.resume_note,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ],
        app.reveal.progress(3),
    ));

    let bio = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(bio, area);
}

/// Draw the education card (right side)
fn draw_education(frame: &mut Frame, area: Rect, app: &App) {
    let education = &content::EDUCATION;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            education.degree,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            education.institution,
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("CPI: ", Style::default().fg(Color::DarkGray)),
            Span::raw(education.cpi),
        ]),
        Line::from(vec![
            Span::styled("Expected Graduation: ", Style::default().fg(Color::DarkGray)),
            Span::raw(education.graduation),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Relevant Coursework",
            Style::default().fg(Color::LightCyan),
        )),
    ];
    for course in education.coursework {
        lines.push(Line::from(vec![
            Span::styled("  ▹ ", Style::default().fg(Color::Cyan)),
            Span::raw(*course),
        ]));
    }

    let lines = apply_reveal(lines, app.reveal.progress(4));

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Education ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(card, area);
}
