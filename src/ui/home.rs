//! Home (hero) section

use super::widgets::apply_reveal;
use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw the hero section, revealing each block with a stagger
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let profile = &content::PROFILE;
    let mut lines: Vec<Line> = vec![Line::from(""), Line::from("")];

    // Greeting badge
    lines.extend(apply_reveal(
        vec![Line::from(Span::styled(
            format!("( {} )", profile.greeting),
            Style::default().fg(Color::Magenta),
        ))],
        app.reveal.progress(0),
    ));
    lines.push(Line::from(""));

    // Name heading
    lines.extend(apply_reveal(
        vec![Line::from(vec![
            Span::raw("Hi, I'm "),
            Span::styled(
                profile.name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])],
        app.reveal.progress(1),
    ));
    lines.push(Line::from(""));

    // Role line
    lines.extend(apply_reveal(
        vec![Line::from(Span::styled(
            profile.role,
            Style::default().fg(Color::LightCyan),
        ))],
        app.reveal.progress(2),
    ));
    lines.push(Line::from(""));

    // Summary
    lines.extend(apply_reveal(
        vec![Line::from(Span::styled(
            profile.summary,
            Style::default().fg(Color::Gray),
        ))],
        app.reveal.progress(3),
    ));
    lines.push(Line::from(""));

    // Calls to action
    lines.extend(apply_reveal(
        vec![Line::from(vec![
            Span::styled("[c]", Style::default().fg(Color::Cyan)),
            Span::raw(" Send a message   "),
            Span::styled("[y]", Style::default().fg(Color::Cyan)),
            Span::raw(" Copy GitHub link"),
        ])],
        app.reveal.progress(4),
    ));
    lines.push(Line::from(""));

    // Social links
    let mut social_spans: Vec<Span> = vec![];
    for (idx, link) in content::SOCIAL_LINKS.iter().enumerate() {
        if idx > 0 {
            social_spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        social_spans.push(Span::styled(link.label, Style::default().fg(Color::Blue)));
    }
    lines.extend(apply_reveal(
        vec![Line::from(social_spans)],
        app.reveal.progress(5),
    ));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}
