//! Skills section with categorized skill chips

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

/// Draw the skills section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    lines.extend(apply_reveal(
        vec![
            Line::from(Span::styled(
                "Skills & Technologies",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Technologies I work with to bring ideas to life",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        app.reveal.progress(0),
    ));
    lines.push(Line::from(""));

    for (idx, category) in content::SKILL_CATEGORIES.iter().enumerate() {
        let header = Line::from(Span::styled(
            format!("── {} ──", category.title),
            Style::default().fg(Color::LightCyan),
        ));

        let mut chip_spans: Vec<Span> = vec![];
        for (skill_idx, skill) in category.skills.iter().enumerate() {
            if skill_idx > 0 {
                chip_spans.push(Span::raw("  "));
            }
            chip_spans.push(Span::styled(
                format!("[ {} ]", skill.name),
                Style::default().fg(skill.color),
            ));
        }

        lines.extend(apply_reveal(
            vec![header, Line::from(""), Line::from(chip_spans)],
            app.reveal.progress(1 + idx),
        ));
        lines.push(Line::from(""));
    }

    // Spoken languages
    let spoken_header = Line::from(Span::styled(
        "── Spoken Languages ──",
        Style::default().fg(Color::LightMagenta),
    ));
    let mut spoken_spans: Vec<Span> = vec![];
    for (idx, lang) in content::SPOKEN_LANGUAGES.iter().enumerate() {
        if idx > 0 {
            spoken_spans.push(Span::raw("  "));
        }
        spoken_spans.push(Span::styled(
            format!("[ {lang} ]"),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.extend(apply_reveal(
        vec![spoken_header, Line::from(""), Line::from(spoken_spans)],
        app.reveal.progress(1 + content::SKILL_CATEGORIES.len()),
    ));

    let skills = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((app.state.scroll_offset as u16, 0));
    frame.render_widget(skills, area);
}
