//! Contact section with reachability info and the message form

use super::widgets::apply_reveal;
use crate::app::App;
use crate::content;
use crate::platform::SEND_SHORTCUT;
use crate::relay::SubmissionOutcome;
use crate::state::{FormField, BUTTON_CLEAR, BUTTON_SEND};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_info(frame, chunks[0], app);
    draw_form(frame, chunks[1], app);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    lines.extend(apply_reveal(
        vec![
            Line::from(Span::styled(
                "Get In Touch",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Have a project in mind or just want to say hi? My inbox is always open.",
                Style::default().fg(Color::Gray),
            )),
        ],
        app.reveal.progress(0),
    ));
    lines.push(Line::from(""));

    let mut info_lines: Vec<Line> = vec![];
    for info in content::CONTACT_INFO {
        info_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", info.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(info.value, Style::default().fg(Color::White)),
        ]));
        info_lines.push(Line::from(""));
    }
    lines.extend(apply_reveal(info_lines, app.reveal.progress(1)));

    let mut social_lines: Vec<Line> = vec![Line::from(Span::styled(
        "Elsewhere",
        Style::default().fg(Color::LightMagenta),
    ))];
    for link in content::SOCIAL_LINKS {
        social_lines.push(Line::from(vec![
            Span::styled("▹ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<10}", link.label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(link.url, Style::default().fg(Color::Blue)),
        ]));
    }
    social_lines.push(Line::from(""));
    social_lines.push(Line::from(Span::styled(
        "Ctrl+Y copies my email address",
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(apply_reveal(social_lines, app.reveal.progress(2)));

    let info = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(info, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for (idx, chunk) in chunks.iter().take(3).enumerate() {
        if let Some(field) = form.get_field(idx) {
            let active = form.active_field_index == idx && !form.is_buttons_row_active();
            draw_field(frame, *chunk, field, active);
        }
    }

    draw_buttons(frame, chunks[3], app);
    draw_banner(frame, chunks[4], app);
}

fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, active: bool) {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label));

    let text = field.as_text();
    let content_line = if text.is_empty() && !active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let mut spans = vec![Span::raw(text.to_string())];
        if active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(content_line)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;
    let buttons_active = form.is_buttons_row_active();
    let sending = app.submitter.is_in_flight();

    let button_style = |selected: bool, enabled: bool| {
        if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if buttons_active && selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    };

    let send_label = if sending { "[ Sending... ]" } else { "[ Send Message ]" };
    let send_enabled = !sending && form.is_complete();

    let row = Line::from(vec![
        Span::styled(
            "[ Clear ]",
            button_style(form.selected_button == BUTTON_CLEAR, true),
        ),
        Span::raw("   "),
        Span::styled(
            send_label,
            button_style(form.selected_button == BUTTON_SEND, send_enabled),
        ),
        Span::raw("   "),
        Span::styled(
            format!("({SEND_SHORTCUT} sends from anywhere)"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let buttons = Paragraph::new(row).alignment(Alignment::Center);
    frame.render_widget(buttons, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.submitter.outcome() {
        SubmissionOutcome::Success => Line::from(Span::styled(
            "✓ Thanks for your message! I'll get back to you soon.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        SubmissionOutcome::Failure => {
            let message = app
                .submitter
                .error_message()
                .unwrap_or("Something went wrong. Please try again.");
            Line::from(Span::styled(
                format!("✗ {message}"),
                Style::default().fg(Color::Red),
            ))
        }
        SubmissionOutcome::InFlight => Line::from(Span::styled(
            "Sending your message...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionOutcome::Idle => Line::from(""),
    };

    let banner = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}
