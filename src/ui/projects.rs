//! Projects section rendered as bordered cards

use super::widgets::apply_reveal;
use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 9;

/// Draw the projects section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_cards(frame, chunks[1], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    lines.extend(apply_reveal(
        vec![
            Line::from(Span::styled(
                "Featured Projects",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "A selection of things I've built recently",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        app.reveal.progress(0),
    ));

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App) {
    let mut y = area.y;

    // Scroll just enough to keep the selected card on screen
    let per_screen = (area.height / (CARD_HEIGHT + 1)).max(1) as usize;
    let visible_from = app
        .state
        .selected_index
        .saturating_sub(per_screen.saturating_sub(1));

    for (idx, project) in content::PROJECTS.iter().enumerate().skip(visible_from) {
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        draw_project_card(frame, card_area, app, idx, project);
        y += CARD_HEIGHT + 1;
    }

    // Footer link to the full repository list
    let footer_y = area.y + area.height.saturating_sub(1);
    if footer_y > y {
        let footer_area = Rect::new(area.x, footer_y, area.width, 1);
        let footer = Paragraph::new(apply_reveal(
            vec![Line::from(vec![
                Span::styled("More on GitHub: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    content::GITHUB_PROFILE,
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ])],
            app.reveal.progress(1 + content::PROJECTS.len()),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }
}

fn draw_project_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    idx: usize,
    project: &content::Project,
) {
    let selected = app.state.selected_index == idx;
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let star = if project.featured { "★ " } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {star}{} ", project.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut tag_spans: Vec<Span> = vec![];
    for (tag_idx, tag) in project.tech.iter().enumerate() {
        if tag_idx > 0 {
            tag_spans.push(Span::raw(" "));
        }
        tag_spans.push(Span::styled(
            format!("#{tag}"),
            Style::default().fg(Color::Magenta),
        ));
    }

    let mut link_spans: Vec<Span> = vec![
        Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.repo, Style::default().fg(Color::Blue)),
    ];
    if let Some(live) = project.live {
        link_spans.push(Span::raw("   "));
        link_spans.push(Span::styled("Live: ", Style::default().fg(Color::DarkGray)));
        link_spans.push(Span::styled(live, Style::default().fg(Color::Green)));
    }

    let lines = apply_reveal(
        vec![
            Line::from(Span::styled(
                project.description,
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(tag_spans),
            Line::from(""),
            Line::from(link_spans),
        ],
        app.reveal.progress(1 + idx),
    );

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
