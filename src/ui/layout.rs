//! Layout components (nav bar, content area, status bar)

use crate::app::App;
use crate::content;
use crate::platform::SEND_SHORTCUT;
use crate::relay::SubmissionOutcome;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the top nav bar including its border
pub const NAV_HEIGHT: u16 = 3;

/// Create the main layout: nav bar, content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Nav bar
            Constraint::Min(0),             // Content
            Constraint::Length(1),          // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the top nav bar with section tabs, highlighting the active one
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", content::PROFILE.logo_short),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (idx, section) in View::SECTIONS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let is_active = app.state.current_view == *section;
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", idx + 1, section.label()),
            style,
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(nav, area);
}

/// Map a click column on the nav row to a section tab.
///
/// Mirrors the span widths used in `draw_nav_bar` so hit testing and
/// rendering cannot drift apart independently.
pub fn nav_tab_at(column: u16) -> Option<View> {
    // Border + logo + two spaces, matching draw_nav_bar
    let mut cursor = 1 + content::PROFILE.logo_short.len() as u16 + 2 + 2;

    for (idx, section) in View::SECTIONS.iter().enumerate() {
        if idx > 0 {
            cursor += 3; // " │ "
        }
        let width = 1 + 1 + 1 + section.label().len() as u16 + 1; // " N Label "
        if column >= cursor && column < cursor + width {
            return Some(*section);
        }
        cursor += width;
    }

    None
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Relay credential status: the contact form only works with a key
    let relay_status = if app.config.has_access_key() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(relay_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Submission activity
    if app.submitter.outcome() == SubmissionOutcome::InFlight {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Sending...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Copy/status message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "1-6/Tab:sections  c:contact  y:copy GitHub link".to_string(),
        View::About | View::Skills => "1-6/Tab:sections  j/k:scroll".to_string(),
        View::Projects => "j/k:select  y:copy repo link  o:copy live link".to_string(),
        View::Experience => "j/k:select  1-6/Tab:sections".to_string(),
        View::Contact => {
            format!("Tab:next field  {SEND_SHORTCUT}:send  Ctrl+Y:copy email  Esc:home")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_tab_at_finds_first_tab() {
        // Column just inside the first tab after logo + padding
        let first_col = 1 + content::PROFILE.logo_short.len() as u16 + 2 + 2;
        assert_eq!(nav_tab_at(first_col), Some(View::Home));
    }

    #[test]
    fn test_nav_tab_at_border_is_none() {
        assert_eq!(nav_tab_at(0), None);
    }

    #[test]
    fn test_nav_tab_at_far_right_is_none() {
        assert_eq!(nav_tab_at(500), None);
    }

    #[test]
    fn test_every_section_is_hittable() {
        // Scan the plausible nav width and collect the tabs we can hit
        let mut found = vec![];
        for col in 0..200u16 {
            if let Some(view) = nav_tab_at(col) {
                if !found.contains(&view) {
                    found.push(view);
                }
            }
        }
        assert_eq!(found, View::SECTIONS.to_vec());
    }
}
