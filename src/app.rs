//! Main application state and event handling

use std::sync::Arc;

use anyhow::Result;
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::PortfolioConfig;
use crate::content;
use crate::platform::COPY_MODIFIER;
use crate::relay::{ContactSubmitter, FormRelay, SubmissionOutcome, Web3FormsClient};
use crate::state::{AppState, RevealState, SplashState, View, BUTTON_CLEAR, BUTTON_SEND};
use crate::ui;

pub struct App {
    pub state: AppState,
    pub splash_state: SplashState,
    pub reveal: RevealState,
    pub submitter: ContactSubmitter,
    pub config: PortfolioConfig,
    pub status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: PortfolioConfig) -> Result<Self> {
        let relay = Arc::new(Web3FormsClient::new(&config)?);
        Ok(Self::with_relay(config, relay))
    }

    /// Build an app with a caller-supplied relay
    pub fn with_relay(config: PortfolioConfig, relay: Arc<dyn FormRelay>) -> Self {
        let mut splash_state = SplashState::new();
        if config.skip_splash() {
            splash_state.skip();
        }

        let state = AppState::default();
        let reveal = RevealState::new(reveal_item_count(state.current_view));

        Self {
            state,
            splash_state,
            reveal,
            submitter: ContactSubmitter::new(relay),
            config,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn in_splash(&self) -> bool {
        !self.splash_state.is_complete()
    }

    /// Whether a redraw-driving animation is running
    pub fn is_animating(&self) -> bool {
        self.in_splash() || !self.reveal.is_complete()
    }

    pub fn update_splash(&mut self, terminal_height: u16) {
        if self.in_splash() {
            self.splash_state.update(terminal_height);
        }
    }

    /// Drain the submission channel; called once per event-loop tick
    pub fn poll_submission(&mut self) {
        if let Some(SubmissionOutcome::Success) = self.submitter.poll() {
            self.state.contact_form.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.in_splash() {
            self.splash_state.skip();
            return;
        }

        if !self.reveal.is_complete() {
            self.reveal.skip();
            return;
        }

        self.status_message = None;

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            _ => self.handle_section_key(key),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.in_splash() {
            return;
        }
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && mouse.row < ui::NAV_HEIGHT {
            if let Some(view) = ui::nav_tab_at(mouse.column) {
                self.enter_view(view);
            }
        }
    }

    pub fn enter_view(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.state.current_view = view;
        self.state.selected_index = 0;
        self.state.scroll_offset = 0;
        self.reveal.restart(reveal_item_count(view));
    }

    fn handle_section_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            return;
        }

        match self.state.current_view {
            View::Home => match key.code {
                KeyCode::Char('c') => self.enter_view(View::Contact),
                KeyCode::Char('y') => self.copy_to_clipboard(content::GITHUB_PROFILE, "GitHub link"),
                _ => {}
            },
            View::About | View::Skills | View::Experience => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.state.scroll_offset = self.state.scroll_offset.saturating_add(1);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
                }
                _ => {}
            },
            View::Projects => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.state.select_next(content::PROJECTS.len());
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.state.select_prev(content::PROJECTS.len());
                }
                KeyCode::Char('y') => {
                    if let Some(project) = content::PROJECTS.get(self.state.selected_index) {
                        self.copy_to_clipboard(project.repo, "repo link");
                    }
                }
                KeyCode::Char('o') => {
                    if let Some(live) = content::PROJECTS
                        .get(self.state.selected_index)
                        .and_then(|p| p.live)
                    {
                        self.copy_to_clipboard(live, "live link");
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Keys shared by every non-form view. Returns true when consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                if let Some(view) = View::SECTIONS.get(idx) {
                    self.enter_view(*view);
                }
                true
            }
            KeyCode::Tab => {
                self.enter_view(self.state.current_view.next_section());
                true
            }
            KeyCode::BackTab => {
                self.enter_view(self.state.current_view.prev_section());
                true
            }
            _ => false,
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        // Shortcuts that work regardless of focus
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_contact_form();
            return;
        }
        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_to_clipboard(content::CONTACT_EMAIL, "email address");
            return;
        }

        let form = &mut self.state.contact_form;
        match key.code {
            KeyCode::Esc => self.enter_view(View::Home),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => match form.selected_button {
                BUTTON_CLEAR => {
                    form.clear();
                    self.submitter.reset_on_edit();
                }
                BUTTON_SEND => self.submit_contact_form(),
                _ => {}
            },
            KeyCode::Enter if form.is_active_field_multiline() => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char('\n');
                }
                self.submitter.reset_on_edit();
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
                self.submitter.reset_on_edit();
            }
            KeyCode::Char(c) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                    self.submitter.reset_on_edit();
                }
            }
            _ => {}
        }
    }

    /// Validate and hand the draft to the submitter
    pub fn submit_contact_form(&mut self) {
        if self.submitter.is_in_flight() {
            return;
        }
        if !self.state.contact_form.is_complete() {
            self.status_message = Some("Please fill in all fields before sending".to_string());
            return;
        }
        self.submitter.begin(self.state.contact_form.draft());
    }

    fn copy_to_clipboard(&mut self, text: &str, label: &str) {
        match Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {label} to clipboard"));
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

/// Number of staggered entrance groups each section animates
fn reveal_item_count(view: View) -> usize {
    match view {
        View::Splash => 0,
        View::Home => 6,
        View::About => 5,
        View::Skills => 2 + content::SKILL_CATEGORIES.len(),
        View::Projects => 2 + content::PROJECTS.len(),
        View::Experience => 2 + content::EXPERIENCES.len(),
        View::Contact => 3,
    }
}
