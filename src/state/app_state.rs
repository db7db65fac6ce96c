//! Application state definitions

use super::ContactForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl View {
    /// Navigable sections in nav bar order (splash excluded)
    pub const SECTIONS: &'static [View] = &[
        View::Home,
        View::About,
        View::Skills,
        View::Projects,
        View::Experience,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Splash => "",
            View::Home => "Home",
            View::About => "About",
            View::Skills => "Skills",
            View::Projects => "Projects",
            View::Experience => "Experience",
            View::Contact => "Contact",
        }
    }

    /// Position in the nav bar, if this view appears there
    pub fn nav_index(&self) -> Option<usize> {
        Self::SECTIONS.iter().position(|v| v == self)
    }

    /// The next section in nav order (wraps around)
    pub fn next_section(&self) -> View {
        match self.nav_index() {
            Some(idx) => Self::SECTIONS[(idx + 1) % Self::SECTIONS.len()],
            None => View::Home,
        }
    }

    /// The previous section in nav order (wraps around)
    pub fn prev_section(&self) -> View {
        match self.nav_index() {
            Some(0) => Self::SECTIONS[Self::SECTIONS.len() - 1],
            Some(idx) => Self::SECTIONS[idx - 1],
            None => View::Home,
        }
    }
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current view
    pub current_view: View,
    /// Selected item index in list-style views (projects, experience)
    pub selected_index: usize,
    /// Vertical scroll offset for long content
    pub scroll_offset: usize,
    /// Contact form draft
    pub contact_form: ContactForm,
}

impl AppState {
    /// Clamp the selected index to a list of the given length
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_sections_exclude_splash() {
            assert!(!View::SECTIONS.contains(&View::Splash));
            assert_eq!(View::SECTIONS.len(), 6);
        }

        #[test]
        fn test_next_section_wraps() {
            assert_eq!(View::Contact.next_section(), View::Home);
            assert_eq!(View::Home.next_section(), View::About);
        }

        #[test]
        fn test_prev_section_wraps() {
            assert_eq!(View::Home.prev_section(), View::Contact);
            assert_eq!(View::Skills.prev_section(), View::About);
        }

        #[test]
        fn test_splash_has_no_nav_index() {
            assert!(View::Splash.nav_index().is_none());
            assert_eq!(View::Home.nav_index(), Some(0));
            assert_eq!(View::Contact.nav_index(), Some(5));
        }

        #[test]
        fn test_next_section_from_splash_goes_home() {
            assert_eq!(View::Splash.next_section(), View::Home);
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_select_next_wraps() {
            let mut state = AppState::default();
            state.select_next(2);
            assert_eq!(state.selected_index, 1);
            state.select_next(2);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_select_prev_wraps() {
            let mut state = AppState::default();
            state.select_prev(3);
            assert_eq!(state.selected_index, 2);
        }

        #[test]
        fn test_selection_on_empty_list_is_noop() {
            let mut state = AppState::default();
            state.select_next(0);
            state.select_prev(0);
            assert_eq!(state.selected_index, 0);
        }
    }
}
