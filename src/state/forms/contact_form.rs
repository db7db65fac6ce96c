//! Contact form state

use super::field::FormField;

/// Buttons on the contact form action row
pub const BUTTON_CLEAR: usize = 0;
pub const BUTTON_SEND: usize = 1;

/// Index of the virtual buttons row in field cycling
const BUTTONS_ROW_INDEX: usize = 3;

/// Owned snapshot of the draft handed to the relay.
///
/// Values are sent exactly as typed; only the presence check trims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The contact form: three free-text fields plus a Send/Clear button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Send)
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Your Name", false),
            email: FormField::text("email", "Your Email", false),
            message: FormField::text("message", "Message", true),
            active_field_index: 0,
            selected_button: BUTTON_SEND,
        }
    }

    pub fn field_count(&self) -> usize {
        4 // name, email, message, buttons
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        // Two buttons, so next and prev are the same toggle
        self.next_button();
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            // Index 3 is the buttons row, no FormField for it
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }

    /// True when the active field is the multiline message body
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Presence gating for Send: all three fields non-empty after trim.
    ///
    /// Email format is left to the relay service; only presence is checked
    /// here, mirroring native required-field behavior.
    pub fn is_complete(&self) -> bool {
        !self.name.is_blank() && !self.email.is_blank() && !self.message.is_blank()
    }

    /// Snapshot the current values for submission
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Reset all fields and selection (after a successful submission)
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active_field_index = 0;
        self.selected_button = BUTTON_SEND;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_text("A".to_string());
        form.email.set_text("a@b.com".to_string());
        form.message.set_text("hi".to_string());
        form
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, BUTTON_SEND);
        assert_eq!(form.name.name, "name");
        assert_eq!(form.email.name, "email");
        assert_eq!(form.message.name, "message");
        assert!(form.message.is_multiline);
    }

    #[test]
    fn test_field_count() {
        assert_eq!(ContactForm::new().field_count(), 4);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = ContactForm::new();
        for _ in 0..4 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0); // Wrapped back
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, 3); // Wrapped to buttons row
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_button_toggle() {
        let mut form = ContactForm::new();
        assert_eq!(form.selected_button, BUTTON_SEND);
        form.next_button();
        assert_eq!(form.selected_button, BUTTON_CLEAR);
        form.prev_button();
        assert_eq!(form.selected_button, BUTTON_SEND);
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = ContactForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert_eq!(form.get_field(1).unwrap().name, "email");
        assert_eq!(form.get_field(2).unwrap().name, "message");
        assert!(form.get_field(3).is_none()); // buttons row
    }

    #[test]
    fn test_empty_form_is_not_complete() {
        assert!(!ContactForm::new().is_complete());
    }

    #[test]
    fn test_filled_form_is_complete() {
        assert!(filled_form().is_complete());
    }

    #[test]
    fn test_whitespace_only_field_blocks_completion() {
        let mut form = filled_form();
        form.message.set_text("   ".to_string());
        assert!(!form.is_complete());
    }

    #[test]
    fn test_draft_snapshots_raw_values() {
        let mut form = filled_form();
        form.message.set_text("hi there\nsecond line".to_string());
        let draft = form.draft();
        assert_eq!(draft.name, "A");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.message, "hi there\nsecond line");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.active_field_index = 2;
        form.selected_button = BUTTON_CLEAR;

        form.clear();

        assert!(!form.is_complete());
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, BUTTON_SEND);
        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.email.as_text(), "");
        assert_eq!(form.message.as_text(), "");
    }

    #[test]
    fn test_active_field_multiline_only_for_message() {
        let mut form = ContactForm::new();
        assert!(!form.is_active_field_multiline());
        form.active_field_index = 2;
        assert!(form.is_active_field_multiline());
        form.active_field_index = 3;
        assert!(!form.is_active_field_multiline());
    }
}
