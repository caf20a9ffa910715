//! Password form state.
//!
//! Holds everything the user can change on the form (length text, class
//! toggles) plus the last generated password. Front ends own a `FormState`
//! and drive it; generation itself stays in [`crate::pass`].

use rand::Rng;
use tracing::debug;
use zeroize::Zeroize;

use crate::pass::{self, CharacterClass, ClassSet, GenerationRequest, LengthError};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct FormState {
    length_text: String,
    touched: bool,
    classes: ClassSet,
    password: String,
    generated: bool,
}

impl FormState {
    /// Fresh form: empty length, lowercase only, no result.
    pub fn new() -> Self {
        Self::filled(String::new(), ClassSet::form_default())
    }

    /// Form pre-filled from saved defaults.
    pub fn with_defaults(settings: &Settings) -> Self {
        let length_text = settings.length.map(|n| n.to_string()).unwrap_or_default();
        Self::filled(length_text, settings.classes())
    }

    fn filled(length_text: String, classes: ClassSet) -> Self {
        Self {
            length_text,
            touched: false,
            classes,
            password: String::new(),
            generated: false,
        }
    }

    pub fn length_text(&self) -> &str {
        &self.length_text
    }

    pub fn set_length_text(&mut self, text: &str) {
        self.length_text.clear();
        self.length_text.push_str(text);
        self.touched = true;
    }

    /// Mark the length field as visited.
    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
    }

    pub fn validate(&self) -> Result<usize, LengthError> {
        pass::parse_length(&self.length_text)
    }

    /// Validation error, only once the field has been touched.
    pub fn visible_error(&self) -> Option<LengthError> {
        if !self.touched {
            return None;
        }
        self.validate().err()
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate and generate with the thread RNG.
    pub fn submit(&mut self) -> Result<&str, LengthError> {
        self.submit_with(&mut rand::thread_rng())
    }

    /// Validate and generate. On error the previous result is kept.
    pub fn submit_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str, LengthError> {
        let length = match self.validate() {
            Ok(n) => n,
            Err(e) => {
                self.touched = true;
                return Err(e);
            }
        };

        let request = GenerationRequest::new(length, self.classes)?;
        let pass = request.generate_with(rng);
        if pass.is_empty() {
            debug!(length, "no character class enabled, result is empty");
        }

        self.password.zeroize();
        self.password = pass;
        self.generated = true;
        Ok(&self.password)
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Back to the fresh form, wiping the last result.
    pub fn reset(&mut self) {
        self.password.zeroize();
        self.length_text.zeroize();
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = FormState::new();
        assert_eq!(form.length_text(), "");
        assert!(!form.is_touched());
        assert!(form.is_enabled(CharacterClass::Lowercase));
        assert!(!form.is_enabled(CharacterClass::Uppercase));
        assert!(!form.is_enabled(CharacterClass::Digits));
        assert!(!form.is_enabled(CharacterClass::Symbols));
        assert!(!form.is_generated());
        assert_eq!(form.password(), "");
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut form = FormState::new();
        assert_eq!(form.visible_error(), None);
        assert!(!form.can_submit());

        form.touch();
        assert_eq!(form.visible_error(), Some(LengthError::Required));

        form.set_length_text("20");
        assert_eq!(form.visible_error(), Some(LengthError::TooLong { max: 16 }));

        form.set_length_text("10");
        assert_eq!(form.visible_error(), None);
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_generates_and_stores() {
        let mut form = FormState::new();
        form.set_length_text("8");
        form.toggle(CharacterClass::Digits);

        let mut rng = StdRng::seed_from_u64(3);
        let pass = form.submit_with(&mut rng).unwrap().to_string();

        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(form.is_generated());
        assert_eq!(form.password(), pass);
    }

    #[test]
    fn test_invalid_submit_keeps_previous_result() {
        let mut form = FormState::new();
        form.set_length_text("6");
        let first = form.submit().unwrap().to_string();

        form.set_length_text("2");
        assert_eq!(form.submit(), Err(LengthError::TooShort { min: 4 }));
        assert_eq!(form.password(), first);
        assert!(form.is_generated());
    }

    #[test]
    fn test_submit_marks_touched() {
        let mut form = FormState::new();
        assert!(form.submit().is_err());
        assert!(form.is_touched());
        assert_eq!(form.visible_error(), Some(LengthError::Required));
    }

    #[test]
    fn test_no_classes_submits_empty() {
        let mut form = FormState::new();
        form.set_length_text("5");
        form.toggle(CharacterClass::Lowercase);
        assert!(form.classes().is_empty());

        assert_eq!(form.submit(), Ok(""));
        assert!(form.is_generated());
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new();
        form.set_length_text("12");
        form.toggle(CharacterClass::Symbols);
        form.toggle(CharacterClass::Lowercase);
        form.submit().unwrap();

        form.reset();
        assert_eq!(form.length_text(), "");
        assert!(!form.is_touched());
        assert_eq!(form.classes(), ClassSet::form_default());
        assert!(!form.is_generated());
        assert_eq!(form.password(), "");
    }

    #[test]
    fn test_with_defaults() {
        let settings = Settings {
            length: Some(14),
            lowercase: false,
            uppercase: true,
            digits: true,
            symbols: false,
        };
        let form = FormState::with_defaults(&settings);
        assert_eq!(form.length_text(), "14");
        assert!(!form.is_touched());
        assert!(!form.is_enabled(CharacterClass::Lowercase));
        assert!(form.is_enabled(CharacterClass::Uppercase));
        assert!(form.is_enabled(CharacterClass::Digits));
        assert_eq!(form.validate(), Ok(14));
    }
}
