//! Saved form defaults.

mod file;

use crate::form::FormState;
use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: Option<usize>,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// Capture the form's current length and toggles.
    ///
    /// An invalid length is stored as unset.
    pub fn from_form(form: &FormState) -> Self {
        let classes = form.classes();
        Self {
            length: form.validate().ok(),
            lowercase: classes.contains(CharacterClass::Lowercase),
            uppercase: classes.contains(CharacterClass::Uppercase),
            digits: classes.contains(CharacterClass::Digits),
            symbols: classes.contains(CharacterClass::Symbols),
        }
    }

    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::empty();
        classes.set(CharacterClass::Lowercase, self.lowercase);
        classes.set(CharacterClass::Uppercase, self.uppercase);
        classes.set(CharacterClass::Digits, self.digits);
        classes.set(CharacterClass::Symbols, self.symbols);
        classes
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: None,
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}
