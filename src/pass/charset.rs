//! Character classes and alphabet building for password generation.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

/// A selectable group of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical order. Alphabets are always concatenated in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Literal members of the class.
    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label used by the form.
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Special Chars",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Digits => 0b0100,
            CharacterClass::Symbols => 0b1000,
        }
    }
}

/// Set of enabled character classes. May be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    /// Form default: lowercase only.
    pub const fn form_default() -> Self {
        ClassSet::empty().with(CharacterClass::Lowercase)
    }

    pub const fn with(self, class: CharacterClass) -> Self {
        ClassSet(self.0 | class.bit())
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub const fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Build the alphabet for the enabled classes.
pub fn build(classes: ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.chars().as_bytes());
    }
    chars
}

/// Alphabet size (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|class| class.chars().len()).sum()
}
