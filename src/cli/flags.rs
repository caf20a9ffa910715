use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub all: bool,
    pub lower: bool,
    pub no_lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Apply class flags on top of `base`. `--no-lower` wins over `--lower`/`--all`.
    pub fn classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = if self.all { ClassSet::all() } else { base };
        if self.lower {
            classes.insert(CharacterClass::Lowercase);
        }
        if self.upper {
            classes.insert(CharacterClass::Uppercase);
        }
        if self.digits {
            classes.insert(CharacterClass::Digits);
        }
        if self.symbols {
            classes.insert(CharacterClass::Symbols);
        }
        if self.no_lower {
            classes.remove(CharacterClass::Lowercase);
        }
        classes
    }
}
