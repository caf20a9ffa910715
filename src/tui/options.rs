use tracing::warn;

use crate::clipboard;
use crate::form::FormState;
use crate::pass::CharacterClass;
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{enter_prompt, get_editable_input, get_length_input, print_form, print_help};

/// Message shown under the form after an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Info(String),
    Error(String),
}

use LoopAction::*;
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Break,
    Continue,
}

/// Checkbox rows in display order, keyed by menu number.
pub const TOGGLES: [(&str, CharacterClass); 4] = [
    ("2", CharacterClass::Lowercase),
    ("3", CharacterClass::Uppercase),
    ("4", CharacterClass::Symbols),
    ("5", CharacterClass::Digits),
];

pub fn gen_form_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("Error loading settings: {}", e);
        Settings::default()
    });

    let mut form = FormState::with_defaults(&settings);
    let mut status = Status::None;

    loop {
        print_form(&form, &status);
        status = Status::None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        if let Break = form_options(input.trim(), &mut form, &mut status) {
            clear();
            break;
        }
    }
}

/// Apply one menu choice to the form.
pub fn form_options(choice: &str, form: &mut FormState, status: &mut Status) -> LoopAction {
    match choice {
        "" | "g" => {
            // Error text is rendered from the form itself
            let _ = form.submit();
        }
        "1" => match get_length_input("Password length", form.length_text()) {
            Some(text) => form.set_length_text(text.trim()),
            None => form.touch(),
        },
        "r" => form.reset(),
        "c" => copy_result(form, status),
        "s" => {
            *status = match Settings::from_form(form).save_to_file() {
                Ok(()) => Status::Info("Saved as defaults.".to_string()),
                Err(e) => Status::Error(format!("Error saving settings: {}", e)),
            };
        }
        "h" | "help" => {
            clear();
            print_help();
            let _ = get_editable_input("Press Enter to return", "");
        }
        "q" => return Break,
        other => match TOGGLES.iter().find(|(key, _)| *key == other) {
            Some((_, class)) => form.toggle(*class),
            None => *status = Status::Error("Invalid option.".to_string()),
        },
    }
    Continue
}

fn copy_result(form: &FormState, status: &mut Status) {
    if !form.is_generated() {
        *status = Status::Error("Nothing to copy yet.".to_string());
        return;
    }
    *status = match clipboard::copy(form.password()) {
        Ok(()) => Status::Info("Copied to clipboard.".to_string()),
        Err(e) => Status::Error(e.to_string()),
    };
}
