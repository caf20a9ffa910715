//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn usage_hint() {
    eprintln!("Try 'passform --help' for more information.");
}

pub fn empty_alphabet() {
    warn("Warning: no character class enabled, passwords will be empty.");
}

pub fn nothing_to_copy() {
    warn("Warning: nothing to copy, clipboard left unchanged.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

/// Prompt user when the clipboard fails. Returns true to fall back to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    eprintln!("{RED}{err}{RESET}");
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true; // Fallback on read error
    }

    eprintln!("\nAborted.");
    false
}
