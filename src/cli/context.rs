//! CLI context - bundles saved settings and parsed flags.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::clipboard;
use crate::pass::{ClassSet, GenerationRequest, LengthError};
use crate::settings::Settings;
use crate::tui::print_help;

/// Length used when neither `-l` nor a saved length is given.
pub const DEFAULT_LENGTH: usize = 12;

/// Most passwords `-b` collects for a single clipboard copy.
pub const MAX_CLIPBOARD_COUNT: usize = 1000;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid length: {0}")]
    Length(#[from] LengthError),
    #[error("Too many passwords for the clipboard: {count} (max {max})")]
    TooMany { count: usize, max: usize },
    #[error("Aborted")]
    Aborted,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) | CliError::Length(_) | CliError::TooMany { .. } => 2,
            CliError::Aborted => 1,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, CliError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                warn!("Failed to load settings: {}", e);
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { settings, flags })
    }

    /// Run CLI to completion.
    pub fn run(&self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        let request = self.request()?;
        self.generate_output(&request)
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Resolve flags and saved settings into a validated request.
    pub fn request(&self) -> Result<GenerationRequest, LengthError> {
        let (saved_length, base) = if self.flags.saved {
            (self.settings.length, self.settings.classes())
        } else {
            (None, ClassSet::form_default())
        };

        let length = self.flags.length.or(saved_length).unwrap_or(DEFAULT_LENGTH);
        GenerationRequest::new(length, self.flags.classes(base))
    }

    fn generate_output(&self, request: &GenerationRequest) -> Result<(), CliError> {
        let count = self.flags.number.unwrap_or(1);
        if self.flags.clipboard && count > MAX_CLIPBOARD_COUNT {
            return Err(CliError::TooMany {
                count,
                max: MAX_CLIPBOARD_COUNT,
            });
        }
        if request.classes().is_empty() {
            prompts::empty_alphabet();
        }
        debug!(length = request.length(), count, "generating");

        if !self.flags.clipboard {
            let stdout = std::io::stdout();
            if let Err(e) = write_passwords(&mut stdout.lock(), request, count) {
                debug!("stdout closed: {}", e);
            }
            return Ok(());
        }

        let mut passwords = request.generate_batch(count);
        let result = to_clipboard(&passwords);
        passwords.iter_mut().for_each(|p| p.zeroize());
        result
    }
}

/// Generate and write `count` passwords one per line, wiping each after use.
fn write_passwords<W: Write>(
    out: &mut W,
    request: &GenerationRequest,
    count: usize,
) -> std::io::Result<()> {
    for _ in 0..count {
        let mut pass = request.generate();
        let written = writeln!(out, "{pass}");
        pass.zeroize();
        written?;
    }
    out.flush()
}

fn to_clipboard(passwords: &[String]) -> Result<(), CliError> {
    let Some(mut joined) = clipboard_payload(passwords) else {
        prompts::nothing_to_copy();
        return Ok(());
    };
    let copied = clipboard::copy(&joined);
    joined.zeroize();

    match copied {
        Ok(()) => {
            prompts::clipboard_copied(passwords.len());
            Ok(())
        }
        Err(e) if prompts::clipboard_fallback_prompt(&e.to_string()) => {
            to_terminal(passwords);
            Ok(())
        }
        Err(_) => Err(CliError::Aborted),
    }
}

/// Newline-joined passwords, or `None` when every one is empty.
fn clipboard_payload(passwords: &[String]) -> Option<String> {
    if passwords.iter().all(String::is_empty) {
        return None;
    }
    Some(passwords.join("\n"))
}

fn to_terminal(passwords: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pass in passwords {
        if writeln!(out, "{pass}").is_err() {
            break;
        }
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;

    fn context(list: &[&str], settings: Settings) -> Context {
        let args: Vec<String> = std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context {
            settings,
            flags: super::super::parse(&args).unwrap(),
        }
    }

    #[test]
    fn test_default_request() {
        let request = context(&[], Settings::default()).request().unwrap();
        assert_eq!(request.length(), DEFAULT_LENGTH);
        assert_eq!(request.classes(), ClassSet::form_default());
    }

    #[test]
    fn test_length_out_of_bounds() {
        let err = context(&["-l", "20"], Settings::default()).request().unwrap_err();
        assert_eq!(err, LengthError::TooLong { max: 16 });
        assert_eq!(
            CliError::from(err).to_string(),
            "Invalid length: maximum possible number is 16"
        );
    }

    #[test]
    fn test_saved_settings_apply_only_with_flag() {
        let saved = Settings {
            length: Some(6),
            lowercase: false,
            uppercase: false,
            digits: true,
            symbols: false,
        };

        let request = context(&[], saved.clone()).request().unwrap();
        assert_eq!(request.length(), DEFAULT_LENGTH);

        let request = context(&["-s", "--symbols"], saved.clone()).request().unwrap();
        assert_eq!(request.length(), 6);
        assert!(request.classes().contains(CharacterClass::Digits));
        assert!(request.classes().contains(CharacterClass::Symbols));
        assert!(!request.classes().contains(CharacterClass::Lowercase));

        let request = context(&["-s", "-l", "16"], saved).request().unwrap();
        assert_eq!(request.length(), 16);
    }

    #[test]
    fn test_write_passwords_streams_each_line() {
        let request = context(&["-l", "6", "--digits"], Settings::default())
            .request()
            .unwrap();
        let mut out = Vec::new();
        write_passwords(&mut out, &request, 3).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 6));

        let mut out = Vec::new();
        write_passwords(&mut out, &request, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_passwords_empty_alphabet() {
        let request = context(&["--no-lower"], Settings::default()).request().unwrap();
        let mut out = Vec::new();
        write_passwords(&mut out, &request, 2).unwrap();
        assert_eq!(out, b"\n\n");
    }

    #[test]
    fn test_clipboard_payload_skips_empty() {
        assert_eq!(clipboard_payload(&[]), None);
        assert_eq!(clipboard_payload(&[String::new(), String::new()]), None);
        assert_eq!(
            clipboard_payload(&[String::from("abcd"), String::from("efgh")]),
            Some(String::from("abcd\nefgh"))
        );
    }

    #[test]
    fn test_clipboard_with_nothing_to_copy() {
        // Neither run reaches the clipboard
        assert!(context(&["-b", "-n", "0"], Settings::default()).run().is_ok());
        assert!(context(&["-b", "--no-lower"], Settings::default()).run().is_ok());
    }

    #[test]
    fn test_clipboard_count_is_capped() {
        let err = context(&["-b", "-n", "1001"], Settings::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, CliError::TooMany { count: 1001, max: 1000 }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Parse(ParseError::UnknownArg("x".into())).exit_code(), 2);
        assert_eq!(CliError::Aborted.exit_code(), 1);
    }
}
