//! Flag-driven password generation.

mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

use context::{CliError, Context};
use flags::CliFlags;
use parse::{ParseError, parse};

pub use context::{DEFAULT_LENGTH, MAX_CLIPBOARD_COUNT};
pub use quiet::is_interactive;

/// Run CLI mode, returning the process exit code.
pub fn run(args: &[String]) -> i32 {
    let result = Context::new(args).and_then(|ctx| ctx.run());

    match result {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            if matches!(e, CliError::Parse(_)) {
                prompts::usage_hint();
            }
            e.exit_code()
        }
    }
}
