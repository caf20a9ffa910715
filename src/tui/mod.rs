//! Interactive password form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run the interactive form.
pub fn run() {
    gen_form_menu();
}
