use crate::cli::{DEFAULT_LENGTH, MAX_CLIPBOARD_COUNT};
use crate::form::FormState;
use crate::pass::{MAX_LENGTH, MIN_LENGTH, charset};
use crate::terminal::{
    BOLD, RED, RESET, UNDERLINE, box_bottom, box_center, box_line, box_opt, box_row,
    box_top, calculate_entropy, checkbox, clear, entropy_strength, flush, print_error, print_rule,
};

use super::{Status, TOGGLES};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

pub fn print_form(form: &FormState, status: &Status) {
    clear();
    box_top("Password Generator");
    box_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    let length = match form.length_text() {
        "" if !form.is_touched() => "enter a password length",
        text => text,
    };
    box_row("  1) Password Length:", length);
    match form.visible_error() {
        Some(e) => box_line(&format!("     {RED}{e}{RESET}")),
        None => box_line(""),
    }

    for (key, class) in TOGGLES {
        box_row(
            &format!("  {}) {}", key, class.label()),
            checkbox(form.is_enabled(class)),
        );
    }

    box_line("");
    print_rule();
    let generate = if form.can_submit() {
        "Enter) Generate Password"
    } else {
        "Enter) Generate (needs a valid length)"
    };
    box_line(&format!("  {generate}"));
    box_line("  r) reset  |  c) copy  |  s) save defaults");
    box_line("  h) help   |  q) quit");
    box_bottom();

    if form.is_generated() {
        print_result(form);
    }

    match status {
        Status::None => println!(),
        Status::Info(msg) => println!("{msg}"),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}

fn print_result(form: &FormState) {
    let pass = form.password();
    let bits = calculate_entropy(pass.len(), charset::size(form.classes()));

    println!();
    box_top("Result");
    box_line("Press c to copy..");
    box_line("");
    if pass.is_empty() {
        box_center("(no character class selected)");
    } else {
        box_center(&format!("{BOLD}{pass}{RESET}"));
    }
    box_line("");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_bottom();
}

pub fn print_help() {
    box_top("Passform");
    box_center("Password generator form");
    box_line("");
    box_line(&format!("{UNDERLINE}MODES{RESET}:"));
    box_line("  1) Form: run without arguments. Set a");
    box_line("     length, tick character classes, press");
    box_line("     Enter to generate.");
    box_line("  2) Client: pass flags directly to print");
    box_line("     passwords without the form.");
    box_line("");
    box_line(&format!("{UNDERLINE}USAGE{RESET}:"));
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line(&format!("{UNDERLINE}OPTIONS{RESET}:"));
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH} (default: {DEFAULT_LENGTH})"),
    );
    box_opt(
        "  -n, --number <N>",
        &format!("How many to generate (default: 1, at most {MAX_CLIPBOARD_COUNT} with -b)"),
    );
    box_opt("      --lower", "Include lowercase (on by default)");
    box_opt("      --no-lower", "Leave out lowercase");
    box_opt("      --upper", "Include uppercase");
    box_opt("      --digits", "Include numbers");
    box_opt("      --symbols", "Include special characters");
    box_opt("  -a, --all", "Include every class");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -s, --saved", "Start from the saved form defaults");
    box_opt("  -q, --quiet", "Suppress everything but passwords");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line(&format!("{UNDERLINE}EXAMPLES{RESET}:"));
    box_line("  passform -l 8              8 lowercase chars");
    box_line("  passform -l 16 -a          all classes");
    box_line("  passform -l 4 --digits --no-lower");
    box_line("                             a 4 digit PIN");
    box_line("");
    box_line("Logging: PASSFORM_LOG=debug|info|warn|off");
    box_bottom();
    println!();
}
