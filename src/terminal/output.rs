//! Terminal output: ANSI styles, screen control, the boxed form layout and
//! entropy display.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";

/// Wipe the screen and scrollback, cursor to the top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active style before printing normally.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print a divider inside a box.
pub fn print_rule() {
    println!("{}", rule('├', '┤'));
}

/// Checkbox glyph for a toggle.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

// Box drawing

pub const BOX_WIDTH: usize = 60;
const INNER_WIDTH: usize = BOX_WIDTH - 4;
const FLAG_COL: usize = 20;

/// Print box top with an optional title: ┌─ Title ─────┐
pub fn box_top(title: &str) {
    println!("{}", top(title));
}

pub fn box_bottom() {
    println!("{}", rule('└', '┘'));
}

pub fn box_line(content: &str) {
    println!("{}", framed(content, false));
}

pub fn box_center(content: &str) {
    println!("{}", framed(content, true));
}

/// Label on the left, value pushed to the right edge.
pub fn box_row(label: &str, value: &str) {
    let gap = INNER_WIDTH
        .saturating_sub(console_width(label) + console_width(value))
        .max(1);
    box_line(&format!("{label}{}{value}", " ".repeat(gap)));
}

/// Help entry: flag in a fixed column, description wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let mut col = format!("{flag:<FLAG_COL$}");
    for line in wrap_words(desc, INNER_WIDTH - FLAG_COL) {
        box_line(&format!("{col}{line}"));
        col = " ".repeat(FLAG_COL);
    }
}

fn rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "─".repeat(BOX_WIDTH - 2))
}

fn top(title: &str) -> String {
    if title.is_empty() {
        return rule('┌', '┐');
    }
    let title = format!("─ {title} ");
    let fill = (BOX_WIDTH - 2).saturating_sub(title.chars().count());
    format!("┌{title}{}┐", "─".repeat(fill))
}

/// Pad `content` out to the box edge. Overlong content is left as is.
fn framed(content: &str, center: bool) -> String {
    let pad = INNER_WIDTH.saturating_sub(console_width(content));
    let left = if center { pad / 2 } else { 0 };
    format!("│ {}{content}{} │", " ".repeat(left), " ".repeat(pad - left))
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => width += 1,
        }
    }
    width
}

// Entropy

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
