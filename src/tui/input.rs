use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::pass::MAX_LENGTH;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor state: characters plus a 0-based cursor.
#[derive(Debug, Default)]
struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

/// What the caller should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Continue,
    Submit,
    Cancel,
    Quit,
}

impl LineBuffer {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn apply(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        accept: &dyn Fn(char) -> bool,
        max_len: usize,
    ) -> Edit {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') if ctrl => return Edit::Quit,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) && self.chars.len() < max_len => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// Read a line with cursor movement. `None` when cancelled with Esc/Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_line(prompt, initial_value, &|_| true, usize::MAX)
}

/// Read the password length field. Accepts what a numeric keypad can type.
pub fn get_length_input(prompt: &str, initial_value: &str) -> Option<String> {
    let max_len = MAX_LENGTH.to_string().len() + 4;
    read_line(
        prompt,
        initial_value,
        &|c| c.is_ascii_digit() || c == '.' || c == '-',
        max_len,
    )
}

fn read_line(
    prompt: &str,
    initial_value: &str,
    accept: &dyn Fn(char) -> bool,
    max_len: usize,
) -> Option<String> {
    let mut line = LineBuffer::new(initial_value);

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(line.text()),
    };

    print!("{}: {}", prompt, line.text());
    flush();
    let mut last_len = line.chars.len();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match line.apply(key.code, key.modifiers, accept, max_len) {
                    Edit::Continue => {}
                    Edit::Submit => break Some(line.text()),
                    Edit::Cancel => break None,
                    Edit::Quit => {
                        // process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                }

                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, line.text());
                print!("\x1b[{}G", prompt.len() + 3 + line.cursor);
                flush();
                last_len = line.chars.len();
            }
            Err(_) => break Some(line.text()),
            _ => {}
        }
    };

    // Disable raw mode BEFORE println
    drop(guard);
    println!();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(line: &mut LineBuffer, code: KeyCode) -> Edit {
        line.apply(code, KeyModifiers::NONE, &|c| c.is_ascii_digit(), 4)
    }

    #[test]
    fn test_typing_and_cursor() {
        let mut line = LineBuffer::new("12");
        assert_eq!(press(&mut line, KeyCode::Left), Edit::Continue);
        press(&mut line, KeyCode::Char('5'));
        assert_eq!(line.text(), "152");

        press(&mut line, KeyCode::Home);
        press(&mut line, KeyCode::Delete);
        assert_eq!(line.text(), "52");

        press(&mut line, KeyCode::End);
        press(&mut line, KeyCode::Backspace);
        assert_eq!(line.text(), "5");
    }

    #[test]
    fn test_filter_and_max_len() {
        let mut line = LineBuffer::new("");
        for c in "1a2b345".chars() {
            press(&mut line, KeyCode::Char(c));
        }
        assert_eq!(line.text(), "1234");
    }

    #[test]
    fn test_control_keys() {
        let mut line = LineBuffer::new("99");
        let accept = |_: char| true;
        assert_eq!(
            line.apply(KeyCode::Char('u'), KeyModifiers::CONTROL, &accept, 10),
            Edit::Continue
        );
        assert_eq!(line.text(), "");
        assert_eq!(press(&mut line, KeyCode::Enter), Edit::Submit);
        assert_eq!(press(&mut line, KeyCode::Esc), Edit::Cancel);
        assert_eq!(
            line.apply(KeyCode::Char('c'), KeyModifiers::CONTROL, &accept, 10),
            Edit::Quit
        );
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut line = LineBuffer::new("7");
        press(&mut line, KeyCode::Home);
        press(&mut line, KeyCode::Backspace);
        assert_eq!(line.text(), "7");
    }
}
