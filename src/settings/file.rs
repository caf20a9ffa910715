//! Settings file persistence.
//!
//! One line: `length,lowercase,uppercase,digits,symbols`. An empty length
//! field means no saved length.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::pass;

const FIELDS: usize = 5;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    save_to(&get_path(), settings)
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    load_from(&get_path(), settings)
}

fn save_to(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(to_line(settings).as_bytes())?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Read `path` into `settings`. A missing or empty file gets the current
/// values written; a malformed one is reset to defaults and rewritten.
fn load_from(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        save_to(path, settings)?;
    } else if let Some(loaded) = from_line(&line) {
        *settings = loaded;
    } else {
        warn!(path = %path.display(), "malformed settings file, rewriting defaults");
        *settings = Settings::default();
        save_to(path, settings)?;
    }

    Ok(())
}

fn to_line(settings: &Settings) -> String {
    let length = settings.length.map(|n| n.to_string()).unwrap_or_default();
    format!(
        "{},{},{},{},{}\n",
        length, settings.lowercase, settings.uppercase, settings.digits, settings.symbols
    )
}

fn from_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return None;
    }

    let length = match parts[0] {
        "" => None,
        n => Some(n.parse().ok().and_then(|n| pass::check_length(n).ok())?),
    };

    Some(Settings {
        length,
        lowercase: parts[1].parse().ok()?,
        uppercase: parts[2].parse().ok()?,
        digits: parts[3].parse().ok()?,
        symbols: parts[4].parse().ok()?,
    })
}

#[inline]
fn get_path() -> PathBuf {
    if let Ok(path) = env::var("PASSFORM_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passform/settings")
}
