//! Length bounds and validated generation requests.

use rand::Rng;
use thiserror::Error;

use super::charset::ClassSet;
use super::{generate, generate_batch, generate_with};

/// Shortest length the form accepts.
pub const MIN_LENGTH: usize = 4;
/// Longest length the form accepts.
pub const MAX_LENGTH: usize = 16;

/// Why a requested password length was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("password length is required to generate password")]
    Required,
    #[error("password length must be a number")]
    NotANumber,
    #[error("password length must be a whole number")]
    NotWhole,
    #[error("minimum possible number is {min}")]
    TooShort { min: usize },
    #[error("maximum possible number is {max}")]
    TooLong { max: usize },
}

/// Parse a length typed into the form.
///
/// Accepts any numeric spelling that denotes a whole number in
/// `[MIN_LENGTH, MAX_LENGTH]` ("8", " 8 ", "8.0", "1e1").
pub fn parse_length(text: &str) -> Result<usize, LengthError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LengthError::Required);
    }

    let value: f64 = text.parse().map_err(|_| LengthError::NotANumber)?;
    if !value.is_finite() {
        return Err(LengthError::NotANumber);
    }
    if value < MIN_LENGTH as f64 {
        return Err(LengthError::TooShort { min: MIN_LENGTH });
    }
    if value > MAX_LENGTH as f64 {
        return Err(LengthError::TooLong { max: MAX_LENGTH });
    }
    if value.fract() != 0.0 {
        return Err(LengthError::NotWhole);
    }

    Ok(value as usize)
}

/// Check an already-numeric length against the form bounds.
pub fn check_length(length: usize) -> Result<usize, LengthError> {
    match length {
        n if n < MIN_LENGTH => Err(LengthError::TooShort { min: MIN_LENGTH }),
        n if n > MAX_LENGTH => Err(LengthError::TooLong { max: MAX_LENGTH }),
        n => Ok(n),
    }
}

/// A length and class selection that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Result<Self, LengthError> {
        Ok(Self {
            length: check_length(length)?,
            classes,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn generate(&self) -> String {
        generate(self.length, self.classes)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        generate_with(rng, self.length, self.classes)
    }

    pub fn generate_batch(&self, count: usize) -> Vec<String> {
        generate_batch(self.length, self.classes, count)
    }
}
