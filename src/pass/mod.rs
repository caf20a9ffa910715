//! Password generation.

pub mod charset;
mod generate;
mod request;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{generate, generate_batch, generate_with};
pub use request::{
    GenerationRequest, LengthError, MAX_LENGTH, MIN_LENGTH, check_length, parse_length,
};
