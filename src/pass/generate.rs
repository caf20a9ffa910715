//! Password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::charset::{self, ClassSet};

/// Generate a single password from the enabled classes.
///
/// Returns the empty string when no class is enabled or `length` is zero.
pub fn generate(length: usize, classes: ClassSet) -> String {
    generate_with(&mut rand::thread_rng(), length, classes)
}

/// Same as [`generate`] with a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize, classes: ClassSet) -> String {
    let chars = charset::build(classes);
    let mut buf = Vec::with_capacity(length);
    generate_from_charset(rng, &chars, length, &mut buf);

    // Charset is all ASCII, so every byte maps to one char
    let pass = buf.iter().map(|&b| b as char).collect();
    buf.zeroize();
    pass
}

/// Generate `count` independent passwords.
pub fn generate_batch(length: usize, classes: ClassSet, count: usize) -> Vec<String> {
    (0..count).map(|_| generate(length, classes)).collect()
}

/// Fill `buf` with `length` bytes drawn uniformly from `chars`.
/// Caller owns the buffer; clear/zeroize between calls.
#[inline]
pub fn generate_from_charset<R: Rng + ?Sized>(
    rng: &mut R,
    chars: &[u8],
    length: usize,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    if chars.is_empty() {
        return;
    }
    buf.extend((0..length).map(|_| random_byte(rng, chars)));
}

#[inline]
fn random_byte<R: Rng + ?Sized>(rng: &mut R, chars: &[u8]) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}
