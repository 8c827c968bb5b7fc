//! Random short-token generation.

use rand::Rng;

/// Alphabet for generated tokens: the 52 ASCII letters.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default length of generated tokens.
pub const DEFAULT_TOKEN_LENGTH: usize = 12;

/// Generates a random token of `length` characters.
///
/// Each character is sampled independently and uniformly from
/// [`TOKEN_ALPHABET`], giving `52^length` possible tokens. Candidates are not
/// checked for uniqueness here; the store's atomic insert is what rejects a
/// colliding candidate.
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
