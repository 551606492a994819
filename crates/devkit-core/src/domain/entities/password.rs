//! Password character pools and generation.
//!
//! Generation is uniform i.i.d. sampling from the pool: every position is an
//! independent draw with replacement. There is no guarantee that each enabled
//! character class appears in the output.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::value_objects::PasswordLength;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Fixed special-character set appended when special characters are enabled.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The set of characters eligible for random selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Letters are always included; digits and specials are opt-in.
    pub fn new(use_numbers: bool, use_special_chars: bool) -> Self {
        let mut pool = String::with_capacity(
            LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SPECIAL_CHARS.len(),
        );
        pool.push_str(LOWERCASE);
        pool.push_str(UPPERCASE);
        if use_numbers {
            pool.push_str(DIGITS);
        }
        if use_special_chars {
            pool.push_str(SPECIAL_CHARS);
        }
        Self {
            chars: pool.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Validated inputs for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: PasswordLength,
    pub use_numbers: bool,
    pub use_special_chars: bool,
}

impl PasswordOptions {
    pub fn new(length: PasswordLength, use_numbers: bool, use_special_chars: bool) -> Self {
        Self {
            length,
            use_numbers,
            use_special_chars,
        }
    }

    pub fn pool(&self) -> CharacterPool {
        CharacterPool::new(self.use_numbers, self.use_special_chars)
    }

    /// Generate with the thread-local CSPRNG.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// Generate with a caller-supplied RNG.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let pool = self.pool();
        (0..self.length.get())
            .filter_map(|_| pool.as_slice().choose(rng).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options(length: i64, numbers: bool, special: bool) -> PasswordOptions {
        PasswordOptions::new(PasswordLength::new(length).unwrap(), numbers, special)
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(CharacterPool::new(false, false).len(), 52);
        assert_eq!(CharacterPool::new(true, false).len(), 62);
        assert_eq!(CharacterPool::new(false, true).len(), 52 + SPECIAL_CHARS.len());
        assert_eq!(CharacterPool::new(true, true).len(), 62 + SPECIAL_CHARS.len());
    }

    #[test]
    fn output_length_matches_for_every_valid_length() {
        for length in PasswordLength::MIN..=PasswordLength::MAX {
            let password = options(length as i64, true, true).generate();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn letters_only_when_both_flags_off() {
        for _ in 0..50 {
            let password = options(64, false, false).generate();
            assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn every_character_belongs_to_pool() {
        let opts = options(10, true, true);
        let pool = opts.pool();
        for _ in 0..50 {
            let password = opts.generate();
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn digits_never_appear_without_numbers() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let password = options(64, false, true).generate_with(&mut rng);
            assert!(!password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let opts = options(32, true, false);
        let a = opts.generate_with(&mut StdRng::seed_from_u64(42));
        let b = opts.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
