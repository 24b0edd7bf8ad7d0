use crate::Generator;
use rand::Rng;
use snaplink_core::ShortCode;

/// Character set for generated codes: the full charset short codes allow.
/// 64 symbols, so every position carries 6 bits of entropy.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default length of generated codes. Seven positions over 64 symbols
/// (~4.4e12 codes) keeps collisions rare under sustained load.
const DEFAULT_LENGTH: usize = 7;

/// A short code generator drawing uniformly from the allowed charset.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of the default length.
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }

    /// Creates a generator producing codes of the given length.
    ///
    /// The length must stay within the 4-20 character bounds short codes
    /// are validated against.
    pub fn with_length(length: usize) -> Self {
        assert!(
            (4..=20).contains(&length),
            "generated code length out of range: {length}"
        );
        Self { length }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..self.length)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        // Codes drawn from CHARSET at a bounded length always pass validation.
        ShortCode::new_unchecked(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_codes_of_default_length() {
        let generator = RandomGenerator::new();

        let code = generator.generate();
        assert_eq!(code.as_str().len(), 7);
    }

    #[test]
    fn generated_codes_pass_validation() {
        let generator = RandomGenerator::new();

        for _ in 0..100 {
            let code = generator.generate();
            assert!(ShortCode::new(code.as_str()).is_ok(), "invalid: {code}");
        }
    }

    #[test]
    fn generated_codes_stay_in_charset() {
        let generator = RandomGenerator::new();

        let code = generator.generate();
        assert!(code
            .as_str()
            .bytes()
            .all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn custom_length() {
        let generator = RandomGenerator::with_length(12);

        assert_eq!(generator.generate().as_str().len(), 12);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_length_below_code_minimum() {
        RandomGenerator::with_length(3);
    }

    #[test]
    fn consecutive_codes_differ() {
        let generator = RandomGenerator::new();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            assert!(seen.insert(generator.generate().as_str().to_owned()));
        }
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
