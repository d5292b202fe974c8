//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (`a-z`, `A-Z`, `0-9`). Generation knows nothing about storage: two calls may
//! return the same code, and uniqueness is enforced by the repository at insert time.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest code length accepted from configuration.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code length a generator will produce.
pub const MAX_CODE_LENGTH: usize = 32;

/// Codes that cannot be allocated because they shadow fixed routes.
const RESERVED_CODES: &[&str] = &["api", "health", "shorten", "stats"];

/// Generates a random alphanumeric code of `length` characters.
///
/// Every character is sampled independently from the thread-local CSPRNG, so the
/// result does not depend on any previously generated code.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` collides with a route of the HTTP layer.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Source of candidate short codes.
///
/// The allocation loop in [`crate::application::services::UrlService`] asks for a new
/// candidate after every collision, so implementations must not cache their output.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform random generator over the alphanumeric alphabet.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

/// Rejected generator length.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("code length must be between 1 and {MAX_CODE_LENGTH}, got {0}")]
pub struct InvalidCodeLength(pub usize);

impl RandomCodeGenerator {
    /// Creates a generator producing codes of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodeLength`] if `length` is zero or above [`MAX_CODE_LENGTH`].
    pub fn new(length: usize) -> Result<Self, InvalidCodeLength> {
        if !(1..=MAX_CODE_LENGTH).contains(&length) {
            return Err(InvalidCodeLength(length));
        }

        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(self.length)
    }
}
