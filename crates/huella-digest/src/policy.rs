use crate::algo::Algorithm;

/// Output form of a computed digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Lowercase hex string
    #[default]
    Hex,
    /// Raw digest bytes
    Raw,
}

/// Digest configuration: algorithm, salt, iteration count and output
/// encoding. Immutable once built; pass by reference to reuse across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestPolicy {
    algorithm: Algorithm,
    salt: String,
    iterations: u32,
    encoding: Encoding,
}

impl DigestPolicy {
    /// Policy with empty salt, a single pass and hex output.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            salt: String::new(),
            iterations: 1,
            encoding: Encoding::Hex,
        }
    }

    /// Salt bytes are prepended to the input before the first pass only.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Number of sequential hash passes. Zero is clamped to one.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Default for DigestPolicy {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
