use std::io::Read;

use crate::engine::{Digest, compute, compute_reader};
use crate::error::Result;
use crate::policy::{DigestPolicy, Encoding};

/// Check in-memory bytes against an expected hex digest.
///
/// Both sides are trimmed and lowercased before ordinary string equality.
/// Fine for integrity checks; not constant-time, so unsuitable for
/// comparing secrets.
pub fn verify(input: &[u8], expected: &str, policy: &DigestPolicy) -> bool {
    let actual = compute(input, &policy.clone().with_encoding(Encoding::Hex));
    matches(&actual, expected)
}

/// Chunked-reader variant of [`verify`].
pub fn verify_reader<R: Read>(reader: R, expected: &str, policy: &DigestPolicy) -> Result<bool> {
    let actual = compute_reader(reader, &policy.clone().with_encoding(Encoding::Hex))?;
    Ok(matches(&actual, expected))
}

fn matches(actual: &Digest, expected: &str) -> bool {
    actual.to_string() == expected.trim().to_ascii_lowercase()
}
