use std::fmt;
use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::hasher::{AlgoHasher, Hasher};
use crate::policy::{DigestPolicy, Encoding};

/// Fixed read size for the chunked variant.
const CHUNK_SIZE: usize = 8 * 1024;

/// A computed digest, encoded per the policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    Hex(String),
    Raw(Vec<u8>),
}

impl fmt::Display for Digest {
    /// Lowercase hex in both forms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::Hex(hex) => f.write_str(hex),
            Digest::Raw(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

/// Digest of in-memory bytes under `policy`.
///
/// The salt is prepended before the first pass; passes 2..=N re-hash the raw
/// digest bytes of the previous pass. Empty input is valid and never fails.
pub fn compute(input: &[u8], policy: &DigestPolicy) -> Digest {
    let mut hasher = AlgoHasher::new(policy.algorithm());
    if !policy.salt().is_empty() {
        hasher.update(policy.salt().as_bytes());
    }
    hasher.update(input);

    iterate(hasher.finalize(), policy)
}

/// Digest of a chunked reader under `policy`.
///
/// Reads `reader` exactly once, sequentially, in fixed-size chunks, so
/// memory stays bounded for arbitrary-size input. Chunk boundaries cannot
/// affect the result. The only error is I/O from the reader itself.
pub fn compute_reader<R: Read>(mut reader: R, policy: &DigestPolicy) -> Result<Digest> {
    let mut hasher = AlgoHasher::new(policy.algorithm());
    if !policy.salt().is_empty() {
        hasher.update(policy.salt().as_bytes());
    }

    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    debug!(bytes = total, algorithm = %policy.algorithm(), "hashed stream");

    Ok(iterate(hasher.finalize(), policy))
}

/// Passes 2..=N over the first-pass digest; the salt is not reapplied.
fn iterate(mut digest: Vec<u8>, policy: &DigestPolicy) -> Digest {
    for _ in 1..policy.iterations() {
        digest = AlgoHasher::digest(policy.algorithm(), &digest);
    }

    match policy.encoding() {
        Encoding::Hex => Digest::Hex(hex::encode(digest)),
        Encoding::Raw => Digest::Raw(digest),
    }
}
