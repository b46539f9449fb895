//! Salted, iterated digest computation and verification.
//!
//! Computes digests of in-memory bytes or chunked readers under an immutable
//! [`DigestPolicy`] (algorithm, salt, iteration count, output encoding), and
//! verifies results against expected hex strings.
//!
//! # Key Properties
//!
//! - **Incremental**: readers are consumed once, in fixed-size chunks, with
//!   output identical to single-shot hashing of the concatenation
//! - **Stateless**: nothing persists across calls; every call owns its
//!   hasher state, so concurrent use needs no coordination
//! - **Closed algorithm set**: SHA-256, SHA-512, SHA-1 and MD5 — unknown
//!   identifiers fail at parse time, never inside the engine
//!
//! # Example
//!
//! ```
//! use huella_digest::{compute, verify, Algorithm, DigestPolicy};
//!
//! let policy = DigestPolicy::new(Algorithm::Sha256)
//!     .with_salt("sal")
//!     .with_iterations(3);
//!
//! let digest = compute(b"hola", &policy);
//! assert!(verify(b"hola", &digest.to_string(), &policy));
//! ```

pub use self::algo::Algorithm;
pub use self::engine::{Digest, compute, compute_reader};
pub use self::error::{DigestError, Result};
pub use self::hasher::{AlgoHasher, Hasher};
pub use self::policy::{DigestPolicy, Encoding};
pub use self::verify::{verify, verify_reader};

mod algo;
mod engine;
mod error;
mod hasher;
mod policy;
mod verify;
