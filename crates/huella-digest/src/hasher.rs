use digest::Digest;

use crate::algo::Algorithm;

/// Incremental hash state: feed bytes in any split, finalize once.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Hasher selected at runtime from the closed [`Algorithm`] set.
pub struct AlgoHasher(State);

enum State {
    Sha256(sha2::Sha256),
    Sha512(sha2::Sha512),
    Sha1(sha1::Sha1),
    Md5(md5::Md5),
}

impl AlgoHasher {
    pub fn new(algorithm: Algorithm) -> Self {
        let state = match algorithm {
            Algorithm::Sha256 => State::Sha256(sha2::Sha256::new()),
            Algorithm::Sha512 => State::Sha512(sha2::Sha512::new()),
            Algorithm::Sha1 => State::Sha1(sha1::Sha1::new()),
            Algorithm::Md5 => State::Md5(md5::Md5::new()),
        };

        Self(state)
    }

    /// One-shot digest of `data`.
    pub fn digest(algorithm: Algorithm, data: &[u8]) -> Vec<u8> {
        match algorithm {
            Algorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
            Algorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
            Algorithm::Sha1 => sha1::Sha1::digest(data).to_vec(),
            Algorithm::Md5 => md5::Md5::digest(data).to_vec(),
        }
    }
}

impl Hasher for AlgoHasher {
    fn update(&mut self, data: &[u8]) {
        match &mut self.0 {
            State::Sha256(h) => h.update(data),
            State::Sha512(h) => h.update(data),
            State::Sha1(h) => h.update(data),
            State::Md5(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self.0 {
            State::Sha256(h) => h.finalize().to_vec(),
            State::Sha512(h) => h.finalize().to_vec(),
            State::Sha1(h) => h.finalize().to_vec(),
            State::Md5(h) => h.finalize().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_matches_one_shot() {
        for algorithm in Algorithm::ALL {
            let mut hasher = AlgoHasher::new(algorithm);
            hasher.update(b"hello ");
            hasher.update(b"world");

            assert_eq!(
                hasher.finalize(),
                AlgoHasher::digest(algorithm, b"hello world"),
                "split update diverged for {algorithm}",
            );
        }
    }

    #[test]
    fn one_shot_digest_vectors() {
        let cases = [
            (
                Algorithm::Sha256,
                "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
            ),
            (
                Algorithm::Sha512,
                "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f\
                 989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f",
            ),
            (Algorithm::Sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"),
            (Algorithm::Md5, "5eb63bbbe01eeed093cb22bb8f5acdc3"),
        ];

        for (algorithm, expected) in cases {
            assert_eq!(
                AlgoHasher::digest(algorithm, b"hello world"),
                hex::decode(expected).unwrap(),
            );
        }
    }

    #[test]
    fn digest_lengths_agree_with_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                AlgoHasher::digest(algorithm, b"").len(),
                algorithm.digest_len(),
            );
        }
    }
}
