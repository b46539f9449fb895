use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use huella_digest::{Algorithm, Digest, DigestPolicy, compute, compute_reader};

/// Files at or above this size get a progress bar while hashing.
const PB_THRESHOLD: u64 = 8 * 1024 * 1024;

const PB_STYLE: &str =
    "{spinner:.blue} {prefix:>8.cyan.bold} {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec})";

const PB_CHARS: &str = "█▓▒░  ";

#[derive(Debug, Clone, Args)]
pub struct PolicyArg {
    /// Hash algorithm (sha256, sha512, sha1, md5)
    #[arg(short, long, default_value_t = Algorithm::Sha256)]
    pub algorithm: Algorithm,

    /// Salt prepended to the input before the first pass
    #[arg(short, long, default_value = "")]
    pub salt: String,

    /// Number of sequential hash passes
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=1_000_000)
    )]
    pub iterations: u32,
}

impl PolicyArg {
    pub fn policy(&self) -> DigestPolicy {
        DigestPolicy::new(self.algorithm)
            .with_salt(self.salt.clone())
            .with_iterations(self.iterations)
    }

    /// MD5/SHA-1 stay available for legacy checksums; warn, never block.
    pub fn warn_weak(&self) {
        if self.algorithm.is_weak() {
            eprintln!(
                "{} {} is cryptographically broken; prefer sha256 or sha512",
                style("warning:").yellow().bold(),
                self.algorithm,
            );
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct InputArg {
    /// Text to hash; reads stdin when neither TEXT nor --file is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Hash the contents of a file instead of direct text
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArg {
    /// Digest the selected input under `policy`. Files and stdin are
    /// streamed in fixed-size chunks; text is hashed in memory.
    pub fn digest(&self, policy: &DigestPolicy) -> Result<Digest> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(compute(text.as_bytes(), policy)),
            (None, Some(path)) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                let len = file.metadata().map(|m| m.len()).unwrap_or(0);

                if len >= PB_THRESHOLD {
                    let pb = ProgressBar::new(len);
                    if let Ok(pb_style) = ProgressStyle::with_template(PB_STYLE) {
                        pb.set_style(pb_style.progress_chars(PB_CHARS));
                    }
                    pb.set_prefix("hashing");

                    let digest = compute_reader(pb.wrap_read(file), policy)?;
                    pb.finish_and_clear();
                    Ok(digest)
                } else {
                    Ok(compute_reader(file, policy)?)
                }
            }
            (None, None) => {
                if io::stdin().is_terminal() {
                    bail!("missing input: pass TEXT, --file, or pipe data on stdin");
                }
                Ok(compute_reader(io::stdin().lock(), policy)?)
            }
        }
    }

    /// Default artifact name: `hash.txt` for text/stdin input,
    /// `<filename>.<algorithm>.txt` for files.
    pub fn default_save_name(&self, algorithm: Algorithm) -> String {
        self.file
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(|name| format!("{name}.{algorithm}.txt"))
            .unwrap_or_else(|| "hash.txt".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(file: Option<&str>) -> InputArg {
        InputArg {
            text: None,
            file: file.map(PathBuf::from),
        }
    }

    #[test]
    fn save_name_for_text_input() {
        assert_eq!(input(None).default_save_name(Algorithm::Sha256), "hash.txt");
    }

    #[test]
    fn save_name_for_file_input() {
        assert_eq!(
            input(Some("/tmp/acta.pdf")).default_save_name(Algorithm::Sha512),
            "acta.pdf.sha512.txt",
        );
    }
}
