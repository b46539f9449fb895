use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use huella_digest::{Digest, Encoding};

use super::input::{InputArg, PolicyArg};

#[derive(Debug, Args)]
pub struct HashArg {
    #[command(flatten)]
    pub input: InputArg,

    #[command(flatten)]
    pub policy: PolicyArg,

    /// Write raw digest bytes to stdout instead of hex
    #[arg(long, conflicts_with_all = ["json", "save"])]
    pub raw: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the hex digest to a file
    /// (default: hash.txt, or <filename>.<algorithm>.txt for --file)
    #[arg(long, value_name = "PATH")]
    pub save: Option<Option<PathBuf>>,
}

#[derive(Serialize)]
struct HashReport<'a> {
    algorithm: &'a str,
    iterations: u32,
    salted: bool,
    hash: &'a str,
}

impl HashArg {
    pub fn run(self) -> Result<()> {
        self.policy.warn_weak();

        let encoding = if self.raw { Encoding::Raw } else { Encoding::Hex };
        let policy = self.policy.policy().with_encoding(encoding);

        match self.input.digest(&policy)? {
            Digest::Raw(bytes) => {
                io::stdout()
                    .write_all(&bytes)
                    .context("failed to write digest to stdout")?;
            }
            Digest::Hex(hex) => {
                if self.json {
                    let report = HashReport {
                        algorithm: policy.algorithm().as_str(),
                        iterations: policy.iterations(),
                        salted: !policy.salt().is_empty(),
                        hash: &hex,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{hex}");
                }

                if let Some(path) = self.save {
                    let path = path.unwrap_or_else(|| {
                        self.input.default_save_name(policy.algorithm()).into()
                    });
                    fs::write(&path, format!("{hex}\n"))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("saved to {}", path.display());
                }
            }
        }

        Ok(())
    }
}
