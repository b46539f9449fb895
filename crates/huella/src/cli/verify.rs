use anyhow::{Result, bail};
use clap::Args;
use console::style;

use super::input::{InputArg, PolicyArg};

#[derive(Debug, Args)]
pub struct VerifyArg {
    /// Expected digest, hex-encoded
    #[arg(value_name = "EXPECTED")]
    pub expected: String,

    #[command(flatten)]
    pub input: InputArg,

    #[command(flatten)]
    pub policy: PolicyArg,
}

impl VerifyArg {
    pub fn run(self) -> Result<()> {
        let expected = self.expected.trim().to_ascii_lowercase();
        if expected.is_empty() {
            bail!("missing expected hash");
        }
        self.policy.warn_weak();

        let computed = self.input.digest(&self.policy.policy())?.to_string();
        println!("computed: {computed}");

        if computed == expected {
            println!("{} digest matches", style("✓").green().bold());
            Ok(())
        } else {
            println!("{} digest mismatch", style("✗").red().bold());
            std::process::exit(1)
        }
    }
}
