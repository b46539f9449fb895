use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use super::app::App;

#[derive(Debug, Args)]
pub struct SetupArg {
    /// Shell to generate completions for
    #[arg(long)]
    shell: Shell,
}

impl SetupArg {
    pub fn run(self) -> Result<()> {
        let mut cmd = App::command();
        generate(self.shell, &mut cmd, "huella", &mut std::io::stdout());

        Ok(())
    }
}
