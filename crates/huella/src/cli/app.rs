use clap::{Parser, Subcommand};

use super::algos::AlgosArg;
use super::hash::HashArg;
use super::setup::SetupArg;
use super::verify::VerifyArg;

#[derive(Debug, Parser)]
#[command(
    name = "huella",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute and verify salted, iterated digests of text and files",
    long_about = None,
    propagate_version = true
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "h", name = "hash")]
    Hash(HashArg),
    #[command(alias = "v", name = "verify")]
    Verify(VerifyArg),
    #[command(alias = "ls", name = "algos")]
    Algos(AlgosArg),
    #[command(alias = "s", name = "setup", about = "Generate shell completions")]
    SetUp(SetupArg),
}

impl App {
    pub fn run(self) -> anyhow::Result<()> {
        match self.cmd {
            Commands::Hash(arg) => arg.run(),
            Commands::Verify(arg) => arg.run(),
            Commands::Algos(arg) => arg.run(),
            Commands::SetUp(arg) => arg.run(),
        }
    }
}
