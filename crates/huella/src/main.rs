use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::app::App::parse().run()
}
