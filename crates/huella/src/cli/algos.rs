use clap::Args;
use tabled::{Table, Tabled, settings::Style};

use huella_digest::Algorithm;

#[derive(Debug, Args)]
pub struct AlgosArg {}

#[derive(Tabled)]
struct AlgoRow {
    #[tabled(rename = "name")]
    name: &'static str,
    #[tabled(rename = "digest bytes")]
    digest_len: usize,
    #[tabled(rename = "status")]
    status: &'static str,
}

impl AlgosArg {
    pub fn run(self) -> anyhow::Result<()> {
        let rows = Algorithm::ALL.map(|algorithm| AlgoRow {
            name: algorithm.as_str(),
            digest_len: algorithm.digest_len(),
            status: if algorithm.is_weak() { "weak" } else { "ok" },
        });

        let mut table = Table::new(rows);
        table.with(Style::blank());
        println!("{table}");

        Ok(())
    }
}
