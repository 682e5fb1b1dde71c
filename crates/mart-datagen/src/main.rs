use anyhow::Context;
use clap::Parser;

use mart_config::{GenConfig, LoggingConfig};
use mart_datagen::datagen::random::RandomSource;
use mart_datagen::pipeline;
use mart_datagen::tracing_init::init_tracing;

/// Writes `data/users.jsonl`, `data/items.jsonl` and `data/events.jsonl`.
#[derive(Parser)]
#[command(
    name = "martgen",
    version,
    about = "NimbusMegaMart synthetic e-commerce fixture generator"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    init_tracing(&LoggingConfig::default())?;

    let config = GenConfig::default();
    let mut rng = RandomSource::from_entropy();
    let mut stdout = std::io::stdout().lock();

    pipeline::run(&config, &mut rng, &mut stdout)
        .with_context(|| format!("generating fixtures into {}", config.out_dir.display()))?;

    Ok(())
}
