use crate::config::BatchConfig;
use crate::generate::generate_values;
use crate::progress::display_bytes;
use crate::shards::write_shards;
use crate::source::UniformSource;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod config;
mod generate;
mod progress;
mod shards;
mod source;
#[cfg(test)]
mod test_utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn setup_tracing() {
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .without_time(),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(indicatif_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    setup_tracing();

    let config = BatchConfig::default();
    config.validate()?;

    info!(
        "Generating {} values in [{}, {}]",
        config.total_values,
        config.value_range.start(),
        config.value_range.end()
    );
    let mut source = UniformSource::from_entropy(config.value_range.clone());
    let values = generate_values(&mut source, config.total_values);

    let output_dir = std::env::current_dir().context("Error resolving output directory")?;
    info!(
        "Writing {} shards of {} values each to {}",
        config.file_count,
        config.values_per_file,
        output_dir.display()
    );
    let written = write_shards(&output_dir, &values, &config)?;

    for shard in &written {
        debug!("{shard}");
    }
    let total_size = written.iter().map(|shard| shard.size).sum::<u64>();
    info!("Total output size: {:#.1}", display_bytes(total_size));

    println!("Arquivos gerados com sucesso!");
    Ok(())
}
