use args::Cli;
use clap::Parser;
use commands::{load_settings, log_directive, process_args};
use ibay_core::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

pub mod args;
pub mod commands;
pub mod error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let env = std::env::var("RUST_LOG").ok();

    // Installed before the settings file is read so nothing it logs is lost.
    let initial = log_directive(args.log_level.as_deref(), env.clone(), DEFAULT_LOG_LEVEL);
    let (filter, handle) = reload::Layer::new(EnvFilter::try_new(initial)?);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()?;

    let settings = load_settings(&args).await?;

    let directive = log_directive(args.log_level.as_deref(), env, &settings.log_level);
    handle.reload(EnvFilter::try_new(directive)?)?;

    process_args(&args, settings).await
}
