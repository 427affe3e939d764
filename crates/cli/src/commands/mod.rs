use std::path::{Path, PathBuf};

use ibay_core::{
    fs::write_toml_config,
    pipeline::{normalize_file, scrape},
    settings::Settings,
    FetchConfig, Fetcher, NORMALIZED_TREE_FILE,
};
use tracing::{info, warn};

use crate::{
    args::{Cli, Command},
    error::Error,
};

/// Settings file (if any) with the command line overrides applied.
pub async fn load_settings(args: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::read(path).await?,
        None => Settings::default(),
    };

    if let Some(output_dir) = &args.output_dir {
        settings.output_dir.clone_from(output_dir);
    }
    if let Some(max_attempts) = args.max_attempts {
        settings.fetch.max_attempts = max_attempts;
    }
    if let Some(log_level) = &args.log_level {
        settings.log_level.clone_from(log_level);
    }

    Ok(settings)
}

/// Log filter directive: `--log-level` beats `RUST_LOG`, which beats the settings file.
pub fn log_directive(flag: Option<&str>, env: Option<String>, settings: &str) -> String {
    flag.map(str::to_owned)
        .or(env.filter(|env| !env.is_empty()))
        .unwrap_or_else(|| settings.to_owned())
}

pub async fn process_args(args: &Cli, settings: Settings) -> anyhow::Result<()> {
    match &args.command {
        None | Some(Command::Fetch) => fetch(&settings).await,
        Some(Command::Normalize { input, output }) => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_normalized_path(input));
            normalize(input, &output).await
        }
        Some(Command::InitConfig { path }) => init_config(path, &settings).await,
    }
}

pub async fn fetch(settings: &Settings) -> anyhow::Result<()> {
    if settings.roots.is_empty() {
        warn!("No top-level categories configured. The output files will be empty");
    }

    let fetcher = Fetcher::new(FetchConfig::from(&settings.fetch))?;
    let raw_path = settings.raw_path();
    let normalized_path = settings.normalized_path();

    let tree = scrape(fetcher, &settings.roots, &raw_path, &normalized_path).await?;

    info!(
        categories = tree.len(),
        "Wrote {} and {}",
        raw_path.display(),
        normalized_path.display()
    );

    Ok(())
}

pub async fn normalize(input: &Path, output: &Path) -> anyhow::Result<()> {
    let tree = normalize_file(input, output).await?;

    info!(categories = tree.len(), "Wrote {}", output.display());

    Ok(())
}

pub async fn init_config(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    if path.exists() {
        return Err(Error::General(format!(
            "`{}` already exists. Remove it or pick another path",
            path.display()
        ))
        .into());
    }

    write_toml_config(settings, path).await
}

fn default_normalized_path(input: &Path) -> PathBuf {
    input.with_file_name(NORMALIZED_TREE_FILE)
}
