use std::io;

use anyhow::{Context, Result};
use log::LevelFilter;
use tagcloud_engine::{generate, CloudConfig};
use tagcloud_logging::cloud_info;

use super::logging;
use super::prompt::{resolve_target, Prompter};
use crate::cli::Cli;

pub fn run_app(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log.into(), level);

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let target = resolve_target(cli, &mut prompter)?;

    let mut config = CloudConfig::new(target.input, target.output, target.word_count);
    config.tie_break = cli.tie_break.into();
    config.label = cli.title.clone();
    config.stylesheet = cli.stylesheet();
    config.encoding = cli.encoding.clone();
    config.manifest_path = cli.manifest.clone();

    let summary = generate(&config)
        .with_context(|| format!("generating tag cloud from {:?}", config.input_path))?;

    cloud_info!(
        "tag cloud of {} words written to {:?} ({} bytes, input decoded as {})",
        summary.selected,
        summary.output_path,
        summary.bytes_written,
        summary.encoding_label
    );
    if let Some(manifest) = &summary.manifest_path {
        cloud_info!("manifest written to {:?}", manifest);
    }
    Ok(())
}
