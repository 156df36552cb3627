mod args;
mod image_io;

use std::process::ExitCode;

use clap::Parser;
use denoise::NoiseRemover;

use crate::args::Cli;

fn main() -> ExitCode {
    // Usage errors exit here with clap's own status.
    let cli = Cli::parse();

    if let Err(err) = common::log_setup::setup_logging(&cli.log_config()) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let output_path = cli.output_path();

    let image = image_io::load_gray(&cli.input)?;
    let (width, height) = image.dimensions();
    tracing::info!(
        "Removing noise from '{}' ({}x{}, {}-bit) with {} filter...",
        cli.input.display(),
        width,
        height,
        image.bit_depth(),
        config.filter
    );
    let result = image.denoise(&NoiseRemover::from_config(config));

    tracing::info!("Saving final image as '{}'...", output_path.display());
    image_io::save_gray(&result, &output_path)?;

    tracing::info!("Finished");
    Ok(())
}
