//! `recipe-kit` entry-point: checks payloads, prints routes and samples.
//!
//! # Examples
//! ```sh
//! echo '{"servings": 0}' | cargo run -p recipe-kit -- check --kind update
//! ```

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use recipe_kit::cli::{Cli, run};
use recipe_kit::example_data::SampleDataSettings;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = if cli.command.uses_sample_settings() {
        SampleDataSettings::load_from_iter([OsString::from("recipe-kit")])
            .map_err(|err| eyre!("failed to load sample settings: {err}"))?
    } else {
        SampleDataSettings::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = match run(
        cli,
        settings,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &DefaultClock,
    ) {
        Ok(outcome) => outcome,
        Err(err) if err.is_broken_pipe() => {
            debug!("output closed early");
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.into()),
    };

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
