use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, InquireError, Text};
use mintemp_core::{Config, PredictionInput, Predictor, load_model, model::FEATURE_NAMES};

use crate::{form, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "mintemp", version, about = "Minimum temperature prediction CLI")]
pub struct Cli {
    /// Model artifact (.json or .toml); overrides the configured one.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the model artifact and the default input values.
    Configure,

    /// Predict the minimum temperature for one set of inputs.
    Predict {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive form: enter values, get a prediction, repeat.
    Form,

    /// Show the model that would be used and the feature order it expects.
    Inspect,
}

/// Inputs for a one-shot prediction. Omitted values come from the config defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Year, 2010..=2030.
    #[arg(long)]
    pub year: Option<i32>,

    /// Day of year, 1..=366.
    #[arg(long)]
    pub day_of_year: Option<u16>,

    /// Calendar date (YYYY-MM-DD); sets year and day of year together.
    #[arg(long, conflicts_with_all = ["year", "day_of_year"])]
    pub date: Option<NaiveDate>,

    /// 7-day rolling mean, °C.
    #[arg(long, allow_negative_numbers = true)]
    pub rolling7: Option<f64>,

    /// 30-day rolling mean, °C.
    #[arg(long, allow_negative_numbers = true)]
    pub rolling30: Option<f64>,
}

impl InputArgs {
    /// Overlay the given flags on `defaults`.
    pub fn resolve(&self, defaults: &PredictionInput) -> PredictionInput {
        let rolling7 = self.rolling7.unwrap_or(defaults.rolling7);
        let rolling30 = self.rolling30.unwrap_or(defaults.rolling30);

        match self.date {
            Some(date) => PredictionInput::from_date(date, rolling7, rolling30),
            None => PredictionInput::new(
                self.year.unwrap_or(defaults.year),
                self.day_of_year.unwrap_or(defaults.day_of_year),
                rolling7,
                rolling30,
            ),
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        // `configure` must still work when the stored file is broken; it rewrites it.
        let config = match self.command {
            Command::Configure => config_or_default(Config::load()),
            _ => Config::load()?,
        };
        let model = self.model.as_deref();

        match self.command {
            Command::Configure => configure(config),
            Command::Predict { inputs, json } => {
                let input = inputs.resolve(&config.defaults);
                input.validate().context("Invalid input")?;

                let predictor = open_predictor(&config, model)?;
                let prediction = predictor
                    .predict(&input)
                    .context("Prediction unavailable")?;

                if json {
                    output::print_json(&prediction)?;
                } else {
                    output::print_prediction(&prediction);
                }
                Ok(())
            }
            Command::Form => run_form(&config, model),
            Command::Inspect => {
                let path = config.resolve_model_path(model)?;
                let predictor = open_predictor(&config, Some(path.as_path()))?;
                let loaded = predictor.model();

                println!("Model:    {}", loaded.name());
                println!("Kind:     {}", loaded.kind());
                println!("Artifact: {}", path.display());
                println!("Features: {}", FEATURE_NAMES.join(", "));
                Ok(())
            }
        }
    }
}

/// Load the model once; the returned predictor serves the whole process.
fn open_predictor(config: &Config, explicit: Option<&Path>) -> anyhow::Result<Predictor> {
    let path = config.resolve_model_path(explicit)?;
    let model = load_model(&path)
        .with_context(|| format!("Failed to load model artifact: {}", path.display()))?;

    Ok(Predictor::new(model))
}

fn run_form(config: &Config, explicit: Option<&Path>) -> anyhow::Result<()> {
    let predictor = open_predictor(config, explicit)?;
    let mut defaults = config.defaults;

    output::print_form_header();

    loop {
        let input = match form::prompt_input(&defaults) {
            Ok(input) => input,
            Err(err) if is_cancel(&err) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        match predictor.predict(&input) {
            Ok(prediction) => output::print_prediction(&prediction),
            Err(err) => {
                tracing::warn!(error = %err, "prediction failed");
                output::print_unavailable(&err);
            }
        }

        // Keep the last submission as the starting point for the next one.
        defaults = input;

        match Confirm::new("Predict again?").with_default(true).prompt() {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(err) if is_cancel(&err) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config
        .model_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let model_path = Text::new("Model artifact path (.json or .toml):")
        .with_default(&current)
        .prompt()?;
    let model_path = PathBuf::from(model_path.trim());

    // Fail early rather than saving a path every later command would choke on.
    load_model(&model_path)
        .with_context(|| format!("Failed to load model artifact: {}", model_path.display()))?;
    config.set_model_path(model_path);

    println!("Default input values:");
    config.defaults = form::prompt_input(&config.defaults)?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config, starting from defaults");
        Config::default()
    })
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
