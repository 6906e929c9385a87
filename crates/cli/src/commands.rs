//! CLI command implementations.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, ValueEnum};
use freefall::{RawInputs, RawValue, Simulation, SimulationResult, view};
use freefall_server::ServerConfig;
use tracing::info;

use crate::input;

/// Output rendering for `freefall run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with values to four decimals
    #[default]
    Table,
    /// CSV at full precision
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Inputs for a single simulation.
///
/// Values are layered: the standard inputs first, then the `--input` file,
/// then individual flags. Flags are taken as text and coerced the same way as
/// any other raw input.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Input file (TOML, YAML or JSON, chosen by extension)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Gravitational acceleration in m/s²
    #[arg(short, long, allow_hyphen_values = true)]
    pub gravity: Option<String>,

    /// Initial height in m
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Initial speed in m/s
    #[arg(long, allow_hyphen_values = true)]
    pub velocity: Option<String>,

    /// Initial direction: up or down
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Time step in s
    #[arg(short, long, allow_hyphen_values = true)]
    pub time_step: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Inputs given as flags; absent flags stay absent.
    fn flag_inputs(&self) -> RawInputs {
        let text = |flag: &Option<String>| flag.clone().map(RawValue::Text);

        RawInputs {
            gravity: text(&self.gravity),
            initial_height: text(&self.height),
            initial_velocity: text(&self.velocity),
            velocity_direction: text(&self.direction),
            time_step: text(&self.time_step),
        }
    }

    /// Resolves the layered inputs.
    fn inputs(&self) -> anyhow::Result<RawInputs> {
        let mut raw = RawInputs::standard();

        if let Some(path) = &self.input {
            raw = raw.overlay(input::load(path)?);
        }

        Ok(raw.overlay(self.flag_inputs()))
    }
}

/// Simulates one drop and writes the trajectory.
pub fn run(args: &RunArgs) -> anyhow::Result<()> {
    let raw = args.inputs()?;
    let result = Simulation::new().run(&raw)?;

    info!(samples = result.states.len(), "simulation complete");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write(&mut writer, args.format, &result)?;
            writer.flush()?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut writer = io::stdout().lock();
            write(&mut writer, args.format, &result)?;
        }
    }

    Ok(())
}

fn write<W: Write>(writer: &mut W, format: OutputFormat, result: &SimulationResult) -> io::Result<()> {
    match format {
        OutputFormat::Table => view::write_table(writer, result),
        OutputFormat::Csv => view::write_csv(writer, &result.states),
        OutputFormat::Json => view::write_json(writer, result),
    }
}

/// Serves the HTTP interface until interrupted.
pub fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(freefall_server::serve(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use freefall::ValidationError;

    #[test]
    fn flags_override_standard_inputs() {
        let args = RunArgs {
            height: Some("2".into()),
            direction: Some("up".into()),
            ..RunArgs::default()
        };

        let raw = args.inputs().unwrap();
        let standard = RawInputs::standard();

        assert_eq!(raw.gravity, standard.gravity);
        assert_eq!(raw.initial_height, Some(RawValue::from("2")));
        assert_eq!(raw.velocity_direction, Some(RawValue::from("up")));
        assert_eq!(raw.time_step, standard.time_step);
    }

    #[test]
    fn flag_values_are_validated_as_text() {
        let args = RunArgs {
            gravity: Some("-1".into()),
            ..RunArgs::default()
        };

        let error = run(&args).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::Gravity)
        );
    }

    #[test]
    fn missing_input_file_is_reported() {
        let args = RunArgs {
            input: Some(PathBuf::from("does-not-exist.toml")),
            ..RunArgs::default()
        };

        let error = args.inputs().unwrap_err();
        assert!(error.to_string().contains("does-not-exist.toml"));
    }

    #[test]
    fn writes_each_format() {
        let result = Simulation::new()
            .run(
                &RawInputs::standard()
                    .with_gravity(1.0)
                    .with_initial_height(2.0)
                    .with_time_step(1.0),
            )
            .unwrap();

        let render = |format| {
            let mut out = Vec::new();
            write(&mut out, format, &result).unwrap();
            String::from_utf8(out).unwrap()
        };

        assert!(render(OutputFormat::Table).starts_with("h''(t) = -g\n"));
        assert_eq!(
            render(OutputFormat::Csv),
            "time(s),height(m),velocity(m/s)\n0,2,-0\n1,1,-1\n2,0,-2\n"
        );
        assert!(render(OutputFormat::Json).contains("\"equation\": \"h''(t) = -g\""));
    }
}
