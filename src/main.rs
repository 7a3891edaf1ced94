mod cli;
mod config;
mod report;

use clap::Parser;
use cli::Cli;
use config::LabSettings;
use hydrolab::{
    parse_input, surface_samples, InputError, PhysicalTriple, Quantity, RenderFrame,
    Resolution, ResolutionResult, SurfaceSamples,
};
use report::render_report;
use serde::Serialize;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Everything printed by `--json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Solved triple, if solving succeeded.
    resolution: Option<&'a Resolution>,
    /// Reason solving failed, if it did.
    rejection: Option<String>,
    /// Scenes and charts for the stored pressure.
    frame: &'a RenderFrame,
    /// P = F / A surface, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    surface: Option<SurfaceSamples>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Hydraulic Power Lab v{}", env!("CARGO_PKG_VERSION"));

    let settings = match &cli.config {
        Some(path) => LabSettings::load(path)?,
        None => LabSettings::default(),
    };

    // Turn the raw text into solver inputs. A bad field is reported and then
    // treated as if it had been left blank, like the calculator form does.
    let mut input_errors: Vec<InputError> = Vec::new();
    let mut values = [None; 3];
    let quantities = [Quantity::Force, Quantity::Area, Quantity::Pressure];
    for ((raw, quantity), value) in cli.raw_inputs().iter().zip(quantities).zip(&mut values) {
        match raw.map(|text| parse_input(text, quantity)).transpose() {
            Ok(parsed) => *value = parsed.flatten(),
            Err(error) => {
                warn!(%error, "ignoring field");
                input_errors.push(error);
            }
        }
    }

    // Solve only when the user typed something, then store the solved pressure
    // as the slider would hold it.
    let mut snapshot = settings.initial_snapshot();
    let outcome: Option<ResolutionResult> = cli.raw_inputs().iter().any(Option::is_some).then(|| {
        let [force, area, pressure] = values;
        PhysicalTriple::new(force, area, pressure).resolve()
    });
    if let Some(Ok(resolution)) = &outcome {
        snapshot = settings.snapshot(resolution.pressure);
    }
    if let Some(slider) = cli.slider {
        snapshot = settings.snapshot(slider);
    }

    // Capture every diagram and chart from that single stored value.
    let frame = RenderFrame::capture(snapshot);

    if cli.json || settings.emit_json {
        let output = JsonOutput {
            resolution: outcome.as_ref().and_then(|result| result.as_ref().ok()),
            rejection: outcome
                .as_ref()
                .and_then(|result| result.as_ref().err())
                .map(ToString::to_string),
            frame: &frame,
            surface: cli.surface.then(surface_samples),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let report = render_report(&input_errors, outcome.as_ref(), &frame);
        print!("{report}");
    }

    Ok(())
}
