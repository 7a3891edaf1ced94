use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Explore Pascal's law: supply any two of force, area and pressure.
#[derive(Parser, Debug)]
#[command(name = "hydrolab")]
#[command(author, version, about = "Hydraulic Power Lab: P = F / A", long_about = None)]
pub struct Cli {
    /// Force in newtons (leave out to solve for it)
    #[arg(short, long, allow_hyphen_values = true)]
    pub force: Option<String>,

    /// Area in square metres (leave out to solve for it)
    #[arg(short, long, allow_hyphen_values = true)]
    pub area: Option<String>,

    /// Pressure in pascals (leave out to solve for it)
    #[arg(short, long, allow_hyphen_values = true)]
    pub pressure: Option<String>,

    /// Pressure to draw, overriding the solved one, as if the slider was dragged
    #[arg(long)]
    pub slider: Option<f64>,

    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print every scene and chart as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Include the P = F / A surface samples in JSON output
    #[arg(long, requires = "json")]
    pub surface: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Tracing level named by `--log-level`, falling back to `INFO`.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Raw text of every field, in force, area, pressure order.
    pub fn raw_inputs(&self) -> [Option<&str>; 3] {
        [
            self.force.as_deref(),
            self.area.as_deref(),
            self.pressure.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_fields_and_negative_text() {
        let cli = Cli::parse_from(["hydrolab", "--force", "-5", "--pressure", "50000"]);
        assert_eq!(cli.raw_inputs(), [Some("-5"), None, Some("50000")]);
        assert_eq!(cli.level(), Level::INFO);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cli = Cli::parse_from(["hydrolab", "--log-level", "LOUD"]);
        assert_eq!(cli.level(), Level::INFO);
        let cli = Cli::parse_from(["hydrolab", "-l", "Debug"]);
        assert_eq!(cli.level(), Level::DEBUG);
    }
}
