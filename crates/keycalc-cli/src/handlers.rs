//! Command handlers

use std::path::Path;

use console::style;
use keycalc::config::CalcConfig;
use keycalc::core::tracker::TrackerSnapshot;
use keycalc::driver::{CalculatorDriver, TrackerDriver};
use serde::Serialize;

use crate::commands::PressArgs;
use crate::error::CliResult;

/// Loads the configuration file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> CliResult<CalcConfig> {
    match path {
        Some(path) => Ok(CalcConfig::load(path)?),
        None => Ok(CalcConfig::default()),
    }
}

/// Display after one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressStep {
    /// Key label
    pub key: char,
    /// Display after the press
    pub display: String,
}

/// Outcome of a scripted key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    /// Final calculator state
    #[serde(flatten)]
    pub snapshot: TrackerSnapshot,
    /// Per-key displays, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<PressStep>>,
}

/// Presses `args.keys` on a fresh tracker
pub fn press(config: &CalcConfig, args: &PressArgs) -> CliResult<PressReport> {
    let mut driver = TrackerDriver::with_tracker(config.tracker());
    let mut steps = Vec::new();

    for key in args.keys.chars().filter(|c| !c.is_whitespace()) {
        let display = driver.press_label(key)?;
        steps.push(PressStep { key, display });
    }

    Ok(PressReport {
        snapshot: driver.tracker().snapshot(),
        steps: args.steps.then_some(steps),
    })
}

/// Formats a report for stdout
pub fn render_press(report: &PressReport, json: bool) -> CliResult<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(report)?));
    }

    let mut out = String::new();
    if let Some(steps) = &report.steps {
        for step in steps {
            out.push_str(&format!("{}  {}\n", style(step.key).cyan(), step.display));
        }
    }
    out.push_str(&format!("{}\n", style(&report.snapshot.display).bold()));
    Ok(out)
}

/// YAML text of the effective configuration
pub fn render_config(config: &CalcConfig) -> CliResult<String> {
    Ok(config.to_yaml()?)
}
