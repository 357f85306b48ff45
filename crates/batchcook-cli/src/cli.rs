//! Command handlers.
//!
//! Each handler reads its input, calls the [`Kitchen`] and prints the
//! result either as markdown through the [`TerminalRenderer`] or as pretty
//! JSON when `--json` is set.
//!
//! Input files hold JSON in one of two shapes:
//!
//! ```text
//! [ {step}, {step}, ... ]                       bare step list
//! { "date": "2026-11-01", "steps": [...], ... } session
//! ```
//!
//! Step-level commands accept both; session-level commands need the second.

use std::{
    fmt::Display,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};
use batchcook_core::{
    display::{Appliances, Conflicts, Moments, Steps, StorageLocations},
    params::StepList,
    FormatDuration, Kitchen, NapPlanRequest, Session, SessionParams, Step, ValidatePreparation,
    ValidateSession, ValidationReport,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    args::{FileArgs, HistoryArgs, NapArgs, ValidateCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            kitchen,
            renderer,
            json,
        }
    }

    /// Plans a session file. A session is validated first; a bare step list
    /// is scheduled directly.
    pub fn plan(&self, args: FileArgs) -> Result<()> {
        let plan = match read_input(&args.file)? {
            Input::Session(session) => self
                .kitchen
                .plan_session(&session)
                .context("Failed to plan session")?,
            Input::Steps(steps) => self.kitchen.plan_steps(&steps),
        };
        self.emit(&plan, &plan)
    }

    pub fn optimize(&self, args: FileArgs) -> Result<()> {
        let steps = read_input(&args.file)?.into_steps();
        let scheduled = self.kitchen.optimize(&steps);
        self.emit(&scheduled, Steps(scheduled.clone()))
    }

    pub fn conflicts(&self, args: FileArgs) -> Result<()> {
        let steps = read_input(&args.file)?.into_steps();
        let conflicts = self.kitchen.detect_conflicts(&steps);
        self.emit(&conflicts, Conflicts(conflicts.clone()))
    }

    pub fn validate(&self, command: ValidateCommands) -> Result<()> {
        let report = match command {
            ValidateCommands::Session(args) => self
                .kitchen
                .validate_session_params(&ValidateSession::from(args)),
            ValidateCommands::Preparation(args) => self
                .kitchen
                .validate_preparation(&ValidatePreparation::from(args)),
        };
        self.emit(&report, &report)?;
        fail_unless_valid(&report)
    }

    pub fn jules(&self, args: FileArgs) -> Result<()> {
        let steps = self.kitchen.ensure_scheduled(read_input(&args.file)?.into_steps());
        let moments = self.kitchen.child_safe_moments(&steps);
        self.emit(&moments, Moments(moments.clone()))
    }

    pub fn nap(&self, args: NapArgs) -> Result<()> {
        let plan = self
            .kitchen
            .nap_plan(&NapPlanRequest {
                steps: read_input(&args.file)?.into_steps(),
                start_time: args.start,
                nap_start: args.nap_start,
                nap_end: args.nap_end,
            })
            .context("Failed to build nap plan")?;
        self.emit(&plan, &plan)
    }

    pub fn stats(&self, args: FileArgs) -> Result<()> {
        let mut session = match read_input(&args.file)? {
            Input::Session(session) => session,
            Input::Steps(_) => bail!("stats needs a session object with a \"date\" field"),
        };
        session.steps = self.kitchen.ensure_scheduled(session.steps);
        let stats = self.kitchen.session_statistics(&session);
        self.emit(&stats, &stats)
    }

    pub fn history(&self, args: HistoryArgs) -> Result<()> {
        let mut sessions = Vec::new();
        for file in &args.files {
            let value = read_json(file)?;
            let params: Vec<SessionParams> = if value.is_array() {
                parse(value, file)?
            } else {
                vec![parse(value, file)?]
            };
            for p in params {
                sessions.push(
                    p.to_session()
                        .with_context(|| format!("Invalid session in {}", file.display()))?,
                );
            }
        }
        let stats = self.kitchen.history_statistics(&sessions);
        self.emit(&stats, &stats)
    }

    pub fn appliances(&self) -> Result<()> {
        let config = self.kitchen.config();
        if self.json {
            return print_json(&serde_json::json!({
                "appliances": config.appliances,
                "storage_locations": config.storage_locations,
            }));
        }
        let markdown = format!(
            "# Appliances\n\n{}\n# Storage Locations\n\n{}",
            Appliances(config.appliances.clone()),
            StorageLocations(config.storage_locations.clone())
        );
        self.renderer.render(&markdown)
    }

    pub fn format(&self, params: FormatDuration) -> Result<()> {
        let formatted = params.evaluate().context("Failed to format duration")?;
        self.emit(&formatted, &formatted)
    }

    fn emit(&self, data: &impl Serialize, markdown: impl Display) -> Result<()> {
        if self.json {
            print_json(data)
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }
}

/// Parsed input file.
#[derive(Debug)]
enum Input {
    Session(Session),
    Steps(Vec<Step>),
}

impl Input {
    fn into_steps(self) -> Vec<Step> {
        match self {
            Input::Session(session) => session.steps,
            Input::Steps(steps) => steps,
        }
    }
}

fn read_input(path: &Path) -> Result<Input> {
    let value = read_json(path)?;
    if value.is_array() {
        return Ok(Input::Steps(parse(value, path)?));
    }
    if value.get("date").is_some() {
        let params: SessionParams = parse(value, path)?;
        return Ok(Input::Session(params.to_session()?));
    }
    let list: StepList = parse(value, path)?;
    Ok(Input::Steps(list.steps))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn parse<T: DeserializeOwned>(value: Value, path: &Path) -> Result<T> {
    serde_json::from_value(value)
        .with_context(|| format!("Unexpected JSON shape in {}", path.display()))
}

fn print_json(data: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn fail_unless_valid(report: &ValidationReport) -> Result<()> {
    if report.valid {
        Ok(())
    } else {
        bail!("validation failed with {} error(s)", report.errors.len())
    }
}
