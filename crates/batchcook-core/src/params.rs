//! Parameter structures for kitchen operations.
//!
//! These structures are shared by every interface (CLI, MCP) without any
//! framework-specific derives beyond serde. Interfaces wrap them and add
//! their own derives; JSON schema generation is available behind the
//! `schema` feature for the MCP server.
//!
//! Dates and times travel as strings (`"2026-10-19"`, `"13:30"`) and are
//! parsed by the [`Kitchen`](crate::Kitchen) so that a malformed value is
//! reported like any other bad input.

use std::collections::BTreeSet;

use jiff::civil::{Date, Time};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{KitchenError, Result},
    models::{ApplianceId, Preparation, Session, Step},
    schedule::{estimate_end_time, format_duration},
};

/// A bare list of steps, for the step-level passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepList {
    /// Steps to process
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Parameters for validating a proposed session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidateSession {
    /// Session date as `YYYY-MM-DD`
    pub date: String,
    /// Selected recipe ids; repeats count once
    #[serde(default)]
    pub recipe_ids: BTreeSet<u64>,
    /// Appliance ids the session will use
    #[serde(default)]
    pub appliances: Vec<String>,
}

/// Parameters for validating a preparation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidatePreparation {
    /// Name of the dish
    pub name: String,
    /// Number of portions
    pub portions: i64,
    /// Days the dish should keep
    pub conservation_days: i64,
    /// Storage location id
    pub storage_location: String,
}

/// Parameters for splitting a scheduled plan around a nap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NapPlanRequest {
    /// Scheduled steps (with `parallel_group` and `sequence_order`)
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Session start as `HH:MM`
    pub start_time: String,
    /// Nap start as `HH:MM`
    pub nap_start: String,
    /// Nap end as `HH:MM`
    pub nap_end: String,
}

/// A session as exchanged over JSON interfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SessionParams {
    /// Session date as `YYYY-MM-DD`
    pub date: String,
    /// Selected recipe ids
    #[serde(default)]
    pub selected_recipe_ids: BTreeSet<u64>,
    /// Appliances available for the session
    #[serde(default)]
    pub available_appliances: BTreeSet<ApplianceId>,
    /// Steps of the session
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Preparations the session produces
    #[serde(default)]
    pub preparations: Vec<Preparation>,
}

impl SessionParams {
    /// Parses the date and builds the session.
    pub fn to_session(&self) -> Result<Session> {
        Ok(Session {
            date: parse_date("date", &self.date)?,
            selected_recipe_ids: self.selected_recipe_ids.clone(),
            available_appliances: self.available_appliances.clone(),
            steps: self.steps.clone(),
            preparations: self.preparations.clone(),
        })
    }
}

/// Parameters for aggregating past sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SessionHistory {
    /// Past sessions, oldest first
    #[serde(default)]
    pub sessions: Vec<SessionParams>,
}

/// Parameters for formatting a duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FormatDuration {
    /// Duration in minutes
    pub minutes: u32,
    /// Optional start as `HH:MM`; when given the end time is estimated too
    #[serde(default)]
    pub start_time: Option<String>,
}

/// A formatted duration and, when a start was given, the estimated end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedDuration {
    pub minutes: u32,
    pub formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Time>,
}

impl FormatDuration {
    /// Formats the duration and estimates the end time.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::InvalidInput` when `start_time` is not `HH:MM`.
    pub fn evaluate(&self) -> Result<FormattedDuration> {
        let ends_at = self
            .start_time
            .as_deref()
            .map(|s| parse_time("start_time", s))
            .transpose()?
            .map(|start| estimate_end_time(start, self.minutes));
        Ok(FormattedDuration {
            minutes: self.minutes,
            formatted: format_duration(self.minutes),
            ends_at,
        })
    }
}

/// Parses a `YYYY-MM-DD` field.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        KitchenError::invalid_input(field).with_reason(format!("expected YYYY-MM-DD: {e}"))
    })
}

/// Parses an `HH:MM` field.
pub fn parse_time(field: &str, value: &str) -> Result<Time> {
    value.trim().parse::<Time>().map_err(|e| {
        KitchenError::invalid_input(field).with_reason(format!("expected HH:MM: {e}"))
    })
}
