//! Kitchen operations.

use jiff::civil::Date;
use log::{debug, info};

use super::Kitchen;
use crate::{
    error::{KitchenError, Result},
    models::{
        ChildSafeMoment, Conflict, HistoryStats, NapPlan, Session, SessionPlan, SessionStats,
        Step, ValidationReport,
    },
    params::{
        parse_date, parse_time, NapPlanRequest, SessionHistory, ValidatePreparation,
        ValidateSession,
    },
    safety::{self, ChildSafetyFilter},
    schedule, stats, validation,
};

impl Kitchen {
    /// Checks date, recipe count and appliances of a proposed session.
    pub fn validate_session<R, A, S>(
        &self,
        date: Date,
        recipe_ids: R,
        appliances: A,
    ) -> ValidationReport
    where
        R: IntoIterator,
        R::Item: Ord,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validation::validate_session(&self.config, date, recipe_ids, appliances)
    }

    /// Validates string-typed session parameters; an unparsable date is
    /// reported alongside the other errors.
    pub fn validate_session_params(&self, params: &ValidateSession) -> ValidationReport {
        match parse_date("date", &params.date) {
            Ok(date) => self.validate_session(date, &params.recipe_ids, &params.appliances),
            Err(e) => {
                // Keep checking the other fields against an always-valid day.
                let today = jiff::Zoned::now().date();
                let mut report = validation::validate_session_on(
                    &self.config,
                    today,
                    today,
                    &params.recipe_ids,
                    &params.appliances,
                );
                report.errors.insert(0, e.to_string());
                ValidationReport::from_errors(report.errors)
            }
        }
    }

    /// Checks the fields of a preparation.
    pub fn validate_preparation(&self, params: &ValidatePreparation) -> ValidationReport {
        validation::validate_preparation(
            &self.config,
            &params.name,
            params.portions,
            params.conservation_days,
            &params.storage_location,
        )
    }

    /// Assigns parallel groups and sequence positions. See
    /// [`schedule::optimize`].
    pub fn optimize(&self, steps: &[Step]) -> Vec<Step> {
        schedule::optimize(steps)
    }

    /// Returns the steps as they are when every one already carries a
    /// sequence position, and an optimized copy otherwise.
    pub fn ensure_scheduled(&self, steps: Vec<Step>) -> Vec<Step> {
        if !steps.is_empty() && steps.iter().all(Step::is_scheduled) {
            steps
        } else {
            debug!("scheduling {} steps before use", steps.len());
            schedule::optimize(&steps)
        }
    }

    /// Audits a scheduled plan for single-use appliance collisions.
    pub fn detect_conflicts(&self, steps: &[Step]) -> Vec<Conflict> {
        schedule::detect_conflicts(steps, &self.config)
    }

    /// Schedules steps, audits the result and measures the time saved.
    pub fn plan_steps(&self, steps: &[Step]) -> SessionPlan {
        let scheduled = schedule::optimize(steps);
        let conflicts = schedule::detect_conflicts(&scheduled, &self.config);
        let raw_duration = schedule::sequential_duration(steps);
        let optimized_duration = schedule::total_duration(&scheduled);
        let time_saved_pct = schedule::time_saved_pct(raw_duration, optimized_duration);

        info!(
            "Planned {} steps: {} -> {} min ({:.0}% saved, {} conflicts)",
            steps.len(),
            raw_duration,
            optimized_duration,
            time_saved_pct,
            conflicts.len()
        );

        SessionPlan {
            steps: scheduled,
            conflicts,
            raw_duration,
            optimized_duration,
            time_saved_pct,
        }
    }

    /// Validates a session, then schedules its steps.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::InvalidSession` with every validation message
    /// when the session is rejected; nothing is scheduled in that case.
    pub fn plan_session(&self, session: &Session) -> Result<SessionPlan> {
        let report = self.validate_session(
            session.date,
            &session.selected_recipe_ids,
            &session.available_appliances,
        );
        if !report.valid {
            debug!("Session on {} rejected: {:?}", session.date, report.errors);
            return Err(KitchenError::InvalidSession {
                errors: report.errors,
            });
        }
        Ok(self.plan_steps(&session.steps))
    }

    /// Steps the child can help with or watch.
    pub fn child_safe_moments(&self, steps: &[Step]) -> Vec<ChildSafeMoment> {
        ChildSafetyFilter::from_config(&self.config).identify_child_safe_moments(steps)
    }

    /// Splits a plan around a nap window. Unscheduled steps are optimized
    /// first so the timeline follows plan order.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::InvalidInput` when a time is not `HH:MM`.
    pub fn nap_plan(&self, params: &NapPlanRequest) -> Result<NapPlan> {
        let start = parse_time("start_time", &params.start_time)?;
        let nap_start = parse_time("nap_start", &params.nap_start)?;
        let nap_end = parse_time("nap_end", &params.nap_end)?;
        let steps = self.ensure_scheduled(params.steps.clone());
        Ok(safety::generate_nap_aware_plan(
            &steps,
            start,
            nap_start,
            nap_end,
        ))
    }

    /// Summarizes one session.
    pub fn session_statistics(&self, session: &Session) -> SessionStats {
        stats::session_statistics(session)
    }

    /// Aggregates past sessions.
    pub fn history_statistics(&self, sessions: &[Session]) -> HistoryStats {
        stats::history_statistics(sessions)
    }

    /// Aggregates past sessions given in their JSON form.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::InvalidInput` when a session date is malformed.
    pub fn history_statistics_params(&self, params: &SessionHistory) -> Result<HistoryStats> {
        let sessions = params
            .sessions
            .iter()
            .map(|s| s.to_session())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.history_statistics(&sessions))
    }
}
