//! MCP tool handlers.
//!
//! Tools return the same markdown the CLI prints; structured data is left
//! to the CLI's `--json` mode.

use std::sync::Arc;

use batchcook_core::{
    display::{Appliances, Conflicts, Moments, StorageLocations},
    params as core, Kitchen,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Transparent wrapper giving core parameter types the derives rmcp needs,
/// so the core structs stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type StepList = McpParams<core::StepList>;
pub type SessionParams = McpParams<core::SessionParams>;
pub type ValidateSession = McpParams<core::ValidateSession>;
pub type ValidatePreparation = McpParams<core::ValidatePreparation>;
pub type NapPlanRequest = McpParams<core::NapPlanRequest>;
pub type SessionHistory = McpParams<core::SessionHistory>;
pub type FormatDuration = McpParams<core::FormatDuration>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn markdown(text: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.to_string())]))
}

/// Handler implementations backing the MCP tools.
pub struct McpHandlers {
    kitchen: Arc<Kitchen>,
}

impl McpHandlers {
    pub fn new(kitchen: Arc<Kitchen>) -> Self {
        Self { kitchen }
    }

    pub fn plan_session(&self, Parameters(params): Parameters<SessionParams>) -> McpResult {
        debug!("plan_session: {:?}", params);
        let session = params
            .as_ref()
            .to_session()
            .map_err(|e| to_mcp_error("Invalid session", &e))?;
        let plan = self
            .kitchen
            .plan_session(&session)
            .map_err(|e| to_mcp_error("Failed to plan session", &e))?;
        markdown(plan)
    }

    pub fn optimize_steps(&self, Parameters(params): Parameters<StepList>) -> McpResult {
        debug!("optimize_steps: {} steps", params.as_ref().steps.len());
        let plan = self.kitchen.plan_steps(&params.as_ref().steps);
        markdown(plan)
    }

    pub fn detect_conflicts(&self, Parameters(params): Parameters<StepList>) -> McpResult {
        debug!("detect_conflicts: {} steps", params.as_ref().steps.len());
        markdown(Conflicts(self.kitchen.detect_conflicts(&params.as_ref().steps)))
    }

    pub fn validate_session(&self, Parameters(params): Parameters<ValidateSession>) -> McpResult {
        debug!("validate_session: {:?}", params);
        markdown(self.kitchen.validate_session_params(params.as_ref()))
    }

    pub fn validate_preparation(
        &self,
        Parameters(params): Parameters<ValidatePreparation>,
    ) -> McpResult {
        debug!("validate_preparation: {:?}", params);
        markdown(self.kitchen.validate_preparation(params.as_ref()))
    }

    pub fn child_safe_moments(&self, Parameters(params): Parameters<StepList>) -> McpResult {
        debug!("child_safe_moments: {} steps", params.as_ref().steps.len());
        let steps = self.kitchen.ensure_scheduled(params.as_ref().steps.clone());
        markdown(Moments(self.kitchen.child_safe_moments(&steps)))
    }

    pub fn nap_plan(&self, Parameters(params): Parameters<NapPlanRequest>) -> McpResult {
        debug!("nap_plan: {:?}", params);
        let plan = self
            .kitchen
            .nap_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to build nap plan", &e))?;
        markdown(plan)
    }

    pub fn session_statistics(&self, Parameters(params): Parameters<SessionParams>) -> McpResult {
        debug!("session_statistics: {:?}", params);
        let mut session = params
            .as_ref()
            .to_session()
            .map_err(|e| to_mcp_error("Invalid session", &e))?;
        session.steps = self.kitchen.ensure_scheduled(session.steps);
        markdown(self.kitchen.session_statistics(&session))
    }

    pub fn history_statistics(&self, Parameters(params): Parameters<SessionHistory>) -> McpResult {
        debug!(
            "history_statistics: {} sessions",
            params.as_ref().sessions.len()
        );
        let stats = self
            .kitchen
            .history_statistics_params(params.as_ref())
            .map_err(|e| to_mcp_error("Invalid session history", &e))?;
        markdown(stats)
    }

    pub fn list_appliances(&self) -> McpResult {
        let config = self.kitchen.config();
        markdown(format!(
            "# Appliances\n\n{}\n# Storage Locations\n\n{}",
            Appliances(config.appliances.clone()),
            StorageLocations(config.storage_locations.clone())
        ))
    }

    pub fn format_duration(&self, Parameters(params): Parameters<FormatDuration>) -> McpResult {
        let formatted = params
            .as_ref()
            .evaluate()
            .map_err(|e| to_mcp_error("Failed to format duration", &e))?;
        markdown(formatted)
    }
}
