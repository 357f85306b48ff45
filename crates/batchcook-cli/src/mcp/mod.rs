//! MCP server for batchcook.
//!
//! Exposes the kitchen operations as Model Context Protocol tools over
//! stdio. The kitchen is read-only, so the server shares it behind an `Arc`
//! without locking.

use std::sync::Arc;

use anyhow::Result;
use batchcook_core::Kitchen;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    FormatDuration, McpResult, NapPlanRequest, SessionHistory, SessionParams, StepList,
    ValidatePreparation, ValidateSession,
};

const INSTRUCTIONS: &str = r#"batchcook plans batch-cooking sessions: a few hours in which a household cooks several recipes ahead for the week.

## Core Concepts
- **Step**: one unit of cooking work with a duration in minutes. `is_supervision` marks long unattended operations (a bake, a braise); `requires_appliances` lists appliance ids (oven, blender, slow_cooker, ...); `is_noisy` and `temperature_celsius` matter for child safety.
- **Parallel group**: steps that run at the same time. Each group is anchored by a supervision step; hands-on steps fill its duration.
- **Conflict**: a single-use appliance claimed twice in one group. Reported, never fixed automatically.

## Typical Flow
1. `validate_session` to check date, recipe count and appliances
2. `plan_session` (or `optimize_steps` for a bare step list) to get groups, order and time saved
3. `child_safe_moments` and `nap_plan` when a toddler is around
4. `session_statistics` / `history_statistics` for progress and habits

Dates are `YYYY-MM-DD`, times `HH:MM`. Call `list_appliances` for the known appliance and storage ids."#;

/// MCP server for batchcook
#[derive(Clone)]
pub struct BatchcookMcpServer {
    kitchen: Arc<Kitchen>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BatchcookMcpServer {
    pub fn new(kitchen: Kitchen) -> Self {
        Self {
            kitchen: Arc::new(kitchen),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.kitchen.clone())
    }

    #[tool(
        name = "plan_session",
        description = "Validate a session (date not in the past, 1 to the configured maximum of recipes, known appliances) and schedule its steps into parallel groups. Returns the ordered plan with sequential vs optimized duration, percentage of time saved and any appliance conflicts. Fails with the list of validation errors when the session is rejected."
    )]
    async fn plan_session(&self, params: Parameters<SessionParams>) -> McpResult {
        self.handlers().plan_session(params)
    }

    #[tool(
        name = "optimize_steps",
        description = "Schedule a bare list of steps without session checks. Supervision steps anchor parallel groups, longest first; hands-on steps that fit in the anchor's duration and share no appliance with it join the group. Returns the ordered plan with time saved and conflicts."
    )]
    async fn optimize_steps(&self, params: Parameters<StepList>) -> McpResult {
        self.handlers().optimize_steps(params)
    }

    #[tool(
        name = "detect_conflicts",
        description = "Audit already scheduled steps (with parallel_group set) for single-use appliances claimed by several steps of the same group. Appliances not in the registry count as single-use."
    )]
    async fn detect_conflicts(&self, params: Parameters<StepList>) -> McpResult {
        self.handlers().detect_conflicts(params)
    }

    #[tool(
        name = "validate_session",
        description = "Check a proposed session: date (YYYY-MM-DD) must not be in the past, 1 to the configured maximum of recipe ids, every appliance id known. Returns every problem at once."
    )]
    async fn validate_session(&self, params: Parameters<ValidateSession>) -> McpResult {
        self.handlers().validate_session(params)
    }

    #[tool(
        name = "validate_preparation",
        description = "Check a preparation: name of at least 3 characters, 1 to 20 portions, known storage location, conservation days not above the location's maximum (refrigerator 5, freezer 90, pantry 30 by default). Returns every problem at once."
    )]
    async fn validate_preparation(&self, params: Parameters<ValidatePreparation>) -> McpResult {
        self.handlers().validate_preparation(params)
    }

    #[tool(
        name = "child_safe_moments",
        description = "List the steps a toddler can join: quiet steps whose text contains a safe keyword at under 50°C (hands-on help), or quiet supervision steps (watching from a high chair). Unscheduled steps are optimized first so the list follows plan order."
    )]
    async fn child_safe_moments(&self, params: Parameters<StepList>) -> McpResult {
        self.handlers().child_safe_moments(params)
    }

    #[tool(
        name = "nap_plan",
        description = "Place scheduled steps on the clock from start_time (HH:MM) and split them into before/during/after a nap window (nap_start, nap_end as HH:MM; a window ending before it starts runs past midnight). Noisy steps overlapping the nap get an advisory."
    )]
    async fn nap_plan(&self, params: Parameters<NapPlanRequest>) -> McpResult {
        self.handlers().nap_plan(params)
    }

    #[tool(
        name = "session_statistics",
        description = "Summarize a session: progress from step statuses, sequential and optimized duration, time saved, preparation and portion counts, steps per appliance."
    )]
    async fn session_statistics(&self, params: Parameters<SessionParams>) -> McpResult {
        self.handlers().session_statistics(params)
    }

    #[tool(
        name = "history_statistics",
        description = "Aggregate past sessions: count, average optimized duration, average portions, most used appliance and the longest run of consecutive weeks with a session."
    )]
    async fn history_statistics(&self, params: Parameters<SessionHistory>) -> McpResult {
        self.handlers().history_statistics(params)
    }

    #[tool(
        name = "list_appliances",
        description = "List the appliance registry (ids, names, whether several steps can share them) and the storage locations with their maximum conservation days."
    )]
    async fn list_appliances(&self) -> McpResult {
        self.handlers().list_appliances()
    }

    #[tool(
        name = "format_duration",
        description = "Format minutes the kitchen way (45 min, 1h, 2h05). With start_time (HH:MM) also returns the estimated end time, wrapping past midnight."
    )]
    async fn format_duration(&self, params: Parameters<FormatDuration>) -> McpResult {
        self.handlers().format_duration(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BatchcookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "batchcook".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BatchcookMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting batchcook MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use batchcook_core::KitchenConfig;

    use super::*;

    #[test]
    fn test_every_operation_is_a_tool() {
        let server = BatchcookMcpServer::new(Kitchen::new(KitchenConfig::default()));
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "child_safe_moments",
                "detect_conflicts",
                "format_duration",
                "history_statistics",
                "list_appliances",
                "nap_plan",
                "optimize_steps",
                "plan_session",
                "session_statistics",
                "validate_preparation",
                "validate_session",
            ]
        );
    }

    #[test]
    fn test_server_info() {
        let server = BatchcookMcpServer::new(Kitchen::new(KitchenConfig::default()));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "batchcook");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
    }
}
