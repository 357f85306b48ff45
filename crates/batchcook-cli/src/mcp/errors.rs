//! Error mapping for the MCP server.

use batchcook_core::KitchenError;
use rmcp::ErrorData;

/// Caller mistakes become `invalid_params`; anything else is internal.
pub fn to_mcp_error(message: &str, error: &KitchenError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        KitchenError::InvalidInput { .. } | KitchenError::InvalidSession { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
