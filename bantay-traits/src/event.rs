use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::workspace::WorkspaceId;

/// One message delivered over the workspace event channel.
///
/// `event_type` is an open enumeration; consumers decide which members are
/// terminal for their observation. The payload is kept opaque so it can be
/// attached to failure reports without interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEvent {
    #[serde(rename = "eventType")]
    pub event_type: String,
    /// Correlation id, set when the channel is shared between workspaces.
    #[serde(rename = "workspaceId", default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
    #[serde(default)]
    pub payload: Value,
}
