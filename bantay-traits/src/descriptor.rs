use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceId;

/// A typed link of a remote resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Read-only snapshot of a workspace, fetched before subscribing to its
/// events. The link collection keeps the order received from the remote
/// source; duplicated relations are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDescriptor {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl WorkspaceDescriptor {
    /// Find a link by exact relation match. The first match wins.
    pub fn find_link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }
}
