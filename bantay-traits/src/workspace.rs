pub type WorkspaceId = String;
