use serde_json::Value;
use thiserror::Error;

use bantay_traits::{ChannelAdaptor, WorkspaceDescriptor, WorkspaceEvent};

use crate::{
    classify::{Classifier, Verdict},
    subscriber::{CompletionSubscriber, SubscribeConfig, SubscriberError},
};

#[cfg(test)]
mod test;

/// Relation of the descriptor link pointing at the workspace IDE.
pub const IDE_URL_REL: &str = "ide url";

/// Event type announcing that the workspace reached the running state.
pub const EVENT_RUNNING: &str = "RUNNING";
/// Event type announcing that the workspace failed to start.
pub const EVENT_ERROR: &str = "ERROR";

#[derive(Error, Debug)]
pub enum StartFailure {
    /// The platform reported a startup error. Carries the raw event payload
    /// for diagnostics.
    #[error("error when starting the workspace: {payload}")]
    Failed { payload: Value },
    /// The workspace started but its descriptor carries no link under the
    /// expected relation.
    #[error("link {0:?} missing from the workspace descriptor")]
    LinkNotFound(String),
}

/// Classifies lifecycle events for a workspace-start observation.
///
/// `RUNNING` fulfills with the descriptor's IDE url, `ERROR` rejects with
/// the event payload, everything else is informational.
pub struct WorkspaceStart {
    descriptor: WorkspaceDescriptor,
}

impl WorkspaceStart {
    pub fn new(descriptor: WorkspaceDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Classifier for WorkspaceStart {
    type Value = String;
    type Failure = StartFailure;

    fn classify(&mut self, event: &WorkspaceEvent) -> Verdict<String, StartFailure> {
        match event.event_type.as_str() {
            EVENT_RUNNING => match self.descriptor.find_link(IDE_URL_REL) {
                Some(link) => Verdict::Fulfill(link.href.clone()),
                None => Verdict::Reject(StartFailure::LinkNotFound(IDE_URL_REL.to_owned())),
            },
            EVENT_ERROR => Verdict::Reject(StartFailure::Failed {
                payload: event.payload.clone(),
            }),
            _ => Verdict::Ignore,
        }
    }
}

/// Wait until the workspace is running and return its IDE url.
///
/// The subscription is restricted to the descriptor's workspace when the
/// descriptor carries an id, so a shared channel delivers only the relevant
/// events.
pub async fn wait_for_start<TChannel: ChannelAdaptor>(
    channel: TChannel,
    descriptor: WorkspaceDescriptor,
    config: SubscribeConfig,
) -> Result<String, SubscriberError<TChannel::Error, StartFailure>> {
    let id = descriptor.workspace_id.clone();
    let subscriber =
        CompletionSubscriber::subscribe(channel, id, WorkspaceStart::new(descriptor), config)
            .await?;
    subscriber.wait().await
}
