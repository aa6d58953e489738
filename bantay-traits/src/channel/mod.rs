use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::{event::WorkspaceEvent, workspace::WorkspaceId};

mod error;

pub use error::ChannelError;

#[async_trait]
pub trait ChannelAdaptor: Send + Sync {
    type Error: ChannelError;
    /// Create a subscriber to the events of a workspace, or to all events
    /// delivered on the channel when no id is given.
    async fn subscribe(
        &self,
        id: Option<WorkspaceId>,
    ) -> Result<Pin<Box<dyn Stream<Item = WorkspaceEvent> + Send>>, Self::Error>;
    /// Close the underlying connection. Must be safe to call when the
    /// channel is already closed.
    async fn close(&self) -> Result<(), Self::Error>;
}
