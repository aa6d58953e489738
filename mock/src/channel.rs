use std::{
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_broadcast::{broadcast, Receiver, SendError, Sender};
use async_trait::async_trait;
use bantay_traits::{ChannelAdaptor, WorkspaceEvent, WorkspaceId};
use futures::{Stream, StreamExt};
use thiserror::Error;

/// In-memory channel backed by a broadcast queue. Every subscriber sees
/// every event published after its subscription was created.
#[derive(Clone)]
pub struct MockChannelAdaptor {
    channel: (Sender<WorkspaceEvent>, Receiver<WorkspaceEvent>),
    close_count: Arc<AtomicUsize>,
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error(transparent)]
    SendError(#[from] SendError<WorkspaceEvent>),
}

impl MockChannelAdaptor {
    pub fn new() -> Self {
        let channel = broadcast(8);
        Self {
            channel,
            close_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Deliver an event to all current subscribers.
    pub async fn publish(&self, event: WorkspaceEvent) -> Result<(), Error> {
        self.channel.0.broadcast(event).await?;
        Ok(())
    }

    /// How many times `close` has been requested so far.
    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelAdaptor for MockChannelAdaptor {
    type Error = Error;

    async fn subscribe(
        &self,
        id: Option<WorkspaceId>,
    ) -> Result<Pin<Box<dyn Stream<Item = WorkspaceEvent> + Send>>, Self::Error> {
        Ok(Box::pin(self.channel.1.clone().filter(move |event| {
            let id = id.clone();
            let event = event.clone();
            async move {
                if let Some(id) = id.as_ref() {
                    if event.workspace_id.as_ref() != Some(id) {
                        return false;
                    }
                }
                true
            }
        })))
    }

    async fn close(&self) -> Result<(), Self::Error> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        self.channel.0.close();
        Ok(())
    }
}
