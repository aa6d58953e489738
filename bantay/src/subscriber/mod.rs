use std::pin::Pin;

use futures::{future::OptionFuture, select, FutureExt, Stream, StreamExt};
use futures_timer::Delay;
use tracing::debug;

use bantay_traits::{ChannelAdaptor, WorkspaceEvent, WorkspaceId};

use crate::classify::{Classifier, Verdict};

mod config;
mod error;
mod settle;


pub use config::SubscribeConfig;
pub use error::SubscriberError;

use settle::Settlement;

/// Outcome of one observation: the extracted completion value, or the
/// rejection that ended it.
pub type WaitOutcome<TChannel, TClassifier> = Result<
    <TClassifier as Classifier>::Value,
    SubscriberError<<TChannel as ChannelAdaptor>::Error, <TClassifier as Classifier>::Failure>,
>;

/// Bridges a push stream of events into a single completion value.
///
/// The subscriber owns its subscription exclusively for the duration of the
/// observation. The first terminal verdict settles the outcome exactly once;
/// the channel is then closed on a best-effort basis. Events are handled
/// strictly sequentially, without reordering or buffering.
pub struct CompletionSubscriber<TChannel: ChannelAdaptor, TClassifier: Classifier> {
    channel: TChannel,
    events: Pin<Box<dyn Stream<Item = WorkspaceEvent> + Send>>,
    classifier: TClassifier,
    config: SubscribeConfig,
    cancel: (async_channel::Sender<()>, async_channel::Receiver<()>),
    settlement: Settlement<WaitOutcome<TChannel, TClassifier>>,
}

/// Handle to abandon a pending wait from outside.
#[derive(Clone)]
pub struct Canceller {
    sender: async_channel::Sender<()>,
}

impl Canceller {
    /// Request cancellation. No-op when the outcome is already settled or a
    /// cancellation is already pending.
    pub fn cancel(&self) {
        let _ = self.sender.try_send(());
    }
}

impl<TChannel: ChannelAdaptor, TClassifier: Classifier>
    CompletionSubscriber<TChannel, TClassifier>
{
    /// Subscribe to the channel and begin observing immediately, optionally
    /// restricted to the events of one workspace.
    pub async fn subscribe(
        channel: TChannel,
        id: Option<WorkspaceId>,
        classifier: TClassifier,
        config: SubscribeConfig,
    ) -> Result<Self, SubscriberError<TChannel::Error, TClassifier::Failure>> {
        let events = channel
            .subscribe(id)
            .await
            .map_err(SubscriberError::ChannelError)?;
        Ok(Self {
            channel,
            events,
            classifier,
            config,
            cancel: async_channel::bounded(1),
            settlement: Settlement::new(),
        })
    }

    /// Obtain a cancellation handle. Must be taken before [`Self::wait`]
    /// consumes the subscriber.
    pub fn canceller(&self) -> Canceller {
        Canceller {
            sender: self.cancel.0.clone(),
        }
    }

    /// Drive the subscription until the first terminal verdict, settle the
    /// outcome, then close the channel.
    ///
    /// A close failure is logged and swallowed; it never overrides the
    /// settled outcome.
    pub async fn wait(self) -> WaitOutcome<TChannel, TClassifier> {
        let Self {
            channel,
            events,
            mut classifier,
            config,
            cancel,
            mut settlement,
        } = self;
        let deadline = match config.deadline {
            Some(deadline) => match deadline.to_std() {
                Ok(deadline) => Some(deadline),
                Err(e) => return Err(SubscriberError::Unknown(e.to_string())),
            },
            None => None,
        };
        let mut timer: Pin<Box<OptionFuture<_>>> =
            Box::pin(deadline.map(|deadline| Delay::new(deadline).fuse()).into());
        let mut events = events.fuse();
        let mut cancelled = cancel.1.fuse();
        while !settlement.is_settled() {
            select! {
                expired = timer => {
                    if expired.is_some() {
                        settlement.settle(Err(SubscriberError::DeadlineExceeded));
                    }
                }
                _ = cancelled.next() => {
                    settlement.settle(Err(SubscriberError::Cancelled));
                }
                event = events.next() => match event {
                    Some(event) => match classifier.classify(&event) {
                        Verdict::Ignore => {
                            debug!(event_type = %event.event_type, "ignoring non-terminal event");
                        }
                        Verdict::Fulfill(value) => {
                            settlement.settle(Ok(value));
                        }
                        Verdict::Reject(failure) => {
                            settlement.settle(Err(SubscriberError::Rejected(failure)));
                        }
                    },
                    None => {
                        settlement.settle(Err(SubscriberError::ChannelClosed));
                    }
                },
            }
        }
        // Closing is cleanup, not part of the completion contract.
        if let Err(e) = channel.close().await {
            debug!(error = %e, "failed to close the event channel");
        }
        match settlement.into_outcome() {
            Some(outcome) => outcome,
            None => Err(SubscriberError::Unknown(
                "outcome missing after settlement".to_owned(),
            )),
        }
    }
}
