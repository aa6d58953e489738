use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubscriberError<TChannelError, TFailure> {
    #[error("Channel Error: {0}")]
    ChannelError(#[source] TChannelError),
    #[error("remote operation failed: {0}")]
    Rejected(#[source] TFailure),
    #[error("event channel closed before a terminal event")]
    ChannelClosed,
    #[error("no terminal event received before the deadline")]
    DeadlineExceeded,
    #[error("wait cancelled by the caller")]
    Cancelled,
    #[error("unknown subscriber error: {0}")]
    Unknown(String),
}
