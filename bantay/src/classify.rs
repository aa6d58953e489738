use bantay_traits::WorkspaceEvent;

/// Decision taken for one observed event.
pub enum Verdict<TValue, TFailure> {
    /// Informational event. The observation stays active.
    Ignore,
    /// Terminal success carrying the completion value.
    Fulfill(TValue),
    /// Terminal failure.
    Reject(TFailure),
}

/// Maps raw channel events to verdicts.
///
/// An implementation decides which event types end the observation and what
/// value the completion carries, so the same subscriber can serve any
/// "subscribe, wait for exactly one of N terminal signals" use case.
pub trait Classifier: Send {
    type Value: Send;
    type Failure: std::error::Error + Send + Sync;
    fn classify(&mut self, event: &WorkspaceEvent) -> Verdict<Self::Value, Self::Failure>;
}
