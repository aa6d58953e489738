#[derive(Clone, Default)]
pub struct SubscribeConfig {
    /// Give up waiting after this duration, rejecting the outcome with
    /// `DeadlineExceeded`.
    ///
    /// When set to None, the wait never times out. It is recommended to set
    /// a finite deadline.
    pub deadline: Option<chrono::Duration>,
}
