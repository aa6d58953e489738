/// Single-assignment container for the terminal outcome.
///
/// The first settlement wins. Later attempts are silent no-ops, so a
/// duplicate terminal event delivered before the channel closure takes
/// effect cannot overwrite the decided outcome.
pub(crate) struct Settlement<T> {
    outcome: Option<T>,
}

impl<T> Settlement<T> {
    pub fn new() -> Self {
        Self { outcome: None }
    }

    pub fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns whether this call performed the settlement.
    pub fn settle(&mut self, outcome: T) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }

    pub fn into_outcome(self) -> Option<T> {
        self.outcome
    }
}
