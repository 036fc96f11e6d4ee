/// Aggregated view of session progress, useful for a progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Fraction of questions resolved so far, in `[0.0, 1.0]`.
    ///
    /// Defined as 0.0 for an empty session, which the session constructor
    /// rules out.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let resolved = self.total - self.remaining;
        resolved as f64 / self.total as f64
    }
}
