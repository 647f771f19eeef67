use crate::algorithms::outcome::{Outcome, Rejection};
use serde::Serialize;

/// Per-batch counters, reported once when the batch ends.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub rounded: usize,
    pub inserted: usize,
    /// Already-straight corners left alone; not a warning.
    pub straight: usize,
    /// Fold-backs and corners without a neighbour on one side.
    pub skipped_degenerate: usize,
    /// Corners without room for the radius.
    pub skipped_small: usize,
    /// Shortest handle, segment or trim budget seen among `skipped_small`.
    pub skipped_small_len: Option<f64>,
    pub internal: usize,
}

impl Diagnostics {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Rounded(_) => {
                self.rounded += 1;
                self.inserted += outcome.inserted();
            }
            Outcome::Straight => self.straight += 1,
            Outcome::Rejected(Rejection::Boundary | Rejection::Degenerate) => self.skipped_degenerate += 1,
            Outcome::Rejected(Rejection::TooSmall(len)) => {
                self.skipped_small += 1;
                let shortest = self.skipped_small_len.map_or(*len, |s| s.min(*len));
                self.skipped_small_len = Some(shortest);
            }
            Outcome::Rejected(Rejection::Internal) => self.internal += 1,
        }
    }

    pub fn merge(&mut self, other: &Diagnostics) {
        self.rounded += other.rounded;
        self.inserted += other.inserted;
        self.straight += other.straight;
        self.skipped_degenerate += other.skipped_degenerate;
        self.skipped_small += other.skipped_small;
        self.internal += other.internal;
        if let Some(len) = other.skipped_small_len {
            self.skipped_small_len = Some(self.skipped_small_len.map_or(len, |s| s.min(len)));
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_degenerate + self.skipped_small + self.internal
    }

    /// User-facing warning lines; empty when nothing was skipped.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.skipped_degenerate > 0 {
            out.push(format!(
                "Skipped {} degenerated nodes (180° turn or end of path?).",
                self.skipped_degenerate
            ));
        }
        if self.skipped_small > 0 {
            out.push(format!(
                "Skipped {} nodes with not enough space (Value {} is too small. Try a smaller radius?).",
                self.skipped_small,
                self.skipped_small_len.unwrap_or(0.0)
            ));
        }
        if self.internal > 0 {
            out.push(format!("Skipped {} nodes after an internal error.", self.internal));
        }
        out
    }

    pub fn report(&self) {
        log::info!("rounded {} corners, inserted {} nodes", self.rounded, self.inserted);
        for w in self.warnings() {
            log::warn!("{}", w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_shortest_too_small_length() {
        let mut d = Diagnostics::default();
        d.record(&Outcome::Rejected(Rejection::TooSmall(4.0)));
        d.record(&Outcome::Rejected(Rejection::TooSmall(1.5)));
        d.record(&Outcome::Rejected(Rejection::TooSmall(3.0)));
        assert_eq!(d.skipped_small, 3);
        assert_eq!(d.skipped_small_len, Some(1.5));
    }

    #[test]
    fn boundary_counts_as_degenerate() {
        let mut d = Diagnostics::default();
        d.record(&Outcome::Rejected(Rejection::Boundary));
        d.record(&Outcome::Rejected(Rejection::Degenerate));
        d.record(&Outcome::Straight);
        assert_eq!(d.skipped_degenerate, 2);
        assert_eq!(d.straight, 1);
        assert_eq!(d.warnings().len(), 1);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = Diagnostics { skipped_small: 1, skipped_small_len: Some(2.0), ..Default::default() };
        let b = Diagnostics { skipped_small: 2, skipped_small_len: Some(0.5), rounded: 3, ..Default::default() };
        a.merge(&b);
        assert_eq!(a.skipped_small, 3);
        assert_eq!(a.skipped_small_len, Some(0.5));
        assert_eq!(a.rounded, 3);
        assert_eq!(a.skipped(), 3);
    }

    #[test]
    fn quiet_when_clean() {
        assert!(Diagnostics::default().warnings().is_empty());
    }
}
