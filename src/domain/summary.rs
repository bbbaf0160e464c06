//! Run summary types
//!
//! Collects the per-specification outcomes of one invocation in input order.

use super::SpecOutcome;

/// Overall summary of all processed gem specifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Outcome for each specification, in the order given
    pub outcomes: Vec<SpecOutcome>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new RunSummary
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    /// Adds an outcome
    pub fn add_outcome(&mut self, outcome: SpecOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the number of gems added
    pub fn added_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_added()).count()
    }

    /// Returns the number of gems that were already present
    pub fn already_present_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.is_already_present())
            .count()
    }

    /// Returns the number of failed specifications
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Returns the total number of specifications processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureReason;

    fn mixed_summary() -> RunSummary {
        let mut summary = RunSummary::new(false);
        summary.add_outcome(SpecOutcome::added("nokogiri", "gem 'nokogiri'", None));
        summary.add_outcome(SpecOutcome::already_present("rails"));
        summary.add_outcome(SpecOutcome::failed(
            "ghostgem",
            FailureReason::NotFound,
            "gem 'ghostgem' not found on RubyGems",
        ));
        summary.add_outcome(SpecOutcome::failed(
            "\"bad\"",
            FailureReason::InvalidSpec,
            "invalid gem specification",
        ));
        summary
    }

    #[test]
    fn test_summary_new() {
        let summary = RunSummary::new(true);
        assert!(summary.dry_run);
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_summary_counts() {
        let summary = mixed_summary();
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.added_count(), 1);
        assert_eq!(summary.already_present_count(), 1);
        assert_eq!(summary.failed_count(), 2);
    }
}
