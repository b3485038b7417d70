//! Optimistic Cart Overrides
//!
//! Local patches shown while a cart mutation is in flight, keyed by line id.
//! At most one override exists per line; a newer submission replaces the
//! older one.

use std::collections::HashMap;

use crate::models::Cart;

/// Patch applied to a cart line before the backend confirms it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePatch {
    Remove,
    SetQuantity(u32),
}

impl LinePatch {
    /// Whether an authoritative quantity (`None` = line gone) reflects this patch
    pub fn confirmed_by(&self, authoritative: Option<u32>) -> bool {
        match (self, authoritative) {
            (LinePatch::Remove, None) => true,
            (LinePatch::Remove, Some(q)) => q == 0,
            (LinePatch::SetQuantity(_), None) => false,
            (LinePatch::SetQuantity(want), Some(q)) => *want == q,
        }
    }
}

/// Identifies one submission so late responses can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Outcome of checking an override against authoritative state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Backend state matches the patch; override cleared
    Confirmed,
    /// Newest submission answered with a different value; override cleared
    Reverted,
    /// A newer submission is still pending; override kept
    Superseded,
    /// Nothing pending for this line
    Idle,
}

/// UI-visible mutation phase of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePhase {
    Stable,
    PendingMutation,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending {
    patch: LinePatch,
    ticket: Ticket,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimisticOverrides {
    pending: HashMap<String, Pending>,
    next_ticket: u64,
}

impl OptimisticOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending patch, replacing any earlier one for the same line
    pub fn apply(&mut self, line_id: impl Into<String>, patch: LinePatch) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending.insert(line_id.into(), Pending { patch, ticket });
        ticket
    }

    pub fn get(&self, line_id: &str) -> Option<LinePatch> {
        self.pending.get(line_id).map(|p| p.patch)
    }

    pub fn ticket(&self, line_id: &str) -> Option<Ticket> {
        self.pending.get(line_id).map(|p| p.ticket)
    }

    /// Quantity to display: the pending value if any, else the authoritative one
    pub fn read_quantity(&self, line_id: &str, authoritative: u32) -> u32 {
        match self.get(line_id) {
            Some(LinePatch::SetQuantity(q)) => q,
            Some(LinePatch::Remove) => 0,
            None => authoritative,
        }
    }

    pub fn is_removed(&self, line_id: &str) -> bool {
        matches!(self.get(line_id), Some(LinePatch::Remove))
    }

    pub fn phase(&self, line_id: &str) -> LinePhase {
        if self.pending.contains_key(line_id) {
            LinePhase::PendingMutation
        } else {
            LinePhase::Stable
        }
    }

    /// Check the override for `line_id` against the snapshot returned for
    /// submission `ticket`.
    pub fn resolve(&mut self, line_id: &str, ticket: Ticket, authoritative: Option<u32>) -> Resolution {
        let Some(pending) = self.pending.get(line_id) else {
            return Resolution::Idle;
        };
        if pending.patch.confirmed_by(authoritative) {
            self.pending.remove(line_id);
            Resolution::Confirmed
        } else if pending.ticket <= ticket {
            self.pending.remove(line_id);
            Resolution::Reverted
        } else {
            Resolution::Superseded
        }
    }

    /// Drop the override after a failed submission, unless a newer one replaced it
    pub fn reject(&mut self, line_id: &str, ticket: Ticket) -> bool {
        match self.pending.get(line_id) {
            Some(pending) if pending.ticket <= ticket => {
                self.pending.remove(line_id);
                true
            }
            _ => false,
        }
    }

    /// Clear every override the snapshot already reflects (refetch path)
    pub fn reconcile(&mut self, cart: &Cart) -> usize {
        let before = self.pending.len();
        self.pending.retain(|line_id, pending| {
            let authoritative = cart.line(line_id).map(|line| line.quantity);
            !pending.patch.confirmed_by(authoritative)
        });
        before - self.pending.len()
    }

    /// Discard everything without compensating requests
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{cart, line};

    #[test]
    fn test_newer_submission_replaces_older() {
        let mut overrides = OptimisticOverrides::new();
        let first = overrides.apply("L1", LinePatch::SetQuantity(3));
        let second = overrides.apply("L1", LinePatch::SetQuantity(4));

        assert!(second > first);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("L1"), Some(LinePatch::SetQuantity(4)));
        assert_eq!(overrides.ticket("L1"), Some(second));
    }

    #[test]
    fn test_read_falls_back_to_authoritative() {
        let mut overrides = OptimisticOverrides::new();
        assert_eq!(overrides.read_quantity("L1", 2), 2);
        assert_eq!(overrides.phase("L1"), LinePhase::Stable);

        overrides.apply("L1", LinePatch::SetQuantity(1));
        assert_eq!(overrides.read_quantity("L1", 2), 1);
        assert_eq!(overrides.read_quantity("L2", 5), 5);
        assert_eq!(overrides.phase("L1"), LinePhase::PendingMutation);
    }

    #[test]
    fn test_decrement_confirmed() {
        // L1 at quantity 2, user clicks decrement
        let mut overrides = OptimisticOverrides::new();
        let ticket = overrides.apply("L1", LinePatch::SetQuantity(1));
        assert_eq!(overrides.read_quantity("L1", 2), 1);

        assert_eq!(overrides.resolve("L1", ticket, Some(1)), Resolution::Confirmed);
        assert!(overrides.is_empty());
        assert_eq!(overrides.read_quantity("L1", 1), 1);
    }

    #[test]
    fn test_newest_response_with_other_value_reverts() {
        let mut overrides = OptimisticOverrides::new();
        let ticket = overrides.apply("L1", LinePatch::SetQuantity(10));
        // backend capped the quantity at 6
        assert_eq!(overrides.resolve("L1", ticket, Some(6)), Resolution::Reverted);
        assert_eq!(overrides.read_quantity("L1", 6), 6);
    }

    #[test]
    fn test_stale_response_keeps_newer_patch() {
        let mut overrides = OptimisticOverrides::new();
        let first = overrides.apply("L1", LinePatch::SetQuantity(3));
        let second = overrides.apply("L1", LinePatch::SetQuantity(4));

        assert_eq!(overrides.resolve("L1", first, Some(3)), Resolution::Superseded);
        assert_eq!(overrides.read_quantity("L1", 3), 4);

        assert_eq!(overrides.resolve("L1", second, Some(4)), Resolution::Confirmed);
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_remove_confirmed_when_line_gone() {
        let mut overrides = OptimisticOverrides::new();
        let ticket = overrides.apply("L1", LinePatch::Remove);
        assert!(overrides.is_removed("L1"));
        assert_eq!(overrides.read_quantity("L1", 2), 0);

        assert_eq!(overrides.resolve("L1", ticket, None), Resolution::Confirmed);
        assert!(!overrides.is_removed("L1"));
    }

    #[test]
    fn test_resolve_without_override_is_idle() {
        let mut overrides = OptimisticOverrides::new();
        let ticket = overrides.apply("L2", LinePatch::Remove);
        assert_eq!(overrides.resolve("L1", ticket, Some(1)), Resolution::Idle);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_reject_only_clears_own_ticket() {
        let mut overrides = OptimisticOverrides::new();
        let first = overrides.apply("L1", LinePatch::SetQuantity(3));
        let second = overrides.apply("L1", LinePatch::SetQuantity(4));

        assert!(!overrides.reject("L1", first));
        assert_eq!(overrides.get("L1"), Some(LinePatch::SetQuantity(4)));

        assert!(overrides.reject("L1", second));
        assert!(overrides.is_empty());
        // failed mutation surfaces the authoritative value again
        assert_eq!(overrides.read_quantity("L1", 2), 2);
    }

    #[test]
    fn test_lines_do_not_interfere() {
        let mut overrides = OptimisticOverrides::new();
        let t1 = overrides.apply("L1", LinePatch::SetQuantity(3));
        overrides.apply("L2", LinePatch::Remove);

        overrides.reject("L1", t1);
        assert!(overrides.is_removed("L2"));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_reconcile_with_snapshot() {
        let mut overrides = OptimisticOverrides::new();
        overrides.apply("L1", LinePatch::SetQuantity(1));
        overrides.apply("L2", LinePatch::Remove);
        overrides.apply("L3", LinePatch::SetQuantity(9));

        let snapshot = cart(vec![line("L1", 1), line("L3", 2)]);
        assert_eq!(overrides.reconcile(&snapshot), 2);
        assert_eq!(overrides.get("L3"), Some(LinePatch::SetQuantity(9)));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut overrides = OptimisticOverrides::new();
        overrides.apply("L1", LinePatch::SetQuantity(3));
        overrides.apply("L2", LinePatch::Remove);
        overrides.clear();
        assert!(overrides.is_empty());
    }
}
