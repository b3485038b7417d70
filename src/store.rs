//! Global Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart
//! snapshot and its optimistic overrides live side by side so every view
//! reads the same merged state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::CartAction;
use crate::error::StorefrontError;
use crate::models::Cart;
use crate::optimistic::{OptimisticOverrides, Resolution, Ticket};

/// Global storefront state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Authoritative cart snapshot (None until the first line is added)
    pub cart: Option<Cart>,
    /// Pending local patches keyed by line id
    pub overrides: OptimisticOverrides,
    pub cart_open: bool,
    pub menu_open: bool,
    /// Last failed cart mutation, shown until the next submission
    pub cart_error: Option<StorefrontError>,
    /// Sequence of the newest submission whose snapshot was applied
    pub applied_seq: u64,
    pub next_seq: u64,
    /// Sequence of the in-flight `cartCreate`, if any
    pub creating: Option<u64>,
    /// Submissions waiting for the cart id
    pub queued: Vec<Submission>,
}

/// One in-flight cart submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub seq: u64,
    pub action: CartAction,
    /// Override recorded for this submission, if the action patches a line
    pub pending: Option<(String, Ticket)>,
}

/// Where a submission goes next
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Send now against this cart id (`None` creates the cart)
    Send(Submission, Option<String>),
    /// Held until the pending cart create answers
    Queued,
}

/// Outcome of applying a backend answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Snapshot installed; resolution of the submission's override
    Applied(Option<Resolution>),
    /// A newer snapshot was already installed. Overrides are kept and the
    /// cart must be refetched.
    Stale,
    /// Mutation failed
    Failed(Option<Resolution>),
}

impl StorefrontState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart_id(&self) -> Option<String> {
        self.cart.as_ref().map(|c| c.id.clone())
    }

    /// Record the optimistic patch for `action` and number the submission
    pub fn begin(&mut self, action: CartAction) -> Submission {
        self.next_seq += 1;
        self.cart_error = None;
        let pending = action
            .optimistic_patch()
            .map(|(line_id, patch)| (line_id.to_string(), self.overrides.apply(line_id, patch)));
        Submission { seq: self.next_seq, action, pending }
    }

    /// Pick the cart id for a submission at send time. Adds made while the
    /// first `cartCreate` is in flight wait for its cart.
    pub fn dispatch(&mut self, submission: Submission) -> Dispatch {
        if let Some(cart_id) = self.cart_id() {
            return Dispatch::Send(submission, Some(cart_id));
        }
        if self.creating.is_some() {
            self.queued.push(submission);
            return Dispatch::Queued;
        }
        if matches!(submission.action, CartAction::AddLines(_)) {
            self.creating = Some(submission.seq);
        }
        Dispatch::Send(submission, None)
    }

    /// Hand back queued submissions once the create has answered
    pub fn release_queued(&mut self) -> Vec<(Submission, Option<String>)> {
        if self.creating.is_some() {
            return Vec::new();
        }
        let mut ready = Vec::new();
        for submission in std::mem::take(&mut self.queued) {
            if let Dispatch::Send(submission, cart_id) = self.dispatch(submission) {
                ready.push((submission, cart_id));
            }
        }
        ready
    }

    /// Apply the backend answer for a submission.
    /// Overrides are only resolved against the snapshot actually installed.
    pub fn settle(&mut self, submission: &Submission, result: Result<Cart, StorefrontError>) -> Settlement {
        if self.creating == Some(submission.seq) {
            self.creating = None;
        }
        match result {
            Ok(_) if submission.seq < self.applied_seq => Settlement::Stale,
            Ok(cart) => {
                let resolution = submission.pending.as_ref().map(|(line_id, ticket)| {
                    let authoritative = cart.line(line_id).map(|line| line.quantity);
                    self.overrides.resolve(line_id, *ticket, authoritative)
                });
                self.applied_seq = submission.seq;
                self.cart = Some(cart);
                Settlement::Applied(resolution)
            }
            Err(err) => {
                self.cart_error = Some(err);
                Settlement::Failed(submission.pending.as_ref().map(|(line_id, ticket)| {
                    if self.overrides.reject(line_id, *ticket) {
                        Resolution::Reverted
                    } else {
                        Resolution::Superseded
                    }
                }))
            }
        }
    }

    /// Give up on a submission that never answered
    pub fn expire(&mut self, submission: &Submission) -> bool {
        match &submission.pending {
            Some((line_id, ticket)) => self.overrides.reject(line_id, *ticket),
            None => false,
        }
    }

    /// Replace the snapshot from a refetch and drop overrides it already reflects
    pub fn refresh(&mut self, cart: Option<Cart>) -> usize {
        let cleared = match &cart {
            Some(snapshot) => self.overrides.reconcile(snapshot),
            None => 0,
        };
        self.cart = cart;
        cleared
    }

    /// Close the drawer, discarding pending overrides
    pub fn close_cart(&mut self) {
        self.cart_open = false;
        self.overrides.clear();
    }
}

/// Type alias for the store
pub type StorefrontStore = Store<StorefrontState>;

/// Get the storefront store from context
pub fn use_storefront_store() -> StorefrontStore {
    expect_context::<StorefrontStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{cart, line};
    use crate::optimistic::LinePatch;

    fn with_cart(lines: Vec<crate::models::CartLine>) -> StorefrontState {
        StorefrontState { cart: Some(cart(lines)), ..StorefrontState::new() }
    }

    fn decrement(line_id: &str, quantity: u32) -> CartAction {
        CartAction::UpdateQuantity { line_id: line_id.into(), quantity }
    }

    #[test]
    fn test_decrement_then_confirm() {
        let mut state = with_cart(vec![line("L1", 2)]);
        let submission = state.begin(decrement("L1", 1));
        assert_eq!(state.overrides.read_quantity("L1", 2), 1);

        let settlement = state.settle(&submission, Ok(cart(vec![line("L1", 1)])));
        assert_eq!(settlement, Settlement::Applied(Some(Resolution::Confirmed)));
        assert!(state.overrides.is_empty());
        assert_eq!(state.cart.as_ref().and_then(|c| c.line("L1")).map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_failure_reverts_to_snapshot() {
        let mut state = with_cart(vec![line("L1", 2)]);
        let submission = state.begin(decrement("L1", 3));
        let settlement = state.settle(&submission, Err(StorefrontError::Http(500)));

        assert_eq!(settlement, Settlement::Failed(Some(Resolution::Reverted)));
        assert_eq!(state.overrides.read_quantity("L1", 2), 2);
        assert_eq!(state.cart_error, Some(StorefrontError::Http(500)));
    }

    #[test]
    fn test_newer_submission_wins_race() {
        let mut state = with_cart(vec![line("L1", 2)]);
        let first = state.begin(decrement("L1", 3));
        let second = state.begin(decrement("L1", 4));
        assert_eq!(state.overrides.len(), 1);

        // Second answers first
        assert_eq!(
            state.settle(&second, Ok(cart(vec![line("L1", 4)]))),
            Settlement::Applied(Some(Resolution::Confirmed))
        );
        // Late answer for the first is not installed
        assert_eq!(state.settle(&first, Ok(cart(vec![line("L1", 3)]))), Settlement::Stale);
        assert_eq!(state.cart.as_ref().and_then(|c| c.line("L1")).map(|l| l.quantity), Some(4));
    }

    #[test]
    fn test_older_failure_keeps_newer_guess() {
        let mut state = with_cart(vec![line("L1", 2)]);
        let first = state.begin(decrement("L1", 3));
        let _second = state.begin(decrement("L1", 4));

        assert_eq!(
            state.settle(&first, Err(StorefrontError::Http(502))),
            Settlement::Failed(Some(Resolution::Superseded))
        );
        assert_eq!(state.overrides.get("L1"), Some(LinePatch::SetQuantity(4)));
    }

    #[test]
    fn test_add_lines_has_no_override() {
        let mut state = StorefrontState::new();
        let submission = state.begin(CartAction::AddLines(Vec::new()));
        assert!(submission.pending.is_none());
        assert_eq!(state.settle(&submission, Ok(cart(vec![line("L1", 1)]))), Settlement::Applied(None));
        assert!(state.cart_id().is_some());
    }

    #[test]
    fn test_expire_and_close() {
        let mut state = with_cart(vec![line("L1", 2), line("L2", 1)]);
        let submission = state.begin(CartAction::RemoveLine { line_id: "L2".into() });
        assert!(state.overrides.is_removed("L2"));
        assert!(state.expire(&submission));
        assert!(!state.expire(&submission));

        state.cart_open = true;
        state.begin(decrement("L1", 1));
        state.close_cart();
        assert!(!state.cart_open);
        assert!(state.overrides.is_empty());
    }

    #[test]
    fn test_refresh_reconciles() {
        let mut state = with_cart(vec![line("L1", 2)]);
        state.begin(decrement("L1", 1));
        assert_eq!(state.refresh(Some(cart(vec![line("L1", 1)]))), 1);
        assert!(state.overrides.is_empty());
    }

    fn shown_quantity(state: &StorefrontState, line_id: &str) -> Option<u32> {
        let line = state.cart.as_ref()?.line(line_id)?;
        if state.overrides.is_removed(line_id) {
            return None;
        }
        Some(state.overrides.read_quantity(line_id, line.quantity))
    }

    fn add(variant: &str) -> CartAction {
        CartAction::AddLines(vec![crate::commands::CartLineInput { merchandise_id: variant.into(), quantity: 1 }])
    }

    fn cart_with_id(id: &str, lines: Vec<crate::models::CartLine>) -> Cart {
        Cart { id: id.to_string(), ..cart(lines) }
    }

    #[test]
    fn test_out_of_order_answer_keeps_guess_until_refetch() {
        let mut state = with_cart(vec![line("L1", 2), line("L2", 1)]);
        let bump = state.begin(decrement("L1", 3));
        let remove = state.begin(CartAction::RemoveLine { line_id: "L2".into() });

        // Remove answers first with a snapshot that predates the bump
        assert_eq!(
            state.settle(&remove, Ok(cart(vec![line("L1", 2)]))),
            Settlement::Applied(Some(Resolution::Confirmed))
        );
        assert_eq!(shown_quantity(&state, "L1"), Some(3));

        // Bump answers late: dropped, but the guess stays on screen
        assert_eq!(state.settle(&bump, Ok(cart(vec![line("L1", 3)]))), Settlement::Stale);
        assert_eq!(shown_quantity(&state, "L1"), Some(3));
        assert_eq!(state.overrides.len(), 1);

        assert_eq!(state.refresh(Some(cart(vec![line("L1", 3)]))), 1);
        assert_eq!(shown_quantity(&state, "L1"), Some(3));
        assert!(state.overrides.is_empty());
    }

    #[test]
    fn test_adds_wait_for_cart_create() {
        let mut state = StorefrontState::new();
        let first = state.begin(add("variant-A"));
        let second = state.begin(add("variant-B"));

        let Dispatch::Send(first, cart_id) = state.dispatch(first) else {
            panic!("first add should be sent");
        };
        assert_eq!(cart_id, None);
        assert_eq!(state.dispatch(second), Dispatch::Queued);
        assert!(state.release_queued().is_empty());

        state.settle(&first, Ok(cart_with_id("cartA", vec![line("LA", 1)])));
        let ready = state.release_queued();
        assert_eq!(ready.len(), 1);
        let (second, cart_id) = &ready[0];
        assert_eq!(cart_id.as_deref(), Some("cartA"));

        state.settle(second, Ok(cart_with_id("cartA", vec![line("LA", 1), line("LB", 1)])));
        let cart = state.cart.as_ref().unwrap();
        assert_eq!(cart.id, "cartA");
        assert!(cart.line("LA").is_some());
        assert!(cart.line("LB").is_some());
        assert!(state.queued.is_empty());
    }

    #[test]
    fn test_failed_create_promotes_next_add() {
        let mut state = StorefrontState::new();
        let first = state.begin(add("variant-A"));
        let second = state.begin(add("variant-B"));
        let Dispatch::Send(first, _) = state.dispatch(first) else {
            panic!("first add should be sent");
        };
        state.dispatch(second);

        state.settle(&first, Err(StorefrontError::Http(503)));
        let ready = state.release_queued();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].1, None);
        assert_eq!(state.creating, Some(ready[0].0.seq));
    }
}
