//! A mutex-backed handle for hosts without serialized execution.
//!
//! The accounting core assumes the hosting environment runs one operation
//! at a time, end-to-end. A host that cannot guarantee that (a genuinely
//! multi-threaded server) must route every operation through one mutual
//! exclusion lock so `reward` and `flush` never interleave; this wrapper is
//! that single-writer discipline.

use std::sync::{Arc, Mutex, MutexGuard};

use karma_store_core::{AccountId, ActionId, FlushReport, Result};

use crate::snapshot::StoreSnapshot;
use crate::store::KarmaStore;

/// Cloneable, thread-safe handle to a [`KarmaStore`].
///
/// Every entry point holds the lock for the full operation, so a flush
/// observes no accruals mid-settlement and an accrual never lands inside a
/// half-finished flush.
#[derive(Clone)]
pub struct SharedKarmaStore {
    inner: Arc<Mutex<KarmaStore>>,
}

impl SharedKarmaStore {
    /// Wrap a store for shared use.
    pub fn new(store: KarmaStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Register a new action with its karma reward. Owner only.
    pub fn register_action(
        &self,
        caller: &AccountId,
        id: impl Into<ActionId>,
        amount: f64,
    ) -> Result<()> {
        self.lock().register_action(caller, id, amount)
    }

    /// Overwrite the reward of an existing action. Owner only.
    pub fn update_action(
        &self,
        caller: &AccountId,
        id: impl Into<ActionId>,
        amount: f64,
    ) -> Result<()> {
        self.lock().update_action(caller, id, amount)
    }

    /// Current reward for an action; unknown actions read as zero.
    pub fn reward_of(&self, id: &ActionId) -> u64 {
        self.lock().reward_of(id)
    }

    /// Grant `beneficiary` the current reward for `action`. Callable by
    /// anyone.
    pub fn reward(
        &self,
        caller: &AccountId,
        beneficiary: &AccountId,
        action: &ActionId,
        context: &str,
    ) {
        self.lock().reward(caller, beneficiary, action, context);
    }

    /// Commit all pending karma to settled balances. Owner only.
    pub fn flush(&self, caller: &AccountId) -> Result<FlushReport> {
        self.lock().flush(caller)
    }

    /// Settled (permanent) karma balance of an account.
    pub fn karma_of(&self, account: &AccountId) -> u64 {
        self.lock().karma_of(account)
    }

    /// Karma accrued by an account since the last settlement.
    pub fn pending_karma_of(&self, account: &AccountId) -> u64 {
        self.lock().pending_karma_of(account)
    }

    /// Aggregate pending karma across all accounts.
    pub fn total_pending_karma(&self) -> u64 {
        self.lock().total_pending_karma()
    }

    /// Number of accounts with a nonzero pending balance.
    pub fn pending_user_count(&self) -> u64 {
        self.lock().pending_user_count()
    }

    /// Capture the complete store state for the host to persist.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, KarmaStore> {
        self.inner.lock().expect("karma store lock poisoned")
    }
}
