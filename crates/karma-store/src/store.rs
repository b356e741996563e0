//! The KarmaStore: owner-gated reward accounting.
//!
//! Brings the action registry and the karma ledger together behind the
//! entry points the hosting execution layer calls. A single owner identity,
//! fixed at construction, gates registry mutation and settlement; anyone
//! may post rewards into the pending buffer.

use karma_store_core::{
    AccountId, ActionId, ActionRegistry, FlushReport, KarmaError, KarmaLedger, Result,
    RewardAmount,
};

use crate::snapshot::StoreSnapshot;

/// Configuration for a [`KarmaStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Re-verify the ledger aggregates after every mutating entry point.
    ///
    /// Costs a scan of all pending balances per operation; meant for tests
    /// and debugging.
    pub check_aggregates: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            check_aggregates: false,
        }
    }
}

/// The main KarmaStore struct.
///
/// The host is responsible for authenticating callers and passing their
/// identity into every entry point, and for executing operations one at a
/// time, end-to-end. A host that cannot guarantee serialized execution must
/// route every call through [`SharedKarmaStore`](crate::SharedKarmaStore)
/// instead of sharing a `KarmaStore` directly.
pub struct KarmaStore {
    owner: AccountId,
    registry: ActionRegistry,
    ledger: KarmaLedger,
    config: StoreConfig,
}

impl KarmaStore {
    /// Create a store owned by `owner`, with an empty registry and ledger.
    pub fn new(owner: AccountId) -> Self {
        Self::with_config(owner, StoreConfig::default())
    }

    /// Create a store with explicit configuration.
    pub fn with_config(owner: AccountId, config: StoreConfig) -> Self {
        Self {
            owner,
            registry: ActionRegistry::new(),
            ledger: KarmaLedger::new(),
            config,
        }
    }

    /// The identity allowed to manage actions and trigger settlement.
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Registry Operations (privileged)
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a new action with its karma reward. Owner only.
    ///
    /// `amount` arrives in the host's native numeric type and is floored to
    /// whole karma units (7.9 stores as 7); there is no upper bound. Fails
    /// with [`KarmaError::DuplicateAction`] if the id already exists.
    pub fn register_action(
        &mut self,
        caller: &AccountId,
        id: impl Into<ActionId>,
        amount: f64,
    ) -> Result<()> {
        self.require_owner(caller)?;
        let id = id.into();
        let reward = RewardAmount::from_raw(amount);
        self.registry.register(id.clone(), reward)?;
        tracing::debug!("registered action {} with reward {}", id, reward);
        Ok(())
    }

    /// Overwrite the reward of an existing action. Owner only.
    ///
    /// Same floor and no-cap semantics as [`Self::register_action`]. Fails
    /// with [`KarmaError::UnknownAction`] if the id has never been
    /// registered.
    pub fn update_action(
        &mut self,
        caller: &AccountId,
        id: impl Into<ActionId>,
        amount: f64,
    ) -> Result<()> {
        self.require_owner(caller)?;
        let id = id.into();
        let reward = RewardAmount::from_raw(amount);
        self.registry.update(id.clone(), reward)?;
        tracing::debug!("updated action {} to reward {}", id, reward);
        Ok(())
    }

    /// Current reward for an action; unknown actions read as zero.
    pub fn reward_of(&self, id: &ActionId) -> u64 {
        self.registry.reward_of(id).units()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Karma Ledger Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Grant `beneficiary` the current reward for `action`. Callable by
    /// anyone; never fails.
    ///
    /// The action's reward is read at call time. An unregistered action
    /// contributes zero and is accepted silently: a no-op grant, not an
    /// error. `context` (for example a content or model identifier) is
    /// carried through to the audit log only and does not affect the
    /// accounting.
    pub fn reward(
        &mut self,
        caller: &AccountId,
        beneficiary: &AccountId,
        action: &ActionId,
        context: &str,
    ) {
        let amount = self.registry.reward_of(action);
        self.ledger.accrue(beneficiary, amount);
        tracing::debug!(
            "reward: {} granted {} karma to {} for {} (context {})",
            caller,
            amount,
            beneficiary,
            action,
            context
        );
        self.check_aggregates();
    }

    /// Commit all pending karma to settled balances. Owner only.
    ///
    /// Either every pending balance is committed and cleared, or (on an
    /// unauthorized caller) nothing changes. After a successful flush both
    /// aggregates are zero and accrual restarts from zero for every
    /// account.
    pub fn flush(&mut self, caller: &AccountId) -> Result<FlushReport> {
        self.require_owner(caller)?;
        let report = self.ledger.settle_all();
        tracing::info!(
            "flush: settled {} karma across {} accounts",
            report.karma_settled,
            report.accounts_settled
        );
        self.check_aggregates();
        Ok(report)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Settled (permanent) karma balance of an account.
    pub fn karma_of(&self, account: &AccountId) -> u64 {
        self.ledger.settled(account)
    }

    /// Karma accrued by an account since the last settlement.
    pub fn pending_karma_of(&self, account: &AccountId) -> u64 {
        self.ledger.pending(account)
    }

    /// Aggregate pending karma across all accounts.
    pub fn total_pending_karma(&self) -> u64 {
        self.ledger.total_pending()
    }

    /// Number of accounts with a nonzero pending balance.
    pub fn pending_user_count(&self) -> u64 {
        self.ledger.pending_user_count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots
    // ─────────────────────────────────────────────────────────────────────────

    /// Capture the complete store state for the host to persist.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            owner: self.owner.clone(),
            registry: self.registry.clone(),
            ledger: self.ledger.clone(),
        }
    }

    /// Rebuild a store from a captured snapshot, with default
    /// configuration.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            owner: snapshot.owner,
            registry: snapshot.registry,
            ledger: snapshot.ledger,
            config: StoreConfig::default(),
        }
    }

    fn require_owner(&self, caller: &AccountId) -> Result<()> {
        if caller != &self.owner {
            tracing::warn!("rejected privileged call from {}", caller);
            return Err(KarmaError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    fn check_aggregates(&self) {
        if self.config.check_aggregates {
            assert!(
                self.ledger.aggregates_consistent(),
                "ledger aggregates diverged from pending balances"
            );
        }
    }
}
