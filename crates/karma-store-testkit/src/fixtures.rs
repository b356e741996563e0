//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a store owned by a well-known
//! identity and seeded with the action table a production deployment
//! registers at launch.

use karma_store::{KarmaStore, StoreConfig};
use karma_store_core::{AccountId, ActionId};

/// Seed action: a user receives a like.
pub const LIKE: &str = "receive_like";
/// Seed action: a user gains a follower.
pub const FOLLOWER: &str = "receive_follower";
/// Seed action: a user invites another user.
pub const INVITE: &str = "invite_user";

/// Karma rewarded per like.
pub const LIKE_KARMA: u64 = 1;
/// Karma rewarded per new follower.
pub const FOLLOWER_KARMA: u64 = 5;
/// Karma rewarded per invitation.
pub const INVITE_KARMA: u64 = 3;

/// A test fixture with an owner identity and a seeded store.
///
/// Aggregate checking is enabled, so every mutation through the fixture
/// also re-verifies the ledger invariants.
pub struct TestFixture {
    pub owner: AccountId,
    pub store: KarmaStore,
}

impl TestFixture {
    /// Create a fixture whose store carries the standard action table.
    pub fn new() -> Self {
        let mut fixture = Self::empty();
        for (name, karma) in [
            (LIKE, LIKE_KARMA),
            (FOLLOWER, FOLLOWER_KARMA),
            (INVITE, INVITE_KARMA),
        ] {
            fixture
                .store
                .register_action(&fixture.owner, name, karma as f64)
                .expect("seed action registers once");
        }
        fixture
    }

    /// Create a fixture with no registered actions.
    pub fn empty() -> Self {
        let owner = AccountId::from("owner");
        let store = KarmaStore::with_config(
            owner.clone(),
            StoreConfig {
                check_aggregates: true,
            },
        );
        Self { owner, store }
    }

    /// Grant `beneficiary` the reward for `action`, submitted by `caller`.
    pub fn reward(&mut self, caller: &str, beneficiary: &str, action: &str) {
        self.store.reward(
            &AccountId::from(caller),
            &AccountId::from(beneficiary),
            &ActionId::from(action),
            "test-context",
        );
    }

    /// Settle all pending karma as the owner.
    pub fn flush(&mut self) -> karma_store::FlushReport {
        let owner = self.owner.clone();
        self.store.flush(&owner).expect("owner may flush")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct account identities for multi-party tests.
pub fn accounts(count: usize) -> Vec<AccountId> {
    (0..count).map(|i| AccountId::from(format!("user-{i}"))).collect()
}
