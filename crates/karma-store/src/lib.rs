//! # KarmaStore
//!
//! A reward-accounting ledger: users earn a reputation score ("karma") for
//! registered actions, rewards accrue provisionally, and an explicit
//! privileged settlement step makes them permanent.
//!
//! ## Overview
//!
//! Two data stores compose the system, coordinated by a single authority
//! check:
//!
//! - **Action registry**: maps an action identifier to a karma reward;
//!   owner-managed.
//! - **Karma ledger**: settled (permanent) karma per account plus a pending
//!   accrual buffer with lock-step aggregates; anyone may post rewards,
//!   only the owner may settle.
//!
//! The hosting layer authenticates callers and passes their identity into
//! every entry point. It also executes operations one at a time; hosts
//! without that guarantee wrap the store in [`SharedKarmaStore`].
//!
//! ## Usage
//!
//! ```rust
//! use karma_store::{AccountId, ActionId, KarmaStore};
//!
//! let owner = AccountId::from("owner");
//! let mut store = KarmaStore::new(owner.clone());
//!
//! // Owner manages the action table.
//! store.register_action(&owner, "receive_like", 1.0).unwrap();
//!
//! // Anyone may reward anyone for a registered action.
//! let alice = AccountId::from("alice");
//! let bob = AccountId::from("bob");
//! let like = ActionId::from("receive_like");
//! store.reward(&bob, &alice, &like, "ab2HG376sddgBF");
//!
//! assert_eq!(store.pending_karma_of(&alice), 1);
//! assert_eq!(store.karma_of(&alice), 0);
//!
//! // Only the owner settles pending karma.
//! let report = store.flush(&owner).unwrap();
//! assert_eq!(report.karma_settled, 1);
//! assert_eq!(store.karma_of(&alice), 1);
//! assert_eq!(store.pending_karma_of(&alice), 0);
//! ```
//!
//! ## Re-exports
//!
//! The accounting primitives live in `karma-store-core` and are re-exported
//! here as `karma_store::core` for hosts that want them directly.

pub mod shared;
pub mod snapshot;
pub mod store;

// Re-export the core crate
pub use karma_store_core as core;

// Re-export main types for convenience
pub use shared::SharedKarmaStore;
pub use snapshot::StoreSnapshot;
pub use store::{KarmaStore, StoreConfig};

// Re-export commonly used core types
pub use karma_store_core::{
    AccountId, ActionId, ActionRegistry, FlushReport, KarmaError, KarmaLedger, Result,
    RewardAmount,
};
