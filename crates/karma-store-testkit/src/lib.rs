//! # KarmaStore Testkit
//!
//! Testing utilities for the KarmaStore.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a store seeded with the standard action table and
//!   helpers for multi-party scenarios
//! - **Generators**: proptest strategies producing operation sequences for
//!   sweeping the ledger invariants
//!
//! ## Fixtures
//!
//! ```rust
//! use karma_store_testkit::fixtures::{TestFixture, LIKE, LIKE_KARMA};
//! use karma_store::AccountId;
//!
//! let mut fixture = TestFixture::new();
//! fixture.reward("bob", "alice", LIKE);
//! assert_eq!(
//!     fixture.store.pending_karma_of(&AccountId::from("alice")),
//!     LIKE_KARMA
//! );
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use karma_store_testkit::generators::{apply_ops, op_sequence};
//!
//! proptest! {
//!     #[test]
//!     fn aggregates_hold(ops in op_sequence(60)) {
//!         // apply_ops re-verifies the ledger aggregates after every
//!         // mutation.
//!         let _store = apply_ops(&ops);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{accounts, TestFixture};
pub use generators::{apply_ops, op, op_sequence, pool_accounts, pool_actions, Op};
