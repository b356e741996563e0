//! # KarmaStore Core
//!
//! Pure accounting primitives for the KarmaStore: actions, rewards, and the
//! karma ledger.
//!
//! This crate contains no I/O and no locking. It is plain computation over
//! keyed balances; the hosting layer authenticates callers, executes
//! operations one at a time, and persists state between calls.
//!
//! ## Key Types
//!
//! - [`ActionRegistry`] - named actions and the karma each one rewards
//! - [`KarmaLedger`] - settled balances plus the pending accrual buffer
//! - [`AccountId`] / [`ActionId`] - opaque host-supplied identifiers
//! - [`RewardAmount`] - whole karma units, floored from the host's numbers
//!
//! ## Accounting Model
//!
//! Rewards accrue provisionally into a per-account pending buffer. A
//! settlement pass ([`KarmaLedger::settle_all`]) commits every pending
//! balance into the permanent settled balance and clears the buffer in one
//! step. The ledger maintains two aggregates in lock-step with the pending
//! map: the total pending karma and the count of accounts with pending
//! activity.

pub mod error;
pub mod ledger;
pub mod registry;
pub mod types;

pub use error::{KarmaError, Result};
pub use ledger::{FlushReport, KarmaLedger};
pub use registry::ActionRegistry;
pub use types::{AccountId, ActionId, RewardAmount};
