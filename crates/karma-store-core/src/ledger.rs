//! The karma ledger: settled balances, pending accruals, and settlement.
//!
//! Two maps and two scalar aggregates updated in lock-step. At all times
//! `total_pending` equals the sum of pending balances and
//! `pending_user_count` equals the number of accounts with a nonzero
//! pending balance; the pending map never holds a zero balance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, RewardAmount};

/// Outcome of a settlement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushReport {
    /// Accounts whose pending balance was committed.
    pub accounts_settled: u64,
    /// Total karma moved from pending to settled.
    pub karma_settled: u64,
}

/// Per-account karma accounting with deferred settlement.
///
/// Accounts exist implicitly: any identity not yet touched reads as zero
/// settled and zero pending.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmaLedger {
    settled: HashMap<AccountId, u64>,
    pending: HashMap<AccountId, u64>,
    total_pending: u64,
    pending_user_count: u64,
}

impl KarmaLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue `amount` into `beneficiary`'s pending balance.
    ///
    /// The pending-user counter moves only on the zero to nonzero edge;
    /// repeated accruals for an already-pending account just add. A zero
    /// amount is accepted and changes nothing: no entry is created and no
    /// counter moves.
    pub fn accrue(&mut self, beneficiary: &AccountId, amount: RewardAmount) {
        if amount.is_zero() {
            return;
        }
        let balance = self.pending.entry(beneficiary.clone()).or_insert(0);
        if *balance == 0 {
            self.pending_user_count += 1;
        }
        // Saturate both sides together so the aggregate never drifts from
        // the per-account balances.
        *balance = balance.saturating_add(amount.units());
        self.total_pending = self.total_pending.saturating_add(amount.units());
    }

    /// Commit every pending balance to settled and clear all pending state.
    ///
    /// Runs to completion in one step; afterwards both aggregates are zero
    /// and every account's pending balance is zero. Subsequent accruals
    /// start from zero again, independent of settled totals.
    pub fn settle_all(&mut self) -> FlushReport {
        let report = FlushReport {
            accounts_settled: self.pending.len() as u64,
            karma_settled: self.total_pending,
        };

        for (account, balance) in self.pending.drain() {
            let settled = self.settled.entry(account).or_insert(0);
            *settled = settled.saturating_add(balance);
        }
        self.total_pending = 0;
        self.pending_user_count = 0;

        report
    }

    /// Settled (permanent) karma balance of an account.
    pub fn settled(&self, account: &AccountId) -> u64 {
        self.settled.get(account).copied().unwrap_or(0)
    }

    /// Karma accrued by an account since the last settlement.
    pub fn pending(&self, account: &AccountId) -> u64 {
        self.pending.get(account).copied().unwrap_or(0)
    }

    /// Aggregate pending karma across all accounts.
    pub fn total_pending(&self) -> u64 {
        self.total_pending
    }

    /// Number of accounts with a nonzero pending balance.
    pub fn pending_user_count(&self) -> u64 {
        self.pending_user_count
    }

    /// Accounts with a nonzero pending balance, in arbitrary order.
    pub fn pending_accounts(&self) -> impl Iterator<Item = (&AccountId, u64)> {
        self.pending.iter().map(|(account, balance)| (account, *balance))
    }

    /// Recompute both aggregates from the pending map and compare.
    ///
    /// Costs a full scan of pending balances; meant for tests and
    /// debugging.
    pub fn aggregates_consistent(&self) -> bool {
        let sum = self
            .pending
            .values()
            .fold(0u64, |acc, &balance| acc.saturating_add(balance));
        let count = self.pending.values().filter(|&&balance| balance > 0).count() as u64;
        self.total_pending == sum && self.pending_user_count == count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from("alice")
    }

    fn bob() -> AccountId {
        AccountId::from("bob")
    }

    #[test]
    fn test_untouched_account_reads_as_zero() {
        let ledger = KarmaLedger::new();
        assert_eq!(ledger.settled(&alice()), 0);
        assert_eq!(ledger.pending(&alice()), 0);
        assert_eq!(ledger.total_pending(), 0);
        assert_eq!(ledger.pending_user_count(), 0);
    }

    #[test]
    fn test_accrue_counts_each_account_once() {
        let mut ledger = KarmaLedger::new();

        ledger.accrue(&alice(), RewardAmount::from_units(1));
        assert_eq!(ledger.pending_user_count(), 1);

        // A second accrual for the same account adds without re-counting.
        ledger.accrue(&alice(), RewardAmount::from_units(5));
        assert_eq!(ledger.pending(&alice()), 6);
        assert_eq!(ledger.pending_user_count(), 1);
        assert_eq!(ledger.total_pending(), 6);

        ledger.accrue(&bob(), RewardAmount::from_units(3));
        assert_eq!(ledger.pending_user_count(), 2);
        assert_eq!(ledger.total_pending(), 9);
        assert!(ledger.aggregates_consistent());
    }

    #[test]
    fn test_zero_accrual_changes_nothing() {
        let mut ledger = KarmaLedger::new();
        ledger.accrue(&alice(), RewardAmount::ZERO);

        assert_eq!(ledger.pending(&alice()), 0);
        assert_eq!(ledger.pending_user_count(), 0);
        assert_eq!(ledger.total_pending(), 0);
        assert_eq!(ledger.pending_accounts().count(), 0);
        assert!(ledger.aggregates_consistent());
    }

    #[test]
    fn test_settle_all_commits_and_clears() {
        let mut ledger = KarmaLedger::new();
        ledger.accrue(&alice(), RewardAmount::from_units(6));
        ledger.accrue(&bob(), RewardAmount::from_units(3));

        let report = ledger.settle_all();
        assert_eq!(
            report,
            FlushReport {
                accounts_settled: 2,
                karma_settled: 9,
            }
        );

        assert_eq!(ledger.settled(&alice()), 6);
        assert_eq!(ledger.settled(&bob()), 3);
        assert_eq!(ledger.pending(&alice()), 0);
        assert_eq!(ledger.pending(&bob()), 0);
        assert_eq!(ledger.total_pending(), 0);
        assert_eq!(ledger.pending_user_count(), 0);
        assert!(ledger.aggregates_consistent());
    }

    #[test]
    fn test_settle_all_on_empty_ledger() {
        let mut ledger = KarmaLedger::new();
        let report = ledger.settle_all();
        assert_eq!(report.accounts_settled, 0);
        assert_eq!(report.karma_settled, 0);
    }

    #[test]
    fn test_accrual_restarts_after_settlement() {
        let mut ledger = KarmaLedger::new();
        ledger.accrue(&alice(), RewardAmount::from_units(6));
        ledger.settle_all();

        ledger.accrue(&alice(), RewardAmount::from_units(2));
        assert_eq!(ledger.pending(&alice()), 2);
        assert_eq!(ledger.settled(&alice()), 6);
        assert_eq!(ledger.pending_user_count(), 1);

        ledger.settle_all();
        assert_eq!(ledger.settled(&alice()), 8);
        assert_eq!(ledger.pending(&alice()), 0);
    }

    #[test]
    fn test_settled_balances_accumulate_across_settlements() {
        let mut ledger = KarmaLedger::new();
        for _ in 0..3 {
            ledger.accrue(&alice(), RewardAmount::from_units(5));
            ledger.settle_all();
        }
        assert_eq!(ledger.settled(&alice()), 15);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Aggregates stay in lock-step with the pending map across
            /// arbitrary interleavings of accruals and settlements.
            #[test]
            fn aggregates_stay_consistent(
                steps in prop::collection::vec((0usize..5, 0u64..1000, any::<bool>()), 0..100)
            ) {
                let mut ledger = KarmaLedger::new();
                for (account, amount, settle) in steps {
                    let account = AccountId::from(format!("user-{account}"));
                    ledger.accrue(&account, RewardAmount::from_units(amount));
                    prop_assert!(ledger.aggregates_consistent());
                    if settle {
                        ledger.settle_all();
                        prop_assert_eq!(ledger.total_pending(), 0);
                        prop_assert_eq!(ledger.pending_user_count(), 0);
                        prop_assert!(ledger.aggregates_consistent());
                    }
                }
            }

            /// Settling moves karma without creating or destroying it.
            #[test]
            fn settlement_conserves_karma(
                accruals in prop::collection::vec((0usize..5, 1u64..1000), 1..50)
            ) {
                let mut ledger = KarmaLedger::new();
                let mut granted = 0u64;
                for (account, amount) in accruals {
                    let account = AccountId::from(format!("user-{account}"));
                    ledger.accrue(&account, RewardAmount::from_units(amount));
                    granted += amount;
                }

                let report = ledger.settle_all();
                prop_assert_eq!(report.karma_settled, granted);

                let settled_sum: u64 = (0..5)
                    .map(|i| ledger.settled(&AccountId::from(format!("user-{i}"))))
                    .sum();
                prop_assert_eq!(settled_sum, granted);
            }
        }
    }
}
