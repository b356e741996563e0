//! Proptest strategies for exercising the accounting engine.
//!
//! Generates operation sequences over small pools of accounts and actions
//! and replays them against a fresh store, so property tests can sweep the
//! ledger invariants across arbitrary interleavings of registration,
//! rewarding, and settlement.

use proptest::prelude::*;

use karma_store::{KarmaStore, StoreConfig};
use karma_store_core::{AccountId, ActionId, KarmaError};

/// Accounts in the generated pool. Index 0 is the owner.
pub const ACCOUNT_POOL: usize = 6;
/// Actions in the generated pool.
pub const ACTION_POOL: usize = 4;

/// A single generated operation, with callers and targets as pool indexes.
#[derive(Debug, Clone)]
pub enum Op {
    Register {
        caller: usize,
        action: usize,
        amount: f64,
    },
    Update {
        caller: usize,
        action: usize,
        amount: f64,
    },
    Reward {
        caller: usize,
        beneficiary: usize,
        action: usize,
    },
    Flush {
        caller: usize,
    },
}

/// The account pool operations index into.
pub fn pool_accounts() -> Vec<AccountId> {
    (0..ACCOUNT_POOL)
        .map(|i| AccountId::from(format!("acct-{i}")))
        .collect()
}

/// The action pool operations index into.
pub fn pool_actions() -> Vec<ActionId> {
    (0..ACTION_POOL)
        .map(|i| ActionId::from(format!("action-{i}")))
        .collect()
}

/// Reward amounts as the host would supply them: fractional, whole, and
/// occasionally enormous.
fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..100.0f64,
        1 => Just(7.9),
        1 => Just(1e10),
    ]
}

/// Strategy for a single operation.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ACCOUNT_POOL, 0..ACTION_POOL, amount())
            .prop_map(|(caller, action, amount)| Op::Register {
                caller,
                action,
                amount,
            }),
        (0..ACCOUNT_POOL, 0..ACTION_POOL, amount())
            .prop_map(|(caller, action, amount)| Op::Update {
                caller,
                action,
                amount,
            }),
        (0..ACCOUNT_POOL, 0..ACCOUNT_POOL, 0..ACTION_POOL).prop_map(
            |(caller, beneficiary, action)| Op::Reward {
                caller,
                beneficiary,
                action,
            }
        ),
        (0..ACCOUNT_POOL).prop_map(|caller| Op::Flush { caller }),
    ]
}

/// Strategy for an operation sequence of up to `max_len` operations.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..=max_len)
}

/// Replay `ops` against a fresh store owned by pool account 0.
///
/// Rejections the generated sequences are expected to provoke (unauthorized
/// callers, duplicate registration, update-before-create) are swallowed;
/// any other error panics the test.
pub fn apply_ops(ops: &[Op]) -> KarmaStore {
    let accounts = pool_accounts();
    let actions = pool_actions();
    let owner = accounts[0].clone();
    let mut store = KarmaStore::with_config(
        owner,
        StoreConfig {
            check_aggregates: true,
        },
    );

    for op in ops {
        match *op {
            Op::Register {
                caller,
                action,
                amount,
            } => {
                match store.register_action(&accounts[caller], actions[action].clone(), amount) {
                    Ok(())
                    | Err(KarmaError::Unauthorized { .. })
                    | Err(KarmaError::DuplicateAction(_)) => {}
                    Err(e) => panic!("unexpected register error: {e}"),
                }
            }
            Op::Update {
                caller,
                action,
                amount,
            } => {
                match store.update_action(&accounts[caller], actions[action].clone(), amount) {
                    Ok(())
                    | Err(KarmaError::Unauthorized { .. })
                    | Err(KarmaError::UnknownAction(_)) => {}
                    Err(e) => panic!("unexpected update error: {e}"),
                }
            }
            Op::Reward {
                caller,
                beneficiary,
                action,
            } => {
                store.reward(
                    &accounts[caller],
                    &accounts[beneficiary],
                    &actions[action],
                    "generated",
                );
            }
            Op::Flush { caller } => match store.flush(&accounts[caller]) {
                Ok(_) | Err(KarmaError::Unauthorized { .. }) => {}
                Err(e) => panic!("unexpected flush error: {e}"),
            },
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        /// The aggregates must match the per-account balances after any
        /// operation sequence. `apply_ops` already re-verifies after every
        /// mutation; this recomputes through the public read API as well.
        #[test]
        fn aggregates_match_reads(ops in op_sequence(60)) {
            let store = apply_ops(&ops);
            let accounts = pool_accounts();

            let pending_sum: u64 = accounts
                .iter()
                .map(|account| store.pending_karma_of(account))
                .sum();
            let pending_count = accounts
                .iter()
                .filter(|account| store.pending_karma_of(account) > 0)
                .count() as u64;

            prop_assert_eq!(store.total_pending_karma(), pending_sum);
            prop_assert_eq!(store.pending_user_count(), pending_count);
        }

        /// Settled plus pending karma is conserved: a flush moves pending
        /// to settled without creating or destroying karma.
        #[test]
        fn flush_conserves_karma(ops in op_sequence(40)) {
            let mut store = apply_ops(&ops);
            let accounts = pool_accounts();
            let owner = accounts[0].clone();

            let total_before: u64 = accounts
                .iter()
                .map(|a| store.karma_of(a) + store.pending_karma_of(a))
                .sum();
            let pending_before = store.total_pending_karma();

            let report = store.flush(&owner).unwrap();
            prop_assert_eq!(report.karma_settled, pending_before);

            let total_after: u64 = accounts
                .iter()
                .map(|a| store.karma_of(a) + store.pending_karma_of(a))
                .sum();
            prop_assert_eq!(total_before, total_after);
            prop_assert_eq!(store.total_pending_karma(), 0);
            prop_assert_eq!(store.pending_user_count(), 0);
        }

        /// Settled balances never decrease across a flush.
        #[test]
        fn settled_karma_is_monotonic(ops in op_sequence(40)) {
            let mut store = apply_ops(&ops);
            let accounts = pool_accounts();
            let owner = accounts[0].clone();

            let settled_before: Vec<u64> =
                accounts.iter().map(|a| store.karma_of(a)).collect();
            store.flush(&owner).unwrap();

            for (account, before) in accounts.iter().zip(settled_before) {
                prop_assert!(store.karma_of(account) >= before);
            }
        }
    }
}
