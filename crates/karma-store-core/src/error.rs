//! Error types for the KarmaStore core.

use thiserror::Error;

use crate::types::{AccountId, ActionId};

/// Errors that can occur during KarmaStore operations.
///
/// Every rejection happens before any state mutation: a failed operation
/// leaves the registry and the ledger exactly as they were.
#[derive(Debug, Error)]
pub enum KarmaError {
    /// A privileged operation was invoked by a non-owner.
    #[error("unauthorized: caller {caller} is not the owner")]
    Unauthorized {
        /// The identity the host supplied for the rejected call.
        caller: AccountId,
    },

    /// An action with this id has already been registered.
    #[error("duplicate action: {0}")]
    DuplicateAction(ActionId),

    /// No action with this id has been registered.
    #[error("unknown action: {0}")]
    UnknownAction(ActionId),
}

/// Result type for KarmaStore operations.
pub type Result<T> = std::result::Result<T, KarmaError>;
