//! Serializable store snapshots.
//!
//! The hosting layer owns persistence. A snapshot is the complete state it
//! needs to carry between calls; the CBOR byte encoding is provided for
//! hosts that want one, and the type is plain serde for hosts that prefer
//! another format.

use serde::{Deserialize, Serialize};

use karma_store_core::{AccountId, ActionRegistry, KarmaLedger};

/// Complete serializable state of a [`KarmaStore`](crate::KarmaStore).
///
/// Restoring a snapshot yields a store that answers every read identically
/// to the captured one and behaves identically under subsequent
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// The owner identity at capture time.
    pub owner: AccountId,
    /// The full action registry.
    pub registry: ActionRegistry,
    /// Settled and pending balances with their aggregates.
    pub ledger: KarmaLedger,
}

impl StoreSnapshot {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ciborium::de::Error<std::io::Error>> {
        ciborium::from_reader(bytes)
    }
}
