//! The action registry: named actions and their karma rewards.
//!
//! Actions are created once, updated any number of times, and never
//! deleted. Create and update are separate operations rather than a single
//! upsert: registering an id that already exists and updating one that does
//! not are distinct operator errors, and both are rejected explicitly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{KarmaError, Result};
use crate::types::{ActionId, RewardAmount};

/// Registry of rewardable actions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRegistry {
    actions: HashMap<ActionId, RewardAmount>,
}

impl ActionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new action with its reward.
    ///
    /// Fails with [`KarmaError::DuplicateAction`] if the id already exists;
    /// the previously stored reward is left untouched in that case.
    pub fn register(&mut self, id: ActionId, amount: RewardAmount) -> Result<()> {
        if self.actions.contains_key(&id) {
            return Err(KarmaError::DuplicateAction(id));
        }
        self.actions.insert(id, amount);
        Ok(())
    }

    /// Overwrite the reward of an existing action.
    ///
    /// Fails with [`KarmaError::UnknownAction`] if the id has never been
    /// registered.
    pub fn update(&mut self, id: ActionId, amount: RewardAmount) -> Result<()> {
        match self.actions.get_mut(&id) {
            Some(stored) => {
                *stored = amount;
                Ok(())
            }
            None => Err(KarmaError::UnknownAction(id)),
        }
    }

    /// Current reward for an action.
    ///
    /// Unknown actions read as [`RewardAmount::ZERO`]. Callers that need to
    /// distinguish "registered with reward zero" from "not registered" must
    /// use [`contains`](Self::contains).
    pub fn reward_of(&self, id: &ActionId) -> RewardAmount {
        self.actions.get(id).copied().unwrap_or(RewardAmount::ZERO)
    }

    /// Whether an action has been registered.
    pub fn contains(&self, id: &ActionId) -> bool {
        self.actions.contains_key(id)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over registered actions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ActionId, RewardAmount)> {
        self.actions.iter().map(|(id, amount)| (id, *amount))
    }
}
