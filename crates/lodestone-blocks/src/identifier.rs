//! Immutable block identifiers with structural equality.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::states::{StateKey, StateValue};
use crate::types::BlockType;

/// The two on-disk save families.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Edition {
    Java,
    Bedrock,
}

/// Original-format identifier carried through conversion untouched, used
/// when a block has no vanilla mapping in the catalogue.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct PreservedIdentifier {
    pub edition: Edition,
    pub identifier: String,
    pub states: BTreeMap<String, String>,
}

/// A block type plus its set states.
///
/// Immutable value type: state edits go through `with_state`, which returns
/// a new identifier. Equality and hashing are structural over the type, the
/// states, and any preserved identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BlockIdentifier {
    block_type: BlockType,
    states: BTreeMap<StateKey, StateValue>,
    preserved: Option<PreservedIdentifier>,
}

impl BlockIdentifier {
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            states: BTreeMap::new(),
            preserved: None,
        }
    }

    pub fn with_states(
        block_type: BlockType,
        states: impl IntoIterator<Item = (StateKey, StateValue)>,
    ) -> Self {
        Self {
            block_type,
            states: states.into_iter().collect(),
            preserved: None,
        }
    }

    /// The universal fallback block.
    pub fn air() -> Self {
        Self::new(BlockType::Air)
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.block_type == BlockType::Air
    }

    #[inline]
    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn preserved(&self) -> Option<&PreservedIdentifier> {
        self.preserved.as_ref()
    }

    /// Read a state. Undeclared keys read as `None`; declared-but-unset
    /// keys read as the key's default value.
    pub fn state(&self, key: StateKey) -> Option<StateValue> {
        if let Some(value) = self.states.get(&key) {
            return Some(*value);
        }
        if self.block_type.supports(key) {
            return Some(key.default_value());
        }
        None
    }

    /// Read a state without falling back to the key default.
    pub fn raw_state(&self, key: StateKey) -> Option<StateValue> {
        self.states.get(&key).copied()
    }

    pub fn has_state(&self, key: StateKey) -> bool {
        self.states.contains_key(&key)
    }

    /// Copy-on-write state edit.
    pub fn with_state(&self, key: StateKey, value: StateValue) -> Self {
        let mut states = self.states.clone();
        states.insert(key, value);
        Self {
            block_type: self.block_type,
            states,
            preserved: self.preserved.clone(),
        }
    }

    /// Copy-on-write state edit from an optional source value; absent
    /// values leave the identifier unchanged.
    pub fn with_state_opt(&self, key: StateKey, value: Option<StateValue>) -> Self {
        match value {
            Some(value) => self.with_state(key, value),
            None => self.clone(),
        }
    }

    pub fn with_preserved(&self, preserved: PreservedIdentifier) -> Self {
        Self {
            block_type: self.block_type,
            states: self.states.clone(),
            preserved: Some(preserved),
        }
    }

    /// Iterate the explicitly set states.
    pub fn states(&self) -> impl Iterator<Item = (StateKey, StateValue)> + '_ {
        self.states.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for BlockIdentifier {
    fn default() -> Self {
        Self::air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{ChestKind, Half};

    #[test]
    fn undeclared_state_reads_none() {
        let stone = BlockIdentifier::new(BlockType::Stone);
        assert_eq!(stone.state(StateKey::Half), None);
    }

    #[test]
    fn declared_unset_state_reads_default() {
        let door = BlockIdentifier::new(BlockType::OakDoor);
        assert_eq!(door.state(StateKey::Half), Some(StateValue::Half(Half::Bottom)));
        assert_eq!(door.raw_state(StateKey::Half), None);
    }

    #[test]
    fn with_state_leaves_original_untouched() {
        let chest = BlockIdentifier::new(BlockType::Chest);
        let paired = chest.with_state(StateKey::ChestKind, StateValue::Chest(ChestKind::Left));
        assert_eq!(chest.state(StateKey::ChestKind), Some(StateValue::Chest(ChestKind::Single)));
        assert_eq!(paired.state(StateKey::ChestKind), Some(StateValue::Chest(ChestKind::Left)));
        assert_ne!(chest, paired);
    }

    #[test]
    fn with_states_sets_and_iterates() {
        let door = BlockIdentifier::with_states(
            BlockType::OakDoor,
            [(StateKey::Half, StateValue::Half(Half::Top))],
        );
        assert!(door.has_state(StateKey::Half));
        assert_eq!(door.states().count(), 1);
    }

    #[test]
    fn preserved_identifier_participates_in_equality() {
        let preserved = PreservedIdentifier {
            edition: Edition::Bedrock,
            identifier: "custom:barrel".to_owned(),
            states: BTreeMap::new(),
        };
        let plain = BlockIdentifier::new(BlockType::Stone);
        let kept = plain.with_preserved(preserved.clone());
        assert_ne!(plain, kept);
        assert_eq!(kept.preserved(), Some(&preserved));
    }
}
