//! The player character being created.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lobus_core::repository::StoredPlayer;
use serde::Serialize;
use uuid::Uuid;

/// Base attributes every new character starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attributes {
    /// Hit points.
    pub health: i32,
    /// Melee power.
    pub strength: i32,
    /// Speed and evasion.
    pub agility: i32,
    /// Spell power.
    pub intellect: i32,
    /// Endurance.
    pub stamina: i32,
    /// Damage reduction.
    pub armor: i32,
    /// Critical hit chance.
    pub critical: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            health: 100,
            strength: 20,
            agility: 20,
            intellect: 20,
            stamina: 20,
            armor: 0,
            critical: 0,
        }
    }
}

impl Attributes {
    /// Returns the attributes keyed by name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, i32> {
        [
            ("health", self.health),
            ("strength", self.strength),
            ("agility", self.agility),
            ("intellect", self.intellect),
            ("stamina", self.stamina),
            ("armor", self.armor),
            ("critical", self.critical),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
    }
}

/// A character under construction. Origin effects mutate it before it is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Player identifier.
    pub id: Uuid,
    /// Capitalized character name.
    pub name: String,
    /// Owning account username.
    pub account: String,
    /// Prompt shown in the command loop.
    pub prompt: String,
    /// Starting room reference.
    pub room: Option<String>,
    /// Base attributes.
    pub attributes: Attributes,
    /// Starting equipment, in the order granted.
    pub equipment: Vec<String>,
}

impl Player {
    /// Creates a character with default attributes.
    #[must_use]
    pub fn new(name: String, account: String, room: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            account,
            prompt: ">".to_owned(),
            room,
            attributes: Attributes::default(),
            equipment: Vec::new(),
        }
    }

    /// Converts to the stored representation.
    #[must_use]
    pub fn to_stored(&self, created_at: DateTime<Utc>) -> StoredPlayer {
        StoredPlayer {
            player_id: self.id,
            name: self.name.clone(),
            account: self.account.clone(),
            prompt: self.prompt.clone(),
            room: self.room.clone(),
            attributes: self.attributes.to_map(),
            equipment: self.equipment.clone(),
            created_at,
            deleted: false,
        }
    }
}
