//! Player repository abstraction.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of a player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredPlayer {
    /// Unique player identifier.
    pub player_id: Uuid,
    /// Capitalized character name, unique across the game.
    pub name: String,
    /// Owning account username.
    pub account: String,
    /// Prompt shown in the command loop.
    pub prompt: String,
    /// Room reference the player starts in, if one is configured.
    pub room: Option<String>,
    /// Attribute name to base value.
    pub attributes: BTreeMap<String, i32>,
    /// Starting equipment.
    pub equipment: Vec<String>,
    /// Timestamp of character creation.
    pub created_at: DateTime<Utc>,
    /// Set once the character is deleted. Deleted characters keep their
    /// name reserved but no longer count against the account.
    pub deleted: bool,
}

/// Repository trait for looking up and persisting player characters.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns whether a character with `name` exists (case-insensitive).
    async fn exists(&self, name: &str) -> Result<bool, DomainError>;

    /// Returns how many living characters belong to `account`.
    async fn count_for_account(&self, account: &str) -> Result<usize, DomainError>;

    /// Returns the living characters of `account`, oldest first.
    async fn list_for_account(&self, account: &str) -> Result<Vec<StoredPlayer>, DomainError>;

    /// Persists a new or updated character.
    async fn save(&self, player: &StoredPlayer) -> Result<(), DomainError>;

    /// Marks the living character called `name` as deleted.
    ///
    /// Fails with `DomainError::NotFound` if no such character is alive.
    async fn delete(&self, name: &str) -> Result<(), DomainError>;

    /// Marks every character of `account` as deleted and drops the account.
    async fn delete_account(&self, account: &str) -> Result<(), DomainError>;
}
