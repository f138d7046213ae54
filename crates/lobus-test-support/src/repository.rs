//! Test repositories: mock `PlayerRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use lobus_core::error::DomainError;
use lobus_core::repository::{PlayerRepository, StoredPlayer};

/// A player repository backed by a vector. Records every saved player.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: Mutex<Vec<StoredPlayer>>,
}

impl InMemoryPlayerRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `players`.
    #[must_use]
    pub fn with_players(players: Vec<StoredPlayer>) -> Self {
        Self {
            players: Mutex::new(players),
        }
    }

    /// Returns a snapshot of all stored players.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_players(&self) -> Vec<StoredPlayer> {
        self.players.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name)))
    }

    async fn count_for_account(&self, account: &str) -> Result<usize, DomainError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.deleted && p.account == account)
            .count())
    }

    async fn list_for_account(&self, account: &str) -> Result<Vec<StoredPlayer>, DomainError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.deleted && p.account == account)
            .cloned()
            .collect())
    }

    async fn save(&self, player: &StoredPlayer) -> Result<(), DomainError> {
        let mut players = self.players.lock().unwrap();
        players.retain(|p| p.player_id != player.player_id);
        players.push(player.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let mut players = self.players.lock().unwrap();
        let player = players
            .iter_mut()
            .find(|p| !p.deleted && p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::NotFound(name.to_owned()))?;
        player.deleted = true;
        Ok(())
    }

    async fn delete_account(&self, account: &str) -> Result<(), DomainError> {
        for player in self.players.lock().unwrap().iter_mut() {
            if player.account == account {
                player.deleted = true;
            }
        }
        Ok(())
    }
}

/// A player repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingPlayerRepository;

#[async_trait]
impl PlayerRepository for FailingPlayerRepository {
    async fn exists(&self, _name: &str) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn count_for_account(&self, _account: &str) -> Result<usize, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_for_account(&self, _account: &str) -> Result<Vec<StoredPlayer>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _player: &StoredPlayer) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete(&self, _name: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete_account(&self, _account: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
