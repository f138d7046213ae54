//! Process-local player store.

use async_trait::async_trait;
use lobus_core::error::DomainError;
use lobus_core::repository::{PlayerRepository, StoredPlayer};
use tokio::sync::RwLock;
use tracing::debug;

/// Keeps players in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryPlayerRepository {
    players: RwLock<Vec<StoredPlayer>>,
}

impl MemoryPlayerRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for MemoryPlayerRepository {
    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        let players = self.players.read().await;
        Ok(players.iter().any(|p| p.name.eq_ignore_ascii_case(name)))
    }

    async fn count_for_account(&self, account: &str) -> Result<usize, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .iter()
            .filter(|p| !p.deleted && p.account == account)
            .count())
    }

    async fn list_for_account(&self, account: &str) -> Result<Vec<StoredPlayer>, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .iter()
            .filter(|p| !p.deleted && p.account == account)
            .cloned()
            .collect())
    }

    async fn save(&self, player: &StoredPlayer) -> Result<(), DomainError> {
        let mut players = self.players.write().await;
        match players.iter_mut().find(|p| p.player_id == player.player_id) {
            Some(existing) => *existing = player.clone(),
            None => players.push(player.clone()),
        }
        debug!(player_id = %player.player_id, "player saved");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let mut players = self.players.write().await;
        let player = players
            .iter_mut()
            .find(|p| !p.deleted && p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::NotFound(format!("character {name}")))?;
        player.deleted = true;
        debug!(player_id = %player.player_id, "player deleted");
        Ok(())
    }

    async fn delete_account(&self, account: &str) -> Result<(), DomainError> {
        let mut players = self.players.write().await;
        players
            .iter_mut()
            .filter(|p| p.account == account)
            .for_each(|p| p.deleted = true);
        debug!(account, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn stored(name: &str, account: &str) -> StoredPlayer {
        StoredPlayer {
            player_id: Uuid::new_v4(),
            name: name.to_owned(),
            account: account.to_owned(),
            prompt: ">".to_owned(),
            room: None,
            attributes: BTreeMap::new(),
            equipment: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            deleted: false,
        }
    }

    #[tokio::test]
    async fn test_exists_ignores_case() {
        // Arrange
        let repo = MemoryPlayerRepository::new();
        repo.save(&stored("Alaric", "alaric")).await.unwrap();

        // Act
        let found = repo.exists("ALARIC").await.unwrap();

        // Assert
        assert!(found);
        assert!(!repo.exists("Brom").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_replaces_player_with_same_id() {
        // Arrange
        let repo = MemoryPlayerRepository::new();
        let mut player = stored("Alaric", "alaric");
        repo.save(&player).await.unwrap();
        player.room = Some("limbo:white".to_owned());

        // Act
        repo.save(&player).await.unwrap();

        // Assert
        let listed = repo.list_for_account("alaric").await.unwrap();
        assert_eq!(listed, vec![player]);
        assert_eq!(repo.count_for_account("brom").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_hides_character_but_keeps_name_taken() {
        // Arrange
        let repo = MemoryPlayerRepository::new();
        repo.save(&stored("Alaric", "alaric")).await.unwrap();
        repo.save(&stored("Brom", "alaric")).await.unwrap();

        // Act
        repo.delete("alaric").await.unwrap();

        // Assert
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 1);
        let names: Vec<String> = repo
            .list_for_account("alaric")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Brom"]);
        assert!(repo.exists("Alaric").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_unknown_character_is_not_found() {
        let repo = MemoryPlayerRepository::new();

        let result = repo.delete("Nobody").await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_account_removes_only_its_characters() {
        // Arrange
        let repo = MemoryPlayerRepository::new();
        repo.save(&stored("Alaric", "alaric")).await.unwrap();
        repo.save(&stored("Brom", "alaric")).await.unwrap();
        repo.save(&stored("Cora", "cora")).await.unwrap();

        // Act
        repo.delete_account("alaric").await.unwrap();

        // Assert
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 0);
        assert_eq!(repo.count_for_account("cora").await.unwrap(), 1);
    }
}
