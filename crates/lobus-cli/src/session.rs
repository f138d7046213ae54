//! The connect session: MOTD, then the account menu until the participant
//! picks a character to play, quits, or deletes the account.
//!
//! Every menu action other than those three returns to the menu, which is
//! rebuilt from the repository each time round.

use lobus_core::channel::LineChannel;
use lobus_core::clock::Clock;
use lobus_core::present::Presenter;
use lobus_core::repository::{PlayerRepository, StoredPlayer};
use lobus_intro::application::character_creation::{CreateCharacter, handle_create_character};
use lobus_intro::application::prompt::{MenuOption, ask_once, select_option};
use lobus_intro::config::IntroConfig;
use lobus_intro::error::IntroError;
use tracing::{info, instrument};
use uuid::Uuid;

const RULE: &str = "------------------------------";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The participant picked a living character to play.
    Play(StoredPlayer),
    /// The participant chose `Quit`.
    Quit,
    /// The participant deleted their account.
    AccountDeleted,
}

enum MainAction {
    Create,
    Play(StoredPlayer),
    DeleteCharacter,
    DeleteAccount,
    Quit,
}

/// A menu whose numbered rows each carry an action.
struct Menu<A> {
    options: Vec<MenuOption>,
    actions: Vec<A>,
}

impl<A> Menu<A> {
    fn new() -> Self {
        Self {
            options: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn action(&mut self, display: impl Into<String>, action: A) {
        self.options.push(MenuOption::Action(display.into()));
        self.actions.push(action);
    }

    fn label(&mut self, display: impl Into<String>) {
        self.options.push(MenuOption::Label(display.into()));
    }

    async fn pick(
        mut self,
        channel: &mut dyn LineChannel,
        present: &mut dyn Presenter,
    ) -> Result<Option<A>, IntroError> {
        let picked = select_option(channel, present, &self.options).await?;
        Ok(picked.map(|index| self.actions.swap_remove(index)))
    }
}

fn heading(present: &mut dyn Presenter, title: &str) {
    present.say("");
    present.say(RULE);
    present.say(&format!("|      {title}"));
    present.say(RULE);
}

/// Collaborators a session needs besides the participant's I/O.
pub struct Session<'a> {
    /// Name and character limits.
    pub config: &'a IntroConfig,
    /// Stamps created characters.
    pub clock: &'a dyn Clock,
    /// Where the account's characters live.
    pub repo: &'a dyn PlayerRepository,
    /// The logged-in account.
    pub account: String,
}

impl Session<'_> {
    /// Shows `motd` and then the account menu until the session ends.
    ///
    /// # Errors
    ///
    /// Returns `IntroError` if the participant disconnects, character
    /// creation fails for a reason other than the character limit, or the
    /// repository fails.
    #[instrument(skip_all, fields(account = %self.account))]
    pub async fn run(
        &self,
        motd: Option<&str>,
        channel: &mut dyn LineChannel,
        present: &mut dyn Presenter,
    ) -> Result<SessionEnd, IntroError> {
        if let Some(motd) = motd {
            for line in motd.lines() {
                present.say(line);
            }
        }

        loop {
            let menu = self.main_menu().await?;
            heading(present, "Choose your fate");

            match menu.pick(channel, present).await? {
                None => {}
                Some(MainAction::Create) => self.create_character(channel, present).await?,
                Some(MainAction::Play(player)) => {
                    info!(player_id = %player.player_id, "character selected");
                    return Ok(SessionEnd::Play(player));
                }
                Some(MainAction::DeleteCharacter) => {
                    self.delete_character(channel, present).await?;
                }
                Some(MainAction::DeleteAccount) => {
                    if self.delete_account(channel, present).await? {
                        return Ok(SessionEnd::AccountDeleted);
                    }
                }
                Some(MainAction::Quit) => {
                    info!("participant quit");
                    present.say("Goodbye.");
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    async fn main_menu(&self) -> Result<Menu<MainAction>, IntroError> {
        let characters = self.repo.list_for_account(&self.account).await?;
        let mut menu = Menu::new();

        if characters.len() < self.config.max_characters {
            menu.action("Create New Character", MainAction::Create);
        }

        let has_characters = !characters.is_empty();
        if has_characters {
            menu.label("Choose character:");
            for character in characters {
                menu.action(character.name.clone(), MainAction::Play(character));
            }
        }

        menu.label("");
        if has_characters {
            menu.action("Delete a Character", MainAction::DeleteCharacter);
        }
        menu.action("Delete This Account", MainAction::DeleteAccount);
        menu.action("Quit", MainAction::Quit);

        Ok(menu)
    }

    async fn create_character(
        &self,
        channel: &mut dyn LineChannel,
        present: &mut dyn Presenter,
    ) -> Result<(), IntroError> {
        let command = CreateCharacter {
            correlation_id: Uuid::new_v4(),
            account: self.account.clone(),
        };
        match handle_create_character(
            &command,
            channel,
            present,
            self.config,
            self.clock,
            self.repo,
        )
        .await
        {
            Ok(created) => {
                info!(name = %created.player.name, origin = ?created.origin, "character ready");
                Ok(())
            }
            Err(IntroError::CharacterLimit { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn delete_character(
        &self,
        channel: &mut dyn LineChannel,
        present: &mut dyn Presenter,
    ) -> Result<(), IntroError> {
        heading(present, "Delete a Character");

        let mut menu = Menu::new();
        for character in self.repo.list_for_account(&self.account).await? {
            menu.action(format!("Delete {}", character.name), Some(character.name));
        }
        menu.label("");
        menu.action("Go back to main menu", None);

        let Some(Some(name)) = menu.pick(channel, present).await? else {
            return Ok(());
        };

        let question = format!("Are you sure you want to delete {name}?");
        match ask_once(channel, present, &question).await? {
            None => present.say("Invalid Option"),
            Some(false) => present.say("No one was deleted..."),
            Some(true) => {
                present.say(&format!("Deleting {name}"));
                self.repo.delete(&name).await?;
                info!(%name, "character deleted");
                present.say("Character deleted.");
            }
        }
        Ok(())
    }

    /// Returns whether the account is gone.
    async fn delete_account(
        &self,
        channel: &mut dyn LineChannel,
        present: &mut dyn Presenter,
    ) -> Result<bool, IntroError> {
        present.say("By deleting this account, all the characters will be also deleted.");
        let question = "Are you sure you want to delete this account?";
        match ask_once(channel, present, question).await? {
            None => {
                present.say("Invalid Option");
                Ok(false)
            }
            Some(false) => {
                present.say("No one was deleted...");
                Ok(false)
            }
            Some(true) => {
                present.say(&format!("Deleting account {}", self.account));
                self.repo.delete_account(&self.account).await?;
                info!("account deleted");
                present.say("Account deleted, it was a pleasure doing business with you.");
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use lobus_intro::domain::player::Player;
    use lobus_test_support::{
        FixedClock, InMemoryPlayerRepository, RecordingPresenter, ScriptedChannel,
    };

    use super::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn alaric() -> StoredPlayer {
        Player::new("Alaric".to_owned(), "alaric".to_owned(), None).to_stored(clock().0)
    }

    fn session<'a>(
        config: &'a IntroConfig,
        clock: &'a FixedClock,
        repo: &'a InMemoryPlayerRepository,
    ) -> Session<'a> {
        Session {
            config,
            clock,
            repo,
            account: "alaric".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_run_shows_motd_and_redisplays_after_unknown_pick() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::new();
        let mut channel = ScriptedChannel::new(["7", "3"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(Some("Welcome to Lobus\nBe kind."), &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        let lines = presenter.lines();
        assert_eq!(lines[0], "Welcome to Lobus");
        assert_eq!(lines[1], "Be kind.");
        assert_eq!(presenter.count("|      Choose your fate"), 2);
        assert_eq!(presenter.count("| [1] Create New Character"), 2);
        assert_eq!(presenter.count("| [2] Delete This Account"), 2);
        assert_eq!(presenter.count("| [3] Quit"), 2);
        assert_eq!(lines.last().map(String::as_str), Some("Goodbye."));
    }

    #[tokio::test]
    async fn test_created_character_is_listed_and_playable() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::new();
        let mut channel = ScriptedChannel::new(["1", "cora", "y", "2", "1", "2"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        let saved = repo.saved_players();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Cora");
        assert_eq!(end, SessionEnd::Play(saved[0].clone()));
        assert_eq!(presenter.count("| Choose character:"), 1);
        assert_eq!(presenter.count("| [2] Cora"), 1);
        assert_eq!(presenter.count("| [3] Delete a Character"), 1);
    }

    #[tokio::test]
    async fn test_full_account_hides_character_creation() {
        // Arrange
        let config = IntroConfig {
            max_characters: 1,
            ..IntroConfig::default()
        };
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["4"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(presenter.count("| [1] Create New Character"), 0);
        assert_eq!(presenter.count("| [1] Alaric"), 1);
        assert_eq!(presenter.count("| [4] Quit"), 1);
    }

    #[tokio::test]
    async fn test_deleted_character_frees_a_slot() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["3", "1", "y", "3"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(presenter.count("|      Delete a Character"), 1);
        assert_eq!(presenter.count("| [1] Delete Alaric"), 1);
        assert_eq!(presenter.count("| [2] Go back to main menu"), 1);
        assert_eq!(
            presenter.count("Are you sure you want to delete Alaric? [Y/n] "),
            1
        );
        assert_eq!(presenter.count("Deleting Alaric"), 1);
        assert_eq!(presenter.count("Character deleted."), 1);
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 0);
        assert!(repo.saved_players()[0].deleted);
    }

    #[tokio::test]
    async fn test_declined_character_deletion_keeps_character() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["3", "1", "n", "3", "1", "maybe", "5"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(presenter.count("No one was deleted..."), 1);
        assert_eq!(presenter.count("Invalid Option"), 1);
        assert_eq!(presenter.count("Character deleted."), 0);
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_go_back_leaves_delete_menu_without_asking() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["3", "2", "5"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(
            presenter.count("Are you sure you want to delete Alaric? [Y/n] "),
            0
        );
        assert_eq!(presenter.count("|      Choose your fate"), 2);
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_account_deletion_ends_session() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["4", "y"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::AccountDeleted);
        assert_eq!(
            presenter.count("By deleting this account, all the characters will be also deleted."),
            1
        );
        assert_eq!(presenter.count("Deleting account alaric"), 1);
        assert_eq!(
            presenter.lines().last().map(String::as_str),
            Some("Account deleted, it was a pleasure doing business with you.")
        );
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_declined_account_deletion_returns_to_menu() {
        // Arrange
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::with_players(vec![alaric()]);
        let mut channel = ScriptedChannel::new(["4", "n", "5"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let end = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await
            .unwrap();

        // Assert
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(presenter.count("No one was deleted..."), 1);
        assert_eq!(repo.count_for_account("alaric").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_run_reports_disconnect_at_menu() {
        let config = IntroConfig::default();
        let clock = clock();
        let repo = InMemoryPlayerRepository::new();
        let mut channel = ScriptedChannel::new(Vec::<String>::new());
        let mut presenter = RecordingPresenter::new();

        let result = session(&config, &clock, &repo)
            .run(None, &mut channel, &mut presenter)
            .await;

        assert!(matches!(result, Err(IntroError::Disconnected)));
    }
}
