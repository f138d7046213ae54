//! Character creation.
//!
//! Names a new character, walks it through the origin questionnaire and
//! persists the result. Every retry (bad name, taken name, declined
//! confirmation) is a loop iteration.

use lobus_choices::{Choices, ChoicesConfig, DecisionLedger, RunOutcome};
use lobus_core::channel::LineChannel;
use lobus_core::clock::Clock;
use lobus_core::present::Presenter;
use lobus_core::repository::{PlayerRepository, StoredPlayer};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::application::origin::origin_scenarios;
use crate::application::prompt::{confirm, next_line};
use crate::config::IntroConfig;
use crate::domain::names::{capitalize, validate_name};
use crate::domain::player::Player;
use crate::error::IntroError;

/// Request to create a character for an account.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The account that will own the character.
    pub account: String,
}

/// A freshly created and persisted character.
#[derive(Debug)]
pub struct CreatedCharacter {
    /// What was stored.
    pub player: StoredPlayer,
    /// Answers given in the origin questionnaire.
    pub origin: DecisionLedger,
}

/// Asks for a character name until one is valid, unused and confirmed.
/// Returns it capitalized.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the participant leaves, or
/// `IntroError::Domain` if the repository lookup fails.
pub async fn choose_name(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    config: &IntroConfig,
    repo: &dyn PlayerRepository,
) -> Result<String, IntroError> {
    loop {
        present.write("What would you like to name your character? ");
        let name = next_line(channel).await?;
        present.say("");

        if let Err(reason) = validate_name(&name, config) {
            debug!(%reason, "rejected character name");
            present.say(&reason.to_string());
            continue;
        }

        let name = capitalize(&name);
        if repo.exists(&name).await? {
            present.say("That name is already taken.");
            continue;
        }

        if confirm_name(channel, present, &name).await? {
            return Ok(name);
        }
    }
}

/// Asks whether a new character called `name` should be created.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the participant leaves.
pub async fn confirm_name(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    name: &str,
) -> Result<bool, IntroError> {
    confirm(
        channel,
        present,
        &format!("{name} doesn't exist, would you like to create it?"),
    )
    .await
}

/// Handles the `CreateCharacter` request: enforces the per-account limit,
/// chooses a name, runs the origin questionnaire and saves the character.
///
/// # Errors
///
/// Returns `IntroError::CharacterLimit` if the account is full,
/// `IntroError::Disconnected` or `IntroError::Decision` if the participant
/// leaves or an origin effect fails, `IntroError::Misconfigured` if the
/// questionnaire is rejected, and `IntroError::Domain` on repository
/// failure.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, account = %command.account))]
pub async fn handle_create_character(
    command: &CreateCharacter,
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    config: &IntroConfig,
    clock: &dyn Clock,
    repo: &dyn PlayerRepository,
) -> Result<CreatedCharacter, IntroError> {
    let existing = repo.count_for_account(&command.account).await?;
    if existing >= config.max_characters {
        present.say("You cannot create any more characters on this account.");
        return Err(IntroError::CharacterLimit {
            account: command.account.clone(),
            max: config.max_characters,
        });
    }

    let name = choose_name(channel, present, config, repo).await?;

    if config.starting_room.is_none() {
        warn!("no starting room configured");
    }
    let player = Player::new(name, command.account.clone(), config.starting_room.clone());

    let run = ChoicesConfig::new(player)
        .scenarios(origin_scenarios())
        .channel(&mut *channel)
        .present(&mut *present);

    let decided = match Choices::run(run).await? {
        RunOutcome::Completed(decided) => decided,
        RunOutcome::Misconfigured(message) => {
            present.say(message);
            return Err(IntroError::Misconfigured);
        }
    };

    let stored = decided.context.to_stored(clock.now());
    repo.save(&stored).await?;

    info!(player_id = %stored.player_id, name = %stored.name, "character created");

    Ok(CreatedCharacter {
        player: stored,
        origin: decided.decisions,
    })
}
