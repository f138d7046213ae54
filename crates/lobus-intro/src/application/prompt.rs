//! Small prompt helpers shared by the intro flows.

use lobus_choices::parse_selection;
use lobus_core::channel::LineChannel;
use lobus_core::present::Presenter;

use crate::error::IntroError;

const MENU_PROMPT: &str = "|\r\n`-> ";

/// Waits for the next reply and trims it.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the channel has closed.
pub async fn next_line(channel: &mut dyn LineChannel) -> Result<String, IntroError> {
    channel
        .next_line()
        .await
        .map(|line| line.trim().to_owned())
        .ok_or(IntroError::Disconnected)
}

/// Asks a yes/no `question` until the reply starts with `y` or `n`.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the channel closes first.
pub async fn confirm(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    question: &str,
) -> Result<bool, IntroError> {
    loop {
        present.write(&format!("{question} [y/n] "));
        if let Some(answer) = read_yes_no(channel, present).await? {
            return Ok(answer);
        }
    }
}

/// Asks a `[Y/n]` question once. Returns `None` when the reply starts with
/// neither `y` nor `n`; the caller decides what that means.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the channel has closed.
pub async fn ask_once(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    question: &str,
) -> Result<Option<bool>, IntroError> {
    present.write(&format!("{question} [Y/n] "));
    read_yes_no(channel, present).await
}

async fn read_yes_no(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
) -> Result<Option<bool>, IntroError> {
    let reply = next_line(channel).await?.to_lowercase();
    present.say("");

    Ok(match reply.chars().next() {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    })
}

/// One row of a numbered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOption {
    /// A selectable entry; numbered in display order.
    Action(String),
    /// A heading or spacer; shown but not numbered.
    Label(String),
}

/// Shows `options` and reads one reply.
///
/// Returns the position of the picked entry among the [`MenuOption::Action`]
/// rows, or `None` when the reply names none of them. Replies are read like
/// engine selections (leading number only). There is no retry; callers
/// redisplay their menu.
///
/// # Errors
///
/// Returns `IntroError::Disconnected` if the channel has closed.
pub async fn select_option(
    channel: &mut dyn LineChannel,
    present: &mut dyn Presenter,
    options: &[MenuOption],
) -> Result<Option<usize>, IntroError> {
    let mut actions = 0;
    for option in options {
        match option {
            MenuOption::Action(display) => {
                actions += 1;
                present.say(&format!("| [{actions}] {display}"));
            }
            MenuOption::Label(display) => present.say(&format!("| {display}")),
        }
    }
    present.write(MENU_PROMPT);

    let reply = next_line(channel).await?;
    Ok(parse_selection(&reply, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobus_test_support::{RecordingPresenter, ScriptedChannel};

    fn main_menu() -> Vec<MenuOption> {
        vec![
            MenuOption::Action("Change Password".to_owned()),
            MenuOption::Action("Create New Character".to_owned()),
            MenuOption::Label("Choose character:".to_owned()),
            MenuOption::Action("Alaric".to_owned()),
            MenuOption::Label(String::new()),
            MenuOption::Action("Quit".to_owned()),
        ]
    }

    #[tokio::test]
    async fn test_select_option_numbers_only_actions() {
        // Arrange
        let mut channel = ScriptedChannel::new(["3"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let picked = select_option(&mut channel, &mut presenter, &main_menu())
            .await
            .unwrap();

        // Assert
        assert_eq!(picked, Some(2));
        assert_eq!(
            presenter.lines(),
            vec![
                "| [1] Change Password",
                "| [2] Create New Character",
                "| Choose character:",
                "| [3] Alaric",
                "| ",
                "| [4] Quit",
                MENU_PROMPT,
            ]
        );
    }

    #[tokio::test]
    async fn test_select_option_returns_none_for_unknown_entry() {
        let mut channel = ScriptedChannel::new(["9"]);
        let mut presenter = RecordingPresenter::new();

        let picked = select_option(&mut channel, &mut presenter, &main_menu())
            .await
            .unwrap();

        assert_eq!(picked, None);
    }

    #[tokio::test]
    async fn test_confirm_repeats_until_yes_or_no() {
        // Arrange
        let mut channel = ScriptedChannel::new(["maybe", "  Yes "]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let confirmed = confirm(&mut channel, &mut presenter, "Create Alaric?")
            .await
            .unwrap();

        // Assert
        assert!(confirmed);
        assert_eq!(presenter.count("Create Alaric? [y/n] "), 2);
        assert_eq!(channel.reads(), 2);
    }

    #[tokio::test]
    async fn test_ask_once_does_not_repeat_on_unclear_reply() {
        // Arrange
        let mut channel = ScriptedChannel::new(["maybe", "y"]);
        let mut presenter = RecordingPresenter::new();

        // Act
        let answer = ask_once(&mut channel, &mut presenter, "Delete Alaric?")
            .await
            .unwrap();

        // Assert
        assert_eq!(answer, None);
        assert_eq!(presenter.lines(), vec!["Delete Alaric? [Y/n] ", ""]);
        assert_eq!(channel.remaining(), 1);
    }

    #[tokio::test]
    async fn test_ask_once_reads_no() {
        let mut channel = ScriptedChannel::new(["No"]);
        let mut presenter = RecordingPresenter::new();

        let answer = ask_once(&mut channel, &mut presenter, "Delete Alaric?")
            .await
            .unwrap();

        assert_eq!(answer, Some(false));
    }

    #[tokio::test]
    async fn test_select_option_reads_leading_number() {
        let mut channel = ScriptedChannel::new(["4 quit"]);
        let mut presenter = RecordingPresenter::new();

        let picked = select_option(&mut channel, &mut presenter, &main_menu())
            .await
            .unwrap();

        assert_eq!(picked, Some(3));
    }

    #[tokio::test]
    async fn test_next_line_reports_disconnect() {
        let mut channel = ScriptedChannel::new(Vec::<String>::new());

        let result = next_line(&mut channel).await;

        assert!(matches!(result, Err(IntroError::Disconnected)));
    }
}
