//! # Command Dispatcher
//!
//! Turns one line of user input into one API call.
//!
//! 1. [`Command::parse`] splits the line on whitespace. The first token names the
//!    command, the remaining tokens are joined with single spaces into the
//!    argument (a task name, a log text or a logs level).
//! 2. [`dispatch`] gathers whatever the command still needs from the user
//!    (a vault password, a `Y` confirmation) through a [`Prompter`], then calls
//!    the matching [`PancakeApi`] method.
//! 3. The raw line is appended to history, valid or not. Blank lines are
//!    ignored entirely and `exit` is never recorded.
//!
//! Commands that only concern the terminal (help, license, changelog, clear,
//! exit) come back as a [`UiAction`] for the UI to carry out.

use crate::api::PancakeApi;
use crate::commands::{wrong_password, CmdMessage, CmdResult};
use crate::error::{PancakeError, Result};
use crate::model::LogsStatus;
use crate::store::DataStore;

pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' to see the commands list.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Tasks,
    Trash,
    Secrets,
    New(String),
    Remove(String),
    RemoveAll,
    Complete(String),
    FullComplete,
    Unfinish(String),
    FullUnfinish,
    Recover(String),
    RecoverAll,
    Destroy(String),
    Empty,
    Advancement,
    Save,
    Load,
    Clear,
    Pin(String),
    Unpin(String),
    Hide(String),
    Show(String),
    SetPassword,
    History,
    HistoryClear,
    SetLogs(LogsStatus),
    Log(String),
    Updated,
    License,
    Exit,
}

impl Command {
    /// Parses one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.collect::<Vec<_>>().join(" ");
        let required = || -> Result<String> {
            if argument.is_empty() {
                Err(PancakeError::InvalidCommand(format!("'{}' needs an argument", name)))
            } else {
                Ok(argument.clone())
            }
        };

        let command = match name {
            "help" => Command::Help,
            "tasks" => Command::Tasks,
            "trash" => Command::Trash,
            "secrets" => Command::Secrets,
            "new" => Command::New(required()?),
            "remove" => Command::Remove(required()?),
            "removeall" => Command::RemoveAll,
            "complete" => Command::Complete(required()?),
            "full-complete" => Command::FullComplete,
            "unfinish" => Command::Unfinish(required()?),
            "full-unfinish" => Command::FullUnfinish,
            "recover" => Command::Recover(required()?),
            "recoverall" => Command::RecoverAll,
            "destroy" => Command::Destroy(required()?),
            "empty" => Command::Empty,
            "advancement" => Command::Advancement,
            "save" => Command::Save,
            "load" => Command::Load,
            "clear" => Command::Clear,
            "pin" => Command::Pin(required()?),
            "unpin" => Command::Unpin(required()?),
            "hide" => Command::Hide(required()?),
            "show" => Command::Show(required()?),
            "secrets-setpw" => Command::SetPassword,
            "history" => Command::History,
            "history-clear" => Command::HistoryClear,
            "setlogs" => Command::SetLogs(parse_level(&required()?)?),
            "log" => Command::Log(required()?),
            "updated" => Command::Updated,
            "license" => Command::License,
            "exit" => Command::Exit,
            other => {
                return Err(PancakeError::InvalidCommand(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

fn parse_level(raw: &str) -> Result<LogsStatus> {
    raw.parse::<u8>()
        .ok()
        .and_then(|n| LogsStatus::try_from(n).ok())
        .ok_or_else(|| PancakeError::InvalidCommand(format!("bad logs level '{}'", raw)))
}

/// Asks the user for a line of input. The terminal implements it in the
/// binary; tests script the answers.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Only an exact `Y` confirms.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.trim() == "Y")
    }
}

/// Terminal-only work left to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Help,
    License,
    Updated,
    Clear,
    Exit,
}

#[derive(Debug, Default)]
pub struct Outcome {
    pub result: CmdResult,
    pub action: Option<UiAction>,
}

impl Outcome {
    fn result(result: CmdResult) -> Self {
        Self {
            result,
            action: None,
        }
    }

    fn action(action: UiAction) -> Self {
        Self {
            result: CmdResult::default(),
            action: Some(action),
        }
    }
}

/// Runs one input line against the API.
///
/// Only store failures during `save`/`load` come back as errors; everything
/// the user got wrong is reported through messages.
pub fn dispatch<S: DataStore, P: Prompter>(
    api: &mut PancakeApi<S>,
    line: &str,
    prompter: &mut P,
) -> Result<Outcome> {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(Outcome::default()),
        Err(PancakeError::InvalidCommand(_)) => {
            api.record(line);
            return Ok(Outcome::result(
                CmdResult::default().with_message(CmdMessage::warning(INVALID_COMMAND)),
            ));
        }
        Err(e) => return Err(e),
    };

    let recorded = command != Command::Exit;
    let outcome = run(api, command, prompter)?;
    if recorded {
        api.record(line);
    }
    Ok(outcome)
}

fn run<S: DataStore, P: Prompter>(
    api: &mut PancakeApi<S>,
    command: Command,
    prompter: &mut P,
) -> Result<Outcome> {
    let result = match command {
        Command::Help => return Ok(Outcome::action(UiAction::Help)),
        Command::License => return Ok(Outcome::action(UiAction::License)),
        Command::Updated => return Ok(Outcome::action(UiAction::Updated)),
        Command::Clear => return Ok(Outcome::action(UiAction::Clear)),
        Command::Exit => {
            let mut outcome = Outcome::action(UiAction::Exit);
            if prompter.confirm("Save before exiting? [Y] to save: ")? {
                outcome.result = api.save()?;
            }
            return Ok(outcome);
        }
        Command::Tasks => api.list_tasks(),
        Command::Trash => api.list_trash(),
        Command::Advancement => api.advancement(),
        Command::New(name) => api.add_task(&name),
        Command::Remove(name) => api.remove_task(&name),
        Command::RemoveAll => api.remove_all(),
        Command::Complete(name) => {
            let password = secret_password(api, &name, prompter)?;
            api.complete_task(&name, password.as_deref())
        }
        Command::Unfinish(name) => {
            let password = secret_password(api, &name, prompter)?;
            api.unfinish_task(&name, password.as_deref())
        }
        Command::FullComplete => api.complete_all(),
        Command::FullUnfinish => api.unfinish_all(),
        Command::Pin(name) => api.pin_task(&name),
        Command::Unpin(name) => api.unpin_task(&name),
        Command::Recover(name) => api.recover_task(&name),
        Command::RecoverAll => api.recover_all(),
        Command::Destroy(name) => api.destroy_task(&name),
        Command::Empty => {
            let prompt = format!(
                "This will permanently destroy {} tasks. [Y] to confirm: ",
                api.state().trash.len()
            );
            let confirmed = prompter.confirm(&prompt)?;
            api.empty_trash(confirmed)
        }
        Command::Secrets => {
            let password = prompter.ask("Password: ")?;
            api.reveal_secrets(&password)
        }
        Command::Hide(name) => {
            let password = prompter.ask("Password: ")?;
            api.hide_task(&name, &password)
        }
        Command::Show(name) => {
            let password = prompter.ask("Password: ")?;
            api.unhide_task(&name, &password)
        }
        Command::SetPassword => change_password(api, prompter)?,
        Command::History => api.history(),
        Command::HistoryClear => api.clear_history(),
        Command::SetLogs(level) => api.set_logs(level),
        Command::Log(text) => api.log(&text),
        Command::Save => api.save()?,
        Command::Load => api.load()?,
    };
    Ok(Outcome::result(result))
}

/// Secret tasks need the vault password; other tasks don't prompt.
fn secret_password<S: DataStore, P: Prompter>(
    api: &PancakeApi<S>,
    name: &str,
    prompter: &mut P,
) -> Result<Option<String>> {
    if api.state().is_secret(name) {
        Ok(Some(prompter.ask("Password: ")?))
    } else {
        Ok(None)
    }
}

fn change_password<S: DataStore, P: Prompter>(
    api: &mut PancakeApi<S>,
    prompter: &mut P,
) -> Result<CmdResult> {
    let current = prompter.ask("Current password: ")?;
    if !api.state().unlocks(&current) {
        return Ok(CmdResult::default().with_message(wrong_password()));
    }
    let new = prompter.ask("New password: ")?;
    let repeated = prompter.ask("Repeat new password: ")?;

    let mut result = api.set_password(&current, &new, &repeated);
    let changed = new == repeated && api.state().unlocks(&new);
    if changed && prompter.confirm("Save now? [Y] to save: ")? {
        result.merge(api.save()?);
    }
    Ok(result)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script, then with empty lines.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, T>(answers: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> Result<String> {
            self.asked.push(prompt.to_string());
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }
}
