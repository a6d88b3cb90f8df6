use resumate_core::{Document, Msg, Step, WizardViewModel};

use crate::platform::files;

pub const CMD_QUIT: &str = ":quit";
pub const CMD_HELP: &str = ":help";
pub const CMD_RESTART: &str = ":restart";
pub const CMD_DISMISS: &str = ":dismiss";
pub const CMD_OK: &str = ":ok";
pub const CMD_SUBMIT: &str = ":submit";
pub const CMD_CLEAR: &str = ":clear";
pub const CMD_RESUME: &str = ":resume";
pub const CMD_COVER: &str = ":cover";
pub const CMD_BOTH: &str = ":both";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
    Ignore,
}

/// Interprets one line of terminal input against what is currently on screen.
pub fn translate(view: &WizardViewModel, line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed == CMD_QUIT {
        return Command::Quit;
    }
    // The alert swallows the next line, like an OK button.
    if view.alert.is_some() {
        return Command::Dispatch(Msg::AlertDismissed);
    }

    match trimmed {
        CMD_HELP => return Command::Help,
        CMD_RESTART => return Command::Dispatch(Msg::RestartClicked),
        CMD_DISMISS => return Command::Dispatch(Msg::ErrorDismissed),
        CMD_OK => return Command::Dispatch(Msg::AlertDismissed),
        _ => {}
    }

    match view.step {
        Step::Upload => translate_upload(trimmed),
        Step::JobDescription => translate_job_description(view, line, trimmed),
        Step::Results => translate_results(trimmed),
    }
}

fn translate_upload(trimmed: &str) -> Command {
    if trimmed.is_empty() {
        return Command::Ignore;
    }
    if trimmed.starts_with(':') {
        return Command::Unknown(trimmed.to_owned());
    }
    match files::inspect(trimmed) {
        Ok(file) => Command::Dispatch(Msg::FileChosen(file)),
        Err(reason) => Command::Dispatch(Msg::FileUnreadable { reason }),
    }
}

fn translate_job_description(view: &WizardViewModel, line: &str, trimmed: &str) -> Command {
    if view.loading {
        return Command::Ignore;
    }
    match trimmed {
        CMD_SUBMIT => return Command::Dispatch(Msg::JobDescriptionSubmitted),
        CMD_CLEAR => return Command::Dispatch(Msg::JobDescriptionEdited(String::new())),
        _ if view.draft.is_empty() && trimmed.is_empty() => return Command::Ignore,
        _ => {}
    }

    // Pasted text may start with ':'; only a doubled colon before a command
    // word is an escape, e.g. "::submit" appends ":submit".
    let line = line.trim_end_matches(['\r', '\n']);
    let text = match line.trim_start().strip_prefix(':') {
        Some(rest) if is_command_word(rest.trim_end()) => rest,
        _ => line,
    };
    let draft = if view.draft.is_empty() {
        text.to_owned()
    } else {
        format!("{}\n{}", view.draft, text)
    };
    Command::Dispatch(Msg::JobDescriptionEdited(draft))
}

fn is_command_word(word: &str) -> bool {
    [
        CMD_QUIT, CMD_HELP, CMD_RESTART, CMD_DISMISS, CMD_OK, CMD_SUBMIT, CMD_CLEAR, CMD_RESUME,
        CMD_COVER, CMD_BOTH,
    ]
    .contains(&word)
}

fn translate_results(trimmed: &str) -> Command {
    match trimmed {
        CMD_RESUME => Command::Dispatch(Msg::DownloadRequested(Document::Resume)),
        CMD_COVER => Command::Dispatch(Msg::DownloadRequested(Document::CoverLetter)),
        CMD_BOTH => Command::Dispatch(Msg::DownloadAllRequested),
        "" => Command::Ignore,
        other => Command::Unknown(other.to_owned()),
    }
}
