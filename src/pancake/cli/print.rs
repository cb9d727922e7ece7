use super::text::HELP;
use colored::Colorize;
use pancake::api::{Advancement, CmdMessage, CmdResult, MessageLevel};
use pancake::index::{DisplayIndex, DisplayTask};
use pancake::model::{LogsStatus, Status};

const SEPARATOR: &str = "--------------------------------------";

/// Listings first, then whatever messages the logs status lets through.
pub(super) fn print_result(result: &CmdResult, logs: LogsStatus) {
    print_tasks(&result.listed_tasks);
    print_history(&result.history);
    if let Some(advancement) = result.advancement {
        print_advancement(advancement);
    }
    print_messages(result.visible_messages(logs));
}

pub(super) fn print_messages<'a>(messages: impl Iterator<Item = &'a CmdMessage>) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_tasks(tasks: &[DisplayTask]) {
    let has_pinned = tasks
        .iter()
        .any(|dt| matches!(dt.index, DisplayIndex::Pinned(_)));
    if has_pinned {
        println!("{}", "--> IMPORTANT TASKS".yellow());
    }

    let mut last_was_pinned = false;
    for dt in tasks {
        let is_pinned = matches!(dt.index, DisplayIndex::Pinned(_));
        if last_was_pinned && !is_pinned {
            println!("{}", SEPARATOR);
        }
        last_was_pinned = is_pinned;

        let prefix = if is_pinned { "* " } else { "" };
        match dt.status {
            Some(status) => println!(
                "{}{}. {} - {}",
                prefix,
                dt.index.position(),
                dt.name,
                format_status(status)
            ),
            None => println!("{}{}. {}", prefix, dt.index.position(), dt.name),
        }
    }
}

fn format_status(status: Status) -> colored::ColoredString {
    match status {
        Status::Complete => status.to_string().green(),
        Status::Unfinished => status.to_string().normal(),
    }
}

pub(super) fn print_history(history: &[String]) {
    for (i, line) in history.iter().enumerate() {
        println!("{}. {}", i + 1, line);
    }
}

pub(super) fn print_advancement(advancement: Advancement) {
    println!("You have completed {} tasks.", advancement.complete);
    println!(
        "You have {} more tasks to complete.",
        advancement.unfinished
    );
}

pub(super) fn print_help() {
    println!("{}", HELP);
}
