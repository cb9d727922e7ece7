use super::print::{print_help, print_result};
use super::setup::Cli;
use super::text::{LICENSE, UPDATED};
use clap::Parser;
use console::Term;
use pancake::api::PancakeApi;
use pancake::config::PancakeConfig;
use pancake::dispatch::{dispatch, Prompter, UiAction};
use pancake::error::{PancakeError, Result};
use pancake::store::fs::FileStore;
use std::io::{self, Write};

/// Reads answers from stdin, one line per prompt.
struct TerminalPrompter;

impl TerminalPrompter {
    /// The next command line, or `None` once stdin is closed.
    fn read_command(&mut self) -> Result<Option<String>> {
        print!("> ");
        io::stdout().flush().map_err(PancakeError::Io)?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input).map_err(PancakeError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush().map_err(PancakeError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(PancakeError::Io)?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PancakeConfig::resolve(cli.save_file);
    let has_save = config.save_file().exists();
    let mut api = PancakeApi::new(FileStore::new(config.save_file.clone()));

    clear_screen();
    println!(
        "Welcome in PanCake version {}!",
        env!("CARGO_PKG_VERSION")
    );
    println!("Type 'help' to see a list of the available commands.");

    if has_save {
        let result = api.load()?;
        print_result(&result, api.logs_status());
    }

    let mut prompter = TerminalPrompter;
    while let Some(line) = prompter.read_command()? {
        let outcome = dispatch(&mut api, &line, &mut prompter)?;
        print_result(&outcome.result, api.logs_status());

        match outcome.action {
            Some(UiAction::Help) => print_help(),
            Some(UiAction::License) => println!("{}", LICENSE),
            Some(UiAction::Updated) => println!("{}", UPDATED),
            Some(UiAction::Clear) => clear_screen(),
            Some(UiAction::Exit) => break,
            None => {}
        }
    }

    Ok(())
}

/// Best effort: a failed clear is not worth stopping for.
fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}
