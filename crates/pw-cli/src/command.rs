//! Session commands read from stdin, one per line.

use crate::{CliError, CliResult};

use std::path::PathBuf;

use pw_core::WizardStep;

pub const HELP_TEXT: &str = "\
Commands:
  name <text>          set the project title
  blur                 leave the name field (autosaves the title)
  description <text>   set the description
  config <xml>         set the label config
  config-file <path>   read the label config from a file
  step <name|import|config>
                       switch wizard step
  stage <path>         stage a JSON task file for import
  clear                drop all staged task files
  submit               press enter in the name form
  commit               save the project and open its data view
  cancel               delete the draft and go back to the project list
  show                 print the current wizard state
  help                 print this help
  quit                 dismiss the wizard (same as cancel)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Blur,
    Description(String),
    Config(String),
    ConfigFile(PathBuf),
    Step(WizardStep),
    Stage(PathBuf),
    Clear,
    Submit,
    Commit,
    Cancel,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Text arguments keep their inner whitespace; `name` with no argument
    /// clears the title.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "name" | "title" => Command::Name(rest.to_string()),
            "blur" => Command::Blur,
            "description" | "desc" => Command::Description(rest.to_string()),
            "config" => Command::Config(rest.to_string()),
            "config-file" => Command::ConfigFile(required(word, rest)?.into()),
            "step" => {
                let step = required(word, rest)?.to_lowercase();
                Command::Step(step.parse().map_err(|_: pw_core::CoreError| {
                    CliError::command(format!("Unknown step '{}' (name, import, config)", step))
                })?)
            }
            "stage" => Command::Stage(required(word, rest)?.into()),
            "clear" => Command::Clear,
            "submit" => Command::Submit,
            "commit" | "save" => Command::Commit,
            "cancel" => Command::Cancel,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(CliError::command(format!(
                    "Unknown command '{}' (try 'help')",
                    other
                )));
            }
        };

        Ok(Some(command))
    }
}

fn required<'a>(command: &str, argument: &'a str) -> CliResult<&'a str> {
    if argument.is_empty() {
        return Err(CliError::command(format!(
            "'{}' needs an argument",
            command
        )));
    }
    Ok(argument)
}
