//! pw-cli library
//!
//! Line-oriented console front end for the project setup wizard.

pub(crate) mod cli;
pub(crate) mod command;
pub(crate) mod console_navigator;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use command::{Command, HELP_TEXT};
pub use console_navigator::ConsoleNavigator;
pub use error::{CliError, CliResult};
pub use logger::initialize as initialize_logger;
pub use session::{Flow, Session};
