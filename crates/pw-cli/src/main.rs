//! pw - project setup wizard
//!
//! Opens a draft project on the server and walks it through the name, import
//! and labeling steps from a line-oriented console session.
//!
//! # Examples
//!
//! ```bash
//! pw --server http://127.0.0.1:8080 --token abc123
//! > name Bird species
//! > blur
//! > stage tasks.json
//! > commit
//! ```

use pw_cli::{Cli, CliResult, Command, ConsoleNavigator, Flow, Session, initialize_logger};
use pw_client::{Client, FileImport};
use pw_wizard::{ProjectWizard, WizardSettings};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = cli.load_config()?;

    initialize_logger(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Client::from_config(&config)?;
    let import = FileImport::new(client.clone());
    let settings = WizardSettings::from(&config.wizard);

    let wizard = ProjectWizard::open(client, import, ConsoleNavigator::new(), settings).await;
    match wizard.draft() {
        Some(draft) => println!(
            "Draft project {} '{}' opened. Type 'help' for commands.",
            draft.id, draft.title
        ),
        None => println!("No draft project could be created; 'cancel' to leave."),
    }

    let mut session = Session::new(wizard, std::io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if session.execute(command).await? == Flow::Exit {
            break;
        }
    }

    session.finish().await?;
    info!("Wizard finished: {:?}", session.wizard().exit());
    Ok(())
}
