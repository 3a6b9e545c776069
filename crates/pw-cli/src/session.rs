//! Drives one `ProjectWizard` from parsed console commands.

use crate::{CliResult, Command, HELP_TEXT};

use std::io::Write;

use log::debug;
use pw_client::FileImport;
use pw_core::{DraftClient, Navigator};
use pw_wizard::{
    AutosaveOutcome, CancelOutcome, CommitOutcome, ProjectWizard, StepChange, WizardView,
};

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<C, N, W> {
    wizard: ProjectWizard<C, FileImport, N>,
    out: W,
}

impl<C, N, W> Session<C, N, W>
where
    C: DraftClient,
    N: Navigator,
    W: Write,
{
    pub fn new(wizard: ProjectWizard<C, FileImport, N>, out: W) -> Self {
        Self { wizard, out }
    }

    pub fn wizard(&self) -> &ProjectWizard<C, FileImport, N> {
        &self.wizard
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub async fn execute(&mut self, command: Command) -> CliResult<Flow> {
        debug!("Executing {:?}", command);

        match command {
            Command::Name(title) => self.wizard.set_name(title),
            Command::Description(text) => self.wizard.set_description(text),
            Command::Config(xml) => self.wizard.set_label_config(xml),
            Command::ConfigFile(path) => match tokio::fs::read_to_string(&path).await {
                Ok(xml) => {
                    self.wizard.set_label_config(xml);
                    writeln!(self.out, "label config read from {}", path.display())?;
                }
                Err(e) => writeln!(self.out, "cannot read {}: {}", path.display(), e)?,
            },
            Command::Blur => {
                let message = match self.wizard.save_name().await {
                    AutosaveOutcome::Saved => String::from("title saved"),
                    AutosaveOutcome::Rejected {
                        message: Some(message),
                    } => format!("title rejected: {}", message),
                    AutosaveOutcome::Rejected { message: None } => String::from("title rejected"),
                    AutosaveOutcome::Skipped(reason) => {
                        format!("autosave skipped ({:?})", reason)
                    }
                    AutosaveOutcome::Failed => String::from("autosave failed"),
                };
                writeln!(self.out, "{}", message)?;
            }
            Command::Step(step) => match self.wizard.select_step(step) {
                StepChange::Changed { to, .. } => writeln!(self.out, "step: {}", to.label())?,
                StepChange::Unchanged => writeln!(self.out, "already on {}", step.label())?,
                StepChange::Refused => writeln!(self.out, "{} is disabled", step.label())?,
            },
            Command::Stage(path) => {
                let staged = self.wizard.import().stage(&path).await;
                self.wizard.refresh();
                match staged {
                    Ok(count) => writeln!(
                        self.out,
                        "staged {} task(s) from {}",
                        count,
                        path.display()
                    )?,
                    Err(e) => writeln!(self.out, "rejected {}: {}", path.display(), e)?,
                }
            }
            Command::Clear => {
                self.wizard.import().clear();
                self.wizard.refresh();
                writeln!(self.out, "staged files cleared")?;
            }
            Command::Submit => {
                let outcome = self.wizard.submit_name().await;
                return self.report_commit(outcome);
            }
            Command::Commit => {
                let outcome = self.wizard.commit().await;
                return self.report_commit(outcome);
            }
            Command::Cancel | Command::Quit => {
                let outcome = self.wizard.cancel().await;
                return self.report_cancel(outcome);
            }
            Command::Show => {
                let view = render_view(&self.wizard.view(), self.wizard.import());
                write!(self.out, "{}", view)?;
            }
            Command::Help => writeln!(self.out, "{}", HELP_TEXT)?,
        }

        Ok(Flow::Continue)
    }

    /// Dismiss the wizard unless it already exited (end of input)
    pub async fn finish(&mut self) -> CliResult<()> {
        if self.wizard.exit().is_none() {
            let outcome = self.wizard.close().await;
            self.report_cancel(outcome)?;
        }
        Ok(())
    }

    fn report_commit(&mut self, outcome: CommitOutcome) -> CliResult<Flow> {
        match outcome {
            CommitOutcome::Committed(project) => {
                writeln!(self.out, "project {} created", project.id)?;
                Ok(Flow::Exit)
            }
            CommitOutcome::Blocked(reason) => {
                writeln!(self.out, "cannot commit yet ({:?})", reason)?;
                Ok(Flow::Continue)
            }
            CommitOutcome::ImportIncomplete => {
                writeln!(self.out, "import did not finish, project not saved")?;
                Ok(Flow::Continue)
            }
            CommitOutcome::UpdateFailed => {
                writeln!(self.out, "saving the project failed, try again")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn report_cancel(&mut self, outcome: CancelOutcome) -> CliResult<Flow> {
        match outcome {
            CancelOutcome::Cancelled { draft_id: Some(id) } => {
                writeln!(self.out, "draft {} discarded", id)?
            }
            CancelOutcome::Cancelled { draft_id: None } => writeln!(self.out, "wizard closed")?,
            CancelOutcome::AlreadyExited => {}
        }
        Ok(Flow::Exit)
    }
}

/// Human-readable dump of the wizard state
pub(crate) fn render_view(view: &WizardView, import: &FileImport) -> String {
    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            let mut label = tab.step.label().to_string();
            if tab.disabled {
                label.push_str(" (disabled)");
            }
            if tab.active {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    let draft = view
        .draft_id
        .map_or_else(|| String::from("none"), |id| id.to_string());

    let mut lines = vec![
        format!("steps:       {}", tabs.join(" | ")),
        format!("draft:       {}", draft),
        format!("title:       {}", view.body.title),
    ];
    if let Some(ref error) = view.title_error {
        lines.push(format!("  error:     {}", error));
    }
    lines.push(format!("description: {}", view.body.description));
    lines.push(format!("config:      {}", view.body.label_config));
    lines.push(format!(
        "import:      {} file(s), {} task(s)",
        import.staged_files().len(),
        import.staged_task_count()
    ));
    if !view.columns.is_empty() {
        lines.push(format!("columns:     {}", view.columns.join(", ")));
    }
    lines.push(format!(
        "commit:      {}{}",
        if view.commit.disabled {
            "disabled"
        } else {
            "enabled"
        },
        if view.commit.waiting { " (waiting)" } else { "" }
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
