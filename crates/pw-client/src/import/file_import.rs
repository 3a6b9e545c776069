//! Import phase backed by local JSON task files.
//!
//! Files are parsed when staged so the wizard can gate on bad input early;
//! the upload itself happens once, in `finish_upload`, right before commit.

use crate::{Client, ClientError, ClientResult};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{info, warn};
use pw_core::{DraftProject, ImportPhase};
use serde_json::Value;

#[derive(Debug, Default)]
struct Staged {
    files: Vec<PathBuf>,
    tasks: Vec<Value>,
    rejected: Vec<PathBuf>,
}

pub struct FileImport {
    client: Client,
    staged: Mutex<Staged>,
    uploading: AtomicBool,
}

impl FileImport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            staged: Mutex::new(Staged::default()),
            uploading: AtomicBool::new(false),
        }
    }

    fn staged(&self) -> MutexGuard<'_, Staged> {
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parse a task file and queue its tasks. Returns the number of tasks added.
    ///
    /// A file that cannot be read or parsed is remembered as rejected, which
    /// disables the upload until `clear` is called.
    pub async fn stage(&self, path: impl AsRef<Path>) -> ClientResult<usize> {
        let path = path.as_ref().to_path_buf();

        match parse_task_file(&path).await {
            Ok(tasks) => {
                let count = tasks.len();
                let mut staged = self.staged();
                staged.tasks.extend(tasks);
                staged.files.push(path);
                Ok(count)
            }
            Err(e) => {
                self.staged().rejected.push(path);
                Err(e)
            }
        }
    }

    /// Drop everything staged, including rejected files
    pub fn clear(&self) {
        *self.staged() = Staged::default();
    }

    pub fn staged_files(&self) -> Vec<PathBuf> {
        self.staged().files.clone()
    }

    pub fn staged_task_count(&self) -> usize {
        self.staged().tasks.len()
    }
}

#[async_trait]
impl ImportPhase for FileImport {
    fn upload_disabled(&self) -> bool {
        !self.staged().rejected.is_empty()
    }

    fn uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }

    async fn finish_upload(&self, draft: &DraftProject) -> bool {
        if self.upload_disabled() {
            return false;
        }

        let tasks = self.staged().tasks.clone();
        if tasks.is_empty() {
            return true;
        }

        self.uploading.store(true, Ordering::SeqCst);
        let result = self.client.import_tasks(draft.id, &tasks).await;
        self.uploading.store(false, Ordering::SeqCst);

        match result {
            Ok(_) => {
                info!("Imported {} tasks into project {}", tasks.len(), draft.id);
                self.clear();
                true
            }
            Err(e) => {
                warn!("Import into project {} failed: {}", draft.id, e);
                false
            }
        }
    }

    fn columns(&self) -> Vec<String> {
        let staged = self.staged();
        let mut columns = BTreeSet::new();
        for task in &staged.tasks {
            // Tasks are either `{data: {...}}` or the data object itself
            let data = task.get("data").unwrap_or(task);
            if let Some(fields) = data.as_object() {
                columns.extend(fields.keys().cloned());
            }
        }
        columns.into_iter().collect()
    }
}

/// A task file holds an array of tasks or a single task object
async fn parse_task_file(path: &Path) -> ClientResult<Vec<Value>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ClientError::import_error(path.to_path_buf(), e.to_string()))?;

    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| ClientError::import_error(path.to_path_buf(), e.to_string()))?;

    match value {
        Value::Array(tasks) if tasks.iter().all(Value::is_object) => Ok(tasks),
        Value::Object(_) => Ok(vec![value]),
        _ => Err(ClientError::import_error(
            path.to_path_buf(),
            "expected a task object or an array of task objects",
        )),
    }
}
