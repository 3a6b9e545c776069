use crate::{ClientError, ClientResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use pw_core::{
    DEFAULT_DRAFT_TITLE_PREFIX, DraftClient, DraftProject, Project, ProjectBody, ProjectId,
    Result as CoreErrorResult, TitleUpdate, next_draft_title,
};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the project REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    pub draft_title_prefix: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    /// * `token` - Optional API token sent as `Authorization: Token <token>`
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(String::from),
            draft_title_prefix: String::from(DEFAULT_DRAFT_TITLE_PREFIX),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &pw_config::Config) -> ClientResult<Self> {
        let mut client = Self::new(&config.server.url, config.auth.token.as_deref())
            .with_timeout(config.server.timeout())?;
        client.draft_title_prefix = config.wizard.draft_title_prefix.clone();
        Ok(client)
    }

    /// Rebuild the underlying HTTP client with a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> ClientResult<Self> {
        self.client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Build a request with the optional token header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header("Authorization", format!("Token {}", token));
        }

        req
    }

    /// Send a request and return status plus parsed body (`Null` when empty)
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<(StatusCode, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok((status, body))
    }

    /// Execute request and turn non-success statuses into API errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(body)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// Titles of all existing projects
    pub async fn list_project_titles(&self) -> ClientResult<Vec<String>> {
        let req = self.request(Method::GET, "/api/projects");
        let body = self.execute(req).await?;

        // Paginated responses wrap the list in `results`
        let projects = match body.get("results") {
            Some(results) => results.clone(),
            None => body,
        };

        Ok(projects
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|p| p.get("title").and_then(|t| t.as_str()))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Create a new project with just a title
    pub async fn create_project(&self, title: &str) -> ClientResult<DraftProject> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            title: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/projects")
            .json(&CreateRequest { title });
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a draft with the next free generated title
    pub async fn create_draft(&self) -> ClientResult<DraftProject> {
        let titles = self.list_project_titles().await?;
        let title = next_draft_title(&self.draft_title_prefix, &titles);
        debug!("Creating draft project '{}'", title);
        self.create_project(&title).await
    }

    /// Patch the title only. A 400 response is a rejected title, not an error.
    pub async fn patch_title(&self, id: ProjectId, title: &str) -> ClientResult<TitleUpdate> {
        #[derive(Serialize)]
        struct TitleRequest<'a> {
            title: &'a str,
        }

        let req = self
            .request(Method::PATCH, &format!("/api/projects/{}", id))
            .json(&TitleRequest { title });
        let (status, body) = self.send(req).await?;

        if status.is_success() {
            return Ok(TitleUpdate::accepted());
        }

        if status == StatusCode::BAD_REQUEST {
            return Ok(TitleUpdate::rejected(title_error(&body)));
        }

        Err(api_error(status, &body))
    }

    /// Patch title, description and label config in one call
    pub async fn patch_project(&self, id: ProjectId, body: &ProjectBody) -> ClientResult<Project> {
        let req = self
            .request(Method::PATCH, &format!("/api/projects/{}", id))
            .json(body);
        let response = self.execute(req).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Delete a project
    pub async fn delete_project(&self, id: ProjectId) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/projects/{}", id));
        self.execute(req).await?;
        Ok(())
    }

    /// Import tasks into a project
    pub async fn import_tasks(&self, id: ProjectId, tasks: &[Value]) -> ClientResult<Value> {
        let req = self
            .request(Method::POST, &format!("/api/projects/{}/import", id))
            .json(tasks);
        self.execute(req).await
    }
}

#[async_trait]
impl DraftClient for Client {
    async fn provide_draft(&self) -> CoreErrorResult<DraftProject> {
        Ok(self.create_draft().await?)
    }

    async fn update_title(&self, id: ProjectId, title: &str) -> CoreErrorResult<TitleUpdate> {
        Ok(self.patch_title(id, title).await?)
    }

    async fn update_project(&self, id: ProjectId, body: &ProjectBody) -> CoreErrorResult<Project> {
        Ok(self.patch_project(id, body).await?)
    }

    async fn delete_project(&self, id: ProjectId) -> CoreErrorResult<()> {
        Ok(Client::delete_project(self, id).await?)
    }
}

/// Pull a readable error out of `{error: {code, message}}` or `{detail}` bodies
#[track_caller]
fn api_error(status: StatusCode, body: &Value) -> ClientError {
    if let Some(error) = body.get("error") {
        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or(status.as_str())
            .to_string();
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        return ClientError::api_error(code, message);
    }

    let message = body
        .get("detail")
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status));
    ClientError::api_error(status.as_str().to_string(), message)
}

/// First title message from `validation_errors.title`, or a bare `title` field.
/// Messages arrive either as a string or a list of strings.
pub(crate) fn title_error(body: &Value) -> Option<String> {
    let field = body
        .get("validation_errors")
        .and_then(|errors| errors.get("title"))
        .or_else(|| body.get("title"))?;

    match field {
        Value::String(message) => Some(message.clone()),
        Value::Array(messages) => messages
            .iter()
            .find_map(|m| m.as_str())
            .map(String::from),
        _ => None,
    }
}
