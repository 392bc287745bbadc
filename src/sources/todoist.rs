//! Todoist REST v2 / Sync v9 task source.

use chores_common::{CompletionEvents, Section, Task};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::TaskSource;
use crate::config::TodoistConfig;
use crate::error::RemoteError;

const SECTIONS: &str = "sections";
const TASKS: &str = "tasks";
const COMPLETED: &str = "completed";

// ============================================================================
// Wire shapes
// ============================================================================

/// Todoist ids are strings in REST v2 but numbers in older payloads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSection {
    id: RawId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawTask {
    id: RawId,
    content: String,
    #[serde(default)]
    section_id: Option<RawId>,
}

#[derive(Debug, Deserialize)]
struct RawCompletedItem {
    task_id: RawId,
}

#[derive(Debug, Deserialize)]
struct RawCompleted {
    #[serde(default)]
    items: Vec<RawCompletedItem>,
}

fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &str,
) -> Result<T, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Payload {
        endpoint,
        reason: e.to_string(),
    })
}

fn parse_sections(body: &str) -> Result<Vec<Section>, RemoteError> {
    let raw: Vec<RawSection> = decode(SECTIONS, body)?;
    Ok(raw.into_iter().map(|s| Section::new(String::from(s.id), s.name)).collect())
}

fn parse_tasks(body: &str) -> Result<Vec<Task>, RemoteError> {
    let raw: Vec<RawTask> = decode(TASKS, body)?;
    Ok(raw
        .into_iter()
        .map(|t| Task {
            id: t.id.into(),
            content: t.content,
            section_id: t.section_id.map(String::from),
        })
        .collect())
}

fn parse_completed(body: &str) -> Result<CompletionEvents, RemoteError> {
    let raw: RawCompleted = decode(COMPLETED, body)?;
    Ok(raw.items.into_iter().map(|item| item.task_id.into()).collect())
}

// ============================================================================
// Source
// ============================================================================

pub struct TodoistSource {
    client: Client,
    api_base: String,
    api_token: String,
    project_id: String,
}

impl TodoistSource {
    pub fn new(
        client: Client,
        config: &TodoistConfig,
    ) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            api_token: config.api_token.clone(),
            project_id: config.project_id.clone(),
        }
    }

    fn get(
        &self,
        endpoint: &'static str,
        path: &str,
    ) -> Result<String, RemoteError> {
        let url = format!("{}{path}", self.api_base);
        tracing::debug!(endpoint, %url, "requesting");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[("project_id", self.project_id.as_str())])
            .send()
            .map_err(|source| RemoteError::Http { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status { endpoint, status });
        }
        response.text().map_err(|source| RemoteError::Http { endpoint, source })
    }
}

impl TaskSource for TodoistSource {
    fn list_sections(&self) -> Result<Vec<Section>, RemoteError> {
        parse_sections(&self.get(SECTIONS, "/rest/v2/sections")?)
    }

    fn list_tasks(&self) -> Result<Vec<Task>, RemoteError> { parse_tasks(&self.get(TASKS, "/rest/v2/tasks")?) }

    fn list_completed(&self) -> Result<CompletionEvents, RemoteError> {
        parse_completed(&self.get(COMPLETED, "/sync/v9/completed/get_all")?)
    }
}
