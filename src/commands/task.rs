//! Task Commands
//!
//! REST client for the task collection:
//!
//! | op     | method | path          |
//! |--------|--------|---------------|
//! | list   | GET    | `{base}/`     |
//! | create | POST   | `{base}/create` |
//! | update | PUT    | `{base}/{id}` |
//! | delete | DELETE | `{base}/{id}` |

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::http::{send, HttpResponse};
use crate::error::StoreError;
use crate::models::{Task, TaskPayload};
use crate::reconciler::TaskStore;

const CREATE_FAILED: &str = "Create failed";
const UPDATE_FAILED: &str = "Update failed";

/// `TaskStore` over `window.fetch`. Holds no state besides the base URL.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    api_base: String,
}

impl HttpTaskStore {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    async fn write(&self, method: &str, url: String, payload: &TaskPayload, fallback: &str) -> Result<(), StoreError> {
        let body = serde_json::to_string(payload).map_err(|e| StoreError::Validation(e.to_string()))?;
        let response = send(method, &url, Some(body)).await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            StoreError::Validation(fallback.to_string())
        })?;
        rejection_message(&response, fallback).map_or(Ok(()), |message| {
            warn!("{} {} rejected with {}: {}", method, url, response.status, message);
            Err(StoreError::Validation(message))
        })
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let url = self.url("");
        let response = send("GET", &url, None).await.map_err(StoreError::Fetch)?;
        if !response.ok {
            return Err(StoreError::Fetch(format!("GET {} returned {}", url, response.status)));
        }
        let tasks = parse_task_list(&response.body).map_err(StoreError::Fetch)?;
        debug!("fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn create(&self, payload: &TaskPayload) -> Result<(), StoreError> {
        self.write("POST", self.url("create"), payload, CREATE_FAILED).await
    }

    async fn update(&self, id: u32, payload: &TaskPayload) -> Result<(), StoreError> {
        self.write("PUT", self.url(&id.to_string()), payload, UPDATE_FAILED).await
    }

    async fn delete(&self, id: u32) -> Result<(), StoreError> {
        let url = self.url(&id.to_string());
        let response = send("DELETE", &url, None).await.map_err(StoreError::Delete)?;
        if !response.ok {
            return Err(StoreError::Delete(format!("DELETE {} returned {}", url, response.status)));
        }
        Ok(())
    }
}

/// Decode a list body. Anything that is not a JSON array counts as empty.
pub fn parse_task_list(body: &str) -> Result<Vec<Task>, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| format!("invalid JSON: {}", e))?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| format!("malformed task: {}", e))
}

/// Human-readable `detail` of an error body: either a plain string or a
/// list of `{msg}` validation entries.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}

/// `None` for a 2xx response, otherwise the message to surface
fn rejection_message(response: &HttpResponse, fallback: &str) -> Option<String> {
    if response.ok {
        return None;
    }
    Some(error_detail(&response.body).unwrap_or_else(|| fallback.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            ok: (200..300).contains(&status),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_parse_task_list() {
        let tasks = parse_task_list(
            r#"[{"id":1,"title":"Buy milk","desc":"2%","isComplete":false},
                {"id":2,"title":"Call mom","desc":"Sunday","isComplete":true}]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title, "Call mom");
        assert!(tasks[1].is_complete);
    }

    #[test]
    fn test_non_array_body_is_empty() {
        assert_eq!(parse_task_list(r#"{"message":"ok"}"#).unwrap(), Vec::new());
        assert_eq!(parse_task_list("null").unwrap(), Vec::new());
    }

    #[test]
    fn test_malformed_list_is_error() {
        assert!(parse_task_list("<html>").is_err());
        assert!(parse_task_list(r#"[{"title":"no id"}]"#).is_err());
    }

    #[test]
    fn test_error_detail_string() {
        assert_eq!(error_detail(r#"{"detail":"Todo Not Found"}"#), Some("Todo Not Found".to_string()));
        assert_eq!(error_detail(r#"{"detail":""}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
    }

    #[test]
    fn test_error_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"value is not a valid boolean"}]}"#;
        assert_eq!(
            error_detail(body),
            Some("field required; value is not a valid boolean".to_string())
        );
    }

    #[test]
    fn test_rejection_message_falls_back() {
        assert_eq!(rejection_message(&response(201, ""), CREATE_FAILED), None);
        assert_eq!(rejection_message(&response(500, ""), CREATE_FAILED), Some("Create failed".to_string()));
        assert_eq!(
            rejection_message(&response(404, r#"{"detail":"Todo Not Found"}"#), UPDATE_FAILED),
            Some("Todo Not Found".to_string())
        );
    }

    #[test]
    fn test_urls() {
        let store = HttpTaskStore::new("/api/v1/");
        assert_eq!(store.url(""), "/api/v1/");
        assert_eq!(store.url("create"), "/api/v1/create");
        assert_eq!(store.url("7"), "/api/v1/7");
    }
}
