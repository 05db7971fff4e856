//! HTTP API Client
//!
//! Functions for communicating with the Taskly REST API. Every request
//! carries the session cookie; no token is stored or attached manually.
//!
//! Service-reported failures (non-2xx with a `{message}` body) are returned
//! verbatim so views can show them; transport failures are mapped to a
//! generic network-error string.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::state::query::TaskListQuery;
use crate::state::session::User;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("taskly_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Task Types ============

/// Task lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "open" => Some(TaskStatus::Open),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A task as returned by the API. Tasks are owned by the service; the
/// client never mutates one locally without a confirmed round trip.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    /// Open set on the service side; "urgent" is highlighted in the UI.
    pub priority: String,
    #[serde(default)]
    pub due: Option<String>,
}

/// One page of a user's tasks plus the total count for pagination.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    #[serde(rename = "taskCount")]
    pub task_count: u64,
}

// ============ Request / Response Types ============

#[derive(serde::Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(serde::Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(serde::Serialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// Fields sent when creating or updating a task.
#[derive(Clone, serde::Serialize)]
pub struct TaskPayload {
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct UploadResponse {
    #[serde(rename = "imageUrl")]
    image_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}

// ============ Auth ============

/// Create an account. The service signs the new user in and returns it.
pub async fn sign_up(req: &SignUpRequest) -> Result<User, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/signup", api_base))
        .credentials(RequestCredentials::Include)
        .json(req)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Sign in with email and password.
pub async fn sign_in(req: &SignInRequest) -> Result<User, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/signin", api_base))
        .credentials(RequestCredentials::Include)
        .json(req)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Clear the server-side session. Returns the service's message.
pub async fn sign_out() -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/auth/signout", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    let result: MessageResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

// ============ Users ============

/// Update the profile. Returns the updated user record.
pub async fn update_profile(user_id: &str, req: &UpdateProfileRequest) -> Result<User, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/users/update/{}", api_base, user_id))
        .credentials(RequestCredentials::Include)
        .json(req)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete the account. Returns the service's message.
pub async fn delete_user(user_id: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/users/delete/{}", api_base, user_id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    let result: MessageResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Upload one image as a multipart form. Returns the hosted URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("image", file)
        .map_err(|_| "Failed to build upload form".to_string())?;

    let response = Request::post(&format!("{}/image/upload", api_base))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Upload failed".to_string(),
        });
        return Err(error.message);
    }

    let result: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.image_url)
}

// ============ Tasks ============

/// Fetch one page of the user's tasks for the given filter/sort/page state.
pub async fn fetch_tasks(user_id: &str, query: &TaskListQuery) -> Result<TaskPage, String> {
    let api_base = get_api_base();

    let response = Request::get(&user_tasks_url(&api_base, user_id, query))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single task.
pub async fn fetch_task(task_id: &str) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/tasks/{}", api_base, task_id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a task. Returns the created task.
pub async fn create_task(req: &TaskPayload) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/tasks/create", api_base))
        .credentials(RequestCredentials::Include)
        .json(req)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a task. Returns the updated task.
pub async fn update_task(task_id: &str, req: &TaskPayload) -> Result<Task, String> {
    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/tasks/update/{}", api_base, task_id))
        .credentials(RequestCredentials::Include)
        .json(req)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a task. Returns the service's message.
pub async fn delete_task(task_id: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/tasks/{}", api_base, task_id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            message: "Unknown error".to_string(),
        });
        return Err(error.message);
    }

    let result: MessageResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// URL for a user's task list with its query string.
fn user_tasks_url(api_base: &str, user_id: &str, query: &TaskListQuery) -> String {
    format!(
        "{}/tasks/user/{}{}",
        api_base,
        user_id,
        query.to_query_string()
    )
}

/// Render a service due date for display. The service stores either a full
/// timestamp or a plain `YYYY-MM-DD`; anything else is shown as-is.
pub fn format_due(due: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(due) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(due, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    due.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::query::SortField;

    #[test]
    fn test_user_tasks_url_without_params() {
        let query = TaskListQuery::default();
        assert_eq!(
            user_tasks_url("http://localhost:3000/api", "u1", &query),
            "http://localhost:3000/api/tasks/user/u1"
        );
    }

    #[test]
    fn test_user_tasks_url_with_params() {
        let query = TaskListQuery::default()
            .with_status(Some(TaskStatus::Open))
            .with_order_by(SortField::Due)
            .with_page(2);
        assert_eq!(
            user_tasks_url("http://localhost:3000/api", "u1", &query),
            "http://localhost:3000/api/tasks/user/u1?status=open&orderBy=due&page=2"
        );
    }

    #[test]
    fn test_task_maps_service_fields() {
        let task: Task = serde_json::from_str(
            r#"{"_id":"t1","name":"Write report","description":"quarterly","status":"open","priority":"urgent"}"#,
        )
        .unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.status, TaskStatus::Open);
        assert_eq!(task.due, None);
    }

    #[test]
    fn test_task_page_maps_count_field() {
        let page: TaskPage =
            serde_json::from_str(r#"{"tasks":[],"taskCount":9}"#).unwrap();
        assert!(page.tasks.is_empty());
        assert_eq!(page.task_count, 9);
    }

    #[test]
    fn test_format_due_accepts_both_service_forms() {
        assert_eq!(format_due("2026-08-06"), "Aug 6, 2026");
        assert_eq!(format_due("2026-08-06T12:30:00.000Z"), "Aug 6, 2026");
        assert_eq!(format_due("someday"), "someday");
    }
}
