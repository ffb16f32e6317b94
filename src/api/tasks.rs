//! Task Endpoints
//!
//! Create, update and delete calls for the signed-in user's tasks. Local
//! state is only patched after the backend acknowledges, so the caller
//! always stores the server's representation.

use serde::Serialize;

use super::{api_url, request};
use crate::models::{DeleteResponse, Task, TaskResponse};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

/// Partial patch; only the fields that are set get sent
#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

// ========================
// Calls
// ========================

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let res: TaskResponse = request("POST", &api_url("/tasks"), Some(body)).await?;
    Ok(res.task)
}

pub async fn update_task(id: &str, args: &UpdateTaskArgs<'_>) -> Result<Task, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let res: TaskResponse = request("PUT", &api_url(&format!("/tasks/{}", id)), Some(body)).await?;
    Ok(res.task)
}

pub async fn delete_task(id: &str) -> Result<(), String> {
    let _: DeleteResponse = request("DELETE", &api_url(&format!("/tasks/{}", id)), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_patch_sends_only_completed() {
        let args = UpdateTaskArgs {
            title: None,
            description: None,
            completed: Some(true),
        };
        assert_eq!(serde_json::to_string(&args).unwrap(), r#"{"completed":true}"#);
    }

    #[test]
    fn test_edit_patch_sends_title_and_description() {
        let args = UpdateTaskArgs {
            title: Some("Buy milk"),
            description: Some("2 liters"),
            completed: None,
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"title":"Buy milk","description":"2 liters"}"#
        );
    }

    #[test]
    fn test_create_starts_not_completed() {
        let args = CreateTaskArgs {
            title: "Buy milk",
            description: "",
            completed: false,
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"title":"Buy milk","description":"","completed":false}"#
        );
    }
}
