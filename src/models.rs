//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Task record as stored by the task backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Product row from the demo catalog (some rows omit the brand)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub rating: f64,
}

/// Authenticated user profile; tasks ride along in the profile payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

// ========================
// Response Envelopes
// ========================

/// Login/signup result; token and user are present on success
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_shape() {
        let json = r#"{"_id":"t1","title":"Buy milk","description":"","completed":false,"createdAt":"2025-07-13T10:00:00.000Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.created_at, "2025-07-13T10:00:00.000Z");
        assert!(!task.completed);
    }

    #[test]
    fn test_product_without_brand_defaults_to_empty() {
        let json = r#"{"id":1,"title":"Pen","category":"stationery","price":2.5,"stock":10,"rating":4.1}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand, "");
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_profile_user_without_tasks_gets_empty_list() {
        let json = r#"{"user":{"id":"u1","name":"Ana","email":"ana@example.com"}}"#;
        let res: ProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.user.name, "Ana");
        assert!(res.user.tasks.is_empty());
    }

    #[test]
    fn test_auth_response_without_token() {
        let json = r#"{"success":false,"message":"Invalid credentials"}"#;
        let res: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(!res.success);
        assert!(res.token.is_none());
        assert_eq!(res.message, "Invalid credentials");
    }
}
