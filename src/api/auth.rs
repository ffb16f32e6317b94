//! Auth Endpoints
//!
//! Login, signup and profile resolution.

use serde::Serialize;

use super::{api_url, request};
use crate::models::{AuthResponse, ProfileResponse};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// ========================
// Calls
// ========================

pub async fn login(args: &LoginArgs<'_>) -> Result<AuthResponse, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    request("POST", &api_url("/login"), Some(body)).await
}

pub async fn signup(args: &SignupArgs<'_>) -> Result<AuthResponse, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    request("POST", &api_url("/signup"), Some(body)).await
}

/// Resolve the stored token to the user profile (tasks included)
pub async fn get_profile() -> Result<ProfileResponse, String> {
    request("GET", &api_url("/get-profile"), None).await
}
