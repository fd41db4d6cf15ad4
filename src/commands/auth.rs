//! Auth Commands
//!
//! Frontend bindings for authentication.

use super::{json_body, request};
use crate::models::{LoginArgs, LoginResponse};

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let body = json_body(&LoginArgs { username, password })?;
    request("POST", "/auth/login", body).await
}
