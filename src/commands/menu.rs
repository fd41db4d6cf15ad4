//! Menu Commands
//!
//! Frontend bindings for menu endpoints.

use soundfood_core::MenuId;

use super::{json_body, request};
use crate::models::{MenuPayload, MenuRecord};

pub async fn create_menu(title: &str, description: Option<&str>) -> Result<MenuRecord, String> {
    let body = json_body(&MenuPayload { title, description })?;
    request("POST", "/menus", body).await
}

pub async fn update_menu(id: MenuId, title: &str, description: Option<&str>) -> Result<MenuRecord, String> {
    let body = json_body(&MenuPayload { title, description })?;
    request("PUT", &format!("/menus/{}", id), body).await
}

/// Mark a saved menu as submitted
pub async fn submit_menu(id: MenuId) -> Result<MenuRecord, String> {
    request("POST", &format!("/menus/{}/submit", id), None).await
}
