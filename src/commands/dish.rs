//! Dish Commands
//!
//! Frontend bindings for dish endpoints.

use soundfood_core::{Dish, DishId, MenuId};

use super::{json_body, request, send};
use crate::models::{DishPayload, DishRecord};

pub async fn create_dish(menu_id: MenuId, dish: &Dish, position: usize) -> Result<DishRecord, String> {
    let body = json_body(&DishPayload::new(dish, position))?;
    request("POST", &format!("/menus/{}/dishes", menu_id), body).await
}

pub async fn update_dish(id: DishId, dish: &Dish, position: usize) -> Result<DishRecord, String> {
    let body = json_body(&DishPayload::new(dish, position))?;
    request("PUT", &format!("/dishes/{}", id), body).await
}

pub async fn delete_dish(id: DishId) -> Result<(), String> {
    send("DELETE", &format!("/dishes/{}", id), None).await?;
    Ok(())
}
