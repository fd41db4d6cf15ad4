//! Menu Submission
//!
//! Persists the working menu: creates or updates the menu record, then runs
//! the dish operations of the submission plan in menu order. Each created
//! dish is confirmed into the store as soon as the server answers, so a
//! retry after a partial failure only creates what is still missing.

use leptos::prelude::Set;
use soundfood_core::{plan_submission, DishOp, MenuStatus};

use crate::commands;
use crate::store::{store_confirm_dish, store_menu, AppStateStoreFields, AppStore};

/// Save the menu as a draft, or also submit it when `submit` is set.
///
/// Validation problems come back as `Ok` with an error status; `Err` is
/// reserved for request failures.
pub async fn persist_menu(store: AppStore, submit: bool) -> Result<MenuStatus, String> {
    let menu = store_menu(&store);
    let plan = match plan_submission(&menu) {
        Ok(plan) => plan,
        Err(status) => return Ok(status),
    };

    let title = menu.title.trim();
    let description = menu.description.as_deref();
    let menu_id = match plan.menu_id {
        Some(id) => commands::update_menu(id, title, description).await?.id,
        None => {
            let record = commands::create_menu(title, description).await?;
            store.menu_id().set(Some(record.id));
            record.id
        }
    };

    log::info!(
        "persisting menu {}: {} new dishes, {} updates",
        menu_id,
        plan.creates(),
        plan.updates()
    );

    for (position, op) in plan.ops.iter().enumerate() {
        match op {
            DishOp::Create { key, dish } => {
                let record = commands::create_dish(menu_id, dish, position).await?;
                store_confirm_dish(&store, key, record.id);
            }
            DishOp::Update { id, dish } => {
                commands::update_dish(*id, dish, position).await?;
            }
        }
    }

    if submit {
        commands::submit_menu(menu_id).await?;
        Ok(MenuStatus::MenuSubmitted)
    } else {
        Ok(MenuStatus::MenuSaved)
    }
}
