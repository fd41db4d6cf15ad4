//! SoundFood Core
//!
//! Framework-free logic shared by the SoundFood client:
//! - dish, menu and identity types
//! - reconcile: create/update/delete/reorder over the working dish list
//! - settings, session: tolerant persistence over a key-value store

pub mod dish;
pub mod identity;
pub mod menu;
pub mod reconcile;
pub mod session;
pub mod settings;
pub mod storage;

#[cfg(test)]
mod tests;

pub use dish::{BasicTaste, Dish, OtherTaste, Section, TasteField, Vision, DEFAULT_INTENSITY};
pub use identity::{Clock, DishId, DishIdentity, DishKey, MenuId, SystemClock, TempId, TempIdGenerator};
pub use menu::{plan_submission, DishOp, Menu, MenuStatus, SubmissionPlan};
pub use reconcile::{
    assign_temp_id, confirm_dish, delete_list_dish, make_sections_list, rekey_confirmed, reorder_dish, save_dish,
    update_dish_list, SaveStatus,
};
pub use session::{clear_session, load_session, save_session, Session, SESSION_KEY};
pub use settings::{
    load_client_settings, save_client_settings, update_client_settings, ClientSettings, ColorMode, Language,
    CLIENT_SETTINGS_KEY,
};
pub use storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
