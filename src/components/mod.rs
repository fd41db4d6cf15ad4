//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod dish_form;
mod dish_list;
mod editor_target;
mod login_form;
mod menu_header;
mod section_preview;
mod settings_bar;
mod toast;

pub use delete_confirm_button::DeleteConfirmButton;
pub use dish_form::DishForm;
pub use dish_list::{bind_dish_reorder, DishList};
pub use editor_target::EditTarget;
pub use login_form::{logout, LoginForm};
pub use menu_header::MenuHeader;
pub use section_preview::SectionPreview;
pub use settings_bar::SettingsBar;
pub use toast::ToastView;
