//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use soundfood_core::{assign_temp_id, Dish, TempIdGenerator};

use crate::components::EditTarget;
use crate::config::TOAST_DURATION_MS;

/// Transient feedback banner
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub text: String,
    pub is_error: bool,
    /// Distinguishes consecutive toasts so an old timer can't clear a new one
    pub seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Current toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Dish form target (None = closed) - read
    pub editing: ReadSignal<Option<EditTarget>>,
    /// Dish form target (None = closed) - write
    set_editing: WriteSignal<Option<EditTarget>>,
    /// True while a menu request is in flight
    pub busy: RwSignal<bool>,
    temp_ids: StoredValue<TempIdGenerator>,
}

impl AppContext {
    pub fn new() -> Self {
        let (toast, set_toast) = signal(None::<Toast>);
        let (editing, set_editing) = signal(None::<EditTarget>);
        Self {
            toast,
            set_toast,
            editing,
            set_editing,
            busy: RwSignal::new(false),
            temp_ids: StoredValue::new(TempIdGenerator::new()),
        }
    }

    /// Show a toast and dismiss it after [`TOAST_DURATION_MS`]
    pub fn notify(&self, text: impl Into<String>, is_error: bool) {
        let seq = self.toast.get_untracked().map(|t| t.seq + 1).unwrap_or(0);
        self.set_toast.set(Some(Toast { text: text.into(), is_error, seq }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if toast.get_untracked().map(|t| t.seq) == Some(seq) {
                set_toast.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.set_toast.set(None);
    }

    /// Open the dish form
    pub fn edit(&self, target: EditTarget) {
        self.set_editing.set(Some(target));
    }

    pub fn close_editor(&self) {
        self.set_editing.set(None);
    }

    /// Give a new dish its temporary list key
    pub fn assign_temp_id(&self, dish: Dish) -> Dish {
        let mut dish = dish;
        self.temp_ids.update_value(|ids| dish = assign_temp_id(dish.clone(), ids));
        dish
    }
}
