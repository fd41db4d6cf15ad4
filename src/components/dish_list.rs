//! Dish List Component
//!
//! The working dish list in menu order, with drag-and-drop reordering and
//! inline delete. Drag keys are list positions; the list cannot change while
//! a drag is in progress.

use leptos::prelude::*;
use leptos::task::spawn_local;
use soundfood_core::{Dish, DishKey};

use crate::commands;
use crate::components::{DeleteConfirmButton, EditTarget};
use crate::context::AppContext;
use crate::messages::{message, section_label};
use crate::store::{
    current_language, store_delete_dish, store_reorder_dish, use_app_store, AppStateStoreFields, AppStore,
};

use leptos_dragdrop::*;

/// Create the list's DnD signals and bind the document listeners.
///
/// Called once from the app root: the listeners outlive any single mount of
/// [`DishList`], so they must not capture signals owned by it.
pub fn bind_dish_reorder(store: AppStore) -> DndSignals<usize> {
    let dnd = create_dnd_signals::<usize>();

    bind_global_mouseup(dnd, move |from, target| {
        let to = match target {
            DropTarget::Entry(index) => index,
            DropTarget::Slot(slot) => resolve_slot(from, slot),
        };
        if let Some(key) = key_at(&store.dishes().get_untracked(), from) {
            log::debug!("[DND] moving {} from {} to {}", key, from, to);
            store_reorder_dish(&store, &key, to);
        }
    });

    dnd
}

/// Dish list component with DnD support
#[component]
pub fn DishList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = expect_context::<DndSignals<usize>>();

    let delete = move |dish: Dish| {
        let key = dish.key();
        let language = current_language(&store);
        match dish.saved_id() {
            Some(id) => spawn_local(async move {
                match commands::delete_dish(id).await {
                    Ok(()) => {
                        store_delete_dish(&store, &key);
                        ctx.notify(message("dishDeleted", language), false);
                    }
                    Err(e) => {
                        log::error!("delete of dish {} failed: {}", id, e);
                        ctx.notify(message("requestFailed", language), true);
                    }
                }
            }),
            None => {
                store_delete_dish(&store, &key);
                ctx.notify(message("dishDeleted", language), false);
            }
        }
    };

    let rows = move || store.dishes().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="dish-list">
            <DishSlot dnd=dnd slot=0 />
            <For
                each=rows
                key=|(index, dish)| {
                    (
                        *index,
                        dish.key(),
                        dish.name.clone(),
                        dish.section,
                        dish.description.clone(),
                    )
                }
                children=move |(index, dish)| {
                    let edit_key = dish.key();
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_entry_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    let is_drop_target = move || {
                        matches!(dnd.drop_target_read.get(), Some(DropTarget::Entry(i)) if i == index)
                    };
                    let row_class = move || {
                        let mut c = String::from("dish-row");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    let section = dish.section;
                    let pending = !dish.is_saved();
                    let to_delete = dish.clone();

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:click=move |_| {
                                if !dnd.drag_just_ended_read.get_untracked() {
                                    ctx.edit(EditTarget::Dish(edit_key.clone()));
                                }
                            }
                        >
                            <span class="dish-name">{dish.name.clone()}</span>
                            <span class="dish-section">{move || section_label(section, current_language(&store))}</span>
                            {pending.then(|| view! { <span class="dish-pending">"•"</span> })}
                            {dish.description.clone().map(|d| view! { <p class="dish-description">{d}</p> })}
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                on_confirm=Callback::new(move |_| delete(to_delete.clone()))
                            />
                        </div>
                        <DishSlot dnd=dnd slot=index + 1 />
                    }
                }
            />
            <Show when=move || store.dishes().read().is_empty()>
                <p class="empty-hint">"No dishes yet"</p>
            </Show>
        </div>
    }
}

/// Drop slot - a horizontal separator between dishes
#[component]
fn DishSlot(dnd: DndSignals<usize>, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(s)) if s == slot);
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

/// Key of the dish at `index`, if any
pub fn key_at(dishes: &[Dish], index: usize) -> Option<DishKey> {
    dishes.get(index).map(Dish::key)
}
